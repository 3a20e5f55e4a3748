// ============================================================================
// AUTH GATEWAY - account operations against /api/users
// ============================================================================
// Each operation is one request. Outcomes are normalized to AuthError:
// server `message` verbatim when present, otherwise a per-operation fallback.
// ============================================================================

use crate::error::{AuthError, TransportError};
use crate::models::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
};
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::utils::constants::{
    CHANGE_PASSWORD_PATH, FORGOT_PASSWORD_PATH, LOGIN_PATH, REGISTER_PATH,
};
use crate::utils::messages;

#[derive(Clone)]
pub struct AuthGateway<T> {
    transport: T,
}

impl<T: HttpTransport> AuthGateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the issued token.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, AuthError> {
        let response = self
            .post(HttpRequest::post_json(LOGIN_PATH, request), messages::LOGIN_FAILED)
            .await?;

        if !response.is_success() {
            return Err(failure(&response, messages::LOGIN_FAILED));
        }

        // A success without a token is treated as bad credentials
        let token = response
            .json::<LoginResponse>()
            .ok()
            .and_then(|body| body.token)
            .filter(|token| !token.is_empty());

        match token {
            Some(token) => {
                log::info!("🔐 Login accepted for {}", request.email);
                Ok(token)
            }
            None => {
                log::warn!("⚠️ Login for {} returned no token", request.email);
                Err(AuthError::server(messages::INCORRECT_CREDENTIALS))
            }
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
        let response = self
            .post(HttpRequest::post_json(REGISTER_PATH, request), messages::REGISTER_FAILED)
            .await?;

        if response.status == 201 {
            log::info!("✅ Registered {}", request.email);
            Ok(())
        } else {
            Err(failure(&response, messages::REGISTER_FAILED))
        }
    }

    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<(), AuthError> {
        let response = self
            .post(
                HttpRequest::post_json(FORGOT_PASSWORD_PATH, request),
                messages::FORGOT_PASSWORD_FAILED,
            )
            .await?;

        if response.status == 200 {
            log::info!("📧 Password reset requested for {}", request.email);
            Ok(())
        } else {
            Err(failure(&response, messages::FORGOT_PASSWORD_FAILED))
        }
    }

    /// Without a token nothing is sent and `Unauthenticated` is returned.
    pub async fn change_password(
        &self,
        token: Option<&str>,
        request: &ChangePasswordRequest,
    ) -> Result<(), AuthError> {
        let token = match token.filter(|token| !token.is_empty()) {
            Some(token) => token,
            None => {
                log::warn!("⚠️ Change password attempted without a token");
                return Err(AuthError::Unauthenticated);
            }
        };

        let request = HttpRequest::post_json(CHANGE_PASSWORD_PATH, request)
            .map(|request| request.with_bearer(token));
        let response = self
            .post(request, messages::CHANGE_PASSWORD_FAILED)
            .await?;

        if response.status == 200 {
            log::info!("✅ Password changed");
            Ok(())
        } else {
            Err(failure(&response, messages::CHANGE_PASSWORD_FAILED))
        }
    }

    async fn post(
        &self,
        request: Result<HttpRequest, TransportError>,
        fallback: &str,
    ) -> Result<HttpResponse, AuthError> {
        let request = request.map_err(|e| {
            log::error!("❌ {}", e);
            AuthError::server(fallback)
        })?;
        let path = request.path.clone();
        self.transport.send(request).await.map_err(|e| {
            log::error!("❌ {} failed: {}", path, e);
            AuthError::server(fallback)
        })
    }
}

fn failure(response: &HttpResponse, fallback: &str) -> AuthError {
    match response.error_message() {
        Some(message) => {
            log::warn!("⚠️ HTTP {}: {}", response.status, message);
            AuthError::Server(message)
        }
        None => {
            log::warn!("⚠️ HTTP {} without message", response.status);
            AuthError::server(fallback)
        }
    }
}
