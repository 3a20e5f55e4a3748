// ============================================================================
// AUTH VIEWMODEL - form submissions
// ============================================================================
// validate -> gateway -> session. Returns values only; what the screen does
// afterwards is described by `FormKind`, not performed here.
// ============================================================================

use crate::error::AuthError;
use crate::models::{
    AuthState, ChangePasswordForm, ForgotPasswordForm, ForgotPasswordRequest, LoginForm,
    RegisterForm,
};
use crate::routes::Route;
use crate::services::auth_service::AuthGateway;
use crate::services::http::HttpTransport;
use crate::state::SessionStore;
use crate::utils::clock::Clock;
use crate::utils::messages;
use crate::utils::storage::KeyValueStore;
use crate::viewmodels::validation;

pub struct AuthViewModel<T, S, C> {
    gateway: AuthGateway<T>,
    session: SessionStore<S, C>,
}

impl<T, S, C> AuthViewModel<T, S, C>
where
    T: HttpTransport,
    S: KeyValueStore,
    C: Clock,
{
    pub fn new(gateway: AuthGateway<T>, session: SessionStore<S, C>) -> Self {
        Self { gateway, session }
    }

    pub fn session(&self) -> &SessionStore<S, C> {
        &self.session
    }

    pub async fn login(&self, form: &LoginForm) -> Result<AuthState, AuthError> {
        validation::validate_login(form)?;
        let token = self.gateway.login(&form.to_request()).await?;

        self.session
            .record_login(&token, form.remember)
            .map_err(|e| {
                log::error!("❌ Could not persist session: {}", e);
                AuthError::server(messages::LOGIN_FAILED)
            })?;

        Ok(AuthState::Authenticated { token })
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<(), AuthError> {
        validation::validate_register(form)?;
        self.gateway.register(&form.to_request()).await
    }

    pub async fn forgot_password(&self, form: &ForgotPasswordForm) -> Result<(), AuthError> {
        validation::validate_forgot_password(form)?;
        self.gateway
            .forgot_password(&ForgotPasswordRequest {
                email: form.email.clone(),
            })
            .await
    }

    /// Validation runs before the token lookup.
    pub async fn change_password(&self, form: &ChangePasswordForm) -> Result<(), AuthError> {
        validation::validate_change_password(form)?;
        let token = self.session.token();
        self.gateway
            .change_password(token.as_deref(), &form.to_request())
            .await
    }
}

#[cfg(target_arch = "wasm32")]
pub type BrowserAuthViewModel = AuthViewModel<
    crate::services::http::FetchTransport,
    crate::utils::storage::BrowserStorage,
    crate::utils::clock::SystemClock,
>;

#[cfg(target_arch = "wasm32")]
impl BrowserAuthViewModel {
    pub fn browser() -> Result<Self, crate::error::StorageError> {
        Ok(Self::new(
            AuthGateway::new(crate::services::http::FetchTransport::new()),
            crate::state::BrowserSessionStore::browser()?,
        ))
    }
}

// ============================================================================
// NAVIGATION POLICY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
    ForgotPassword,
    ChangePassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSuccess {
    /// Leave right away.
    Navigate(Route),
    /// Show the success banner, then leave when it is dismissed.
    NavigateAfterDismiss(Route),
    /// Show the success banner and stay.
    Stay,
}

impl FormKind {
    pub fn after_success(self) -> AfterSuccess {
        match self {
            FormKind::Login => AfterSuccess::Navigate(Route::Home),
            FormKind::Register | FormKind::ForgotPassword => {
                AfterSuccess::NavigateAfterDismiss(Route::Login)
            }
            FormKind::ChangePassword => AfterSuccess::Stay,
        }
    }

    /// Errors that are a redirect rather than a message.
    pub fn redirect_on_error(self, error: &AuthError) -> Option<Route> {
        match error {
            AuthError::Unauthenticated => Some(Route::Login),
            _ => None,
        }
    }

    pub fn success_message(self) -> Option<&'static str> {
        match self {
            FormKind::Login => None,
            FormKind::Register => Some(messages::REGISTER_SUCCEEDED),
            FormKind::ForgotPassword => Some(messages::FORGOT_PASSWORD_SUCCEEDED),
            FormKind::ChangePassword => Some(messages::CHANGE_PASSWORD_SUCCEEDED),
        }
    }
}
