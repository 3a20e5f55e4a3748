use serde::{Deserialize, Serialize};

// ============================================================================
// WIRE BODIES
// ============================================================================

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Current password.
    pub password: String,
    pub new_password: String,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// FORM STATE - held by the screens, never persisted
// ============================================================================

#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl LoginForm {
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

impl ChangePasswordForm {
    pub fn to_request(&self) -> ChangePasswordRequest {
        ChangePasswordRequest {
            password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        }
    }
}
