pub mod auth;
pub mod report;
pub mod session;

pub use auth::{
    ApiErrorBody, ChangePasswordForm, ChangePasswordRequest, ForgotPasswordForm, ForgotPasswordRequest,
    LoginForm, LoginRequest, LoginResponse, RegisterForm, RegisterRequest,
};
pub use report::{Amount, ReportRecord};
pub use session::AuthState;
