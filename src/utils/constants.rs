/// Backend base URL, fixed at compile time.
/// Defaults to the local development server.
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

// Storage keys shared with the backend's web client
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_LOGGED_IN: &str = "isLoggedIn";
pub const STORAGE_KEY_EXPIRY: &str = "expiryDate";
pub const LOGGED_IN_FLAG: &str = "true";

// API endpoints
pub const LOGIN_PATH: &str = "/api/users/login";
pub const REGISTER_PATH: &str = "/api/users/register";
pub const FORGOT_PASSWORD_PATH: &str = "/api/users/forgot-password";
pub const CHANGE_PASSWORD_PATH: &str = "/api/users/change-password";
pub const REPORTS_PATH: &str = "/api/reports";

pub const MIN_PASSWORD_LEN: usize = 8;
