// ============================================================================
// MESSAGES - user-facing strings
// ============================================================================

// Validation
pub const ENTER_EMAIL: &str = "Please enter your email";
pub const ENTER_PASSWORD: &str = "Please enter your password";
pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_SHORT: &str = "Password length must be more than 8 characters";

// Server outcomes
pub const INCORRECT_CREDENTIALS: &str = "Incorrect email or password";
pub const LOGIN_FAILED: &str = "Error while signing in";
pub const REGISTER_FAILED: &str = "Error while registration";
pub const FORGOT_PASSWORD_FAILED: &str = "Error while resetting password";
pub const CHANGE_PASSWORD_FAILED: &str = "Error while changing password";

// Success banners
pub const REGISTER_SUCCEEDED: &str = "Registration successful!";
pub const FORGOT_PASSWORD_SUCCEEDED: &str = "Password reset instructions sent to email!";
pub const CHANGE_PASSWORD_SUCCEEDED: &str = "Password changed successfully!";

// Reports
pub const REPORT_FETCH_FAILED: &str = "Failed to fetch data";
pub const REPORT_ERROR_BANNER: &str = "Error fetching data";
