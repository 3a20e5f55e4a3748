//! Pre-flight checks. Any error here means no request is sent.

use crate::error::AuthError;
use crate::models::{ChangePasswordForm, ForgotPasswordForm, LoginForm, RegisterForm};
use crate::utils::constants::MIN_PASSWORD_LEN;
use crate::utils::messages;

pub fn validate_login(form: &LoginForm) -> Result<(), AuthError> {
    if form.email.is_empty() {
        return Err(AuthError::validation(messages::ENTER_EMAIL));
    }
    if form.password.is_empty() {
        return Err(AuthError::validation(messages::ENTER_PASSWORD));
    }
    Ok(())
}

pub fn validate_forgot_password(form: &ForgotPasswordForm) -> Result<(), AuthError> {
    if form.email.is_empty() {
        return Err(AuthError::validation(messages::ENTER_EMAIL));
    }
    Ok(())
}

pub fn validate_register(form: &RegisterForm) -> Result<(), AuthError> {
    validate_new_password(&form.password, &form.confirm_password)
}

pub fn validate_change_password(form: &ChangePasswordForm) -> Result<(), AuthError> {
    if form.current_password.is_empty()
        || form.new_password.is_empty()
        || form.confirm_new_password.is_empty()
    {
        return Err(AuthError::validation(messages::FILL_ALL_FIELDS));
    }
    validate_new_password(&form.new_password, &form.confirm_new_password)
}

/// Mismatch is reported before length.
fn validate_new_password(password: &str, confirmation: &str) -> Result<(), AuthError> {
    if password != confirmation {
        return Err(AuthError::validation(messages::PASSWORDS_DO_NOT_MATCH));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::validation(messages::PASSWORD_TOO_SHORT));
    }
    Ok(())
}
