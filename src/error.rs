use thiserror::Error;

/// Failure to get any HTTP response at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Outcome of a failed account operation.
///
/// `Display` is exactly what the form shows to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Rejected locally, nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// Server message, or the per-operation fallback.
    #[error("{0}")]
    Server(String),

    /// No token to present; the caller should send the user back to login.
    #[error("Not authenticated")]
    Unauthenticated,
}

impl AuthError {
    pub fn validation(message: &str) -> Self {
        AuthError::Validation(message.to_string())
    }

    pub fn server(message: &str) -> Self {
        AuthError::Server(message.to_string())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AuthError::Validation(_))
    }

    /// Message to render on the form. `None` means redirect instead.
    pub fn user_message(&self) -> Option<String> {
        match self {
            AuthError::Unauthenticated => None,
            other => Some(other.to_string()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("HTTP error {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Could not write key {0}")]
    Write(String),

    #[error("Could not remove key {0}")]
    Remove(String),
}
