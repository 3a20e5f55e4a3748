/// Who is using the client right now.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated { token: String },
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            AuthState::Authenticated { token } => Some(token),
            AuthState::Anonymous => None,
        }
    }
}
