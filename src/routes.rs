/// Screens reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    ForgotPassword,
    Home,
    Report,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Login,
        Route::Register,
        Route::ForgotPassword,
        Route::Home,
        Route::Report,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Register => "/register",
            Route::ForgotPassword => "/forgot-password",
            Route::Home => "/home",
            Route::Report => "/report",
        }
    }

    /// `None` for paths no screen answers to. A trailing slash is ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Unknown paths land on the login screen.
    pub fn from_path(path: &str) -> Self {
        Self::parse(path).unwrap_or(Route::Login)
    }

    /// Routes that need an authenticated session.
    pub fn is_protected(self) -> bool {
        matches!(self, Route::Home)
    }
}
