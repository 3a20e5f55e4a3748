use serde::{Deserialize, Serialize};

use crate::utils::constants::BACKEND_URL;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Lifetime of a "remember me" login.
    pub remember_me_hours: i64,
    pub rows_per_page: usize,
    /// How long a success banner stays up before it is dismissed.
    pub success_dismiss_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            remember_me_hours: 24,
            rows_per_page: 10,
            success_dismiss_ms: 2000,
        }
    }
}

impl AppConfig {
    /// Loads the configuration baked in at compile time (see `build.rs`).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: BACKEND_URL.trim_end_matches('/').to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            remember_me_hours: parse_or(option_env!("REMEMBER_ME_HOURS"), defaults.remember_me_hours),
            rows_per_page: parse_or(option_env!("ROWS_PER_PAGE"), defaults.rows_per_page),
            success_dismiss_ms: parse_or(option_env!("SUCCESS_DISMISS_MS"), defaults.success_dismiss_ms),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or(Some("12"), 24_i64), 12);
        assert_eq!(parse_or(Some(" 7 "), 10_usize), 7);
        assert_eq!(parse_or(Some("soon"), 24_i64), 24);
        assert!(parse_or::<bool>(None, true));
    }

    #[test]
    fn defaults_match_the_deployed_client() {
        let config = AppConfig::default();
        assert_eq!(config.remember_me_hours, 24);
        assert_eq!(config.rows_per_page, 10);
        assert_eq!(config.success_dismiss_ms, 2000);
        assert!(!config.is_production());
    }
}
