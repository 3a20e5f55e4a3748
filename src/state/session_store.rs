// ============================================================================
// SESSION STORE - token + logged-in flag + remember-me expiry
// ============================================================================
// Tab-scoped storage holds `isLoggedIn`; durable storage holds `token` and
// `expiryDate` (RFC 3339). A session is authenticated when the tab flag is
// set, or when a durable expiry lies strictly in the future.
// ============================================================================

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::config::CONFIG;
use crate::error::StorageError;
use crate::models::AuthState;
use crate::utils::clock::Clock;
use crate::utils::constants::{
    LOGGED_IN_FLAG, STORAGE_KEY_EXPIRY, STORAGE_KEY_LOGGED_IN, STORAGE_KEY_TOKEN,
};
use crate::utils::storage::KeyValueStore;

pub struct SessionStore<S, C> {
    tab: S,
    durable: S,
    clock: C,
    remember_for: Duration,
}

impl<S: KeyValueStore, C: Clock> SessionStore<S, C> {
    pub fn new(tab: S, durable: S, clock: C) -> Self {
        Self {
            tab,
            durable,
            clock,
            remember_for: Duration::hours(CONFIG.remember_me_hours),
        }
    }

    pub fn with_remember_for(mut self, remember_for: Duration) -> Self {
        self.remember_for = remember_for;
        self
    }

    /// A failed write leaves no partial session behind.
    pub fn record_login(&self, token: &str, remember: bool) -> Result<(), StorageError> {
        self.write_login(token, remember).map_err(|e| {
            self.clear();
            e
        })
    }

    fn write_login(&self, token: &str, remember: bool) -> Result<(), StorageError> {
        self.durable.set(STORAGE_KEY_TOKEN, token)?;
        self.tab.set(STORAGE_KEY_LOGGED_IN, LOGGED_IN_FLAG)?;

        if remember {
            let expiry = self.clock.now() + self.remember_for;
            self.durable.set(
                STORAGE_KEY_EXPIRY,
                &expiry.to_rfc3339_opts(SecondsFormat::Millis, true),
            )?;
            log::info!("💾 Session remembered until {}", expiry);
        } else {
            self.durable.remove(STORAGE_KEY_EXPIRY)?;
        }
        Ok(())
    }

    /// Evicts stale state when the answer is `false`.
    pub fn is_authenticated(&self) -> bool {
        if self.has_tab_flag() {
            return true;
        }

        if let Some(expiry) = self.expiry() {
            if expiry > self.clock.now() {
                // Remembered session reopened in a new tab
                if let Err(e) = self.tab.set(STORAGE_KEY_LOGGED_IN, LOGGED_IN_FLAG) {
                    log::warn!("⚠️ Could not restore tab flag: {}", e);
                }
                return true;
            }
            log::info!("⌛ Remembered session expired at {}", expiry);
        }

        self.clear();
        false
    }

    pub fn auth_state(&self) -> AuthState {
        if !self.is_authenticated() {
            return AuthState::Anonymous;
        }
        match self.token() {
            Some(token) => AuthState::Authenticated { token },
            None => AuthState::Anonymous,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.durable
            .get(STORAGE_KEY_TOKEN)
            .filter(|token| !token.is_empty())
    }

    /// Tab-scoped `isLoggedIn` flag only, not the durable expiry. Drives the
    /// initial state of the remember-me checkbox.
    pub fn has_tab_flag(&self) -> bool {
        self.tab.get(STORAGE_KEY_LOGGED_IN).as_deref() == Some(LOGGED_IN_FLAG)
    }

    /// Unparsable values count as absent.
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        let raw = self.durable.get(STORAGE_KEY_EXPIRY)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|expiry| expiry.with_timezone(&Utc))
            .ok()
    }

    pub fn clear(&self) {
        let results = [
            self.durable.remove(STORAGE_KEY_TOKEN),
            self.tab.remove(STORAGE_KEY_LOGGED_IN),
            self.durable.remove(STORAGE_KEY_EXPIRY),
        ];
        for result in results {
            if let Err(e) = result {
                log::warn!("⚠️ {}", e);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub type BrowserSessionStore =
    SessionStore<crate::utils::storage::BrowserStorage, crate::utils::clock::SystemClock>;

#[cfg(target_arch = "wasm32")]
impl BrowserSessionStore {
    /// `sessionStorage` + `localStorage` of the current window.
    pub fn browser() -> Result<Self, StorageError> {
        use crate::utils::clock::SystemClock;
        use crate::utils::storage::BrowserStorage;

        Ok(Self::new(
            BrowserStorage::session()?,
            BrowserStorage::local()?,
            SystemClock,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::ManualClock;
    use crate::utils::storage::MemoryStorage;
    use chrono::TimeZone;

    /// Memory storage that refuses writes to one key.
    #[derive(Clone)]
    struct RefusingStorage {
        inner: MemoryStorage,
        refused: &'static str,
    }

    impl KeyValueStore for RefusingStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.refused {
                return Err(StorageError::Write(key.to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    fn refusing(refused: &'static str) -> (SessionStore<RefusingStorage, ManualClock>, MemoryStorage, MemoryStorage) {
        let tab = MemoryStorage::new();
        let durable = MemoryStorage::new();
        let store = SessionStore::new(
            RefusingStorage { inner: tab.clone(), refused },
            RefusingStorage { inner: durable.clone(), refused },
            ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()),
        )
        .with_remember_for(Duration::hours(24));
        (store, tab, durable)
    }

    struct Fixture {
        tab: MemoryStorage,
        durable: MemoryStorage,
        clock: ManualClock,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                tab: MemoryStorage::new(),
                durable: MemoryStorage::new(),
                clock: ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()),
            }
        }

        fn store(&self) -> SessionStore<MemoryStorage, ManualClock> {
            SessionStore::new(self.tab.clone(), self.durable.clone(), self.clock.clone())
                .with_remember_for(Duration::hours(24))
        }

        /// Same durable storage, fresh tab.
        fn new_tab(&mut self) -> SessionStore<MemoryStorage, ManualClock> {
            self.tab = MemoryStorage::new();
            self.store()
        }
    }

    #[test]
    fn login_without_remember_is_tab_scoped() {
        let mut fixture = Fixture::new();
        let store = fixture.store();

        store.record_login("jwt-123", false).unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.expiry(), None);

        let reopened = fixture.new_tab();
        assert!(!reopened.is_authenticated());
        assert_eq!(reopened.token(), None);
    }

    #[test]
    fn remembered_login_survives_new_tab_for_a_day() {
        let mut fixture = Fixture::new();
        let login_time = fixture.clock.now();
        fixture.store().record_login("jwt-123", true).unwrap();

        assert_eq!(fixture.store().expiry(), Some(login_time + Duration::hours(24)));

        fixture.clock.advance(Duration::hours(23));
        let reopened = fixture.new_tab();
        assert!(reopened.is_authenticated());
        // The new tab is now flagged as logged in
        assert!(reopened.has_tab_flag());
        assert_eq!(
            reopened.auth_state(),
            AuthState::Authenticated { token: "jwt-123".into() }
        );
    }

    #[test]
    fn remembered_login_expires_strictly_after_a_day() {
        let mut fixture = Fixture::new();
        fixture.store().record_login("jwt-123", true).unwrap();

        fixture.clock.advance(Duration::hours(24));
        let at_expiry = fixture.new_tab();
        assert!(!at_expiry.is_authenticated());

        // Evicted everything
        assert!(fixture.durable.is_empty());
        assert!(fixture.tab.is_empty());
    }

    #[test]
    fn login_without_remember_drops_stale_expiry() {
        let mut fixture = Fixture::new();
        fixture.store().record_login("first", true).unwrap();
        fixture.store().record_login("second", false).unwrap();

        assert_eq!(fixture.store().expiry(), None);
        assert!(!fixture.new_tab().is_authenticated());
    }

    #[test]
    fn garbage_expiry_is_treated_as_absent() {
        let fixture = Fixture::new();
        fixture.durable.set(STORAGE_KEY_TOKEN, "jwt-123").unwrap();
        fixture.durable.set(STORAGE_KEY_EXPIRY, "tomorrow").unwrap();

        let store = fixture.store();
        assert_eq!(store.expiry(), None);
        assert!(!store.is_authenticated());
        assert!(fixture.durable.is_empty());
    }

    #[test]
    fn expiry_is_written_like_a_browser_iso_string() {
        let fixture = Fixture::new();
        fixture.store().record_login("jwt-123", true).unwrap();

        assert_eq!(
            fixture.durable.get(STORAGE_KEY_EXPIRY).as_deref(),
            Some("2024-01-16T09:00:00.000Z")
        );
    }

    #[test]
    fn clear_logs_out() {
        let fixture = Fixture::new();
        let store = fixture.store();
        store.record_login("jwt-123", true).unwrap();

        store.clear();

        assert_eq!(store.auth_state(), AuthState::Anonymous);
        assert!(fixture.durable.is_empty());
        assert!(fixture.tab.is_empty());
    }

    #[test]
    fn authenticated_without_token_is_anonymous() {
        let fixture = Fixture::new();
        fixture.tab.set(STORAGE_KEY_LOGGED_IN, LOGGED_IN_FLAG).unwrap();

        let store = fixture.store();
        assert!(store.is_authenticated());
        assert_eq!(store.auth_state(), AuthState::Anonymous);
    }

    #[test]
    fn failed_tab_flag_write_leaves_no_token_behind() {
        let (store, tab, durable) = refusing(STORAGE_KEY_LOGGED_IN);

        let err = store.record_login("jwt-123", true).unwrap_err();

        assert_eq!(err, StorageError::Write(STORAGE_KEY_LOGGED_IN.to_string()));
        assert!(durable.is_empty());
        assert!(tab.is_empty());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn failed_expiry_write_rolls_back_the_login() {
        let (store, tab, durable) = refusing(STORAGE_KEY_EXPIRY);

        assert!(store.record_login("jwt-123", true).is_err());

        assert!(durable.is_empty());
        assert!(tab.is_empty());
    }
}
