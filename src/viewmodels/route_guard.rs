use crate::routes::Route;
use crate::state::SessionStore;
use crate::utils::clock::Clock;
use crate::utils::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admit,
    Redirect(Route),
}

/// Evaluated once per navigation; an expiry while a page is open is only
/// noticed on the next admission.
///
/// Protected routes send anonymous visitors to login, and the login screen
/// sends authenticated visitors on to home. Other routes never touch the
/// session.
pub fn admit<S: KeyValueStore, C: Clock>(route: Route, session: &SessionStore<S, C>) -> Admission {
    if route.is_protected() {
        if session.is_authenticated() {
            Admission::Admit
        } else {
            log::info!("🔒 {} requires login", route.path());
            Admission::Redirect(Route::Login)
        }
    } else if route == Route::Login && session.is_authenticated() {
        Admission::Redirect(Route::Home)
    } else {
        Admission::Admit
    }
}
