// ============================================================================
// STATE MODULE - persisted client state
// ============================================================================

pub mod session_store;

pub use session_store::SessionStore;

#[cfg(target_arch = "wasm32")]
pub use session_store::BrowserSessionStore;
