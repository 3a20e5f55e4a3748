// Shared utilities

pub mod clock;
pub mod constants;
pub mod messages;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use constants::*;
pub use storage::{KeyValueStore, MemoryStorage};

#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
