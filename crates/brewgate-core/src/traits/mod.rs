//! Shared traits used across brewgate crates.

pub mod clock;
pub mod storage;
pub mod test_helpers;

pub use clock::{Clock, SystemClock};
pub use storage::IKeyValueStorage;
