//! # brewgate-core
//!
//! Foundation crate for the brewgate exclusive-access area.
//! Defines the entitlement store, its persistence and clock traits, the
//! checkout-return handler, the gated-page controller, errors, config and
//! tracing setup. `brewgate-storage` depends on this.

pub mod checkout;
pub mod config;
pub mod entitlement;
pub mod errors;
pub mod gate;
pub mod logging;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BrewgateConfig;
pub use entitlement::{AccessRecord, EntitlementState, EntitlementStore};
pub use errors::error_code::BrewgateErrorCode;
pub use gate::{GatedPageController, GatedView};
pub use traits::{Clock, IKeyValueStorage, SystemClock};
