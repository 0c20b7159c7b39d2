//! Entitlement store: the local record that says "this browser has paid".
//!
//! ## Components
//! - **record**: `AccessRecord`, the persisted `{token, expiration}` pair
//! - **store**: `EntitlementStore`: set, is_valid, get, clear, lazy expiry
//!
//! The record is advisory. Anyone who can write to their own storage can
//! fabricate one; the payment backend remains the real authority and is not
//! consulted again after the token is issued.

pub mod record;
pub mod store;

pub use record::AccessRecord;
pub use store::{EntitlementState, EntitlementStore};
