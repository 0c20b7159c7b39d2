//! `EntitlementStore`: single-slot persistence of an `AccessRecord` with
//! lazy expiry.
//!
//! Reads never fail. Anything that is not a well-formed, unexpired record
//! is "no access", and expired or corrupt slots are deleted by the read
//! that finds them.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::EntitlementConfig;
use crate::errors::entitlement_error::{EntitlementError, EntitlementResult};
use crate::logging::redact;
use crate::traits::{Clock, IKeyValueStorage, SystemClock};

use super::record::AccessRecord;

/// What a read of the slot observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntitlementState {
    /// No record, or the record was unreadable.
    Unset,
    /// A well-formed record whose deadline has not passed.
    Valid { token: String, expires_at: i64 },
    /// The record had expired; the read has already removed it.
    Expired { expired_at: i64 },
}

impl EntitlementState {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Valid { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn into_token(self) -> Option<String> {
        match self {
            Self::Valid { token, .. } => Some(token),
            _ => None,
        }
    }
}

/// Owns the one persistence slot holding the browser's access record.
///
/// Storage and clock are injected so the page controller can share a
/// store with the checkout handler and tests can drive time by hand.
pub struct EntitlementStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    key: String,
    default_validity_hours: f64,
}

impl<S: IKeyValueStorage> EntitlementStore<S, SystemClock> {
    /// Store over `storage` using the system clock.
    pub fn new(storage: S, config: &EntitlementConfig) -> Self {
        Self::with_clock(storage, SystemClock, config)
    }
}

impl<S: IKeyValueStorage, C: Clock> EntitlementStore<S, C> {
    pub fn with_clock(storage: S, clock: C, config: &EntitlementConfig) -> Self {
        Self {
            storage,
            clock,
            key: config.effective_storage_key().to_string(),
            default_validity_hours: config.effective_validity_hours(),
        }
    }

    /// Name of the persistence slot.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Window applied by `set_default`.
    pub fn default_validity_hours(&self) -> f64 {
        self.default_validity_hours
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Persist `token` valid for `validity_hours`, replacing any previous
    /// record. Invalid input leaves the slot untouched.
    pub fn set(&self, token: &str, validity_hours: f64) -> EntitlementResult<()> {
        if token.trim().is_empty() {
            return Err(EntitlementError::InvalidInput {
                field: "token",
                reason: "must not be empty".to_string(),
            });
        }
        if !validity_hours.is_finite() || validity_hours <= 0.0 {
            return Err(EntitlementError::InvalidInput {
                field: "validity_hours",
                reason: format!("must be a positive number, got {validity_hours}"),
            });
        }

        let record = AccessRecord::issue(token, self.clock.now_millis(), validity_hours);
        let encoded = record.encode()?;
        self.storage.set_item(&self.key, &encoded)?;

        info!(
            key = %self.key,
            token = %redact(token),
            expires_at = record.expires_at(),
            "Access record stored"
        );
        Ok(())
    }

    /// `set` with the configured default window (24h unless overridden).
    pub fn set_default(&self, token: &str) -> EntitlementResult<()> {
        self.set(token, self.default_validity_hours)
    }

    /// Read the slot and resolve it to a state, cleaning up expired or
    /// corrupt records on the way.
    pub fn state(&self) -> EntitlementState {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return EntitlementState::Unset,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Access record unreadable, treating as unset");
                return EntitlementState::Unset;
            }
        };

        let Some(record) = AccessRecord::decode(&raw) else {
            warn!(key = %self.key, "Access record corrupt, discarding");
            self.discard();
            return EntitlementState::Unset;
        };

        if record.is_expired_at(self.clock.now_millis()) {
            debug!(key = %self.key, expired_at = record.expires_at(), "Access record expired");
            self.discard();
            return EntitlementState::Expired {
                expired_at: record.expires_at(),
            };
        }

        EntitlementState::Valid {
            token: record.token,
            expires_at: record.expiration,
        }
    }

    /// True while a well-formed, unexpired record is stored.
    pub fn is_valid(&self) -> bool {
        self.state().is_valid()
    }

    /// The stored token under exactly the rules of `is_valid`.
    pub fn get(&self) -> Option<String> {
        self.state().into_token()
    }

    /// Time left on a valid record.
    pub fn remaining(&self) -> Option<Duration> {
        match self.state() {
            EntitlementState::Valid { expires_at, .. } => {
                let left = expires_at.saturating_sub(self.clock.now_millis());
                u64::try_from(left).ok().map(Duration::from_millis)
            }
            _ => None,
        }
    }

    /// Delete the slot. Safe to call on an empty store.
    pub fn clear(&self) {
        self.discard();
        info!(key = %self.key, "Access record cleared");
    }

    fn discard(&self) {
        if let Err(e) = self.storage.remove_item(&self.key) {
            warn!(key = %self.key, error = %e, "Failed to remove access record");
        }
    }
}
