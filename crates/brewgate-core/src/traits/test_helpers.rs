//! In-memory test doubles for `IKeyValueStorage`, `Clock` and
//! `IPaymentVerifier`.
//!
//! Used by core and storage tests to avoid touching a real database or
//! the system clock.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Mutex;

use crate::checkout::{IPaymentVerifier, VerificationOutcome};
use crate::errors::checkout_error::{CheckoutError, CheckoutResult};
use crate::errors::StorageError;

use super::clock::Clock;
use super::storage::IKeyValueStorage;

/// HashMap-backed storage, the stand-in for browser local storage.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStorage {
    items: Mutex<HashMap<String, String>>,
    writes: AtomicU64,
}

impl InMemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw peek at a slot, bypassing any store logic.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.items.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count of `set_item` calls since creation.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }
}

impl IKeyValueStorage for InMemoryKeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::LockPoisoned)?;
        items.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::LockPoisoned)?;
        items.remove(key);
        Ok(())
    }
}

/// Storage whose every call fails, for exercising degrade-to-logged-out paths.
#[derive(Debug, Default)]
pub struct FailingKeyValueStorage;

impl FailingKeyValueStorage {
    fn unavailable() -> StorageError {
        StorageError::Unavailable {
            reason: "storage disabled".to_string(),
        }
    }
}

impl IKeyValueStorage for FailingKeyValueStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(Self::unavailable())
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(Self::unavailable())
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(Self::unavailable())
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start_millis: i64) -> Self {
        Self {
            now: AtomicI64::new(start_millis),
        }
    }

    pub fn set(&self, millis: i64) {
        self.now.store(millis, Ordering::SeqCst);
    }

    pub fn advance_millis(&self, millis: i64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }

    pub fn advance_hours(&self, hours: i64) {
        self.advance_millis(hours * 3_600_000);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Verifier that returns a fixed answer and records the session ids it saw.
#[derive(Debug)]
pub struct ScriptedPaymentVerifier {
    response: Result<VerificationOutcome, (u16, String)>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedPaymentVerifier {
    /// Always grants `token`.
    pub fn granting(token: &str) -> Self {
        Self::with_outcome(VerificationOutcome::granted(token))
    }

    /// Always answers `{ "success": false }`.
    pub fn denying() -> Self {
        Self::with_outcome(VerificationOutcome::denied())
    }

    pub fn with_outcome(outcome: VerificationOutcome) -> Self {
        Self {
            response: Ok(outcome),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always fails as if the backend returned `status`.
    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            response: Err((status, message.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Session ids passed to `verify_payment`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl IPaymentVerifier for ScriptedPaymentVerifier {
    fn verify_payment(&self, session_id: &str) -> CheckoutResult<VerificationOutcome> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(session_id.to_string());
        }
        match &self.response {
            Ok(outcome) => Ok(outcome.clone()),
            Err((status, message)) => Err(CheckoutError::VerificationFailed {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
