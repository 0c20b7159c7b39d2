//! Trait design checks: object safety, Arc blanket impls, Send + Sync.

use std::sync::Arc;

use brewgate_core::checkout::IPaymentVerifier;
use brewgate_core::config::EntitlementConfig;
use brewgate_core::entitlement::EntitlementStore;
use brewgate_core::traits::test_helpers::{
    InMemoryKeyValueStorage, ManualClock, ScriptedPaymentVerifier,
};
use brewgate_core::traits::{Clock, IKeyValueStorage, SystemClock};

#[test]
fn key_value_storage_is_object_safe() {
    fn _assert_object_safe(_: &dyn IKeyValueStorage) {}
}

#[test]
fn clock_is_object_safe() {
    fn _assert_object_safe(_: &dyn Clock) {}
}

#[test]
fn payment_verifier_is_object_safe() {
    fn _assert_object_safe(_: &dyn IPaymentVerifier) {}
}

#[test]
fn traits_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<InMemoryKeyValueStorage>();
    assert_send_sync::<ManualClock>();
    assert_send_sync::<SystemClock>();
    assert_send_sync::<ScriptedPaymentVerifier>();
    assert_send_sync::<EntitlementStore<Arc<dyn IKeyValueStorage>, Arc<dyn Clock>>>();
}

#[test]
fn store_accepts_trait_objects() {
    let storage: Arc<dyn IKeyValueStorage> = Arc::new(InMemoryKeyValueStorage::new());
    let clock: Arc<dyn Clock> = Arc::new(ManualClock::new(0));
    let store = EntitlementStore::with_clock(
        Arc::clone(&storage),
        clock,
        &EntitlementConfig::default(),
    );

    store.set("tok", 1.0).unwrap();
    assert!(storage.get_item("exclusive_access").unwrap().is_some());
    assert_eq!(store.get().as_deref(), Some("tok"));
}

#[test]
fn in_memory_storage_semantics() {
    let storage = InMemoryKeyValueStorage::new();
    assert_eq!(storage.get_item("k").unwrap(), None);

    storage.set_item("k", "v1").unwrap();
    storage.set_item("k", "v2").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));
    assert_eq!(storage.write_count(), 2);

    storage.remove_item("k").unwrap();
    storage.remove_item("k").unwrap();
    assert!(storage.is_empty());
}

#[test]
fn system_clock_is_after_2020() {
    assert!(SystemClock.now_millis() > 1_577_836_800_000);
}
