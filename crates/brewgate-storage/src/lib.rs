//! # brewgate-storage
//!
//! SQLite persistence for brewgate. `SqliteKeyValueStorage` implements
//! `IKeyValueStorage` over a single `kv_store` table, so an
//! `EntitlementStore` can keep its slot on disk across restarts.

pub mod kv_store;
pub mod migrations;
pub mod pragmas;

pub use kv_store::SqliteKeyValueStorage;
