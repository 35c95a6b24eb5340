//! Document storage for todo items.
//!
//! Provides the item collection behind the HTTP API. Two backends implement
//! the same [`ItemStore`] trait:
//!
//! - [`DuckDbItemStore`] keeps each item as a JSON document in a single
//!   `todos` table, ordered by insertion.
//! - [`MemoryItemStore`] keeps items in process memory (tests, demos).
//!
//! Backends are selected at startup from a connection string, see
//! [`StoreUrl`].

mod duckdb_store;
mod error;
mod memory_store;
mod store;
mod url;
mod wal;

pub use duckdb_store::DuckDbItemStore;
pub use error::{StoreError, StoreResult};
pub use memory_store::MemoryItemStore;
pub use store::{DeleteOutcome, ItemStore};
pub use url::{open_store, StoreUrl};
pub use wal::{open_duckdb_with_wal_recovery, open_with_wal_recovery, wal_path};
