//! The item collection interface shared by all backends.

use crate::StoreResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use todo_types::{Item, ItemId, ItemUpdate, NewItem};

/// What a delete actually did. Both outcomes count as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    Absent,
}

impl DeleteOutcome {
    pub fn was_deleted(self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

/// A persistent collection of items.
///
/// The four operations are independent; none is coordinated with another.
/// Each write touches a single document, and concurrent replaces of the
/// same item resolve as last-write-wins.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Returns the name of the backend, for logs.
    fn backend_name(&self) -> &'static str;

    /// Returns every item in insertion order.
    async fn list(&self) -> StoreResult<Vec<Item>>;

    /// Validates the title, assigns a fresh id with `completed = false`,
    /// and persists the new item.
    async fn create(&self, new: NewItem) -> StoreResult<Item>;

    /// Overwrites `title` and `completed` of an existing item.
    ///
    /// Fails with [`StoreError::NotFound`](crate::StoreError::NotFound) when
    /// no item has `id`; nothing is created in that case.
    async fn replace(&self, id: ItemId, update: ItemUpdate) -> StoreResult<Item>;

    /// Removes the item if present. Deleting a missing id is not an error.
    async fn delete(&self, id: ItemId) -> StoreResult<DeleteOutcome>;
}
