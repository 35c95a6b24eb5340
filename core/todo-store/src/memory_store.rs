//! In-memory item collection.

use crate::{DeleteOutcome, ItemStore, StoreError, StoreResult};
use async_trait::async_trait;
use std::sync::Arc;
use todo_types::{Item, ItemId, ItemUpdate, NewItem};
use tokio::sync::RwLock;

/// Items kept in process memory, in insertion order. Nothing survives a
/// restart.
#[derive(Clone, Default)]
pub struct MemoryItemStore {
    items: Arc<RwLock<Vec<Item>>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> StoreResult<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn create(&self, new: NewItem) -> StoreResult<Item> {
        let item = Item::create(new)?;
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn replace(&self, id: ItemId, update: ItemUpdate) -> StoreResult<Item> {
        update.validate()?;
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        item.apply(update);
        Ok(item.clone())
    }

    async fn delete(&self, id: ItemId) -> StoreResult<DeleteOutcome> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(if items.len() < before {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::Absent
        })
    }
}
