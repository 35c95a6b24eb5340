//! Local mirror of the server's item list.
//!
//! The list is fetched once by [`TodoView::load`] and then patched from the
//! response of each action. It is never re-fetched, so it only matches the
//! server immediately after a successful round trip.

use crate::api::TodoClient;
use todo_types::{is_blank_title, Item, ItemId, ItemUpdate};
use tracing::{debug, error, warn};

/// What happened to the local list after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server answered and the list was updated from the response.
    Applied,
    /// Nothing was sent: the input was refused locally.
    Rejected,
    /// The request failed; the failure was logged and the list is unchanged.
    Failed,
}

/// Ordered, client-side copy of the item collection.
pub struct TodoView {
    client: TodoClient,
    items: Vec<Item>,
    loaded: bool,
}

impl TodoView {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            loaded: false,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Fetches the full list. Only the first call does anything; a failure
    /// leaves the list empty and is not retried.
    pub async fn load(&mut self) -> Outcome {
        if self.loaded {
            debug!("Todo list already loaded, skipping fetch");
            return Outcome::Rejected;
        }
        self.loaded = true;

        match self.client.list().await {
            Ok(items) => {
                debug!("Loaded {} todos", items.len());
                self.items = items;
                Outcome::Applied
            }
            Err(e) => {
                error!("Error fetching todos: {e}");
                Outcome::Failed
            }
        }
    }

    /// Creates an item and appends it. Blank titles never reach the server.
    pub async fn add(&mut self, title: &str) -> Outcome {
        if is_blank_title(title) {
            return Outcome::Rejected;
        }

        match self.client.create(title).await {
            Ok(item) => {
                self.items.push(item);
                Outcome::Applied
            }
            Err(e) => {
                error!("Error adding todo: {e}");
                Outcome::Failed
            }
        }
    }

    /// Replaces an item and swaps the returned version in place.
    pub async fn edit(&mut self, id: ItemId, title: &str, completed: bool) -> Outcome {
        let update = ItemUpdate::new(title, completed);
        match self.client.replace(id, &update).await {
            Ok(updated) => {
                for item in self.items.iter_mut().filter(|item| item.id == id) {
                    *item = updated.clone();
                }
                Outcome::Applied
            }
            Err(e) => {
                error!("Error editing todo: {e}");
                Outcome::Failed
            }
        }
    }

    /// Flips the completion flag of an item already in the list.
    pub async fn toggle(&mut self, id: ItemId) -> Outcome {
        let Some(item) = self.get(id) else {
            warn!("Cannot toggle todo {id}: not in the list");
            return Outcome::Rejected;
        };
        let title = item.title.clone();
        let completed = !item.completed;
        self.edit(id, &title, completed).await
    }

    /// Deletes an item and filters it out of the list.
    ///
    /// The response body is not inspected: an error status from the server
    /// still removes the entry. Only a transport failure keeps it.
    pub async fn delete(&mut self, id: ItemId) -> Outcome {
        match self.client.delete(id).await {
            Ok(_) => {}
            Err(e) if e.is_transport() => {
                error!("Error deleting todo: {e}");
                return Outcome::Failed;
            }
            Err(e) => warn!("Delete of todo {id} answered with an error: {e}"),
        }
        self.items.retain(|item| item.id != id);
        Outcome::Applied
    }
}
