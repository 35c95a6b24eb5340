//! Core type definitions for the todo item store.
//!
//! This crate defines the types shared by the server and the client:
//! - Item identifiers (UUID v7)
//! - The `Item` document and its create/replace request bodies
//! - Response bodies for delete confirmations and API errors
//!
//! Nothing here touches storage or the network.

mod api;
mod ids;
mod item;

pub use api::{DeleteConfirmation, ErrorBody, ErrorCode, DELETE_MESSAGE};
pub use ids::ItemId;
pub use item::{is_blank_title, Item, ItemUpdate, NewItem};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Rejections of request input before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,

    #[error("invalid item id: {0}")]
    InvalidId(String),
}
