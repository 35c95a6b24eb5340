use serde::{Deserialize, Serialize};

use crate::{ItemId, Result, ValidationError};

/// A todo entry as persisted by the store and returned by the API.
///
/// The stored document shape is exactly this struct: `{id, title, completed}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    /// Builds a fresh, not yet completed item from a validated create request.
    pub fn create(new: NewItem) -> Result<Self> {
        new.validate()?;
        Ok(Self {
            id: ItemId::new(),
            title: new.title,
            completed: false,
        })
    }

    /// Overwrites both mutable fields. The id never changes.
    pub fn apply(&mut self, update: ItemUpdate) {
        self.title = update.title;
        self.completed = update.completed;
    }
}

/// Body of a create request.
///
/// A missing `title` deserializes as empty so it is reported as a
/// validation failure rather than a malformed body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(default)]
    pub title: String,
}

impl NewItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    /// Only an empty title is rejected; whitespace is accepted as-is.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        Ok(())
    }
}

/// Body of a replace request. Both fields are always written; an omitted
/// `completed` means `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemUpdate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl ItemUpdate {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        Ok(())
    }
}

/// Client-side guard: true for empty or whitespace-only input.
pub fn is_blank_title(title: &str) -> bool {
    title.trim().is_empty()
}
