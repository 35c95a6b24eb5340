//! Per-item and add-form input state. None of it exists on the server.

use crate::view::{Outcome, TodoView};
use todo_types::{is_blank_title, ItemId};

/// Whether an item row shows its title or an edit field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing { draft: String },
}

/// Inline rename control for one item.
///
/// `Viewing -> Editing` on [`begin_edit`](Self::begin_edit);
/// `Editing -> Viewing` after every [`save`](Self::save), whatever the
/// server answered.
#[derive(Debug, Clone)]
pub struct ItemEditor {
    item_id: ItemId,
    mode: EditMode,
}

impl ItemEditor {
    pub fn new(item_id: ItemId) -> Self {
        Self {
            item_id,
            mode: EditMode::Viewing,
        }
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.mode {
            EditMode::Editing { draft } => Some(draft),
            EditMode::Viewing => None,
        }
    }

    /// Enters edit mode with the draft seeded from the item's current title.
    /// Returns false if the item is not in the view.
    pub fn begin_edit(&mut self, view: &TodoView) -> bool {
        let Some(item) = view.get(self.item_id) else {
            return false;
        };
        self.mode = EditMode::Editing {
            draft: item.title.clone(),
        };
        true
    }

    /// Replaces the draft text. Ignored outside edit mode.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditMode::Editing { draft } = &mut self.mode {
            *draft = text.into();
        }
    }

    pub fn cancel(&mut self) {
        self.mode = EditMode::Viewing;
    }

    /// Sends the draft as the new title, keeping the item's completion flag,
    /// then leaves edit mode.
    pub async fn save(&mut self, view: &mut TodoView) -> Outcome {
        let EditMode::Editing { draft } = std::mem::take(&mut self.mode) else {
            return Outcome::Rejected;
        };
        let Some(completed) = view.get(self.item_id).map(|item| item.completed) else {
            return Outcome::Rejected;
        };
        view.edit(self.item_id, &draft, completed).await
    }
}

/// Text input for creating items.
#[derive(Debug, Clone, Default)]
pub struct AddForm {
    input: String,
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Blank input is ignored and kept; anything else is sent and the input
    /// is cleared once the call returns.
    pub async fn submit(&mut self, view: &mut TodoView) -> Outcome {
        if is_blank_title(&self.input) {
            return Outcome::Rejected;
        }
        let outcome = view.add(&self.input).await;
        self.input.clear();
        outcome
    }
}
