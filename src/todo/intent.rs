//! Intents for the to-do list.

use crate::store::Intent;
use crate::todo::TodoItem;

/// The fixed set of update operations the store accepts.
///
/// Operations addressing an id that is not present are silent no-ops, not
/// errors.
#[derive(Debug, Clone)]
pub enum TodoIntent {
    /// Replace the draft text with the given string. No validation.
    SetDraft { text: String },

    /// Append a new item built from the current draft and clear the draft.
    /// An empty draft still produces an (empty-text) item.
    Add,

    /// Replace the text of the item with the given id.
    UpdateText { id: u64, text: String },

    /// Flip the done flag of the item with the given id.
    Toggle { id: u64 },

    /// Remove the item with the given id from the list.
    Remove { id: u64 },

    /// Replace the whole item list with an externally supplied one (seed or
    /// reload). The draft is left untouched. This replaces, never merges.
    Load { items: Vec<TodoItem> },
}

impl Intent for TodoIntent {}
