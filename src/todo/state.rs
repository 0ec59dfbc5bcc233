//! State for the to-do list.

use crate::store::State;
use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// Ids are positive, unique within a state, and assigned monotonically by
/// the reducer. Serialized field names (`id`, `text`, `done`) are also the
/// wire format of the seed feed; do not rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

/// The whole application state: the item list plus the unsubmitted input.
///
/// Items keep insertion order; the UI renders them as-is. The draft is the
/// text currently being composed and becomes the next item's text on
/// [`crate::todo::TodoIntent::Add`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoState {
    #[serde(default)]
    pub items: Vec<TodoItem>,
    #[serde(default)]
    pub draft: String,
}

impl State for TodoState {}

impl TodoState {
    /// Look up an item by id.
    pub fn item(&self, id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of completed items.
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    /// Number of items still open.
    pub fn open_count(&self) -> usize {
        self.items.len() - self.done_count()
    }
}
