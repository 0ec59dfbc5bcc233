//! Reducer for the to-do list.

use crate::store::Reducer;

use super::intent::TodoIntent;
use super::state::{TodoItem, TodoState};

/// The id the next added item will get: one past the highest id in use,
/// `1` on an empty list.
pub fn next_id(items: &[TodoItem]) -> u64 {
    items
        .iter()
        .map(|item| item.id)
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}

/// Append a new, not-done item carrying `text`.
pub fn add_item(mut items: Vec<TodoItem>, text: String) -> Vec<TodoItem> {
    let id = next_id(&items);
    items.push(TodoItem {
        id,
        text,
        done: false,
    });
    items
}

/// Replace the text of the item with `id`; unchanged if the id is absent.
pub fn update_text(mut items: Vec<TodoItem>, id: u64, text: String) -> Vec<TodoItem> {
    if let Some(item) = items.iter_mut().find(|item| item.id == id) {
        item.text = text;
    }
    items
}

/// Flip the done flag of the item with `id`; unchanged if the id is absent.
pub fn toggle_done(mut items: Vec<TodoItem>, id: u64) -> Vec<TodoItem> {
    if let Some(item) = items.iter_mut().find(|item| item.id == id) {
        item.done = !item.done;
    }
    items
}

/// Remove the item with `id`; unchanged if the id is absent.
pub fn remove_item(mut items: Vec<TodoItem>, id: u64) -> Vec<TodoItem> {
    items.retain(|item| item.id != id);
    items
}

/// Reducer for to-do state transitions.
///
/// Pure function; persistence and fetches are handled by the layers around
/// the dispatch call.
pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoState;
    type Intent = TodoIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TodoIntent::SetDraft { text } => TodoState {
                draft: text,
                ..state
            },

            TodoIntent::Add => {
                let TodoState { items, draft } = state;
                TodoState {
                    items: add_item(items, draft),
                    draft: String::new(),
                }
            }

            TodoIntent::UpdateText { id, text } => TodoState {
                items: update_text(state.items, id, text),
                draft: state.draft,
            },

            TodoIntent::Toggle { id } => TodoState {
                items: toggle_done(state.items, id),
                draft: state.draft,
            },

            TodoIntent::Remove { id } => TodoState {
                items: remove_item(state.items, id),
                draft: state.draft,
            },

            TodoIntent::Load { items } => TodoState { items, ..state },
        }
    }
}
