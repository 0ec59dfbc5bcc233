//! The to-do domain: state, intents, and the reducer that ties them together.

mod intent;
mod reducer;
mod state;

pub use intent::TodoIntent;
pub use reducer::{add_item, next_id, remove_item, toggle_done, update_text, TodoReducer};
pub use state::{TodoItem, TodoState};
