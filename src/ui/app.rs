use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::loader::{Loader, LoaderError};
use crate::persist::PersistedStore;
use crate::todo::{TodoIntent, TodoItem, TodoState};

/// How long a footer notice stays visible.
const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Input,
    List,
}

/// An in-progress edit of an existing item. Lives entirely in the view
/// layer; core state only changes when the edit is committed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Edit {
    pub id: u64,
    pub buffer: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeKind {
    Info,
    Error,
}

struct Notice {
    text: String,
    kind: NoticeKind,
    shown_at: Instant,
}

/// View state and intent plumbing around the persisted store.
///
/// Everything that survives a restart lives in [`TodoState`] behind the
/// store; everything here (focus, selection, edit buffer, notices) is
/// rebuilt fresh each run.
pub struct App {
    store: PersistedStore,
    focus: Focus,
    selected: usize,
    edit: Option<Edit>,
    loader: Option<Loader>,
    seed_url: Option<String>,
    load_generation: u64,
    load_in_flight: bool,
    notice: Option<Notice>,
    should_quit: bool,
}

impl App {
    pub fn new(store: PersistedStore, seed_url: Option<String>) -> Self {
        Self {
            store,
            focus: Focus::Input,
            selected: 0,
            edit: None,
            loader: None,
            seed_url,
            load_generation: 0,
            load_in_flight: false,
            notice: None,
            should_quit: false,
        }
    }

    /// Attach the feed loader once the async runtime is up.
    pub fn set_loader(&mut self, loader: Loader) {
        self.loader = Some(loader);
    }

    pub fn state(&self) -> &TodoState {
        self.store.state()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn edit(&self) -> Option<&Edit> {
        self.edit.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.load_in_flight
    }

    pub fn notice(&self) -> Option<(&str, NoticeKind)> {
        self.notice.as_ref().map(|notice| (notice.text.as_str(), notice.kind))
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
    }

    /// Route a typed character to the edit buffer or the draft.
    pub fn input_char(&mut self, c: char) {
        if let Some(edit) = &mut self.edit {
            edit.buffer.push(c);
        } else {
            let mut text = self.state().draft.clone();
            text.push(c);
            self.store.dispatch(TodoIntent::SetDraft { text });
        }
    }

    pub fn input_backspace(&mut self) {
        if let Some(edit) = &mut self.edit {
            edit.buffer.pop();
        } else {
            let mut text = self.state().draft.clone();
            text.pop();
            self.store.dispatch(TodoIntent::SetDraft { text });
        }
    }

    pub fn input_paste(&mut self, pasted: &str) {
        // The input box is a single line.
        let flat: String = pasted.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if let Some(edit) = &mut self.edit {
            edit.buffer.push_str(&flat);
        } else {
            let mut text = self.state().draft.clone();
            text.push_str(&flat);
            self.store.dispatch(TodoIntent::SetDraft { text });
        }
    }

    /// Commit the pending edit, or add a new item from the draft.
    pub fn submit(&mut self) {
        if let Some(edit) = self.edit.take() {
            self.store.dispatch(TodoIntent::UpdateText {
                id: edit.id,
                text: edit.buffer,
            });
            self.focus = Focus::List;
        } else {
            self.store.dispatch(TodoIntent::Add);
        }
    }

    /// Drop the pending edit without touching the item.
    pub fn cancel_edit(&mut self) {
        if self.edit.take().is_some() {
            self.focus = Focus::List;
        }
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.state().items.len();
        if len == 0 {
            self.selected = 0;
            return;
        }

        let current = self.selected.min(len.saturating_sub(1));
        let next = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };

        self.selected = next;
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.dispatch(TodoIntent::Toggle { id });
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.dispatch(TodoIntent::Remove { id });
            self.clamp_selection();
        }
    }

    /// Start editing the selected item in the input box.
    pub fn begin_edit(&mut self) {
        let Some(item) = self.state().items.get(self.selected) else {
            return;
        };
        self.edit = Some(Edit {
            id: item.id,
            buffer: item.text.clone(),
        });
        self.focus = Focus::Input;
    }

    /// Kick off a feed fetch. Every request gets a fresh generation so a
    /// completion from a superseded request cannot clobber a newer one.
    pub fn request_reload(&mut self) {
        let Some(url) = self.seed_url.clone() else {
            self.show_notice(NoticeKind::Error, "No feed URL configured");
            return;
        };
        let Some(loader) = &self.loader else {
            return;
        };

        self.load_generation += 1;
        self.load_in_flight = true;
        loader.fetch(url, self.load_generation);
    }

    /// Seed the list over the feed, but only on a truly fresh start:
    /// a restored snapshot always wins over the network.
    pub fn seed_if_fresh(&mut self) {
        if self.store.restored() || self.seed_url.is_none() {
            return;
        }
        self.request_reload();
    }

    pub fn on_load_finished(
        &mut self,
        generation: u64,
        result: Result<Vec<TodoItem>, LoaderError>,
    ) {
        if generation != self.load_generation {
            debug!(generation, current = self.load_generation, "dropping stale load result");
            return;
        }
        self.load_in_flight = false;

        match result {
            Ok(items) => {
                let count = items.len();
                self.store.dispatch(TodoIntent::Load { items });
                self.clamp_selection();
                self.show_notice(NoticeKind::Info, format!("Loaded {count} items"));
            }
            Err(err) => {
                warn!(error = %err, "feed reload failed");
                self.show_notice(NoticeKind::Error, format!("Reload failed: {err}"));
            }
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(notice) = &self.notice {
            if notice.shown_at.elapsed() >= NOTICE_TTL {
                self.notice = None;
            }
        }
    }

    fn show_notice(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        });
    }

    fn selected_id(&self) -> Option<u64> {
        self.state().items.get(self.selected).map(|item| item.id)
    }

    fn clamp_selection(&mut self) {
        let len = self.state().items.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let max_index = len - 1;
        if self.selected > max_index {
            self.selected = max_index;
        }
    }
}
