use std::time::Duration;

use anyhow::Context;
use tracing::trace;

use crate::config::Config;
use crate::loader::Loader;
use crate::persist::{PersistedStore, SnapshotFile};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the UI until the user quits.
///
/// Must be called from within a tokio runtime; the feed loader spawns
/// its fetches onto it while this thread drives the terminal.
pub fn run(config: Config) -> anyhow::Result<()> {
    let handle =
        tokio::runtime::Handle::try_current().context("the feed loader needs a tokio runtime")?;

    let path = config.storage.path.clone().unwrap_or_else(SnapshotFile::default_path);
    let snapshot = SnapshotFile::at(path);
    let mut store = PersistedStore::open(snapshot);
    store.subscribe(|state| {
        trace!(items = state.items.len(), done = state.done_count(), "state transition");
    });

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(1));
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(store, config.seed.url.clone());
    app.set_loader(Loader::new(handle, events.sender()));
    app.seed_if_fresh();

    let (mut terminal, guard) = setup_terminal().context("preparing terminal")?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.input_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks the new size up from the backend.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::LoadFinished { generation, result }) => {
                app.on_load_finished(generation, result);
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
