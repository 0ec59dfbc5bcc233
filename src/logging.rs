use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logging is off by default: the TUI owns the terminal, so anything
/// printed to stderr would corrupt the display. Set `TICKLIST_LOG` to a
/// file path to enable it; `RUST_LOG` controls the filter (default
/// `info`).
///
/// Log files get a unique `{path}.{timestamp}.{pid}` name so
/// concurrent instances never interleave writes.
pub fn init_tracing() {
    let Some(log_path) = std::env::var("TICKLIST_LOG").ok() else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry().with(filter).with(file_layer).init();
}
