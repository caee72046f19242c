//! Tracing setup.
//!
//! The TUI owns stdout and stderr while it runs, so logs go to a file.
//! Filtering follows `RUST_LOG` and defaults to `info`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Default log file location (`<data_dir>/wisp-term/wisp-term.log`).
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("wisp-term").join("wisp-term.log"))
}

/// Build a subscriber writing to `log_file`.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}

/// Install the global subscriber.
///
/// Returns the path being logged to, or `None` if logging could not be set
/// up. Failure here never stops the program.
pub fn init(log_path: Option<&Path>) -> Option<PathBuf> {
    let path = match log_path {
        Some(path) => path.to_path_buf(),
        None => default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = File::create(&path).ok()?;
    tracing::subscriber::set_global_default(build_subscriber(file)).ok()?;
    Some(path)
}
