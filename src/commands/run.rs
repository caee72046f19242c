//! Interactive showcase handler

use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use wisp_term::cli::RunArgs;
use wisp_term::logging;
use wisp_term::tui::Showcase;

/// Start the showcase on the current terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle(config_path: Option<&Path>, log_file: Option<&Path>, args: &RunArgs) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        bail!("wisp-term needs an interactive terminal (try `wisp-term replay` for headless use)");
    }
    if let Some(path) = logging::init(log_file) {
        info!(log = %path.display(), "logging initialized");
    }

    let mut config = super::load_config(config_path)?;
    if args.autostart {
        config.page.autostart = true;
    }
    if let Some(command) = &args.command {
        config.terminal.command = command.clone();
    }
    info!(command = %config.terminal.command, autostart = config.page.autostart, "starting showcase");

    Showcase::new(config).run()
}
