//! Config subcommands handler

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use wisp_term::theme::current_theme;
use wisp_term::Config;

fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}

/// Show the effective configuration as TOML.
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&config.to_toml()?));
    Ok(())
}

/// Print where the configuration file lives.
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(config_path)?.display());
    Ok(())
}

/// Write the default configuration.
///
/// Refuses to touch an existing file unless `force` is set.
pub fn handle_init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = resolve_path(config_path)?;
    let theme = current_theme();

    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}
