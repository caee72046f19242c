//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod replay;
pub mod run;

use std::path::Path;

use anyhow::Result;
use wisp_term::Config;

/// Load the config from an explicit path or the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
