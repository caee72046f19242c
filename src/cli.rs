//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can generate man pages from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::sim::ScriptStep;

/// Version string with git revision and build date.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("WISP_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "wisp-term",
    version,
    long_version = LONG_VERSION,
    about = "Play the Wisp terminal showcase in your terminal",
    long_about = "Play the Wisp terminal showcase in your terminal.\n\n\
        Scroll down to the terminal section and watch `wisp` get typed, then pick \
        an entry from the menu. \"Monitor\" opens the live metrics panel.\n\n\
        Running without a subcommand is the same as `wisp-term run`."
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive showcase (default)
    Run(RunArgs),

    /// Replay an event script headlessly and print every state
    #[command(long_about = "Replay an event script headlessly and print every state.\n\n\
        Steps:\n  \
        visible      the section scrolled into view\n  \
        +MS          advance time by MS milliseconds\n  \
        hover:N      hover menu item N\n  \
        activate:N   click menu item N\n  \
        back         use the monitor's back link\n\n\
        Example: wisp-term replay visible +400 +600 +1000 hover:1 activate:1 back")]
    Replay(ReplayArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Start with the terminal section already in view
    #[arg(long)]
    pub autostart: bool,

    /// Command typed at the prompt
    #[arg(long, value_name = "TEXT")]
    pub command: Option<String>,
}

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Steps to replay, in order
    #[arg(required = true, value_name = "STEP", allow_hyphen_values = true)]
    pub steps: Vec<ScriptStep>,

    /// Print one JSON object per step
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::parse_from(["wisp-term"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn run_flags_parse() {
        let cli = Cli::parse_from(["wisp-term", "run", "--autostart", "--command", "wisp dev"]);
        match cli.command {
            Some(Commands::Run(args)) => {
                assert!(args.autostart);
                assert_eq!(args.command.as_deref(), Some("wisp dev"));
            }
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn replay_steps_parse() {
        let cli = Cli::parse_from(["wisp-term", "replay", "visible", "+400", "hover:1"]);
        match cli.command {
            Some(Commands::Replay(args)) => assert_eq!(args.steps.len(), 3),
            other => panic!("expected replay, got {:?}", other),
        }
    }

    #[test]
    fn replay_rejects_bad_step() {
        assert!(Cli::try_parse_from(["wisp-term", "replay", "dance"]).is_err());
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::parse_from(["wisp-term", "config", "show", "--config", "/tmp/c.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }
}
