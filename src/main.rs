//! wisp-term binary entry point

use clap::Parser;

use wisp_term::cli::{Cli, Commands, ConfigCommands, RunArgs};
use wisp_term::theme::current_theme;

mod commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        let theme = current_theme();
        eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

#[cfg(not(tarpaulin_include))]
fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => commands::run::handle(config_path, cli.log_file.as_deref(), &args),
        Commands::Replay(args) => commands::replay::handle(config_path, &args.steps, args.json),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(config_path),
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(config_path, force),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
