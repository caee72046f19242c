//! Project automation tasks
//!
//! Usage: `cargo run -p xtask -- man [--out-dir DIR]`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use wisp_term::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "wisp-term project tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for wisp-term and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = Cli::command();
    let name = cmd.get_name().to_string();
    write_page(&cmd, &name, out_dir)?;

    for sub in cmd.get_subcommands() {
        let page_name = format!("{}-{}", name, sub.get_name());
        write_page(sub, &page_name, out_dir)?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn write_page(cmd: &clap::Command, title: &str, out_dir: &Path) -> Result<()> {
    let path = out_dir.join(format!("{}.1", title));
    let mut buffer = Vec::new();
    Man::new(cmd.clone()).title(title).render(&mut buffer)?;
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
