//! Headless replay handler

use std::path::Path;

use anyhow::Result;

use wisp_term::sim::replay::{replay, Frame};
use wisp_term::sim::ScriptStep;
use wisp_term::theme::{current_theme, Theme};

/// Replay steps and print one line per step.
pub fn handle(config_path: Option<&Path>, steps: &[ScriptStep], json: bool) -> Result<()> {
    let config = super::load_config(config_path)?;
    let frames = replay(config.script(), steps);

    if json {
        for frame in &frames {
            println!("{}", serde_json::to_string(frame)?);
        }
        return Ok(());
    }

    let theme = current_theme();
    for frame in &frames {
        println!("{}", format_frame(frame, &theme));
    }
    Ok(())
}

/// Human-readable line for a frame.
fn format_frame(frame: &Frame, theme: &Theme) -> String {
    let state = &frame.state;
    let line = format!(
        "{}  {:<12} {} prefix={:?} selected={}",
        theme.secondary_text(&format!("{:>7}ms", frame.at_ms)),
        frame.step,
        theme.accent_text(&format!("{:<11}", state.phase.name())),
        state.typed_prefix,
        state.selected_index,
    );
    match &frame.rejected {
        Some(err) => format!("{}  {}", line, theme.error_text(&format!("rejected: {}", err))),
        None => line,
    }
}
