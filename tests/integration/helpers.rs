//! Shared helpers for integration tests

use std::path::PathBuf;
use std::time::Duration;

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tempfile::TempDir;

use wisp_term::sim::{Event, ScriptStep, ViewStateMachine};

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Parse a list of replay steps, panicking on bad input.
pub fn steps(raw: &[&str]) -> Vec<ScriptStep> {
    raw.iter()
        .map(|s| s.parse().unwrap_or_else(|e| panic!("bad step {s}: {e}")))
        .collect()
}

/// Drive a machine through steps, ignoring rejected events.
pub fn drive(machine: &mut ViewStateMachine, raw: &[&str]) {
    for step in steps(raw) {
        match step {
            ScriptStep::Advance(delta) => machine.advance_by(delta),
            ScriptStep::Dispatch(event) => {
                let _ = machine.dispatch(event);
            }
        }
    }
}

/// A machine already sitting in the menu (typing finished at 2000ms).
pub fn machine_in_menu() -> ViewStateMachine {
    let mut machine = ViewStateMachine::default();
    machine.dispatch(Event::VisibilityTriggered).unwrap();
    machine.advance_by(ms(2_000));
    machine
}

/// Rows of a test terminal's buffer as plain strings.
pub fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (area.y..area.bottom())
        .map(|y| {
            (area.x..area.right())
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

/// Whole buffer as one newline-joined string.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    buffer_lines(terminal).join("\n")
}

/// Temp dir holding a config file with the given TOML.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}
