//! Simulation state.

use serde::Serialize;

/// Mutually exclusive modes of the terminal simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Mounted, waiting for the visibility trigger
    #[default]
    NotStarted,
    /// Command is being typed
    Typing,
    /// Interactive menu
    Menu,
    /// Live monitor panel
    Monitor,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not_started",
            Phase::Typing => "typing",
            Phase::Menu => "menu",
            Phase::Monitor => "monitor",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalState {
    pub phase: Phase,
    /// Characters of the command typed so far; only ever grows
    pub typed_prefix: String,
    /// Blink phase shared by the prompt cursor and the selection marker
    pub cursor_visible: bool,
    /// Highlighted menu row, always a valid item index
    pub selected_index: usize,
    /// Latched once the visibility trigger fired
    pub in_view: bool,
}

impl Default for TerminalState {
    fn default() -> Self {
        Self {
            phase: Phase::NotStarted,
            typed_prefix: String::new(),
            cursor_visible: true,
            selected_index: 0,
            in_view: false,
        }
    }
}

impl TerminalState {
    /// Whether the selection marker is drawn on `index` this frame.
    pub fn marker_visible(&self, index: usize) -> bool {
        self.phase == Phase::Menu && self.selected_index == index && self.cursor_visible
    }
}
