//! Live monitor panel.
//!
//! The monitor shows four metric tiles and a back link. Values come from
//! `MonitorMetrics`, a read model that defaults to the showcase figures and
//! can be replaced from configuration.

use serde::{Deserialize, Serialize};

use super::state::Phase;

/// Read model behind the monitor tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorMetrics {
    /// Profit and loss for the day, in cents
    pub pnl_today_cents: i64,
    /// Win rate in percent
    pub win_rate: f64,
    /// Number of open positions
    pub active_positions: u32,
    /// Number of signals emitted today
    pub signal_count: u32,
}

impl Default for MonitorMetrics {
    fn default() -> Self {
        Self {
            pnl_today_cents: 234_750,
            win_rate: 68.3,
            active_positions: 3,
            signal_count: 12,
        }
    }
}

/// Color role of a tile value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Gain,
    Loss,
    Neutral,
    Accent,
    Info,
}

/// One labeled metric tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

/// The monitor phase's render contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitorView {
    metrics: MonitorMetrics,
}

impl MonitorView {
    pub const TITLE: &'static str = "📊 Live Monitor";
    pub const STATUS: &'static str = "Connected to feed";
    pub const BACK_LABEL: &'static str = "← Back to menu";

    pub fn new(metrics: MonitorMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &MonitorMetrics {
        &self.metrics
    }

    /// Tiles in display order (row-major 2x2 grid).
    pub fn tiles(&self) -> [Tile; 4] {
        let pnl_tone = if self.metrics.pnl_today_cents < 0 {
            Tone::Loss
        } else {
            Tone::Gain
        };
        [
            Tile {
                label: "P&L Today",
                value: format_currency(self.metrics.pnl_today_cents),
                tone: pnl_tone,
            },
            Tile {
                label: "Win Rate",
                value: format_percent(self.metrics.win_rate),
                tone: Tone::Neutral,
            },
            Tile {
                label: "Active Positions",
                value: self.metrics.active_positions.to_string(),
                tone: Tone::Accent,
            },
            Tile {
                label: "Signals",
                value: self.metrics.signal_count.to_string(),
                tone: Tone::Info,
            },
        ]
    }

    /// Leave the monitor. Always lands on the menu.
    pub fn go_back(&self) -> Phase {
        Phase::Menu
    }
}

/// Format cents as a signed dollar amount with thousands separators.
///
/// Examples:
/// - 234750 -> "+$2,347.50"
/// - -1005 -> "-$10.05"
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { '-' } else { '+' };
    let abs = cents.unsigned_abs();
    let dollars = abs / 100;
    let rest = abs % 100;
    format!("{}${}.{:02}", sign, group_thousands(dollars), rest)
}

/// Format a percentage with one decimal.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
