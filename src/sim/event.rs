//! Events consumed by the state machine and effects it requests.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

/// Timer payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tick {
    /// Reveal the next character (or arm the settle timer when done)
    Reveal,
    /// Typing finished settling; switch to the menu
    Settle,
    /// Toggle the blink phase
    Blink,
}

/// Inputs to the transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "event", content = "value")]
pub enum Event {
    /// The component scrolled into view
    VisibilityTriggered,
    /// A scheduled timer fired
    TickElapsed(Tick),
    /// Pointer (or keyboard) moved the highlight to an index
    HoverChanged(usize),
    /// An item was clicked or confirmed
    Activated(usize),
    /// The monitor's back link was used
    BackRequested,
}

/// Side effects requested by a transition, applied by the machine shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Arm the next chained typing timer
    Arm(Tick, Duration),
    /// Start the repeating blink timer
    StartBlink(Duration),
    /// Typing is over; release the sequencer's timer handle
    FinishTyping,
}

/// One step of a replay script.
///
/// Syntax: `visible`, `back`, `hover:<n>`, `activate:<n>`, `+<ms>`
/// (advance time by that many milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Dispatch(Event),
    Advance(Duration),
}

/// Replay script parse errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseStepError {
    #[error("Unknown step '{0}' (expected visible, back, hover:N, activate:N or +MS)")]
    Unknown(String),

    #[error("Invalid number in step '{0}'")]
    InvalidNumber(String),
}

impl FromStr for ScriptStep {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let step = s.trim();
        let number = |raw: &str| -> Result<u64, ParseStepError> {
            raw.parse::<u64>()
                .map_err(|_| ParseStepError::InvalidNumber(step.to_string()))
        };

        if let Some(ms) = step.strip_prefix('+') {
            return Ok(ScriptStep::Advance(Duration::from_millis(number(ms)?)));
        }
        if let Some(idx) = step.strip_prefix("hover:") {
            return Ok(ScriptStep::Dispatch(Event::HoverChanged(number(idx)? as usize)));
        }
        if let Some(idx) = step.strip_prefix("activate:") {
            return Ok(ScriptStep::Dispatch(Event::Activated(number(idx)? as usize)));
        }
        match step {
            "visible" => Ok(ScriptStep::Dispatch(Event::VisibilityTriggered)),
            "back" => Ok(ScriptStep::Dispatch(Event::BackRequested)),
            _ => Err(ParseStepError::Unknown(step.to_string())),
        }
    }
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptStep::Advance(d) => write!(f, "+{}", d.as_millis()),
            ScriptStep::Dispatch(Event::VisibilityTriggered) => write!(f, "visible"),
            ScriptStep::Dispatch(Event::BackRequested) => write!(f, "back"),
            ScriptStep::Dispatch(Event::HoverChanged(i)) => write!(f, "hover:{}", i),
            ScriptStep::Dispatch(Event::Activated(i)) => write!(f, "activate:{}", i),
            ScriptStep::Dispatch(Event::TickElapsed(tick)) => write!(f, "tick:{:?}", tick),
        }
    }
}
