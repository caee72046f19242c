//! Headless replay of event scripts.
//!
//! Drives a [`ViewStateMachine`] through a list of [`ScriptStep`]s and
//! captures the state after each one. Rejected events do not stop the
//! replay; the frame records the error and the untouched state.

use serde::Serialize;

use super::event::ScriptStep;
use super::machine::{Script, ViewStateMachine};
use super::state::TerminalState;

/// State after one replayed step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// The step as written in script syntax
    pub step: String,
    /// Virtual time after the step, in milliseconds
    pub at_ms: u64,
    pub state: TerminalState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
}

/// Replay `steps` against a freshly mounted machine.
pub fn replay(script: Script, steps: &[ScriptStep]) -> Vec<Frame> {
    let mut machine = ViewStateMachine::new(script);
    let mut frames = Vec::with_capacity(steps.len());

    for step in steps {
        let rejected = match step {
            ScriptStep::Advance(delta) => {
                machine.advance_by(*delta);
                None
            }
            ScriptStep::Dispatch(event) => machine.dispatch(*event).err().map(|e| e.to_string()),
        };
        frames.push(Frame {
            step: step.to_string(),
            at_ms: machine.now().as_millis() as u64,
            state: machine.state().clone(),
            rejected,
        });
    }

    machine.teardown();
    frames
}
