//! Typing sequencer.
//!
//! Reveals the command one character at a time, then asks for the settle
//! delay before handing control to the menu. The timeline for the default
//! configuration is:
//!
//! ```text
//! 400ms  "w"      first reveal after the start delay
//! 550ms  "wi"
//! 700ms  "wis"
//! 850ms  "wisp"
//! 1000ms          prefix complete, settle timer armed
//! 2000ms          typing complete
//! ```

use std::time::Duration;

use super::event::Tick;
use super::scheduler::{Scheduler, TimerId};

/// Timing and target text for the typing animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingConfig {
    /// Command that gets "typed"
    pub target: String,
    /// Delay between the visibility trigger and the first character
    pub start_delay: Duration,
    /// Delay between consecutive characters
    pub per_char_delay: Duration,
    /// Pause after the command is fully typed before completion
    pub completion_delay: Duration,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            target: "wisp".to_string(),
            start_delay: Duration::from_millis(400),
            per_char_delay: Duration::from_millis(150),
            completion_delay: Duration::from_millis(1000),
        }
    }
}

impl TypingConfig {
    /// Number of characters in the target.
    pub fn len(&self) -> usize {
        self.target.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Time from the visibility trigger until completion fires.
    pub fn total_duration(&self) -> Duration {
        let chars = u32::try_from(self.len()).unwrap_or(u32::MAX);
        self.start_delay
            .saturating_add(self.per_char_delay.saturating_mul(chars))
            .saturating_add(self.completion_delay)
    }
}

/// What the sequencer wants to happen on its next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingStep {
    /// Commit `prefix` and tick again after `next_after`
    Reveal { prefix: String, next_after: Duration },
    /// Target fully typed; complete after `after`
    Settle { after: Duration },
}

/// Drives the character-by-character reveal.
///
/// Ticks are chained: the next one is only armed after the current one has
/// been committed, so at most one typing timer is pending at any time and
/// the sequencer keeps its handle for cancellation.
#[derive(Debug, Clone, Default)]
pub struct TypingSequencer {
    config: TypingConfig,
    pending: Option<TimerId>,
}

impl TypingSequencer {
    pub fn new(config: TypingConfig) -> Self {
        Self {
            config,
            pending: None,
        }
    }

    pub fn config(&self) -> &TypingConfig {
        &self.config
    }

    /// Plan the tick that follows the already-typed `prefix`.
    ///
    /// Exactly one character is appended per reveal. A prefix that is not
    /// a prefix of the target is treated by length.
    pub fn plan(&self, prefix: &str) -> TypingStep {
        let typed = prefix.chars().count();
        if typed < self.config.len() {
            let next: String = self.config.target.chars().take(typed + 1).collect();
            TypingStep::Reveal {
                prefix: next,
                next_after: self.config.per_char_delay,
            }
        } else {
            TypingStep::Settle {
                after: self.config.completion_delay,
            }
        }
    }

    /// Arm the next chained tick, replacing (and cancelling) any pending one.
    pub fn arm(&mut self, sched: &mut Scheduler<Tick>, tick: Tick, after: Duration) -> TimerId {
        self.cancel(sched);
        let id = sched.schedule_after(after, tick);
        self.pending = Some(id);
        id
    }

    /// Cancel the pending tick, if any.
    pub fn cancel(&mut self, sched: &mut Scheduler<Tick>) {
        if let Some(id) = self.pending.take() {
            sched.cancel(id);
        }
    }

    /// Forget the handle after the final tick fired.
    pub fn finish(&mut self) {
        self.pending = None;
    }

    /// Handle of the pending tick.
    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }
}
