//! Terminal view state machine.
//!
//! `Script` holds the component policies and the pure transition function
//! `(state, event) -> (state', effects)`. `ViewStateMachine` is the thin
//! shell around it that owns the state and the timers, applies effects and
//! notifies observers when the state changes.
//!
//! ```text
//! NotStarted --visible--> Typing --settle--> Menu <--activate/back--> Monitor
//! ```

use std::time::Duration;

use tracing::{debug, info, warn};

use super::error::SimError;
use super::event::{Effect, Event, Tick};
use super::menu::{MenuAction, MenuController};
use super::monitor::MonitorView;
use super::scheduler::{Scheduler, TimerId};
use super::state::{Phase, TerminalState};
use super::typing::{TypingConfig, TypingSequencer, TypingStep};

/// Default period of the cursor blink timer.
pub const BLINK_PERIOD: Duration = Duration::from_millis(530);

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TerminalState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: &TerminalState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }
}

/// Component policies shared by every transition.
#[derive(Debug, Clone)]
pub struct Script {
    pub typing: TypingSequencer,
    pub menu: MenuController,
    pub monitor: MonitorView,
    pub blink_period: Duration,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            typing: TypingSequencer::default(),
            menu: MenuController::default(),
            monitor: MonitorView::default(),
            blink_period: BLINK_PERIOD,
        }
    }
}

impl Script {
    pub fn new(typing: TypingConfig, menu: MenuController, monitor: MonitorView) -> Self {
        Self {
            typing: TypingSequencer::new(typing),
            menu,
            monitor,
            blink_period: BLINK_PERIOD,
        }
    }

    pub fn with_blink_period(mut self, period: Duration) -> Self {
        self.blink_period = period;
        self
    }

    /// Pure transition function.
    ///
    /// Events that do not apply to the current phase leave the state as is.
    /// Out-of-range menu indices are rejected with an error and never touch
    /// the state.
    pub fn transition(&self, state: &TerminalState, event: &Event) -> Result<Transition, SimError> {
        let mut next = state.clone();
        let mut effects = Vec::new();

        match (state.phase, event) {
            (_, Event::VisibilityTriggered) => {
                if state.in_view {
                    return Ok(Transition::unchanged(state));
                }
                next.in_view = true;
                next.phase = Phase::Typing;
                effects.push(Effect::Arm(Tick::Reveal, self.typing.config().start_delay));
                effects.push(Effect::StartBlink(self.blink_period));
            }

            (_, Event::TickElapsed(Tick::Blink)) => {
                next.cursor_visible = !state.cursor_visible;
            }

            (Phase::Typing, Event::TickElapsed(Tick::Reveal)) => {
                match self.typing.plan(&state.typed_prefix) {
                    TypingStep::Reveal { prefix, next_after } => {
                        next.typed_prefix = prefix;
                        effects.push(Effect::Arm(Tick::Reveal, next_after));
                    }
                    TypingStep::Settle { after } => {
                        effects.push(Effect::Arm(Tick::Settle, after));
                    }
                }
            }

            (Phase::Typing, Event::TickElapsed(Tick::Settle)) => {
                next.phase = Phase::Menu;
                next.selected_index = 0;
                effects.push(Effect::FinishTyping);
            }

            (Phase::Menu, Event::HoverChanged(index)) => {
                if let Some(selected) = self.menu.set_hovered(state.selected_index, *index)? {
                    next.selected_index = selected;
                }
            }

            (Phase::Menu, Event::Activated(index)) => match self.menu.activate(*index)? {
                MenuAction::OpenMonitor => next.phase = Phase::Monitor,
                MenuAction::Unassigned(_) => {}
            },

            (Phase::Monitor, Event::BackRequested) => {
                next.phase = self.monitor.go_back();
            }

            _ => return Ok(Transition::unchanged(state)),
        }

        Ok(Transition {
            state: next,
            effects,
        })
    }
}

/// An event that changed the state, for debugging.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Record {
    /// Time since mount, in milliseconds
    pub at_ms: u64,
    pub event: Event,
}

type Observer = Box<dyn FnMut(&TerminalState)>;

/// Owns the terminal state and its timers.
///
/// Created in `NotStarted` when the component mounts. `teardown` (also run on
/// drop) cancels every outstanding timer; afterwards the machine ignores all
/// input, so no timer can mutate a destroyed instance.
pub struct ViewStateMachine {
    script: Script,
    state: TerminalState,
    scheduler: Scheduler<Tick>,
    blink: Option<TimerId>,
    observers: Vec<Observer>,
    history: Vec<Record>,
    phase_entered_at: Duration,
    torn_down: bool,
}

impl std::fmt::Debug for ViewStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewStateMachine")
            .field("state", &self.state)
            .field("now", &self.scheduler.now())
            .field("pending_timers", &self.scheduler.pending())
            .field("observers", &self.observers.len())
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

impl Default for ViewStateMachine {
    fn default() -> Self {
        Self::new(Script::default())
    }
}

impl ViewStateMachine {
    /// Mount a new machine.
    pub fn new(script: Script) -> Self {
        Self {
            script,
            state: TerminalState::default(),
            scheduler: Scheduler::new(),
            blink: None,
            observers: Vec::new(),
            history: Vec::new(),
            phase_entered_at: Duration::ZERO,
            torn_down: false,
        }
    }

    pub fn state(&self) -> &TerminalState {
        &self.state
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Time since mount.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Time since the current phase was entered.
    pub fn phase_elapsed(&self) -> Duration {
        self.now().saturating_sub(self.phase_entered_at)
    }

    /// Due time of the next timer, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Number of outstanding timers.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Events that changed the state, blink ticks excluded.
    pub fn history(&self) -> &[Record] {
        &self.history
    }

    /// Register a callback invoked after every state change.
    pub fn subscribe(&mut self, observer: impl FnMut(&TerminalState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply an external event. Returns whether the state changed.
    pub fn dispatch(&mut self, event: Event) -> Result<bool, SimError> {
        if self.torn_down {
            debug!(?event, "ignoring event after teardown");
            return Ok(false);
        }

        let transition = match self.script.transition(&self.state, &event) {
            Ok(transition) => transition,
            Err(err) => {
                warn!(?event, %err, "rejected event");
                return Err(err);
            }
        };
        Ok(self.apply(event, transition))
    }

    /// Advance the clock by `delta`, firing due timers in order.
    pub fn advance_by(&mut self, delta: Duration) {
        let target = self.now() + delta;
        self.advance_to(target);
    }

    /// Advance the clock to `target` (time since mount).
    ///
    /// Timers are popped one at a time, so a timer armed while handling
    /// another one still fires within this call if it falls due by `target`.
    pub fn advance_to(&mut self, target: Duration) {
        if self.torn_down {
            return;
        }
        while let Some(fired) = self.scheduler.pop_due(target) {
            let event = Event::TickElapsed(fired.payload);
            match self.script.transition(&self.state, &event) {
                Ok(transition) => {
                    if fired.payload != Tick::Blink {
                        // The chained timer just fired; its handle is stale.
                        self.script.typing.finish();
                    }
                    self.apply(event, transition);
                }
                Err(err) => warn!(%err, "timer transition failed"),
            }
        }
        self.scheduler.settle(target);
    }

    /// Cancel all timers and stop reacting to input.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.script.typing.cancel(&mut self.scheduler);
        if let Some(id) = self.blink.take() {
            self.scheduler.cancel(id);
        }
        self.scheduler.cancel_all();
        self.torn_down = true;
        info!(phase = %self.state.phase, "terminal torn down");
    }

    fn apply(&mut self, event: Event, transition: Transition) -> bool {
        let Transition { state, effects } = transition;

        for effect in effects {
            match effect {
                Effect::Arm(tick, after) => {
                    self.script.typing.arm(&mut self.scheduler, tick, after);
                }
                Effect::StartBlink(period) => {
                    if self.blink.is_none() {
                        self.blink = Some(self.scheduler.schedule_every(period, Tick::Blink));
                    }
                }
                Effect::FinishTyping => {
                    // A dispatched Settle tick can arrive while a reveal timer is still armed.
                    self.script.typing.cancel(&mut self.scheduler);
                }
            }
        }

        let changed = state != self.state;
        if state.phase != self.state.phase {
            debug!(from = %self.state.phase, to = %state.phase, "phase transition");
            self.phase_entered_at = self.now();
        }
        self.state = state;

        if changed {
            if !matches!(event, Event::TickElapsed(Tick::Blink)) {
                self.history.push(Record {
                    at_ms: self.now().as_millis() as u64,
                    event,
                });
            }
            for observer in &mut self.observers {
                observer(&self.state);
            }
        }
        changed
    }
}

impl Drop for ViewStateMachine {
    fn drop(&mut self) {
        self.teardown();
    }
}
