//! Terminal simulation core.
//!
//! A self-contained, single-threaded state machine that plays the wisp CLI
//! demo: a command is typed character by character, a menu appears, and the
//! "Monitor" entry opens a live metrics panel with a way back.
//!
//! Nothing in here touches the terminal. Time is virtual (see
//! [`scheduler`]), input is an explicit [`Event`], and the renderer only
//! reads [`TerminalState`]. This keeps every behavior replayable in tests.
//!
//! # Module Structure
//!
//! - [`scheduler`] - virtual-clock timer queue with cancel handles
//! - [`typing`] - character-by-character reveal
//! - [`menu`] - menu items, hover and activation
//! - [`monitor`] - metrics read model and tiles
//! - [`machine`] - transition function and the owning state machine
//! - [`visibility`] - once-only viewport trigger
//! - [`entrance`] - staggered menu entrance schedule
//! - [`replay`] - headless replay of event scripts

pub mod entrance;
mod error;
mod event;
pub mod machine;
pub mod menu;
pub mod monitor;
pub mod replay;
pub mod scheduler;
mod state;
pub mod typing;
pub mod visibility;

pub use error::SimError;
pub use event::{Effect, Event, ParseStepError, ScriptStep, Tick};
pub use machine::{Record, Script, Transition, ViewStateMachine, BLINK_PERIOD};
pub use menu::{MenuAction, MenuController, MenuItem, MONITOR_INDEX};
pub use monitor::{MonitorMetrics, MonitorView};
pub use state::{Phase, TerminalState};
pub use typing::{TypingConfig, TypingSequencer};
pub use visibility::VisibilityTrigger;
