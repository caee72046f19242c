//! wisp-term - the Wisp terminal showcase, in your terminal
//!
//! A command is typed out character by character, a menu fades in, and
//! picking "Monitor" opens a live metrics panel. The simulation core in
//! [`sim`] is pure and clock-agnostic; [`tui`] hosts it with ratatui.

pub mod cli;
pub mod config;
pub mod logging;
pub mod sim;
pub mod theme;
pub mod tui;

pub use config::Config;
