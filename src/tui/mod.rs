//! TUI (Text User Interface) module
//!
//! Hosts the terminal simulation on a scrollable page using
//! ratatui/crossterm. Geometry, input mapping and rendering are pure and
//! tested without a real terminal; only `app` touches the tty.

pub mod app;
pub mod input;
pub mod layout;
pub mod page;
pub mod render;
pub mod showcase;

pub use app::App;
pub use page::Page;
pub use showcase::Showcase;
