//! Menu items and selection logic.

use serde::{Deserialize, Serialize};

use super::error::SimError;

/// Position of the "Monitor" entry, the only item wired to a transition.
pub const MONITOR_INDEX: usize = 1;

/// Key-binding legend shown under the menu.
pub const LEGEND: [(&str, &str); 3] = [("↑↓/jk", "Navigate"), ("→", "Select"), ("q", "Quit")];

/// A single menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Leading glyph
    pub icon: String,
    /// Display label
    pub label: String,
    /// Optional short tag rendered after the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl MenuItem {
    pub fn new(icon: &str, label: &str) -> Self {
        Self {
            icon: icon.to_string(),
            label: label.to_string(),
            badge: None,
        }
    }

    pub fn with_badge(mut self, badge: &str) -> Self {
        self.badge = Some(badge.to_string());
        self
    }
}

/// The fixed item list of the wisp CLI menu.
pub fn default_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("📁", "Strategies"),
        MenuItem::new("📊", "Monitor"),
        MenuItem::new("⚙️", "Settings"),
        MenuItem::new("ℹ️", "Help"),
        MenuItem::new("🆕", "Create New Project").with_badge("NEW"),
    ]
}

/// Outcome of activating a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Switch to the live monitor
    OpenMonitor,
    /// Item has no action attached yet
    Unassigned(usize),
}

/// Selection and dispatch over a fixed, ordered item list.
///
/// The controller holds no selection itself: the selected index lives in
/// `TerminalState` and is passed in, so the controller stays a pure policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuController {
    items: Vec<MenuItem>,
    monitor_index: usize,
}

impl Default for MenuController {
    fn default() -> Self {
        Self::new(default_items())
    }
}

impl MenuController {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            monitor_index: MONITOR_INDEX,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index whose activation opens the monitor.
    pub fn monitor_index(&self) -> usize {
        self.monitor_index
    }

    /// Resolve a hover over `index` given the `current` selection.
    ///
    /// Returns `Ok(None)` when `index` is already selected.
    pub fn set_hovered(&self, current: usize, index: usize) -> Result<Option<usize>, SimError> {
        self.check(index)?;
        if index == current {
            Ok(None)
        } else {
            Ok(Some(index))
        }
    }

    /// Resolve an activation of `index`.
    pub fn activate(&self, index: usize) -> Result<MenuAction, SimError> {
        self.check(index)?;
        if index == self.monitor_index {
            Ok(MenuAction::OpenMonitor)
        } else {
            Ok(MenuAction::Unassigned(index))
        }
    }

    /// Index after `current`, wrapping to the top.
    pub fn next_index(&self, current: usize) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        (current + 1) % self.items.len()
    }

    /// Index before `current`, wrapping to the bottom.
    pub fn previous_index(&self, current: usize) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        if current == 0 {
            self.items.len() - 1
        } else {
            current - 1
        }
    }

    fn check(&self, index: usize) -> Result<(), SimError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(SimError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}
