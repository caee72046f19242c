//! Scrollable host page.
//!
//! The terminal section sits below an intro block. Scrolling moves the page;
//! the section's visibility trigger fires the first time it comes into view.

use crate::config::PageConfig;
use crate::sim::VisibilityTrigger;

use super::layout::page_layout;
use ratatui::layout::Rect;

/// Rows moved per mouse wheel notch.
pub const WHEEL_STEP: i32 = 3;

#[derive(Debug, Clone)]
pub struct Page {
    scroll: u16,
    intro_rows: u16,
    trigger: VisibilityTrigger,
}

impl Page {
    pub fn new(config: &PageConfig) -> Self {
        let mut page = Self {
            scroll: 0,
            intro_rows: config.intro_rows,
            trigger: VisibilityTrigger::new(config.visibility_margin),
        };
        if config.autostart {
            page.scroll = page.max_scroll();
        }
        page
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn intro_rows(&self) -> u16 {
        self.intro_rows
    }

    /// The section is one viewport tall, so the page can scroll by exactly
    /// the intro height.
    pub fn max_scroll(&self) -> u16 {
        self.intro_rows
    }

    /// Scroll by `delta` rows, clamped to the page. Returns whether it moved.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        let moved = target as u16 != self.scroll;
        self.scroll = target as u16;
        moved
    }

    pub fn scroll_to_section(&mut self) -> bool {
        self.scroll_by(i32::from(self.max_scroll()))
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.scroll_by(-i32::from(self.max_scroll()))
    }

    /// Check the section against the viewport. `true` exactly once.
    pub fn check_visibility(&mut self, viewport: Rect) -> bool {
        let layout = page_layout(viewport, self.intro_rows, self.scroll);
        self.trigger
            .observe(layout.section_top, viewport.height, viewport.height)
    }
}
