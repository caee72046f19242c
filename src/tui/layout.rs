//! Page and terminal-window geometry.
//!
//! Pure functions shared by rendering and mouse hit testing, so a click is
//! always resolved against exactly what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::sim::Phase;

/// Widest the terminal window gets.
pub const WINDOW_MAX_WIDTH: u16 = 76;
/// Tallest the terminal window gets.
pub const WINDOW_MAX_HEIGHT: u16 = 24;
/// Below this width the heading panel is dropped.
pub const HEADING_MIN_WIDTH: u16 = 90;
/// Rows above the first menu item (banner, blank, question, blank).
pub const MENU_HEADER_ROWS: u16 = 4;

/// Visible parts of the page for a given scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Visible slice of the intro block
    pub intro: Option<Rect>,
    /// Visible slice of the terminal section
    pub section: Option<Rect>,
    /// Section top relative to the viewport (negative when scrolled past)
    pub section_top: i32,
}

/// Split the viewport between the intro block and the terminal section.
///
/// The section is one viewport tall and starts `intro_rows` below the top
/// of the page.
pub fn page_layout(viewport: Rect, intro_rows: u16, scroll: u16) -> PageLayout {
    let section_top = i32::from(intro_rows) - i32::from(scroll);
    let intro = clip_rows(viewport, -i32::from(scroll), intro_rows);
    let section = clip_rows(viewport, section_top, viewport.height);
    PageLayout {
        intro,
        section,
        section_top,
    }
}

/// Intersect rows `[top, top + height)` (relative to the viewport) with it.
fn clip_rows(viewport: Rect, top: i32, height: u16) -> Option<Rect> {
    let start = top.max(0);
    let end = (top + i32::from(height)).min(i32::from(viewport.height));
    if end <= start {
        return None;
    }
    Some(Rect::new(
        viewport.x,
        viewport.y + start as u16,
        viewport.width,
        (end - start) as u16,
    ))
}

/// Heading panel and terminal window inside the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub heading: Option<Rect>,
    pub window: Rect,
}

pub fn section_layout(section: Rect) -> SectionLayout {
    let (heading, right) = if section.width >= HEADING_MIN_WIDTH {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(33), Constraint::Percentage(67)])
            .split(section);
        (Some(cols[0]), cols[1])
    } else {
        (None, section)
    };

    let width = right.width.saturating_sub(2).min(WINDOW_MAX_WIDTH);
    let height = right.height.saturating_sub(2).min(WINDOW_MAX_HEIGHT);
    let x = right.x + (right.width - width) / 2;
    let y = right.y + (right.height - height) / 2;

    SectionLayout {
        heading,
        window: Rect::new(x, y, width, height),
    }
}

/// Title bar and padded body of the terminal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    pub frame: Rect,
    pub title_bar: Rect,
    pub body: Rect,
}

pub fn window_layout(window: Rect) -> WindowLayout {
    let title_bar = Rect::new(window.x, window.y, window.width, window.height.min(1));
    let inner = Rect::new(
        window.x,
        window.y + title_bar.height,
        window.width,
        window.height.saturating_sub(title_bar.height),
    );
    // Two columns and one row of padding on each side.
    let body = Rect::new(
        inner.x + 2.min(inner.width / 2),
        inner.y + 1.min(inner.height / 2),
        inner.width.saturating_sub(4),
        inner.height.saturating_sub(2),
    );
    WindowLayout {
        frame: window,
        title_bar,
        body,
    }
}

/// Window geometry for the current viewport and scroll, if the section
/// shows at all.
pub fn terminal_window(viewport: Rect, intro_rows: u16, scroll: u16) -> Option<WindowLayout> {
    let section = page_layout(viewport, intro_rows, scroll).section?;
    Some(window_layout(section_layout(section).window))
}

/// Row of menu item `index` inside the body.
pub fn menu_row(body: Rect, index: usize) -> Option<Rect> {
    let y = u32::from(body.y) + u32::from(MENU_HEADER_ROWS) + index as u32;
    if y >= u32::from(body.bottom()) {
        return None;
    }
    Some(Rect::new(body.x, y as u16, body.width, 1))
}

/// Row holding the monitor's back link.
pub fn back_link(body: Rect, label_width: u16) -> Option<Rect> {
    if body.height == 0 {
        return None;
    }
    Some(Rect::new(
        body.x,
        body.bottom() - 1,
        label_width.min(body.width),
        1,
    ))
}

/// Something clickable inside the terminal body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    MenuRow(usize),
    Back,
}

/// Resolve a pointer position against the clickable regions of `phase`.
pub fn hit_test(
    body: Rect,
    phase: Phase,
    item_count: usize,
    back_label_width: u16,
    column: u16,
    row: u16,
) -> Option<Hit> {
    let contains = |rect: Rect| {
        column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
    };
    match phase {
        Phase::Menu => (0..item_count)
            .find(|&idx| menu_row(body, idx).is_some_and(contains))
            .map(Hit::MenuRow),
        Phase::Monitor => back_link(body, back_label_width)
            .filter(|rect| contains(*rect))
            .map(|_| Hit::Back),
        Phase::NotStarted | Phase::Typing => None,
    }
}
