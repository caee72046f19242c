//! Frame rendering.
//!
//! Draws the host page and the simulated terminal from a read-only `View`.
//! Given the same view and geometry the output is identical, which is what
//! the buffer tests below rely on.

use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::layout::{
    back_link, page_layout, section_layout, window_layout, WindowLayout, MENU_HEADER_ROWS,
};
use crate::config::TerminalConfig;
use crate::sim::entrance;
use crate::sim::menu::LEGEND;
use crate::sim::monitor::Tile;
use crate::sim::{MenuController, MenuItem, MonitorView, Phase, TerminalState, ViewStateMachine};
use crate::theme::Theme;

/// Block cursor drawn after the typed command.
const CURSOR: &str = "█";
/// Selection marker on the highlighted menu row.
const MARKER: &str = "▶";

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub state: &'a TerminalState,
    /// Time spent in the current phase (drives the menu entrance)
    pub phase_elapsed: Duration,
    pub terminal: &'a TerminalConfig,
    pub menu: &'a MenuController,
    pub monitor: &'a MonitorView,
}

impl<'a> View<'a> {
    pub fn new(machine: &'a ViewStateMachine, terminal: &'a TerminalConfig) -> Self {
        Self {
            state: machine.state(),
            phase_elapsed: machine.phase_elapsed(),
            terminal,
            menu: &machine.script().menu,
            monitor: &machine.script().monitor,
        }
    }
}

/// Display width of the monitor's back link.
pub fn back_label_width() -> u16 {
    MonitorView::BACK_LABEL.width() as u16
}

/// Render the whole page: intro block and terminal section.
pub fn render_page(frame: &mut Frame, view: &View, theme: &Theme, intro_rows: u16, scroll: u16) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let page = page_layout(area, intro_rows, scroll);
    if let Some(intro) = page.intro {
        render_intro(frame, intro, theme);
    }
    if let Some(section) = page.section {
        let layout = section_layout(section);
        if let Some(heading) = layout.heading {
            render_heading(frame, heading, view.state.in_view, theme);
        }
        render_window(frame, window_layout(layout.window), view, theme);
    }
}

/// Intro block above the terminal section.
fn render_intro(frame: &mut Frame, area: Rect, theme: &Theme) {
    let top_left = vec![
        Line::from(Span::styled("01 — DISCIPLINE", theme.text_secondary_style())),
        Line::from(Span::styled("SYSTEM", theme.text_style())),
        Line::from(Span::styled(
            "ARCHITECT",
            theme.text_style().add_modifier(Modifier::ITALIC),
        )),
    ];
    let padded = inset(area, 4, 1);
    frame.render_widget(Paragraph::new(top_left), padded);

    if padded.height > 6 {
        let bottom_right = vec![
            Line::from(Span::styled("02 — CRAFT", theme.text_secondary_style())),
            Line::from(Span::styled("INTERFACE", theme.text_style())),
            Line::from(Span::styled(
                "DESIGNER",
                theme.text_style().add_modifier(Modifier::ITALIC),
            )),
        ];
        let rect = Rect::new(padded.x, padded.bottom() - 5, padded.width, 3);
        frame.render_widget(
            Paragraph::new(bottom_right).alignment(Alignment::Right),
            rect,
        );
    }

    if area.height > 1 {
        let hint = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled("SCROLL ↓", theme.text_secondary_style()))
                .alignment(Alignment::Center),
            hint,
        );
    }
}

/// "MADE FOR TRADERS" heading, shown once the section is in view.
fn render_heading(frame: &mut Frame, area: Rect, in_view: bool, theme: &Theme) {
    if !in_view {
        return;
    }
    let lines = vec![
        Line::from(Span::styled("02 — INTUITIVE", theme.text_secondary_style())),
        Line::from(""),
        Line::from(Span::styled("MADE", theme.text_style())),
        Line::from(Span::styled("FOR", theme.text_style())),
        Line::from(Span::styled(
            "TRADERS",
            theme.text_style().add_modifier(Modifier::ITALIC),
        )),
    ];
    let height = (lines.len() as u16).min(area.height);
    let y = area.y + (area.height - height) / 2;
    let rect = Rect::new(area.x + 4.min(area.width), y, area.width.saturating_sub(4), height);
    frame.render_widget(Paragraph::new(lines), rect);
}

/// The terminal window: title bar plus the active phase.
pub fn render_window(frame: &mut Frame, window: WindowLayout, view: &View, theme: &Theme) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.terminal_bg)),
        window.frame,
    );
    render_title_bar(frame, window.title_bar, &view.terminal.title, theme);

    let body = window.body;
    if body.width == 0 || body.height == 0 {
        return;
    }
    match view.state.phase {
        Phase::NotStarted => {}
        Phase::Typing => {
            frame.render_widget(Paragraph::new(typing_line(view, theme)), body);
        }
        Phase::Menu => render_menu(frame, body, view, theme),
        Phase::Monitor => render_monitor(frame, body, view.monitor, theme),
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let bar = Style::default().bg(theme.title_bar_bg);
    frame.render_widget(Block::default().style(bar), area);
    frame.render_widget(
        Paragraph::new(Span::styled(title.to_string(), theme.text_secondary_style()))
            .alignment(Alignment::Center),
        area,
    );
    let dots = Line::from(vec![
        Span::raw(" "),
        Span::styled("●", Style::default().fg(theme.error)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(theme.accent)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(theme.success)),
    ]);
    frame.render_widget(Paragraph::new(dots), area);
}

/// Prompt, typed prefix and the blinking block cursor.
pub fn typing_line<'a>(view: &View<'a>, theme: &Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled(format!("{} ", view.terminal.prompt), Style::default().fg(theme.success)),
        Span::styled(view.state.typed_prefix.as_str(), theme.text_style()),
    ];
    if view.state.cursor_visible {
        spans.push(Span::styled(CURSOR, theme.text_style()));
    }
    Line::from(spans)
}

fn render_menu(frame: &mut Frame, body: Rect, view: &View, theme: &Theme) {
    let elapsed = view.phase_elapsed;
    let mut lines: Vec<Line> = Vec::with_capacity(MENU_HEADER_ROWS as usize + view.menu.len());

    if entrance::header_visible(elapsed) {
        lines.push(Line::from(Span::styled(
            view.terminal.banner.as_str(),
            theme.accent_bold_style(),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            view.terminal.question.as_str(),
            theme.text_secondary_style().add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    } else {
        lines.extend((0..MENU_HEADER_ROWS).map(|_| Line::from("")));
    }

    let shown = entrance::visible_items(elapsed, view.menu.len());
    for (index, item) in view.menu.items().iter().enumerate().take(shown) {
        lines.push(menu_item_line(item, index, view.state, theme));
    }
    frame.render_widget(Paragraph::new(lines), body);

    let rows_needed = MENU_HEADER_ROWS + view.menu.len() as u16 + 3;
    if entrance::legend_visible(elapsed) && body.height >= rows_needed {
        let rule = Rect::new(body.x, body.bottom() - 2, body.width, 1);
        let legend = Rect::new(body.x, body.bottom() - 1, body.width, 1);
        frame.render_widget(
            Paragraph::new("─".repeat(body.width as usize))
                .style(Style::default().fg(theme.border)),
            rule,
        );
        frame.render_widget(Paragraph::new(legend_line(theme)), legend);
    }
}

/// One menu row: marker, icon, label and optional badge.
///
/// The marker shows only on the selected row, and only while the blink
/// timer is in its "on" phase.
pub fn menu_item_line<'a>(
    item: &'a MenuItem,
    index: usize,
    state: &TerminalState,
    theme: &Theme,
) -> Line<'a> {
    let selected = state.selected_index == index;
    let marker = if state.marker_visible(index) { MARKER } else { " " };
    let label_style = if selected {
        theme.accent_style()
    } else {
        theme.text_style()
    };

    let mut spans = vec![
        Span::styled(format!("{} ", marker), theme.accent_style()),
        Span::raw(format!("{} ", item.icon)),
        Span::styled(item.label.as_str(), label_style),
    ];
    if let Some(badge) = &item.badge {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!(" {} ", badge), theme.badge_style()));
    }
    Line::from(spans)
}

/// Key-binding legend with accented keys.
pub fn legend_line(theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(LEGEND.len() * 3);
    for (i, (key, desc)) in LEGEND.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("    "));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(" {}", desc),
            theme.text_secondary_style(),
        ));
    }
    Line::from(spans)
}

fn render_monitor(frame: &mut Frame, body: Rect, monitor: &MonitorView, theme: &Theme) {
    let header = vec![
        Line::from(Span::styled(MonitorView::TITLE, theme.accent_bold_style())),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(theme.success)),
            Span::styled(MonitorView::STATUS, theme.text_secondary_style()),
        ]),
    ];
    frame.render_widget(Paragraph::new(header), body);

    // Header (2 rows) + gap, tiles, gap, back link.
    let grid_height = body.height.saturating_sub(5).min(8);
    if grid_height >= 2 {
        let grid = Rect::new(body.x, body.y + 3, body.width, grid_height);
        render_tiles(frame, grid, &monitor.tiles(), theme);
    }

    if let Some(back) = back_link(body, back_label_width()) {
        frame.render_widget(
            Paragraph::new(Span::styled(
                MonitorView::BACK_LABEL,
                theme.accent_style(),
            )),
            back,
        );
    }
}

/// 2x2 grid of bordered metric tiles.
fn render_tiles(frame: &mut Frame, grid: Rect, tiles: &[Tile; 4], theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(grid);

    for (row_idx, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        for (col_idx, cell) in cols.iter().enumerate() {
            let tile = &tiles[row_idx * 2 + col_idx];
            let content = vec![
                Line::from(Span::styled(tile.label, theme.text_secondary_style())),
                Line::from(Span::styled(tile.value.as_str(), theme.tone_style(tile.tone))),
            ];
            frame.render_widget(
                Paragraph::new(content).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.border)),
                ),
                *cell,
            );
        }
    }
}

/// Shrink `area` by `dx` columns and `dy` rows on each side.
fn inset(area: Rect, dx: u16, dy: u16) -> Rect {
    let dx = dx.min(area.width / 2);
    let dy = dy.min(area.height / 2);
    Rect::new(
        area.x + dx,
        area.y + dy,
        area.width - 2 * dx,
        area.height - 2 * dy,
    )
}
