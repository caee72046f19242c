//! Integration tests for rendering the showcase into a test backend

use std::time::Duration;

use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use super::helpers::{buffer_text, ms};
use wisp_term::sim::Phase;
use wisp_term::theme::Theme;
use wisp_term::tui::Showcase;
use wisp_term::Config;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 30;

fn viewport() -> Rect {
    Rect::new(0, 0, WIDTH, HEIGHT)
}

fn showcase(autostart: bool) -> Showcase {
    let mut config = Config::default();
    config.page.autostart = autostart;
    Showcase::with_theme(config, Theme::ansi())
}

fn draw(showcase: &Showcase) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| showcase.render(f)).unwrap();
    buffer_text(&terminal)
}

fn press(app: &mut Showcase, code: KeyCode) {
    let key = TermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));
    assert!(app.handle_event(key, viewport()));
}

fn at(app: &mut Showcase, elapsed: Duration) {
    app.tick(elapsed, viewport());
}

#[test]
fn intro_is_shown_before_scrolling() {
    let mut app = showcase(false);
    at(&mut app, Duration::ZERO);
    let screen = draw(&app);

    assert!(screen.contains("SYSTEM"));
    assert!(screen.contains("SCROLL ↓"));
    assert!(!screen.contains("TRADERS"));
    assert_eq!(app.machine().state().phase, Phase::NotStarted);
}

#[test]
fn typing_phase_shows_prompt_and_prefix() {
    let mut app = showcase(true);
    at(&mut app, Duration::ZERO);
    at(&mut app, ms(700));
    let screen = draw(&app);

    assert!(screen.contains("wisp — terminal"));
    assert!(screen.contains("$ wis"));
    assert!(!screen.contains("$ wisp"));
    assert!(screen.contains("TRADERS"));
}

#[test]
fn menu_fades_in_item_by_item() {
    let mut app = showcase(true);
    at(&mut app, Duration::ZERO);
    at(&mut app, ms(2_000 + 350));
    let screen = draw(&app);
    assert!(screen.contains("WISP CLI v0.1.0"));
    assert!(screen.contains("Strategies"));
    assert!(!screen.contains("Monitor"));
    assert!(!screen.contains("Navigate"));

    at(&mut app, ms(2_000 + 1_000));
    let screen = draw(&app);
    assert!(screen.contains("Monitor"));
    assert!(screen.contains("Create New Project"));
    assert!(screen.contains("NEW"));
    assert!(screen.contains("↑↓/jk Navigate    → Select    q Quit"));
}

#[test]
fn monitor_panel_and_back_link() {
    let mut app = showcase(true);
    at(&mut app, Duration::ZERO);
    at(&mut app, ms(3_000));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    let screen = draw(&app);
    assert!(screen.contains("Live Monitor"));
    assert!(screen.contains("Connected to feed"));
    assert!(screen.contains("+$2,347.50"));
    assert!(screen.contains("68.3%"));
    assert!(screen.contains("Back to menu"));

    // Back on the menu the entrance plays again.
    press(&mut app, KeyCode::Esc);
    at(&mut app, ms(3_500));
    let screen = draw(&app);
    assert!(screen.contains("Strategies"));
    assert!(!screen.contains("Live Monitor"));
}

#[test]
fn custom_command_is_typed() {
    let mut config = Config::default();
    config.page.autostart = true;
    config.terminal.command = "wisp dev".to_string();
    let mut app = Showcase::with_theme(config, Theme::ansi());

    at(&mut app, Duration::ZERO);
    at(&mut app, ms(400 + 7 * 150));
    assert!(draw(&app).contains("$ wisp dev"));
    assert_eq!(app.machine().state().phase, Phase::Typing);
}
