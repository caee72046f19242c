//! Input mapping.
//!
//! Translates crossterm key and mouse events into page actions or
//! simulation events. Keyboard navigation in the menu emits the same
//! `HoverChanged` / `Activated` events the pointer does.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::layout::Hit;
use super::page::WHEEL_STEP;
use crate::sim::{Event, MenuController, Phase, TerminalState};

/// What the app loop should do with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application
    Quit,
    /// Scroll the page by rows
    Scroll(i32),
    /// Scroll by half a viewport (sign gives the direction)
    ScrollPage(i32),
    ScrollToTop,
    ScrollToSection,
    /// Feed an event to the state machine
    Dispatch(Event),
    /// Nothing to do
    Ignore,
}

/// Map a key press.
pub fn map_key(key: KeyEvent, state: &TerminalState, menu: &MenuController) -> Action {
    match key.code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Action::Quit,
        KeyCode::PageDown | KeyCode::Char(' ') => return Action::ScrollPage(1),
        KeyCode::PageUp => return Action::ScrollPage(-1),
        KeyCode::Home => return Action::ScrollToTop,
        KeyCode::End => return Action::ScrollToSection,
        _ => {}
    }

    match state.phase {
        Phase::Menu => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::Dispatch(Event::HoverChanged(
                menu.previous_index(state.selected_index),
            )),
            KeyCode::Down | KeyCode::Char('j') => {
                Action::Dispatch(Event::HoverChanged(menu.next_index(state.selected_index)))
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                Action::Dispatch(Event::Activated(state.selected_index))
            }
            _ => Action::Ignore,
        },
        Phase::Monitor => match key.code {
            KeyCode::Esc
            | KeyCode::Left
            | KeyCode::Backspace
            | KeyCode::Char('h')
            | KeyCode::Char('b') => Action::Dispatch(Event::BackRequested),
            _ => Action::Ignore,
        },
        Phase::NotStarted | Phase::Typing => match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::Scroll(1),
            KeyCode::Up | KeyCode::Char('k') => Action::Scroll(-1),
            _ => Action::Ignore,
        },
    }
}

/// Map a mouse event, given what (if anything) is under the pointer.
pub fn map_mouse(mouse: MouseEvent, hit: Option<Hit>) -> Action {
    match (mouse.kind, hit) {
        (MouseEventKind::ScrollDown, _) => Action::Scroll(WHEEL_STEP),
        (MouseEventKind::ScrollUp, _) => Action::Scroll(-WHEEL_STEP),
        (MouseEventKind::Moved | MouseEventKind::Drag(_), Some(Hit::MenuRow(idx))) => {
            Action::Dispatch(Event::HoverChanged(idx))
        }
        (MouseEventKind::Down(MouseButton::Left), Some(Hit::MenuRow(idx))) => {
            Action::Dispatch(Event::Activated(idx))
        }
        (MouseEventKind::Down(MouseButton::Left), Some(Hit::Back)) => {
            Action::Dispatch(Event::BackRequested)
        }
        _ => Action::Ignore,
    }
}
