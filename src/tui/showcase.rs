//! The showcase application.
//!
//! Wires the simulation to the terminal: wall-clock time drives the
//! machine's timers, scrolling drives the visibility trigger, and input is
//! mapped to simulation events. The event loop sleeps until the next timer
//! deadline or input, whichever comes first.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event as TermEvent, KeyEventKind};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, info, warn};

use super::app::App;
use super::input::{map_key, map_mouse, Action};
use super::layout::{hit_test, terminal_window};
use super::page::Page;
use super::render::{back_label_width, render_page, View};
use crate::config::Config;
use crate::sim::{entrance, Event, Phase, ViewStateMachine};
use crate::theme::{current_theme, Theme};

pub struct Showcase {
    config: Config,
    machine: ViewStateMachine,
    page: Page,
    theme: Theme,
    dirty: Rc<Cell<bool>>,
}

impl Showcase {
    pub fn new(config: Config) -> Self {
        Self::with_theme(config, current_theme())
    }

    pub fn with_theme(config: Config, theme: Theme) -> Self {
        let mut machine = ViewStateMachine::new(config.script());
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        machine.subscribe(move |_| flag.set(true));

        Self {
            page: Page::new(&config.page),
            config,
            machine,
            theme,
            dirty,
        }
    }

    pub fn machine(&self) -> &ViewStateMachine {
        &self.machine
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Whether a redraw is pending; clears the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Advance time and re-check visibility.
    ///
    /// # Arguments
    /// * `elapsed` - Time since the showcase was mounted
    /// * `viewport` - Current terminal area
    pub fn tick(&mut self, elapsed: Duration, viewport: Rect) {
        if self.page.check_visibility(viewport) {
            info!(scroll = self.page.scroll(), "terminal section in view");
            self.dispatch(Event::VisibilityTriggered);
        }
        self.machine.advance_to(elapsed);

        // Entrance animation needs frames even without state changes.
        if self.machine.state().phase == Phase::Menu
            && self.machine.phase_elapsed()
                <= entrance::settled_after(self.machine.script().menu.len())
        {
            self.dirty.set(true);
        }
    }

    /// Handle a terminal event. Returns false when the app should quit.
    pub fn handle_event(&mut self, event: TermEvent, viewport: Rect) -> bool {
        let action = match event {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                map_key(key, self.machine.state(), &self.machine.script().menu)
            }
            TermEvent::Mouse(mouse) => {
                let hit = terminal_window(viewport, self.page.intro_rows(), self.page.scroll())
                    .and_then(|window| {
                        hit_test(
                            window.body,
                            self.machine.state().phase,
                            self.machine.script().menu.len(),
                            back_label_width(),
                            mouse.column,
                            mouse.row,
                        )
                    });
                map_mouse(mouse, hit)
            }
            TermEvent::Resize(_, _) => {
                self.dirty.set(true);
                Action::Ignore
            }
            _ => Action::Ignore,
        };
        self.handle_action(action, viewport)
    }

    /// Apply a mapped action. Returns false when the app should quit.
    pub fn handle_action(&mut self, action: Action, viewport: Rect) -> bool {
        let moved = match action {
            Action::Quit => return false,
            Action::Ignore => false,
            Action::Dispatch(event) => {
                self.dispatch(event);
                false
            }
            Action::Scroll(rows) => self.page.scroll_by(rows),
            Action::ScrollPage(direction) => {
                let half = i32::from(viewport.height / 2).max(1);
                self.page.scroll_by(direction.signum() * half)
            }
            Action::ScrollToTop => self.page.scroll_to_top(),
            Action::ScrollToSection => self.page.scroll_to_section(),
        };
        if moved {
            debug!(scroll = self.page.scroll(), "page scrolled");
            self.dirty.set(true);
        }
        true
    }

    fn dispatch(&mut self, event: Event) {
        if let Err(err) = self.machine.dispatch(event) {
            warn!(%err, "input ignored");
        }
    }

    /// Draw the current frame.
    pub fn render(&self, frame: &mut Frame) {
        let view = View::new(&self.machine, &self.config.terminal);
        render_page(
            frame,
            &view,
            &self.theme,
            self.page.intro_rows(),
            self.page.scroll(),
        );
    }

    /// Run the interactive loop until the user quits.
    #[cfg(not(tarpaulin_include))]
    pub fn run(mut self) -> Result<()> {
        let mut app = App::new()?;
        let frame = self.config.frame_interval();
        let start = Instant::now();
        info!("showcase started");

        loop {
            let viewport = app.area()?;
            self.tick(start.elapsed(), viewport);
            if self.take_dirty() {
                app.draw(|f| self.render(f))?;
            }

            let now = self.machine.now();
            let timeout = self
                .machine
                .next_deadline()
                .map(|deadline| deadline.saturating_sub(now))
                .unwrap_or(frame)
                .min(frame);

            if let Some(event) = app.poll_event(timeout)? {
                if !self.handle_event(event, viewport) {
                    break;
                }
            }
        }

        app.restore()?;
        self.machine.teardown();
        info!("showcase stopped");
        Ok(())
    }
}
