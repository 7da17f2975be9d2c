use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::app::App;
use crate::input;
use crate::logging;
use crate::navigation::swipe::Gesture;
use crate::navigation::types::Surface;
use crate::ui;
use crate::ui::layout::{Hit, LayoutContext};

/// Poll timeout while no timer is pending.
const IDLE_TICK: Duration = Duration::from_millis(250);

pub struct Runner<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    app: App,
}

impl<'a, B: Backend> Runner<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, app: App) -> Self {
        Self { terminal, app }
    }

    pub async fn run(mut self) -> Result<(), io::Error> {
        loop {
            self.tick()?;

            if self.app.should_quit {
                return Ok(());
            }
        }
    }

    fn tick(&mut self) -> Result<(), io::Error> {
        self.app.tick(Instant::now());

        self.terminal.draw(|frame| ui::render(frame, &self.app))?;

        // Wake up for the next gate reopen or tag expiry even without input.
        let timeout = self
            .app
            .next_deadline()
            .map_or(IDLE_TICK, |deadline| {
                deadline.saturating_duration_since(Instant::now())
            });

        if !event::poll(timeout)? {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) => {
                self.handle_key(key);
                Ok(())
            }
            Event::Mouse(event) => self.handle_mouse(event),
            _ => Ok(()),
        }
    }

    /// Press stands in for key-up: most terminals never report releases.
    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if let Some(action) = self.app.config.keymap.get_action(key.code, key.modifiers) {
            self.app.handle_action(action, Instant::now());
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent) -> Result<(), io::Error> {
        let now = Instant::now();

        if let Some(delta) = input::terminal_wheel_delta(event.kind) {
            self.app.wheel(delta, now);
            return Ok(());
        }

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.app.swipe.press(event.column, event.row, now);
                Ok(())
            }
            MouseEventKind::Up(MouseButton::Left) => {
                match self.app.swipe.release(event.column, event.row, now) {
                    Gesture::Swipe(kind) => self.app.swipe(kind, now),
                    Gesture::Tap { column, row } => self.handle_click(column, row, now)?,
                    Gesture::None => {}
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn handle_click(&mut self, column: u16, row: u16, now: Instant) -> Result<(), io::Error> {
        let size = self.terminal.size()?;
        let layout = LayoutContext::new(Rect::new(0, 0, size.width, size.height));
        let hit = layout.locate(column, row, &self.app);
        if hit != Hit::None {
            logging::debug(&format!("Click at {},{} hit {:?}", column, row, hit));
        }

        match hit {
            Hit::SideNav(index) => self.app.click_nav_item(Surface::SideNav, index, now),
            Hit::OuterNav(index) => self.app.click_nav_item(Surface::OuterNav, index, now),
            Hit::Cta => self.app.click_cta(now),
            Hit::NavToggle => self.app.toggle_overlay(),
            Hit::OuterNavReturn => self.app.close_overlay(),
            Hit::SliderPrev => self.app.slide(false),
            Hit::SliderNext => self.app.slide(true),
            Hit::None => {}
        }
        Ok(())
    }
}
