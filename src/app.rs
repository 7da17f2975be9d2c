//! `app.rs` - Application state: content, navigator, and the bits of view state around it.
use std::time::Instant;

use crate::config::Config;
use crate::content::{Section, SectionList};
use crate::input::Action;
use crate::logging;
use crate::navigation::types::{ArrowKey, Surface, SwipeKind, Transition};
use crate::navigation::{ScrollGate, SectionNavigator, SwipeClassifier, WorkSlider};

pub struct App {
    pub config: Config,
    pub sections: SectionList,
    pub navigator: SectionNavigator,
    pub slider: WorkSlider,
    pub swipe: SwipeClassifier,
    pub status_message: Option<String>,
    pub should_quit: bool,
    transition_expires_at: Option<Instant>,
}

impl App {
    pub fn new() -> Self {
        let config = Config::new();
        let sections = config.load_sections();
        Self::with_sections(config, sections)
    }

    pub fn with_sections(config: Config, sections: SectionList) -> Self {
        let navigator = SectionNavigator::new(
            sections.len(),
            ScrollGate::new(config.scroll.gate_window()),
            config.scroll.wheel_threshold,
        );
        let slider = WorkSlider::new(
            sections
                .experience_index()
                .and_then(|i| sections.get(i))
                .map_or(0, Section::slider_len),
        );
        let swipe = SwipeClassifier::new(config.swipe);

        Self {
            config,
            sections,
            navigator,
            slider,
            swipe,
            status_message: None,
            should_quit: false,
            transition_expires_at: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn current(&self) -> usize {
        self.navigator.current()
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.sections.get(self.navigator.current())
    }

    pub fn cta_visible(&self) -> bool {
        self.navigator.cta_visible()
    }

    pub fn overlay_open(&self) -> bool {
        self.navigator.overlay_open()
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.quit(),
            Action::Arrow(key) => self.key_up(key, now),
            Action::NavItem(index) => {
                // digit keys past the last section have no nav item to click
                if index < self.sections.len() {
                    let surface = if self.overlay_open() {
                        Surface::OuterNav
                    } else {
                        Surface::SideNav
                    };
                    self.click_nav_item(surface, index, now);
                }
            }
            Action::Contact => self.click_cta(now),
            Action::ToggleOverlay => self.toggle_overlay(),
            Action::CloseOverlay => self.close_overlay(),
            Action::SliderPrev => self.slide(false),
            Action::SliderNext => self.slide(true),
        }
    }

    pub fn wheel(&mut self, delta: i32, now: Instant) {
        let transition = self.navigator.on_wheel(delta, now);
        self.record("wheel", transition, now);
    }

    pub fn swipe(&mut self, kind: SwipeKind, now: Instant) {
        let transition = self.navigator.on_swipe(kind, now);
        self.record("swipe", transition, now);
    }

    pub fn key_up(&mut self, key: ArrowKey, now: Instant) {
        let transition = self.navigator.on_key_up(key);
        self.record("key", transition, now);
    }

    /// Choosing an item on the overlay also dismisses it.
    pub fn click_nav_item(&mut self, surface: Surface, index: usize, now: Instant) {
        let transition = self.navigator.on_nav_item_click(index);
        self.record("nav", transition, now);
        if surface == Surface::OuterNav {
            self.close_overlay();
        }
    }

    pub fn click_cta(&mut self, now: Instant) {
        let transition = self.navigator.on_cta_click();
        self.record("cta", Some(transition), now);
    }

    pub fn toggle_overlay(&mut self) {
        self.navigator.toggle_overlay();
        logging::debug(&format!(
            "Outer navigation {}",
            if self.overlay_open() { "opened" } else { "closed" }
        ));
    }

    pub fn close_overlay(&mut self) {
        if self.overlay_open() {
            self.toggle_overlay();
        }
    }

    /// The slider only responds while its section is on screen.
    pub fn slide(&mut self, forward: bool) {
        if self.sections.experience_index() != Some(self.current()) {
            return;
        }
        if forward {
            self.slider.next();
        } else {
            self.slider.prev();
        }
    }

    /// Fires due timers: the scroll gate reopen and the transition tag expiry.
    pub fn tick(&mut self, now: Instant) {
        if self.navigator.gate_mut().poll(now) {
            logging::debug("Scroll gate reopened");
        }
        if self.transition_expires_at.is_some_and(|at| now >= at) {
            self.transition_expires_at = None;
            self.navigator.clear_transition();
        }
    }

    /// Earliest pending timer, used as the event poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.navigator.gate().next_deadline(), self.transition_expires_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn record(&mut self, source: &str, transition: Option<Transition>, now: Instant) {
        let Some(transition) = transition else {
            return;
        };
        logging::debug(&format!(
            "{} transition {} -> {} tag={} cta={}",
            source,
            transition.from,
            transition.to,
            transition.tag.map_or("none", |t| t.class_name()),
            transition.cta_visible
        ));
        self.transition_expires_at = transition
            .tag
            .map(|_| now + self.config.scroll.transition_duration());
        self.status_message = self
            .sections
            .get(transition.to)
            .map(|section| section.title.clone());
    }
}
