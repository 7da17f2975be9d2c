//! `navigator.rs` - The single source of truth for which section is on screen.
use std::time::Instant;

use crate::navigation::scroll_gate::ScrollGate;
use crate::navigation::types::{ArrowKey, Step, Surface, SwipeKind, Transition, TransitionTag};

pub const DEFAULT_WHEEL_THRESHOLD: i32 = 50;

/// Drives the active section index from wheel, swipe, keyboard and click input.
///
/// Views never report position back; they read [`SectionNavigator::current`]
/// and [`SectionNavigator::is_active`] and render from that.
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    len: usize,
    current: usize,
    gate: ScrollGate,
    wheel_threshold: i32,
    overlay_open: bool,
    cta_visible: bool,
    outgoing: Option<(usize, TransitionTag)>,
}

impl SectionNavigator {
    /// Panics when `len` is zero; the section list is validated at load time.
    pub fn new(len: usize, gate: ScrollGate, wheel_threshold: i32) -> Self {
        assert!(len > 0, "navigator needs at least one section");
        Self {
            len,
            current: 0,
            gate,
            wheel_threshold: wheel_threshold.abs(),
            overlay_open: false,
            cta_visible: false,
            outgoing: None,
        }
    }

    pub fn with_defaults(len: usize) -> Self {
        Self::new(len, ScrollGate::default(), DEFAULT_WHEEL_THRESHOLD)
    }

    pub fn section_count(&self) -> usize {
        self.len
    }

    pub fn last_index(&self) -> usize {
        self.len - 1
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn cta_visible(&self) -> bool {
        self.cta_visible
    }

    /// The section currently animating out and its direction tag.
    pub fn outgoing(&self) -> Option<(usize, TransitionTag)> {
        self.outgoing
    }

    pub fn tag_for(&self, index: usize) -> Option<TransitionTag> {
        match self.outgoing {
            Some((outgoing, tag)) if outgoing == index => Some(tag),
            _ => None,
        }
    }

    /// Drops the direction tag once the view has finished animating.
    pub fn clear_transition(&mut self) {
        self.outgoing = None;
    }

    pub fn gate(&self) -> &ScrollGate {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut ScrollGate {
        &mut self.gate
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn set_overlay_open(&mut self, open: bool) {
        self.overlay_open = open;
    }

    pub fn toggle_overlay(&mut self) {
        self.overlay_open = !self.overlay_open;
    }

    /// All surfaces derive their marker from the same index, so they cannot disagree.
    pub fn is_active(&self, _surface: Surface, index: usize) -> bool {
        index == self.current
    }

    pub fn active_markers(&self, surface: Surface) -> Vec<bool> {
        (0..self.len).map(|i| self.is_active(surface, i)).collect()
    }

    /// Wheel input, already normalized to a signed delta (positive scrolls down).
    pub fn on_wheel(&mut self, delta: i32, now: Instant) -> Option<Transition> {
        if self.overlay_open {
            return None;
        }
        let step = if delta > self.wheel_threshold {
            Step::Forward
        } else if delta < -self.wheel_threshold {
            Step::Backward
        } else {
            return None;
        };
        if !self.gate.try_pass(now) {
            return None;
        }
        Some(self.advance(step))
    }

    /// Swipes are pre-filtered by the classifier, so there is no dead zone here.
    pub fn on_swipe(&mut self, kind: SwipeKind, now: Instant) -> Option<Transition> {
        if !self.gate.try_pass(now) {
            return None;
        }
        let step = match kind {
            SwipeKind::SwipeUp => Step::Forward,
            SwipeKind::SwipeDown => Step::Backward,
        };
        Some(self.advance(step))
    }

    pub fn on_key_up(&mut self, key: ArrowKey) -> Option<Transition> {
        if self.overlay_open {
            return None;
        }
        let step = match key {
            ArrowKey::Down => Step::Forward,
            ArrowKey::Up => Step::Backward,
        };
        Some(self.advance(step))
    }

    /// Jumps to `target`. Panics when `target` is out of range: callers only
    /// ever produce indices of rendered nav items.
    pub fn on_nav_item_click(&mut self, target: usize) -> Option<Transition> {
        assert!(
            target < self.len,
            "nav item {} out of range for {} sections",
            target,
            self.len
        );
        if target == self.current {
            return None;
        }
        Some(self.transition_to(self.current, target))
    }

    pub fn on_cta_click(&mut self) -> Transition {
        self.transition_to(self.current, self.last_index())
    }

    fn advance(&mut self, step: Step) -> Transition {
        let last = self.last_index();
        let next = match step {
            Step::Forward if self.current == last => 0,
            Step::Forward => self.current + 1,
            Step::Backward if self.current == 0 => last,
            Step::Backward => self.current - 1,
        };
        self.transition_to(self.current, next)
    }

    fn transition_to(&mut self, prev: usize, next: usize) -> Transition {
        let last = self.last_index();
        self.current = next;

        self.outgoing = None;
        let wraparound = (prev == last && next == 0) || (prev == 0 && next == last);
        let tag = if wraparound {
            None
        } else if prev < next {
            Some(TransitionTag::Next)
        } else {
            Some(TransitionTag::Prev)
        };
        self.outgoing = tag.map(|tag| (prev, tag));

        self.cta_visible = next != 0 && next != last;

        Transition {
            from: prev,
            to: next,
            tag,
            cta_visible: self.cta_visible,
        }
    }
}
