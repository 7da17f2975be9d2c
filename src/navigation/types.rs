/// A step through the section list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// Vertical swipe as reported by the gesture classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeKind {
    /// Pointer moved up; reveals the next section.
    SwipeUp,
    /// Pointer moved down; reveals the previous section.
    SwipeDown,
}

/// The only keys the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
}

/// Direction tag placed on the outgoing section while it animates away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionTag {
    Next,
    Prev,
}

impl TransitionTag {
    pub fn class_name(&self) -> &'static str {
        match self {
            TransitionTag::Next => "section--next",
            TransitionTag::Prev => "section--prev",
        }
    }
}

/// Every UI surface that carries an active marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The always-visible rail beside the content.
    SideNav,
    /// The overlay navigation list.
    OuterNav,
    /// The content panel's list of sections.
    Content,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::SideNav, Surface::OuterNav, Surface::Content];
}

/// Outcome of a section change, returned to the caller for logging and redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    /// `None` for the wraparound pair `(last, 0)` / `(0, last)`.
    pub tag: Option<TransitionTag>,
    pub cta_visible: bool,
}
