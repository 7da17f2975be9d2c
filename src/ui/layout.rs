use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders};
use std::rc::Rc;

use crate::app::App;
use crate::ui::modal::centered_rect;

pub const SIDE_NAV_WIDTH: u16 = 22;
pub const CTA_LABEL: &str = "[ Contact us ]";
pub const TOGGLE_LABEL: &str = "[=]";
pub const SLIDER_PREV_LABEL: &str = "< prev";
pub const SLIDER_NEXT_LABEL: &str = "next >";

/// What a click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    SideNav(usize),
    OuterNav(usize),
    Cta,
    NavToggle,
    /// Anywhere outside the open overlay.
    OuterNavReturn,
    SliderPrev,
    SliderNext,
    None,
}

pub struct LayoutContext {
    vertical_chunks: Rc<[Rect]>,
    header_chunks: Rc<[Rect]>,
    main_chunks: Rc<[Rect]>,
    overlay: Rect,
}

fn bordered_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

impl LayoutContext {
    pub fn new(root: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(ratatui::layout::Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(root);

        let header_chunks = Layout::default()
            .direction(ratatui::layout::Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(CTA_LABEL.len() as u16),
                Constraint::Length(1),
                Constraint::Length(TOGGLE_LABEL.len() as u16),
            ])
            .split(vertical_chunks[0]);

        let main_chunks = Layout::default()
            .direction(ratatui::layout::Direction::Horizontal)
            .constraints([Constraint::Length(SIDE_NAV_WIDTH), Constraint::Min(1)])
            .split(vertical_chunks[1]);

        Self {
            overlay: centered_rect(40, 60, root),
            vertical_chunks,
            header_chunks,
            main_chunks,
        }
    }

    pub fn header_area(&self) -> Rect {
        self.vertical_chunks[0]
    }

    pub fn title_area(&self) -> Rect {
        self.header_chunks[0]
    }

    pub fn cta_area(&self) -> Rect {
        self.header_chunks[1]
    }

    pub fn toggle_area(&self) -> Rect {
        self.header_chunks[3]
    }

    pub fn status_area(&self) -> Rect {
        self.vertical_chunks[2]
    }

    pub fn side_nav_area(&self) -> Rect {
        self.main_chunks[0]
    }

    pub fn content_area(&self) -> Rect {
        self.main_chunks[1]
    }

    pub fn overlay_area(&self) -> Rect {
        self.overlay
    }

    /// Bottom row of the content panel, split into the two slider controls.
    pub fn slider_controls(&self) -> (Rect, Rect) {
        let inner = bordered_inner(self.content_area());
        let row = inner.y + inner.height.saturating_sub(1);
        let prev_width = (SLIDER_PREV_LABEL.len() as u16).min(inner.width);
        let next_width = (SLIDER_NEXT_LABEL.len() as u16).min(inner.width);
        let prev = Rect::new(inner.x, row, prev_width, 1.min(inner.height));
        let next = Rect::new(
            inner.x + inner.width.saturating_sub(next_width),
            row,
            next_width,
            1.min(inner.height),
        );
        (prev, next)
    }

    pub fn locate(&self, column: u16, row: u16, app: &App) -> Hit {
        let position = Position::new(column, row);

        if app.overlay_open() {
            let inner = bordered_inner(self.overlay);
            if inner.contains(position) {
                return Self::hit_list(inner, position, app.sections.len())
                    .map_or(Hit::None, Hit::OuterNav);
            }
            if self.overlay.contains(position) {
                return Hit::None;
            }
            return Hit::OuterNavReturn;
        }

        if self.toggle_area().contains(position) {
            return Hit::NavToggle;
        }

        if app.cta_visible() && self.cta_area().contains(position) {
            return Hit::Cta;
        }

        let side_inner = bordered_inner(self.side_nav_area());
        if side_inner.contains(position) {
            return Self::hit_list(side_inner, position, app.sections.len())
                .map_or(Hit::None, Hit::SideNav);
        }

        if app.sections.experience_index() == Some(app.current()) {
            let (prev, next) = self.slider_controls();
            if prev.contains(position) {
                return Hit::SliderPrev;
            }
            if next.contains(position) {
                return Hit::SliderNext;
            }
        }

        Hit::None
    }

    /// One item per row from the top of `area`; rows past the last item miss.
    fn hit_list(area: Rect, position: Position, len: usize) -> Option<usize> {
        let index = position.y.saturating_sub(area.y) as usize;
        (index < len).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::SectionList;
    use std::time::Instant;

    fn setup() -> (LayoutContext, App) {
        let layout = LayoutContext::new(Rect::new(0, 0, 100, 30));
        let app = App::with_sections(Config::default(), SectionList::default());
        (layout, app)
    }

    #[test]
    fn side_nav_rows_map_to_items() {
        let (layout, app) = setup();
        let inner = bordered_inner(layout.side_nav_area());

        assert_eq!(layout.locate(inner.x, inner.y, &app), Hit::SideNav(0));
        assert_eq!(layout.locate(inner.x + 2, inner.y + 4, &app), Hit::SideNav(4));
        assert_eq!(layout.locate(inner.x, inner.y + 5, &app), Hit::None);
    }

    #[test]
    fn cta_only_hits_when_visible() {
        let (layout, mut app) = setup();
        let cta = layout.cta_area();
        assert_eq!(layout.locate(cta.x, cta.y, &app), Hit::None);

        app.key_up(crate::navigation::ArrowKey::Down, Instant::now());
        assert_eq!(layout.locate(cta.x, cta.y, &app), Hit::Cta);
    }

    #[test]
    fn toggle_is_top_right() {
        let (layout, app) = setup();
        assert_eq!(layout.locate(99, 0, &app), Hit::NavToggle);
    }

    #[test]
    fn open_overlay_captures_clicks() {
        let (layout, mut app) = setup();
        app.toggle_overlay();
        let inner = bordered_inner(layout.overlay_area());

        assert_eq!(layout.locate(inner.x, inner.y + 1, &app), Hit::OuterNav(1));
        assert_eq!(layout.locate(0, 29, &app), Hit::OuterNavReturn);
        // the toggle is underneath the overlay's dismiss area
        assert_eq!(layout.locate(99, 0, &app), Hit::OuterNavReturn);
    }

    #[test]
    fn slider_controls_only_on_experience() {
        let (layout, mut app) = setup();
        let (prev, next) = layout.slider_controls();
        assert_eq!(layout.locate(prev.x, prev.y, &app), Hit::None);

        app.click_nav_item(crate::navigation::Surface::SideNav, 2, Instant::now());
        assert_eq!(layout.locate(prev.x, prev.y, &app), Hit::SliderPrev);
        assert_eq!(layout.locate(next.x + 1, next.y, &app), Hit::SliderNext);
    }
}
