use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::app::App;
use crate::navigation::types::Surface;
use crate::ui::layout::LayoutContext;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// The outer navigation overlay. Clicking outside it returns to the page.
pub fn render_outer_nav(frame: &mut Frame, app: &App, layout: &LayoutContext) {
    let area = layout.overlay_area();
    let theme = &app.config.theme;

    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = app
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let style = if app.navigator.is_active(Surface::OuterNav, index) {
                Style::default()
                    .fg(theme.active_color())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_color())
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", index + 1), Style::default().fg(theme.subtext1_color())),
                Span::styled(section.title.as_str(), style),
            ]))
        })
        .collect();

    let block = Block::default()
        .title("Menu")
        .title_bottom("Esc to return")
        .borders(Borders::ALL)
        .style(
            Style::default()
                .fg(theme.text_color())
                .bg(theme.surface1_color()),
        );

    frame.render_widget(List::new(items).block(block), area);
}
