use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::navigation::types::Surface;

pub mod layout;
pub mod modal;
pub mod sections;

use layout::{LayoutContext, CTA_LABEL, TOGGLE_LABEL};

/// Renders the entire UI of the application.
pub fn render(frame: &mut Frame, app: &App) {
    let layout = LayoutContext::new(frame.area());

    // Set background color for the entire frame
    frame.render_widget(
        Block::default().style(Style::default().bg(app.config.theme.base_color())),
        frame.area(),
    );

    render_header(frame, app, &layout);
    render_side_nav(frame, app, layout.side_nav_area());
    sections::render_content(frame, app, &layout);
    render_status_bar(frame, app, layout.status_area());

    if app.overlay_open() {
        modal::render_outer_nav(frame, app, &layout);
    }
}

fn render_header(frame: &mut Frame, app: &App, layout: &LayoutContext) {
    let theme = &app.config.theme;
    let header_style = Style::default()
        .fg(theme.text_color())
        .bg(theme.surface0_color());

    frame.render_widget(Block::default().style(header_style), layout.header_area());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " G4M4",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .style(header_style),
        layout.title_area(),
    );

    // The CTA is hidden on the first and last sections.
    if app.cta_visible() {
        frame.render_widget(
            Paragraph::new(CTA_LABEL).style(header_style.fg(theme.cta_color())),
            layout.cta_area(),
        );
    }

    let toggle_style = if app.overlay_open() {
        header_style.fg(theme.active_color())
    } else {
        header_style
    };
    frame.render_widget(Paragraph::new(TOGGLE_LABEL).style(toggle_style), layout.toggle_area());
}

fn render_side_nav(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.config.theme;
    let items: Vec<ListItem> = app
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            if app.navigator.is_active(Surface::SideNav, index) {
                ListItem::new(Line::from(vec![
                    Span::styled("> ", Style::default().fg(theme.active_color())),
                    Span::styled(
                        section.title.as_str(),
                        Style::default()
                            .fg(theme.active_color())
                            .add_modifier(Modifier::BOLD),
                    ),
                ]))
            } else {
                ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(section.title.as_str(), Style::default().fg(theme.subtext0_color())),
                ]))
            }
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).style(
        Style::default()
            .fg(theme.text_color())
            .bg(theme.surface0_color()),
    );
    frame.render_widget(List::new(items).block(block), area);
}

/// Renders the status bar at the bottom of the UI.
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let position = format!("{}/{}", app.current() + 1, app.sections.len());
    let status = Line::from(format!(
        " {} | {} | j/k scroll  m menu  c contact  q quit",
        position,
        app.status_message.as_deref().unwrap_or("")
    ));

    frame.render_widget(
        Paragraph::new(status).style(
            Style::default()
                .fg(app.config.theme.text_color())
                .bg(app.config.theme.surface0_color()),
        ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::SectionList;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn cta_appears_only_between_edges() {
        let mut app = App::with_sections(Config::default(), SectionList::default());
        assert!(!screen(&app).contains("Contact us ]"));

        app.key_up(crate::navigation::ArrowKey::Down, Instant::now());
        assert!(screen(&app).contains(CTA_LABEL));
    }

    #[test]
    fn overlay_lists_every_section() {
        let mut app = App::with_sections(Config::default(), SectionList::default());
        app.toggle_overlay();
        let text = screen(&app);
        assert!(text.contains("Menu"));
        assert!(text.contains("5 Contact us"));
    }
}
