use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::content::{ContactLink, ExperienceEntry, SectionBody, Service};
use crate::navigation::slider::SlotPosition;
use crate::navigation::types::TransitionTag;
use crate::theme::Theme;
use crate::ui::layout::{LayoutContext, SLIDER_NEXT_LABEL, SLIDER_PREV_LABEL};

/// Renders the active section into the content panel.
pub fn render_content(frame: &mut Frame, app: &App, layout: &LayoutContext) {
    let area = layout.content_area();
    let theme = &app.config.theme;
    let Some(section) = app.current_section() else {
        return;
    };

    let mut block = Block::default()
        .title(Span::styled(
            format!(" {} ", section.title),
            Style::default()
                .fg(theme.active_color())
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .style(Style::default().fg(theme.text_color()).bg(theme.base_color()));

    if let Some(line) = outgoing_line(app, theme) {
        block = block.title_top(line.alignment(Alignment::Right));
    }

    let lines = match &section.body {
        SectionBody::Intro { headline, tagline } => intro_lines(headline, tagline, theme),
        SectionBody::Services { items } => service_lines(items, theme),
        SectionBody::Experience { entries } => experience_lines(entries, app, theme),
        SectionBody::Skills { items } => items
            .iter()
            .map(|item| Line::from(format!("  - {}", item)))
            .collect(),
        SectionBody::Contacts { links } => contact_lines(links, theme),
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );

    if matches!(section.body, SectionBody::Experience { .. }) {
        render_slider_controls(frame, layout, theme);
    }
}

/// Names the section that is animating away, colored by direction.
fn outgoing_line<'a>(app: &'a App, theme: &Theme) -> Option<Line<'a>> {
    let (index, tag) = app.navigator.outgoing()?;
    let section = app.sections.get(index)?;
    let (arrow, color) = match tag {
        TransitionTag::Next => ("^", theme.transition_next_color()),
        TransitionTag::Prev => ("v", theme.transition_prev_color()),
    };
    Some(Line::from(Span::styled(
        format!(" {} {} ", arrow, section.title),
        Style::default().fg(color),
    )))
}

fn intro_lines<'a>(headline: &'a str, tagline: &'a str, theme: &Theme) -> Vec<Line<'a>> {
    vec![
        Line::default(),
        Line::from(Span::styled(
            headline,
            Style::default()
                .fg(theme.text_color())
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(tagline, Style::default().fg(theme.subtext0_color())))
            .alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            "scroll, swipe or use the arrow keys",
            Style::default().fg(theme.subtext1_color()),
        ))
        .alignment(Alignment::Center),
    ]
}

fn service_lines<'a>(items: &'a [Service], theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for service in items {
        lines.push(Line::from(Span::styled(
            service.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            service.subtitle.as_str(),
            Style::default().fg(theme.subtext1_color()),
        )));
        lines.push(Line::from(service.description.as_str()));
        lines.push(Line::default());
    }
    lines
}

fn experience_lines<'a>(
    entries: &'a [ExperienceEntry],
    app: &App,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for (slot, index) in app.slider.visible() {
        let Some(entry) = entries.get(index) else {
            continue;
        };
        let style = match slot {
            SlotPosition::Center => Style::default()
                .fg(theme.active_color())
                .add_modifier(Modifier::BOLD),
            SlotPosition::Left | SlotPosition::Right => {
                Style::default().fg(theme.subtext0_color())
            }
        };
        lines.push(Line::from(Span::styled(entry.title.as_str(), style)));
        if slot == SlotPosition::Center {
            lines.extend(
                entry
                    .highlights
                    .iter()
                    .map(|h| Line::from(format!("  - {}", h))),
            );
        }
        lines.push(Line::default());
    }
    lines
}

fn contact_lines<'a>(links: &'a [ContactLink], theme: &Theme) -> Vec<Line<'a>> {
    links
        .iter()
        .map(|link| {
            Line::from(vec![
                Span::styled(
                    format!("{:<10}", link.title),
                    Style::default().fg(theme.subtext0_color()),
                ),
                Span::styled(
                    link.text.as_str(),
                    Style::default()
                        .fg(theme.active_color())
                        .add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(
                    format!("  {}", link.href),
                    Style::default().fg(theme.subtext1_color()),
                ),
            ])
        })
        .collect()
}

fn render_slider_controls(frame: &mut Frame, layout: &LayoutContext, theme: &Theme) {
    let (prev, next) = layout.slider_controls();
    let style = Style::default().fg(theme.active_color());
    frame.render_widget(Paragraph::new(SLIDER_PREV_LABEL).style(style), prev);
    frame.render_widget(Paragraph::new(SLIDER_NEXT_LABEL).style(style), next);
}
