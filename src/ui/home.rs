use super::skills::render_grid;
use crate::app::{App, CARD_HEIGHT, TWO_COLUMN_WIDTH};
use crate::catalog::SkillRecord;
use crate::content::{HERO_BADGE, HERO_HEADLINE, HERO_TAGLINE};
use crate::registry;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

fn hero_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", HERO_BADGE.to_uppercase()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (i, part) in HERO_HEADLINE.iter().enumerate() {
        let color = if i == 1 { Color::Cyan } else { Color::White };
        lines.push(Line::from(Span::styled(
            *part,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        HERO_TAGLINE,
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            " [s] LEARN SKILLS ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(" [p] Philosophy ", Style::default().fg(Color::White)),
    ]));
    lines
}

fn render_hero(app: &App, frame: &mut Frame, area: Rect) {
    let hero = Paragraph::new(hero_lines())
        .wrap(Wrap { trim: true })
        .scroll((app.page_scroll, 0));

    if area.width < TWO_COLUMN_WIDTH {
        frame.render_widget(hero, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    frame.render_widget(hero, columns[0]);

    // Floating status chips next to the headline
    let chips = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("⚡ ", Style::default().fg(Color::Cyan)),
            Span::styled("CURRENT SKILL  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "Full Planche",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("🔥 ", Style::default().fg(Color::LightRed)),
            Span::styled("STATUS  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "God Mode",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
    ])
    .scroll((app.page_scroll, 0))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(chips, columns[1]);
}

/// Rows the hero takes before any scrolling.
pub(super) fn hero_height() -> u16 {
    hero_lines().len() as u16 + 2
}

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // The hero shrinks as the page scrolls; the featured row stays put.
    let hero_rows = hero_height().saturating_sub(app.page_scroll);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(hero_rows),
            Constraint::Length(1),
            Constraint::Min(CARD_HEIGHT),
        ])
        .split(area);

    render_hero(app, frame, chunks[0]);

    let heading = Line::from(vec![
        Span::styled(
            " FEATURED SKILLS",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ),
        Span::styled("   view all [v] ›", Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(heading), chunks[1]);

    let featured: Vec<&SkillRecord> = registry::featured(&app.catalog).iter().collect();
    let columns = if app.width >= TWO_COLUMN_WIDTH {
        featured.len().max(1)
    } else {
        1
    };
    render_grid(&featured, app.cursor, columns, frame, chunks[2]);
}
