use super::card::{difficulty_color, level_gauge};
use super::centered_rect;
use crate::app::{App, TWO_COLUMN_WIDTH};
use crate::catalog::SkillRecord;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Progression chips leading up to the skill, plus a teaser if it unlocks more.
pub fn progression_path(skill: &SkillRecord) -> Line<'_> {
    let arrow = || Span::styled(" › ", Style::default().fg(Color::DarkGray));
    let mut spans = Vec::new();
    for step in &skill.progression {
        spans.push(Span::styled(format!("[{}]", step), Style::default().fg(Color::Gray)));
        spans.push(arrow());
    }
    spans.push(Span::styled(
        format!("[{}]", skill.title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));
    if !skill.unlocks.is_empty() {
        spans.push(arrow());
        spans.push(Span::styled("[???]", Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

fn section(title: &str, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        title.to_uppercase(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// Detail overlay for the selected skill, layered above the page.
pub fn render(app: &App, skill: &SkillRecord, frame: &mut Frame) {
    let area = centered_rect(90, 90, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", skill.title.to_uppercase()))
        .title_bottom(
            Line::from(" Esc close · ↑↓ scroll · t tutorial ")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (side_area, content_area) = if inner.width >= TWO_COLUMN_WIDTH {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(inner);
        (columns[0], columns[1])
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(inner);
        (rows[0], rows[1])
    };

    render_side(skill, frame, side_area);
    render_content(app, skill, frame, content_area);
}

fn render_side(skill: &SkillRecord, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    frame.render_widget(level_gauge(skill), chunks[0]);

    let meta = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", skill.difficulty.label().to_uppercase()),
                Style::default()
                    .fg(Color::Black)
                    .bg(difficulty_color(skill.difficulty))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                skill.category.label().to_uppercase(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(skill.description.as_str(), Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Image: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                skill.image.as_str(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(meta, chunks[1]);
}

fn render_content(app: &App, skill: &SkillRecord, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        section("Skill tree path", Color::DarkGray),
        progression_path(skill),
        Line::from(""),
        section("Execution", Color::Cyan),
    ];
    for (i, step) in skill.steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:>2}. ", i + 1),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(step.as_str(), Style::default().fg(Color::Gray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section("Unlocks", Color::Yellow));
    lines.push(Line::from(Span::styled(
        "Master this skill and you are ready for:",
        Style::default().fg(Color::DarkGray),
    )));
    for unlock in &skill.unlocks {
        lines.push(Line::from(vec![
            Span::styled("  ⚡ ", Style::default().fg(Color::Yellow)),
            Span::styled(unlock.as_str(), Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " ▶ START TUTORIAL [t] ",
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    )));

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0))
        .block(Block::default().borders(Borders::LEFT).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(content, area);
}
