use crate::catalog::{Difficulty, SkillRecord};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Beginner => Color::Green,
        Difficulty::Intermediate => Color::Yellow,
        Difficulty::Advanced => Color::Red,
        Difficulty::Elite | Difficulty::GodTier => Color::Magenta,
    }
}

pub fn level_gauge(skill: &SkillRecord) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(skill.level_percent().min(100))
        .label(format!("LVL {}", skill.level))
}

/// One skill card: badge, title, two lines of description, level bar.
pub fn render(skill: &SkillRecord, focused: bool, frame: &mut Frame, area: Rect) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(inner);

    let width = inner.width as usize;
    let badge = Line::from(vec![
        Span::styled(
            format!(" {} ", skill.difficulty.label().to_uppercase()),
            Style::default()
                .fg(Color::Black)
                .bg(difficulty_color(skill.difficulty))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", skill.category.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(badge), chunks[0]);

    let marker = if focused { "▸ " } else { "" };
    let title = Paragraph::new(Span::styled(
        truncate_str(&format!("{}{}", marker, skill.title.to_uppercase()), width),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    ));
    frame.render_widget(title, chunks[1]);

    let description = Paragraph::new(truncate_str(&skill.description, width * 2))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(description, chunks[2]);

    frame.render_widget(level_gauge(skill), chunks[3]);
}

/// Truncate a string to `max_width` display columns, adding "…" if truncated.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut result = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        result.push(c);
    }
    if max_width > 0 {
        result.push('…');
    }
    result
}
