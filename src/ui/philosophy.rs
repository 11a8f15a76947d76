use crate::app::{App, TWO_COLUMN_WIDTH};
use crate::content::{CORE_VALUES, PHILOSOPHY_PARAGRAPHS, PHILOSOPHY_QUOTE};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

fn text_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "THE ART OF",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "SELF-MASTERY",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for paragraph in PHILOSOPHY_PARAGRAPHS {
        lines.push(Line::from(Span::styled(paragraph, Style::default().fg(Color::Gray))));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("┃ ", Style::default().fg(Color::Cyan)),
        Span::styled(
            PHILOSOPHY_QUOTE,
            Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
        ),
    ]));
    lines
}

/// Rows the text column needs once wrapped at a terminal `width`.
pub(super) fn text_height(width: u16) -> u16 {
    let column = if width < TWO_COLUMN_WIDTH {
        u32::from(width)
    } else {
        u32::from(width) * 55 / 100
    };
    let column = column.max(1) as usize;
    text_lines()
        .iter()
        .map(|line| line.width().div_ceil(column).max(1) as u16)
        .sum()
}

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(text_lines())
        .wrap(Wrap { trim: true })
        .scroll((app.page_scroll, 0));

    let values: Vec<ListItem> = CORE_VALUES
        .iter()
        .map(|value| {
            ListItem::new(Line::from(vec![
                Span::styled("  ◆ ", Style::default().fg(Color::Cyan)),
                Span::styled(*value, Style::default().fg(Color::White)),
            ]))
        })
        .collect();
    let values = List::new(values).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" CORE VALUES "),
    );

    if area.width < TWO_COLUMN_WIDTH {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(CORE_VALUES.len() as u16 + 2),
            ])
            .split(area);
        frame.render_widget(text, chunks[0]);
        frame.render_widget(values, chunks[1]);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CORE_VALUES.len() as u16 + 2),
                Constraint::Min(0),
            ])
            .split(chunks[1]);
        frame.render_widget(text, chunks[0]);
        frame.render_widget(values, side[0]);
    }
}
