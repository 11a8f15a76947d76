use super::brand;
use crate::app::{App, Page};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
};

pub fn render_bar(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(inner);

    let mut brand_spans = vec![Span::raw(" ")];
    brand_spans.extend(brand(Color::White));
    frame.render_widget(Paragraph::new(Line::from(brand_spans)), chunks[0]);

    if app.is_compact() {
        let toggle = if app.state.menu_open { "✕ close [m]" } else { "☰ menu [m]" };
        let hint = Paragraph::new(Span::styled(toggle, Style::default().fg(Color::White)))
            .alignment(Alignment::Right);
        frame.render_widget(hint, chunks[1]);
        return;
    }

    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(page.label().to_uppercase()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.state.current_page.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("  ");
    frame.render_widget(tabs, chunks[1]);
}

/// Dropdown with the four pages, shown in the compact layout.
pub fn render_menu(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = Page::ALL
        .iter()
        .map(|page| {
            let style = if *page == app.state.current_page {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Span::styled(page.label().to_uppercase(), style))
        })
        .collect();

    let menu = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(Some(app.menu_cursor));
    frame.render_stateful_widget(menu, area, &mut state);
}
