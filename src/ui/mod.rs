mod card;
mod detail;
mod help;
mod home;
mod nav;
mod philosophy;
mod skills;
mod workouts;

use crate::app::{App, Page};
use crate::content::{BRAND_LEFT, BRAND_RIGHT, FOOTER_COPYRIGHT, FOOTER_LINKS};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Top-level render dispatch: page layer, then overlay, then help.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let menu_height = if app.is_compact() && app.state.menu_open {
        Page::ALL.len() as u16 + 2
    } else {
        0
    };

    // Layout: nav(3) + menu + page(min) + footer(1) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(menu_height),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    nav::render_bar(app, frame, chunks[0]);
    if menu_height > 0 {
        nav::render_menu(app, frame, chunks[1]);
    }

    match app.state.current_page {
        Page::Home => home::render(app, frame, chunks[2]),
        Page::Skills => skills::render(app, frame, chunks[2]),
        Page::Workouts => workouts::render(app, frame, chunks[2]),
        Page::Philosophy => philosophy::render(app, frame, chunks[2]),
    }

    render_footer(frame, chunks[3]);
    render_status(app, frame, chunks[4]);

    if let Some(skill) = app.selected_skill() {
        detail::render(app, skill, frame);
    }

    if app.show_help {
        help::render(frame);
    }
}

/// Furthest `page_scroll` worth reaching on `page` at a terminal `width`.
/// Skills and Workouts keep their content in view through the focus cursor.
pub fn page_scroll_limit(page: Page, width: u16) -> u16 {
    match page {
        Page::Home => home::hero_height(),
        Page::Philosophy => philosophy::text_height(width).saturating_sub(1),
        Page::Skills | Page::Workouts => 0,
    }
}

/// Brand mark with the second half highlighted.
fn brand(accent: Color) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            BRAND_LEFT,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ),
        Span::styled(
            BRAND_RIGHT,
            Style::default()
                .fg(accent)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ),
    ]
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    spans.extend(brand(Color::White));
    spans.push(Span::styled(
        format!("   {}   ", FOOTER_COPYRIGHT),
        Style::default().fg(Color::DarkGray),
    ));
    spans.push(Span::styled(
        FOOTER_LINKS.join(" · "),
        Style::default().fg(Color::Gray),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hint(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = if app.selected_skill().is_some() {
        vec![
            key_hint(" ↑↓"),
            Span::raw(" Scroll  "),
            key_hint("Esc"),
            Span::raw(" Close  "),
        ]
    } else {
        let mut spans = vec![key_hint(" 1-4"), Span::raw(" Pages  ")];
        if app.is_compact() {
            spans.push(key_hint("m"));
            spans.push(Span::raw(" Menu  "));
        }
        match app.state.current_page {
            Page::Skills => {
                spans.push(key_hint("Tab"));
                spans.push(Span::raw(" Filter  "));
                spans.push(key_hint("Enter"));
                spans.push(Span::raw(" Open  "));
            }
            Page::Home => {
                spans.push(key_hint("Enter"));
                spans.push(Span::raw(" Open  "));
            }
            Page::Workouts => {
                spans.push(key_hint("Enter"));
                spans.push(Span::raw(" Generate  "));
            }
            Page::Philosophy => {}
        }
        spans.push(key_hint("?"));
        spans.push(Span::raw(" Help  "));
        spans.push(key_hint("q"));
        spans.push(Span::raw(" Quit  "));
        spans
    };
    spans.push(Span::styled(
        app.status_msg.as_str(),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Create a centered rectangle using percentage of parent area.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::app::App;
    use ratatui::{Terminal, backend::TestBackend};

    /// Draw the whole UI into an in-memory terminal and return its text.
    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        app.update_viewport(width);
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| super::render(app, f)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
