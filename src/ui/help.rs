use super::centered_rect;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("?", "Toggle this help"),
            ("1-4", "Home / Skills / Workouts / Philosophy"),
            ("g", "Back to home"),
            ("m", "Open or close the menu (narrow terminals)"),
            ("q", "Quit application"),
        ],
    ),
    (
        "Home",
        &[
            ("←/→", "Focus a featured skill"),
            ("Enter", "Open skill detail"),
            ("s / v", "Learn skills / view all"),
            ("p", "Philosophy"),
        ],
    ),
    (
        "Skills",
        &[
            ("←↑↓→", "Move through the grid"),
            ("Tab", "Next category filter (Shift+Tab: previous)"),
            ("Enter", "Open skill detail"),
        ],
    ),
    (
        "Workouts",
        &[("←/→", "Choose a plan"), ("Enter", "Generate plan")],
    ),
    (
        "Skill Detail",
        &[("↑/↓", "Scroll content"), ("Esc/q", "Close")],
    ),
];

pub fn render(frame: &mut Frame) {
    let area = centered_rect(70, 80, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let mut help_text = vec![Line::from("")];
    for (title, bindings) in SECTIONS {
        help_text.push(Line::from(Span::styled(
            format!("  {}", title),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for (key, description) in *bindings {
            help_text.push(Line::from(vec![
                Span::styled(format!("    {:<10}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*description),
            ]));
        }
        help_text.push(Line::from(""));
    }

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help — Keybindings ")
                .title_bottom(Line::from(" Press any key to close ").style(Style::default().fg(Color::DarkGray))),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(help, area);
}
