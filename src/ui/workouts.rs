use crate::app::{App, TWO_COLUMN_WIDTH};
use crate::content::{WORKOUTS_TAGLINE, WorkoutPlan};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const PLAN_HEIGHT: u16 = 8;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                "ROUTINE ",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "GENERATOR",
                Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(WORKOUTS_TAGLINE, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[0]);

    let (direction, constraints) = if area.width >= TWO_COLUMN_WIDTH {
        (
            Direction::Horizontal,
            vec![Constraint::Ratio(1, WorkoutPlan::ALL.len() as u32); WorkoutPlan::ALL.len()],
        )
    } else {
        (
            Direction::Vertical,
            vec![Constraint::Length(PLAN_HEIGHT); WorkoutPlan::ALL.len()],
        )
    };
    let cells = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(chunks[1]);

    for (i, (plan, cell)) in WorkoutPlan::ALL.iter().zip(cells.iter()).enumerate() {
        render_plan(*plan, i == app.cursor, frame, *cell);
    }
}

fn render_plan(plan: WorkoutPlan, focused: bool, frame: &mut Frame, area: Rect) {
    let accent = plan.accent();
    let border = if focused {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let body = Paragraph::new(vec![
        Line::from(Span::styled("🏋", Style::default().fg(accent))),
        Line::from(Span::styled(
            plan.title().to_uppercase(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(plan.description(), Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(" GENERATE [Enter] ", button)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use crate::app::{Action, App, Page};
    use crate::catalog::SkillCatalog;
    use crate::ui::test_support::render_to_string;

    #[test]
    fn test_three_plans_rendered() {
        let mut app = App::new(SkillCatalog::builtin(), 80);
        app.dispatch(Action::NavigateTo(Page::Workouts));
        let screen = render_to_string(&mut app, 120, 30);
        assert!(screen.contains("GENERATOR"));
        assert!(screen.contains("FUNDAMENTALS"));
        assert!(screen.contains("HYPERTROPHY"));
        assert!(screen.contains("STATICS"));
    }
}
