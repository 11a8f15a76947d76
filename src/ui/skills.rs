use super::card;
use crate::app::{App, CARD_HEIGHT};
use crate::catalog::SkillRecord;
use crate::registry::CategoryFilter;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // Layout: heading(2) + filter buttons(3) + grid(min)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let visible = app.visible_skills();

    let heading = Paragraph::new(Line::from(vec![
        Span::styled(
            " SKILL ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "ARCHIVE",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   [{} of {} skills]", visible.len(), app.catalog.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(heading, chunks[0]);

    render_filters(app.state.category_filter, frame, chunks[1]);

    if visible.is_empty() {
        let empty = Paragraph::new("No skills in this category yet.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, chunks[2]);
        return;
    }

    render_grid(&visible, app.cursor, app.grid_columns, frame, chunks[2]);
}

fn render_filters(active: CategoryFilter, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for filter in CategoryFilter::ALL {
        let style = if filter == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", filter.label().to_uppercase()), style));
        spans.push(Span::raw(" "));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Category [Tab/Shift+Tab] "),
    );
    frame.render_widget(bar, area);
}

/// Card grid, windowed by whole rows so the focused card stays on screen.
pub(super) fn render_grid(
    skills: &[&SkillRecord],
    cursor: usize,
    columns: usize,
    frame: &mut Frame,
    area: Rect,
) {
    let columns = columns.max(1);
    let rows_fit = (area.height / CARD_HEIGHT).max(1) as usize;
    let cursor_row = cursor / columns;
    let first_row = if cursor_row >= rows_fit {
        cursor_row + 1 - rows_fit
    } else {
        0
    };

    let total_rows = skills.len().div_ceil(columns);
    let shown_rows = rows_fit.min(total_rows.saturating_sub(first_row));

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); shown_rows])
        .split(area);

    for (r, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        let row = first_row + r;
        for (c, cell) in cells.iter().enumerate() {
            let index = row * columns + c;
            if let Some(skill) = skills.get(index) {
                card::render(skill, index == cursor, frame, *cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{Action, App, Page};
    use crate::catalog::{Category, SkillCatalog};
    use crate::registry::CategoryFilter;
    use crate::ui::test_support::render_to_string;

    fn skills_app() -> App {
        let mut app = App::new(SkillCatalog::builtin(), 80);
        app.dispatch(Action::NavigateTo(Page::Skills));
        app
    }

    #[test]
    fn test_renders_all_filter_buttons() {
        let mut app = skills_app();
        let screen = render_to_string(&mut app, 120, 40);
        for filter in CategoryFilter::ALL {
            assert!(screen.contains(&filter.label().to_uppercase()));
        }
        assert!(screen.contains("ARCHIVE"));
    }

    #[test]
    fn test_static_filter_shows_only_static_cards() {
        let mut app = skills_app();
        app.dispatch(Action::SetFilter(CategoryFilter::Only(Category::Static)));
        let screen = render_to_string(&mut app, 120, 40);
        assert!(screen.contains("FRONT LEVER"));
        assert!(screen.contains("PLANCHE"));
        assert!(!screen.contains("PUSH UP"));
        assert!(!screen.contains("HANDSTAND"));
        assert!(screen.contains("[2 of 6 skills]"));
    }

    #[test]
    fn test_focused_card_scrolls_into_view() {
        let mut app = skills_app();
        // One column and room for two cards
        app.update_viewport(60);
        for _ in 0..5 {
            app.cursor_row_down();
        }
        assert_eq!(app.cursor, 5);
        let screen = render_to_string(&mut app, 60, 5 + 5 + 2 * crate::app::CARD_HEIGHT);
        assert!(screen.contains("PLANCHE"));
        assert!(!screen.contains("PUSH UP"));
    }
}
