use crate::app::{Action, App, Page};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Route one key press. Layers are checked top-down: help, detail overlay,
/// compact menu, then the current page.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if key.code == KeyCode::Char('?') {
        app.show_help = !app.show_help;
        return;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    if app.selected_skill().is_some() {
        handle_detail_key(app, key);
        return;
    }

    if app.state.menu_open && app.is_compact() {
        handle_menu_key(app, key);
        return;
    }

    if handle_global_key(app, key) {
        return;
    }

    match app.state.current_page {
        Page::Home => handle_home_key(app, key),
        Page::Skills => handle_skills_key(app, key),
        Page::Workouts => handle_workouts_key(app, key),
        Page::Philosophy => handle_scroll_key(app, key),
    }
}

fn page_for_digit(c: char) -> Option<Page> {
    let index = c.to_digit(10)? as usize;
    index.checked_sub(1).and_then(|i| Page::ALL.get(i).copied())
}

fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('m') if app.is_compact() => {
            app.menu_cursor = app.state.current_page.index();
            app.dispatch(Action::ToggleMenu);
        }
        KeyCode::Char('g') => {
            app.dispatch(Action::NavigateTo(Page::Home));
        }
        KeyCode::Char(c) => match page_for_digit(c) {
            Some(page) => app.dispatch(Action::NavigateTo(page)),
            None => return false,
        },
        _ => return false,
    }
    true
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') | KeyCode::Backspace => {
            app.dispatch(Action::ClearSelection);
        }
        KeyCode::Down | KeyCode::Char('j') => app.detail_scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.detail_scroll_up(),
        KeyCode::Char('t') => {
            app.status_msg = "Tutorials are not available yet".to_string();
        }
        _ => {}
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => app.dispatch(Action::ToggleMenu),
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.menu_next(),
        KeyCode::Up | KeyCode::Char('k') => app.menu_prev(),
        KeyCode::Enter => {
            let page = Page::ALL[app.menu_cursor % Page::ALL.len()];
            app.dispatch(Action::NavigateAndCloseMenu(page));
        }
        KeyCode::Char(c) => {
            if let Some(page) = page_for_digit(c) {
                app.dispatch(Action::NavigateAndCloseMenu(page));
            }
        }
        _ => {}
    }
}

fn activate(app: &mut App) {
    if let Some(action) = app.activate() {
        app.dispatch(action);
    }
}

fn handle_scroll_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::PageDown => app.scroll_page_down(),
        KeyCode::PageUp => app.scroll_page_up(),
        _ => {}
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.cursor_next(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.cursor_prev(),
        KeyCode::Enter => activate(app),
        // Hero calls to action and "View all"
        KeyCode::Char('s') | KeyCode::Char('v') => app.dispatch(Action::NavigateTo(Page::Skills)),
        KeyCode::Char('p') => app.dispatch(Action::NavigateTo(Page::Philosophy)),
        _ => handle_scroll_key(app, key),
    }
}

fn handle_skills_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') => app.cursor_next(),
        KeyCode::Left | KeyCode::Char('h') => app.cursor_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_row_down(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_row_up(),
        KeyCode::Tab | KeyCode::Char(']') => {
            let next = app.state.category_filter.next();
            app.dispatch(Action::SetFilter(next));
        }
        KeyCode::BackTab | KeyCode::Char('[') => {
            let prev = app.state.category_filter.prev();
            app.dispatch(Action::SetFilter(prev));
        }
        KeyCode::Enter => activate(app),
        _ => {}
    }
}

fn handle_workouts_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.cursor_next(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.cursor_prev(),
        KeyCode::Enter => activate(app),
        _ => {}
    }
}
