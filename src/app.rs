use crate::catalog::{SkillCatalog, SkillRecord};
use crate::content::WorkoutPlan;
use crate::registry::{self, CategoryFilter};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which page is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Skills,
    Workouts,
    Philosophy,
}

impl Page {
    pub const ALL: [Page; 4] = [Self::Home, Self::Skills, Self::Workouts, Self::Philosophy];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Skills => "skills",
            Self::Workouts => "workouts",
            Self::Philosophy => "philosophy",
        }
    }

    /// Position in the navigation bar, starting at 0.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown page '{0}' (expected one of: home, skills, workouts, philosophy)")]
pub struct PageParseError(pub String);

impl FromStr for Page {
    type Err = PageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PageParseError(s.to_string()))
    }
}

/// The whole view state of a session. Only [`update`] changes it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub current_page: Page,
    pub menu_open: bool,
    /// Id of the skill shown in the detail overlay.
    pub selected: Option<String>,
    /// Filter of the Skills page; reset whenever another page is entered.
    pub category_filter: CategoryFilter,
}

/// Every transition the state model knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NavigateTo(Page),
    ToggleMenu,
    /// Navigate and close the compact menu in one step.
    NavigateAndCloseMenu(Page),
    Select(String),
    ClearSelection,
    SetFilter(CategoryFilter),
    /// Inert: plan generation has no backend.
    GeneratePlan(WorkoutPlan),
}

/// Side effects requested by a transition, carried out by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ScrollToTop,
    PlanRequested(WorkoutPlan),
}

/// Apply one action to the state.
pub fn update(mut state: AppState, action: Action) -> (AppState, Option<Effect>) {
    match action {
        Action::NavigateTo(page) => {
            if state.current_page != page {
                state.category_filter = CategoryFilter::All;
            }
            state.current_page = page;
            (state, Some(Effect::ScrollToTop))
        }
        Action::ToggleMenu => {
            state.menu_open = !state.menu_open;
            (state, None)
        }
        Action::NavigateAndCloseMenu(page) => {
            let (mut state, effect) = update(state, Action::NavigateTo(page));
            state.menu_open = false;
            (state, effect)
        }
        Action::Select(id) => {
            state.selected = Some(id);
            (state, None)
        }
        Action::ClearSelection => {
            state.selected = None;
            (state, None)
        }
        Action::SetFilter(filter) => {
            state.category_filter = filter;
            (state, None)
        }
        Action::GeneratePlan(plan) => (state, Some(Effect::PlanRequested(plan))),
    }
}

/// Height of one skill card, borders included.
pub const CARD_HEIGHT: u16 = 7;

/// Terminal width from which the skill grid uses two and three columns.
pub const TWO_COLUMN_WIDTH: u16 = 80;
pub const THREE_COLUMN_WIDTH: u16 = 120;

const PAGE_SCROLL_STEP: u16 = 10;

/// Main application shell: the state plus the ephemeral UI bits around it.
pub struct App {
    pub catalog: SkillCatalog,
    pub state: AppState,
    pub should_quit: bool,
    pub show_help: bool,

    // Focused card/plan on the current page
    pub cursor: usize,
    // Focused entry in the compact menu
    pub menu_cursor: usize,

    pub page_scroll: u16,
    pub detail_scroll: u16,

    pub width: u16,
    pub grid_columns: usize,
    pub compact_width: u16,

    pub status_msg: String,
}

impl App {
    pub fn new(catalog: SkillCatalog, compact_width: u16) -> Self {
        let status_msg = format!("{} skills loaded", catalog.len());
        Self {
            catalog,
            state: AppState::default(),
            should_quit: false,
            show_help: false,

            cursor: 0,
            menu_cursor: 0,

            page_scroll: 0,
            detail_scroll: 0,

            width: 80,
            grid_columns: 2,
            compact_width,

            status_msg,
        }
    }

    /// Run an action through [`update`] and carry out its effect.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatch");
        let previous_page = self.state.current_page;
        let previous_filter = self.state.category_filter;
        let opens_detail = matches!(action, Action::Select(_));

        let (state, effect) = update(std::mem::take(&mut self.state), action);
        self.state = state;

        if self.state.current_page != previous_page
            || self.state.category_filter != previous_filter
        {
            self.cursor = 0;
        }
        if opens_detail {
            self.detail_scroll = 0;
        }
        if let Some(effect) = effect {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ScrollToTop => {
                self.page_scroll = 0;
            }
            Effect::PlanRequested(plan) => {
                tracing::info!(plan = plan.title(), "plan generation requested; no generator is available");
                self.status_msg = format!("{} plan generation is coming soon", plan.title());
            }
        }
    }

    /// Track terminal width; the grid column count follows it.
    pub fn update_viewport(&mut self, width: u16) {
        self.width = width;
        self.grid_columns = if width >= THREE_COLUMN_WIDTH {
            3
        } else if width >= TWO_COLUMN_WIDTH {
            2
        } else {
            1
        };
        // The dropdown only exists in the compact layout
        if self.state.menu_open && !self.is_compact() {
            self.dispatch(Action::ToggleMenu);
        }
    }

    /// Whether the navigation collapses into the menu.
    pub fn is_compact(&self) -> bool {
        self.width < self.compact_width
    }

    /// The record shown in the overlay, looked up in the live catalog.
    pub fn selected_skill(&self) -> Option<&SkillRecord> {
        self.state
            .selected
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn visible_skills(&self) -> Vec<&SkillRecord> {
        registry::visible_skills(&self.catalog, self.state.category_filter)
    }

    /// Number of activatable items on the current page.
    pub fn focusable_count(&self) -> usize {
        match self.state.current_page {
            Page::Home => registry::featured(&self.catalog).len(),
            Page::Skills => self.visible_skills().len(),
            Page::Workouts => WorkoutPlan::ALL.len(),
            Page::Philosophy => 0,
        }
    }

    /// What activating the focused item does, if anything.
    pub fn activate(&self) -> Option<Action> {
        match self.state.current_page {
            Page::Home => registry::featured(&self.catalog)
                .get(self.cursor)
                .map(|skill| Action::Select(skill.id.clone())),
            Page::Skills => self
                .visible_skills()
                .get(self.cursor)
                .map(|skill| Action::Select(skill.id.clone())),
            Page::Workouts => WorkoutPlan::ALL
                .get(self.cursor)
                .map(|plan| Action::GeneratePlan(*plan)),
            Page::Philosophy => None,
        }
    }

    pub fn cursor_next(&mut self) {
        if self.cursor + 1 < self.focusable_count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move one grid row down on the Skills page.
    pub fn cursor_row_down(&mut self) {
        let target = self.cursor + self.grid_columns.max(1);
        if target < self.focusable_count() {
            self.cursor = target;
        }
    }

    pub fn cursor_row_up(&mut self) {
        let columns = self.grid_columns.max(1);
        if self.cursor >= columns {
            self.cursor -= columns;
        }
    }

    pub fn menu_next(&mut self) {
        self.menu_cursor = (self.menu_cursor + 1) % Page::ALL.len();
    }

    pub fn menu_prev(&mut self) {
        let len = Page::ALL.len();
        self.menu_cursor = (self.menu_cursor + len - 1) % len;
    }

    fn page_scroll_limit(&self) -> u16 {
        crate::ui::page_scroll_limit(self.state.current_page, self.width)
    }

    pub fn scroll_down(&mut self) {
        self.page_scroll = self.page_scroll.saturating_add(1).min(self.page_scroll_limit());
    }

    pub fn scroll_up(&mut self) {
        self.page_scroll = self.page_scroll.saturating_sub(1);
    }

    pub fn scroll_page_down(&mut self) {
        self.page_scroll = self
            .page_scroll
            .saturating_add(PAGE_SCROLL_STEP)
            .min(self.page_scroll_limit());
    }

    pub fn scroll_page_up(&mut self) {
        self.page_scroll = self.page_scroll.saturating_sub(PAGE_SCROLL_STEP);
    }

    pub fn detail_scroll_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn detail_scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn app() -> App {
        App::new(SkillCatalog::builtin(), 80)
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.current_page, Page::Home);
        assert!(!state.menu_open);
        assert!(state.selected.is_none());
        assert_eq!(state.category_filter, CategoryFilter::All);
    }

    #[test]
    fn test_navigate_reaches_every_page_from_every_page() {
        for from in Page::ALL {
            for to in Page::ALL {
                let start = AppState {
                    current_page: from,
                    ..AppState::default()
                };
                let (state, effect) = update(start, Action::NavigateTo(to));
                assert_eq!(state.current_page, to);
                assert_eq!(effect, Some(Effect::ScrollToTop));
            }
        }
    }

    #[test]
    fn test_navigate_leaves_menu_unchanged() {
        for open in [false, true] {
            for page in Page::ALL {
                let start = AppState {
                    menu_open: open,
                    ..AppState::default()
                };
                let (state, _) = update(start, Action::NavigateTo(page));
                assert_eq!(state.menu_open, open);
            }
        }
    }

    #[test]
    fn test_navigate_and_close_menu() {
        let (state, _) = update(AppState::default(), Action::ToggleMenu);
        assert!(state.menu_open);

        let (state, effect) = update(state, Action::NavigateAndCloseMenu(Page::Workouts));
        assert_eq!(state.current_page, Page::Workouts);
        assert!(!state.menu_open);
        assert_eq!(effect, Some(Effect::ScrollToTop));
    }

    #[test]
    fn test_toggle_menu_twice() {
        let (state, _) = update(AppState::default(), Action::ToggleMenu);
        let (state, effect) = update(state, Action::ToggleMenu);
        assert!(!state.menu_open);
        assert!(effect.is_none());
    }

    #[test]
    fn test_select_then_clear_for_every_skill() {
        let catalog = SkillCatalog::builtin();
        for skill in catalog.skills() {
            let (state, _) = update(AppState::default(), Action::Select(skill.id.clone()));
            assert_eq!(state.selected.as_deref(), Some(skill.id.as_str()));
            let (state, _) = update(state, Action::ClearSelection);
            assert_eq!(state, AppState::default());
        }
    }

    #[test]
    fn test_select_overwrites_previous_selection() {
        let catalog = SkillCatalog::builtin();
        let skills = catalog.skills();
        let (state, _) = update(AppState::default(), Action::Select(skills[2].id.clone()));
        assert_eq!(state.selected.as_deref(), Some("muscleup"));

        let (state, _) = update(state, Action::Select(skills[0].id.clone()));
        assert_eq!(state.selected.as_deref(), Some("pushup"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (state, effect) = update(AppState::default(), Action::ClearSelection);
        assert_eq!(state, AppState::default());
        assert!(effect.is_none());
    }

    #[test]
    fn test_filter_resets_when_leaving_skills() {
        let start = AppState {
            current_page: Page::Skills,
            category_filter: CategoryFilter::Only(Category::Pull),
            ..AppState::default()
        };

        let (same, _) = update(start.clone(), Action::NavigateTo(Page::Skills));
        assert_eq!(same.category_filter, CategoryFilter::Only(Category::Pull));

        let (left, _) = update(start, Action::NavigateTo(Page::Home));
        assert_eq!(left.category_filter, CategoryFilter::All);
    }

    #[test]
    fn test_generate_plan_is_inert() {
        let start = AppState {
            current_page: Page::Workouts,
            ..AppState::default()
        };
        let (state, effect) = update(start.clone(), Action::GeneratePlan(WorkoutPlan::Statics));
        assert_eq!(state, start);
        assert_eq!(effect, Some(Effect::PlanRequested(WorkoutPlan::Statics)));
    }

    #[test]
    fn test_page_parse() {
        assert_eq!("Skills".parse(), Ok(Page::Skills));
        assert_eq!("philosophy".parse(), Ok(Page::Philosophy));
        assert!("about".parse::<Page>().is_err());
    }

    #[test]
    fn test_dispatch_scroll_to_top_and_cursor_reset() {
        let mut app = app();
        app.page_scroll = 12;
        app.cursor = 2;
        app.dispatch(Action::NavigateTo(Page::Skills));
        assert_eq!(app.page_scroll, 0);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_dispatch_filter_change_resets_cursor() {
        let mut app = app();
        app.dispatch(Action::NavigateTo(Page::Skills));
        app.cursor = 5;
        app.dispatch(Action::SetFilter(CategoryFilter::Only(Category::Static)));
        assert_eq!(app.cursor, 0);
        assert_eq!(app.focusable_count(), 2);
    }

    #[test]
    fn test_dispatch_generate_sets_status() {
        let mut app = app();
        app.dispatch(Action::NavigateTo(Page::Workouts));
        app.dispatch(Action::GeneratePlan(WorkoutPlan::Hypertrophy));
        assert!(app.status_msg.contains("Hypertrophy"));
        assert_eq!(app.state.current_page, Page::Workouts);
    }

    #[test]
    fn test_selected_skill_resolves_against_catalog() {
        let mut app = app();
        app.dispatch(Action::Select("handstand".to_string()));
        assert_eq!(app.selected_skill().map(|s| s.title.as_str()), Some("Handstand"));

        app.dispatch(Action::Select("unknown".to_string()));
        assert!(app.selected_skill().is_none());
    }

    #[test]
    fn test_activate_on_home_selects_featured() {
        let mut app = app();
        app.cursor_next();
        app.cursor_next();
        app.cursor_next();
        assert_eq!(app.cursor, 2);
        assert_eq!(app.activate(), Some(Action::Select("muscleup".to_string())));
    }

    #[test]
    fn test_activate_on_philosophy_does_nothing() {
        let mut app = app();
        app.dispatch(Action::NavigateTo(Page::Philosophy));
        assert_eq!(app.activate(), None);
    }

    #[test]
    fn test_grid_cursor_moves_by_rows() {
        let mut app = app();
        app.update_viewport(THREE_COLUMN_WIDTH);
        app.dispatch(Action::NavigateTo(Page::Skills));
        assert_eq!(app.grid_columns, 3);

        app.cursor_row_down();
        assert_eq!(app.cursor, 3);
        app.cursor_row_down();
        assert_eq!(app.cursor, 3);
        app.cursor_row_up();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_viewport_columns_and_compact() {
        let mut app = app();
        app.update_viewport(60);
        assert_eq!(app.grid_columns, 1);
        assert!(app.is_compact());

        app.update_viewport(100);
        assert_eq!(app.grid_columns, 2);
        assert!(!app.is_compact());
    }

    #[test]
    fn test_widening_closes_menu() {
        let mut app = app();
        app.update_viewport(60);
        app.dispatch(Action::ToggleMenu);
        assert!(app.state.menu_open);

        app.update_viewport(70);
        assert!(app.state.menu_open);
        app.update_viewport(120);
        assert!(!app.state.menu_open);
    }

    #[test]
    fn test_page_scroll_stops_at_content_end() {
        let mut app = app();
        app.update_viewport(100);
        for _ in 0..200 {
            app.scroll_down();
        }
        let limit = crate::ui::page_scroll_limit(Page::Home, 100);
        assert!(limit > 0);
        assert_eq!(app.page_scroll, limit);

        app.dispatch(Action::NavigateTo(Page::Philosophy));
        for _ in 0..50 {
            app.scroll_page_down();
        }
        assert_eq!(app.page_scroll, crate::ui::page_scroll_limit(Page::Philosophy, 100));

        app.dispatch(Action::NavigateTo(Page::Workouts));
        app.scroll_down();
        assert_eq!(app.page_scroll, 0);
    }

    #[test]
    fn test_menu_cursor_wraps() {
        let mut app = app();
        app.menu_prev();
        assert_eq!(app.menu_cursor, Page::ALL.len() - 1);
        app.menu_next();
        assert_eq!(app.menu_cursor, 0);
    }
}
