mod app;
mod catalog;
mod config;
mod content;
mod keys;
mod logging;
mod registry;
mod ui;

use app::{Action, App, Page};
use catalog::SkillCatalog;
use clap::{Parser, Subcommand};
use config::{Config, ConfigSource};
use crossterm::event::{self, Event, KeyEventKind};
use registry::CategoryFilter;
use std::path::PathBuf;
use std::time::Duration;

/// Terminal guide to calisthenics skills, workouts and philosophy
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a config file (default: <config dir>/gravity-defied/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// JSON skill catalog to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive browser (default)
    Run {
        /// Page to open on start-up
        #[arg(short, long, default_value = "home")]
        page: Page,
    },
    /// Print the skills of one category (or all)
    List {
        /// all, push, pull, static, dynamic or balance
        #[arg(short = 'C', long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Print the detail of one skill
    Show {
        /// Skill id, e.g. "planche"
        id: String,
    },
}

const MIN_TICK_MS: u64 = 10;

pub(crate) fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "gravitydefied", "gravity-defied")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (config, config_source) = match Config::load(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config.log.filter) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match &config_source {
        ConfigSource::File(path) => {
            tracing::info!(path = %path.display(), "loaded config");
        }
        ConfigSource::Defaults => {
            tracing::warn!("no config file found, using defaults");
        }
    }
    if config.ui.tick_rate_ms < MIN_TICK_MS {
        tracing::warn!(
            tick_rate_ms = config.ui.tick_rate_ms,
            "tick rate too low, using {}ms",
            MIN_TICK_MS
        );
    }

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.path.clone());
    let catalog = match &catalog_path {
        Some(path) => match SkillCatalog::from_json_file(path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), skills = catalog.len(), "loaded catalog file");
                catalog
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "catalog rejected");
                eprintln!("Error: {}", e.user_message());
                std::process::exit(1);
            }
        },
        None => {
            let catalog = SkillCatalog::builtin();
            tracing::info!(skills = catalog.len(), "using built-in catalog");
            catalog
        }
    };

    if catalog.is_empty() {
        tracing::warn!("catalog has no skills");
    }

    let command = cli.command.unwrap_or(Commands::Run { page: Page::Home });

    match command {
        Commands::List { category } => print_list(&catalog, category),
        Commands::Show { id } => match catalog.require(&id) {
            Ok(skill) => print_skill(skill),
            Err(e) => {
                eprintln!("Error: {}", e.user_message());
                std::process::exit(1);
            }
        },
        Commands::Run { page } => {
            let mut app = App::new(catalog, config.ui.compact_width);
            if page != Page::Home {
                app.dispatch(Action::NavigateTo(page));
            }

            // Init terminal
            let mut terminal = ratatui::init();

            let size = terminal.size()?;
            app.update_viewport(size.width);

            let tick = Duration::from_millis(config.ui.tick_rate_ms.max(MIN_TICK_MS));
            let result = run_app(&mut terminal, &mut app, tick);

            // Restore terminal
            ratatui::restore();

            if let Err(e) = result {
                tracing::error!(error = %e, "event loop failed");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            tracing::info!("Gravity Defied exiting");
        }
    }

    Ok(())
}

fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tick: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    keys::handle_key(app, key);
                }
                Event::Resize(width, _) => {
                    app.update_viewport(width);
                }
                _ => {}
            }
        }
    }
}

fn print_list(catalog: &SkillCatalog, category: CategoryFilter) {
    print!("{}", list_table(catalog, category));
    eprintln!("{}", list_summary(catalog, category));
}

fn list_table(catalog: &SkillCatalog, category: CategoryFilter) -> String {
    let mut lines = vec![format!(
        "{:<12} {:<8} {:<13} {:>5}  TITLE",
        "ID", "CATEGORY", "DIFFICULTY", "LEVEL"
    )];
    for skill in registry::visible_skills(catalog, category) {
        lines.push(format!(
            "{:<12} {:<8} {:<13} {:>5}  {}",
            skill.id,
            skill.category.label(),
            skill.difficulty.label(),
            skill.level,
            skill.title
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Count line for stderr, with a per-category breakdown for `all`.
fn list_summary(catalog: &SkillCatalog, category: CategoryFilter) -> String {
    let shown = registry::visible_skills(catalog, category).len();
    let mut summary = format!("{} of {} skills ({})", shown, catalog.len(), category);
    if category == CategoryFilter::All {
        let counts: Vec<String> = catalog::Category::ALL
            .iter()
            .map(|c| {
                let n = registry::visible_skills(catalog, CategoryFilter::Only(*c)).len();
                format!("{} {}", c.label(), n)
            })
            .collect();
        summary.push('\n');
        summary.push_str(&counts.join(" · "));
    }
    summary
}

fn print_skill(skill: &catalog::SkillRecord) {
    print!("{}", skill_detail(skill));
}

fn skill_detail(skill: &catalog::SkillRecord) -> String {
    let mut lines = vec![
        format!("{} [{}]", skill.title, skill.id),
        format!(
            "{} · {} · level {}/{}",
            skill.category.label(),
            skill.difficulty.label(),
            skill.level,
            catalog::MAX_LEVEL
        ),
        String::new(),
        skill.description.clone(),
        String::new(),
        format!("Progression: {}", skill.progression.join(" → ")),
        "Execution:".to_string(),
    ];
    for (i, step) in skill.steps.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, step));
    }
    lines.push(format!("Unlocks: {}", skill.unlocks.join(", ")));
    lines.push(format!("Image: {}", skill.image));
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, CatalogError};

    #[test]
    fn test_list_static_category() {
        let catalog = SkillCatalog::builtin();
        let filter: CategoryFilter = "static".parse().unwrap();
        let table = list_table(&catalog, filter);

        let ids: Vec<&str> = table
            .lines()
            .skip(1)
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(ids, ["frontlever", "planche"]);
        assert!(table.starts_with("ID"));

        let summary = list_summary(&catalog, CategoryFilter::Only(Category::Static));
        assert_eq!(summary, "2 of 6 skills (Static)");
    }

    #[test]
    fn test_list_all_summary_breaks_down_categories() {
        let catalog = SkillCatalog::builtin();
        let summary = list_summary(&catalog, CategoryFilter::All);
        assert!(summary.starts_with("6 of 6 skills"));
        assert!(summary.contains("Static 2"));
        assert!(summary.contains("Balance 1"));
    }

    #[test]
    fn test_show_renders_steps_in_order() {
        let catalog = SkillCatalog::builtin();
        let detail = skill_detail(catalog.require("planche").unwrap());
        assert!(detail.starts_with("Planche [planche]"));
        assert!(detail.contains("  1. "));
        assert!(detail.contains("level 10/10"));
    }

    #[test]
    fn test_show_unknown_id_is_an_error() {
        let catalog = SkillCatalog::builtin();
        let err = catalog.require("iron-cross").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSkill(_)));
        assert!(err.user_message().contains("iron-cross"));
    }
}
