//! Static copy for the pages that are not driven by the skill catalog.

use ratatui::style::Color;

pub const BRAND_LEFT: &str = "GRAVITY";
pub const BRAND_RIGHT: &str = "DEFIED";

pub const HERO_BADGE: &str = "Ultimate Calisthenics Hub";
pub const HERO_HEADLINE: [&str; 3] = ["YOUR", "GRAVITY.", "YOUR RULES."];
pub const HERO_TAGLINE: &str = "Master your body. From the fundamentals to God-Tier skills. \
Learn the technique, understand the progression and break your limits.";

/// Pre-built training plans on the Workouts page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutPlan {
    Fundamentals,
    Hypertrophy,
    Statics,
}

impl WorkoutPlan {
    pub const ALL: [WorkoutPlan; 3] = [Self::Fundamentals, Self::Hypertrophy, Self::Statics];

    pub fn title(self) -> &'static str {
        match self {
            Self::Fundamentals => "Fundamentals",
            Self::Hypertrophy => "Hypertrophy",
            Self::Statics => "Statics",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Fundamentals => "Full-body strength and conditioning for beginners.",
            Self::Hypertrophy => "Muscle building with bodyweight exercises.",
            Self::Statics => "Dedicated training for front lever and planche.",
        }
    }

    pub fn accent(self) -> Color {
        match self {
            Self::Fundamentals => Color::Green,
            Self::Hypertrophy => Color::Cyan,
            Self::Statics => Color::Magenta,
        }
    }
}

pub const WORKOUTS_TAGLINE: &str = "Pick your level. We build your plan.";

pub const PHILOSOPHY_PARAGRAPHS: [&str; 2] = [
    "Calisthenics is more than training. It is proof that you need no machines to become strong. \
Your body is the only tool you will ever need.",
    "We believe in progressive overload through leverage, not external weight. \
We believe in quality over quantity. One perfect pull up is worth more than ten bad ones.",
];
pub const PHILOSOPHY_QUOTE: &str = "\"The body achieves what the mind believes.\"";
pub const CORE_VALUES: [&str; 3] = [
    "Consistency over intensity",
    "Form before repetitions",
    "Patience in the progression",
];

pub const FOOTER_COPYRIGHT: &str = "© 2024 Gravity Defied. Built for Athletes.";
pub const FOOTER_LINKS: [&str; 3] = ["Instagram", "YouTube", "Community"];
