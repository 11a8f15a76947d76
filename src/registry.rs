use crate::catalog::{Category, SkillCatalog, SkillRecord};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of skills shown on the landing page.
pub const FEATURED_COUNT: usize = 3;

/// Which categories the Skills page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Button order on the Skills page.
    pub const ALL: [CategoryFilter; 6] = [
        Self::All,
        Self::Only(Category::Push),
        Self::Only(Category::Pull),
        Self::Only(Category::Static),
        Self::Only(Category::Dynamic),
        Self::Only(Category::Balance),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(self, skill: &SkillRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => skill.category == category,
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category filter '{0}' (expected one of: all, push, pull, static, dynamic, balance)")]
pub struct FilterParseError(pub String);

impl FromStr for CategoryFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FilterParseError(s.to_string()))
    }
}

/// Skills passing `filter`, in catalog order.
pub fn visible_skills(catalog: &SkillCatalog, filter: CategoryFilter) -> Vec<&SkillRecord> {
    catalog
        .skills()
        .iter()
        .filter(|skill| filter.matches(skill))
        .collect()
}

/// The first few catalog entries, used on the landing page.
pub fn featured(catalog: &SkillCatalog) -> &[SkillRecord] {
    let skills = catalog.skills();
    &skills[..skills.len().min(FEATURED_COUNT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Difficulty, SkillRecord};
    use proptest::prelude::*;

    fn ids(skills: &[&SkillRecord]) -> Vec<String> {
        skills.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_static_filter_scenario() {
        let catalog = SkillCatalog::builtin();
        let visible = visible_skills(&catalog, CategoryFilter::Only(Category::Static));
        assert_eq!(ids(&visible), vec!["frontlever", "planche"]);
    }

    #[test]
    fn test_all_filter_returns_catalog() {
        let catalog = SkillCatalog::builtin();
        let visible = visible_skills(&catalog, CategoryFilter::All);
        assert_eq!(visible.len(), catalog.len());
        for (shown, original) in visible.iter().zip(catalog.skills()) {
            assert_eq!(shown.id, original.id);
        }
    }

    #[test]
    fn test_featured_is_first_three() {
        let catalog = SkillCatalog::builtin();
        let featured: Vec<&str> = featured(&catalog).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(featured, vec!["pushup", "pullup", "muscleup"]);
    }

    #[test]
    fn test_featured_short_catalog() {
        let catalog = SkillCatalog::new(Vec::new()).unwrap();
        assert!(featured(&catalog).is_empty());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse(), Ok(CategoryFilter::All));
        assert_eq!("Static".parse(), Ok(CategoryFilter::Only(Category::Static)));
        assert_eq!(" BALANCE ".parse(), Ok(CategoryFilter::Only(Category::Balance)));
        assert_eq!(
            "legs".parse::<CategoryFilter>(),
            Err(FilterParseError("legs".to_string()))
        );
        assert!("".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_filter_cycle_visits_every_button() {
        let mut filter = CategoryFilter::All;
        for expected in CategoryFilter::ALL.iter().skip(1) {
            filter = filter.next();
            assert_eq!(filter, *expected);
        }
        assert_eq!(filter.next(), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.prev(), CategoryFilter::Only(Category::Balance));
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    fn arb_catalog() -> impl Strategy<Value = SkillCatalog> {
        prop::collection::vec((arb_category(), 1u8..=10), 0..24).prop_map(|entries| {
            let skills = entries
                .into_iter()
                .enumerate()
                .map(|(i, (category, level))| SkillRecord {
                    id: format!("skill-{i}"),
                    title: format!("Skill {i}"),
                    category,
                    difficulty: Difficulty::Beginner,
                    level,
                    description: String::new(),
                    image: String::new(),
                    steps: Vec::new(),
                    progression: Vec::new(),
                    unlocks: Vec::new(),
                })
                .collect();
            SkillCatalog::new(skills).expect("generated ids are unique")
        })
    }

    proptest! {
        #[test]
        fn prop_category_filter_keeps_only_matching_in_order(
            catalog in arb_catalog(),
            category in arb_category(),
        ) {
            let visible = visible_skills(&catalog, CategoryFilter::Only(category));
            prop_assert!(visible.iter().all(|s| s.category == category));

            let expected: Vec<&str> = catalog
                .skills()
                .iter()
                .filter(|s| s.category == category)
                .map(|s| s.id.as_str())
                .collect();
            let actual: Vec<&str> = visible.iter().map(|s| s.id.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn prop_all_filter_is_identity(catalog in arb_catalog()) {
            let visible = visible_skills(&catalog, CategoryFilter::All);
            prop_assert_eq!(visible.len(), catalog.len());
            let same_order = visible.iter().zip(catalog.skills()).all(|(a, b)| a.id == b.id);
            prop_assert!(same_order);
        }

        #[test]
        fn prop_category_filters_partition_catalog(catalog in arb_catalog()) {
            let total: usize = Category::ALL
                .iter()
                .map(|c| visible_skills(&catalog, CategoryFilter::Only(*c)).len())
                .sum();
            prop_assert_eq!(total, catalog.len());
        }
    }
}
