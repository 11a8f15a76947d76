use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Movement family a skill belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Push,
    Pull,
    Dynamic,
    Static,
    Balance,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Push,
        Self::Pull,
        Self::Dynamic,
        Self::Static,
        Self::Balance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Push => "Push",
            Self::Pull => "Pull",
            Self::Dynamic => "Dynamic",
            Self::Static => "Static",
            Self::Balance => "Balance",
        }
    }
}

/// Difficulty tier shown as a badge on every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Elite,
    #[serde(rename = "God Tier")]
    GodTier,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Elite => "Elite",
            Self::GodTier => "God Tier",
        }
    }
}

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

/// One trainable movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub level: u8,
    pub description: String,
    pub image: String,
    pub steps: Vec<String>,
    pub progression: Vec<String>,
    pub unlocks: Vec<String>,
}

impl SkillRecord {
    /// Width of the level bar in percent.
    pub fn level_percent(&self) -> u16 {
        u16::from(self.level) * 10
    }
}

/// Errors raised while building or loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate skill id: {0}")]
    DuplicateId(String),

    #[error("Skill at position {0} has an empty id")]
    EmptyId(usize),

    #[error("Skill {id} has level {level}, expected {MIN_LEVEL}..={MAX_LEVEL}")]
    LevelOutOfRange { id: String, level: u8 },

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),
}

impl CatalogError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Io(e) => format!("Could not read the skill catalog: {}", e),
            CatalogError::Parse(e) => format!("The skill catalog is not valid: {}", e),
            CatalogError::DuplicateId(id) => {
                format!("The skill id '{}' appears more than once", id)
            }
            CatalogError::EmptyId(pos) => format!("Skill #{} has no id", pos + 1),
            CatalogError::LevelOutOfRange { id, level } => format!(
                "Skill '{}' has level {}; levels run from {} to {}",
                id, level, MIN_LEVEL, MAX_LEVEL
            ),
            CatalogError::UnknownSkill(id) => format!("No skill with id '{}'", id),
        }
    }
}

/// Immutable, validated, ordered list of skills.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    skills: Vec<SkillRecord>,
}

impl SkillCatalog {
    /// Validate and wrap a list of records, keeping their order.
    pub fn new(skills: Vec<SkillRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (pos, skill) in skills.iter().enumerate() {
            if skill.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(pos));
            }
            if !seen.insert(skill.id.as_str()) {
                return Err(CatalogError::DuplicateId(skill.id.clone()));
            }
            if !(MIN_LEVEL..=MAX_LEVEL).contains(&skill.level) {
                return Err(CatalogError::LevelOutOfRange {
                    id: skill.id.clone(),
                    level: skill.level,
                });
            }
        }
        Ok(Self { skills })
    }

    /// Parse a JSON array of skill records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let skills: Vec<SkillRecord> = serde_json::from_str(json)?;
        Self::new(skills)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            skills: builtin_skills(),
        }
    }

    pub fn skills(&self) -> &[SkillRecord] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SkillRecord> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// Like [`get`](Self::get) but with an error for callers that report it.
    pub fn require(&self, id: &str) -> Result<&SkillRecord, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownSkill(id.to_string()))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_skills() -> Vec<SkillRecord> {
    vec![
        SkillRecord {
            id: "pushup".to_string(),
            title: "Push Up".to_string(),
            category: Category::Push,
            difficulty: Difficulty::Beginner,
            level: 1,
            description: "The foundation of every pressing movement. Trains chest, shoulders and triceps.".to_string(),
            image: "https://images.unsplash.com/photo-1598971639058-211a74a96fea?auto=format&fit=crop&q=80&w=800".to_string(),
            steps: strings(&[
                "Hands shoulder-width apart",
                "Body in one straight line",
                "Elbows at 45° to the torso",
                "Chest almost touches the floor",
            ]),
            progression: strings(&["Wall Push Up", "Incline Push Up", "Knee Push Up"]),
            unlocks: strings(&["Diamond Push Up", "Pseudo Planche Push Up"]),
        },
        SkillRecord {
            id: "pullup".to_string(),
            title: "Pull Up".to_string(),
            category: Category::Pull,
            difficulty: Difficulty::Beginner,
            level: 2,
            description: "The king of upper-body pulling. Builds a wide back and strong arms.".to_string(),
            image: "https://images.unsplash.com/photo-1526506118085-60ce8714f8c5?auto=format&fit=crop&q=80&w=800".to_string(),
            steps: strings(&[
                "Hands slightly wider than shoulder-width",
                "Active hang (scapula retraction)",
                "Pull the chin over the bar",
                "Lower under control",
            ]),
            progression: strings(&[
                "Dead Hang",
                "Scapula Pulls",
                "Australian Pull Up",
                "Band Assisted Pull Up",
            ]),
            unlocks: strings(&["Muscle Up", "One Arm Pull Up"]),
        },
        SkillRecord {
            id: "muscleup".to_string(),
            title: "Muscle Up".to_string(),
            category: Category::Dynamic,
            difficulty: Difficulty::Advanced,
            level: 7,
            description: "The ultimate blend of pull and push. An explosive manoeuvre.".to_string(),
            image: "https://images.unsplash.com/photo-1521412644187-c49fa049e84d?auto=format&fit=crop&q=80&w=800".to_string(),
            steps: strings(&[
                "Explosive high pull up",
                "Move through the transition fast",
                "Dip out on top of the bar",
                "Keep the body straight",
            ]),
            progression: strings(&["Explosive Pull Ups", "Straight Bar Dips", "Jumping Muscle Up"]),
            unlocks: strings(&["Front Lever Muscle Up", "360 Muscle Up"]),
        },
        SkillRecord {
            id: "frontlever".to_string(),
            title: "Front Lever".to_string(),
            category: Category::Static,
            difficulty: Difficulty::Elite,
            level: 9,
            description: "A static hold with the body floating horizontally beneath the bar.".to_string(),
            image: "https://images.unsplash.com/photo-1541600383005-565c949cf777?auto=format&fit=crop&q=80&w=800".to_string(),
            steps: strings(&[
                "Arms fully locked",
                "Squeeze the lats hard",
                "Hips level with the shoulders",
                "Core braced to the maximum",
            ]),
            progression: strings(&[
                "Tuck Front Lever",
                "Adv. Tuck Front Lever",
                "Single Leg Front Lever",
                "Straddle Front Lever",
            ]),
            unlocks: strings(&["Front Lever Pull Ups", "Victorian Cross"]),
        },
        SkillRecord {
            id: "handstand".to_string(),
            title: "Handstand".to_string(),
            category: Category::Balance,
            difficulty: Difficulty::Intermediate,
            level: 5,
            description: "The art of balancing on your hands. Demands mobility and shoulder strength.".to_string(),
            image: "https://images.unsplash.com/photo-1566241142559-40e1dab266c6?auto=format&fit=crop&q=80&w=800".to_string(),
            steps: strings(&[
                "Hands shoulder-width apart",
                "Spread the fingers wide and grip the floor",
                "Push actively through the shoulders (elevation)",
                "Hollow body position",
            ]),
            progression: strings(&["Wall Handstand", "Pike Hold", "Frog Stand"]),
            unlocks: strings(&["Handstand Push Up", "One Arm Handstand", "90 Degree Push Up"]),
        },
        SkillRecord {
            id: "planche".to_string(),
            title: "Planche".to_string(),
            category: Category::Static,
            difficulty: Difficulty::GodTier,
            level: 10,
            description: "The body floats parallel to the floor, held up by the hands alone.".to_string(),
            image: "https://images.unsplash.com/photo-1599058945522-28d584b6f0ff?auto=format&fit=crop&q=80&w=800".to_string(),
            steps: strings(&[
                "Arms straight (elbows locked)",
                "Lean the shoulders far past the hands",
                "Scapula protraction (rounded upper back)",
                "Legs straight and together",
            ]),
            progression: strings(&[
                "Planche Lean",
                "Tuck Planche",
                "Adv. Tuck Planche",
                "Straddle Planche",
            ]),
            unlocks: strings(&["Maltese", "Planche Push Ups"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(id: &str, level: u8) -> SkillRecord {
        SkillRecord {
            id: id.to_string(),
            title: id.to_uppercase(),
            category: Category::Push,
            difficulty: Difficulty::Beginner,
            level,
            description: String::new(),
            image: String::new(),
            steps: Vec::new(),
            progression: Vec::new(),
            unlocks: Vec::new(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = SkillCatalog::builtin();
        let revalidated = SkillCatalog::new(builtin.skills().to_vec());
        assert!(revalidated.is_ok());
        assert_eq!(builtin.len(), 6);
    }

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = SkillCatalog::builtin();
        let ids: Vec<&str> = catalog.skills().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["pushup", "pullup", "muscleup", "frontlever", "handstand", "planche"]
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = SkillCatalog::new(vec![record("a", 1), record("a", 2)]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "a"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = SkillCatalog::new(vec![record("a", 1), record("  ", 2)]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyId(1)));
    }

    #[test]
    fn test_level_bounds() {
        assert!(SkillCatalog::new(vec![record("a", 1), record("b", 10)]).is_ok());

        let err = SkillCatalog::new(vec![record("zero", 0)]).unwrap_err();
        assert!(matches!(err, CatalogError::LevelOutOfRange { level: 0, .. }));

        let err = SkillCatalog::new(vec![record("eleven", 11)]).unwrap_err();
        assert!(matches!(err, CatalogError::LevelOutOfRange { level: 11, .. }));
    }

    #[test]
    fn test_level_percent() {
        assert_eq!(record("a", 1).level_percent(), 10);
        assert_eq!(record("b", 10).level_percent(), 100);
    }

    #[test]
    fn test_get_and_require() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(catalog.get("planche").map(|s| s.title.as_str()), Some("Planche"));
        assert!(catalog.get("maltese").is_none());

        let err = catalog.require("maltese").unwrap_err();
        assert!(err.user_message().contains("maltese"));
    }

    #[test]
    fn test_from_json_with_god_tier() {
        let json = r#"[{
            "id": "maltese",
            "title": "Maltese",
            "category": "Static",
            "difficulty": "God Tier",
            "level": 10,
            "description": "",
            "image": "",
            "steps": [],
            "progression": ["Planche"],
            "unlocks": []
        }]"#;
        let catalog = SkillCatalog::from_json(json).unwrap();
        let skill = catalog.get("maltese").unwrap();
        assert_eq!(skill.difficulty, Difficulty::GodTier);
        assert_eq!(skill.category, Category::Static);
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let json = r#"[{
            "id": "x", "title": "X", "category": "Legs", "difficulty": "Beginner",
            "level": 1, "description": "", "image": "", "steps": [],
            "progression": [], "unlocks": []
        }]"#;
        let err = SkillCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_from_json_file_round_trips_builtin() {
        let builtin = SkillCatalog::builtin();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(builtin.skills()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = SkillCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(loaded.skills(), builtin.skills());
    }

    #[test]
    fn test_from_json_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = SkillCatalog::from_json_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
