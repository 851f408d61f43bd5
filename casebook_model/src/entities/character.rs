//! Character dossiers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{lenient_text_map, null_as_default};

/// A character dossier (`data/character/<slug>.json`).
///
/// Every field is optional in the source; absent or `null` fields decode to
/// their empty defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub personality: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub background: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub strategy: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: SkillSet,

    #[serde(default, deserialize_with = "null_as_default")]
    pub objectives: Objectives,

    /// Relationship key -> free text, in source order.
    #[serde(default, deserialize_with = "lenient_text_map")]
    pub relationships: IndexMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub starting_items: Vec<StartingItem>,

    /// Any other fields of the source file, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Character {
    /// Create a character with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// All skill keys referenced by this character, category by category.
    pub fn skill_keys(&self) -> impl Iterator<Item = &str> {
        self.skills
            .categories()
            .into_iter()
            .flat_map(|(_, keys)| keys.iter().map(String::as_str))
    }
}

/// Skill proficiency categories on a dossier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Expert,
    Basic,
    Personal,
}

impl SkillCategory {
    /// Display order of the categories.
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Expert,
        SkillCategory::Basic,
        SkillCategory::Personal,
    ];

    /// Label shown in front of the category's skills.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Expert => "Expert",
            SkillCategory::Basic => "Basic knowledge",
            SkillCategory::Personal => "Personal Connection",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SkillCategory::Expert => "⭐",
            SkillCategory::Basic => "📖",
            SkillCategory::Personal => "👥",
        }
    }
}

/// Skill keys grouped by category. Keys reference the skills table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub expert: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub basic: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub personal: Vec<String>,
}

impl SkillSet {
    /// Keys for a single category.
    pub fn keys(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Expert => &self.expert,
            SkillCategory::Basic => &self.basic,
            SkillCategory::Personal => &self.personal,
        }
    }

    /// All categories with their keys, in display order.
    pub fn categories(&self) -> [(SkillCategory, &[String]); 3] {
        SkillCategory::ALL.map(|category| (category, self.keys(category)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Objectives {
    #[serde(default, deserialize_with = "null_as_default")]
    pub main: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub private: String,
}

/// An item the character starts the game with, linking to its clue page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartingItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
}
