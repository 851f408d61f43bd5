//! Clues: documents, botanical specimens and artifacts.

use serde::{Deserialize, Serialize};

use super::{first_present, interpretation_for, null_as_default, Entity, Interpretations, Slug};

/// The three clue categories, each stored in its own directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClueCategory {
    Document,
    Botanical,
    Artifact,
}

impl ClueCategory {
    /// Aggregation order of the categories.
    pub const ALL: [ClueCategory; 3] = [
        ClueCategory::Document,
        ClueCategory::Botanical,
        ClueCategory::Artifact,
    ];

    /// Name of the data directory holding this category (`data/<dir>/`).
    pub fn directory(&self) -> &'static str {
        match self {
            ClueCategory::Document => "documents",
            ClueCategory::Botanical => "botanicals",
            ClueCategory::Artifact => "artifacts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClueCategory::Document => "document",
            ClueCategory::Botanical => "botanical",
            ClueCategory::Artifact => "artifact",
        }
    }
}

impl std::fmt::Display for ClueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Fields of a clue file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClueData {
    #[serde(default, skip_serializing)]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "indexmap::IndexMap::is_empty"
    )]
    pub character_interpretations: Interpretations,

    /// Any other fields of the source file, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ClueData {
    /// The `title` field, else the `name` field, whichever is first non-empty.
    pub fn display_title(&self) -> Option<&str> {
        first_present(&[self.title.as_deref(), self.name.as_deref()])
    }
}

/// A clue tagged with its category and resolved display title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clue {
    pub slug: Slug,
    #[serde(rename = "clueType")]
    pub category: ClueCategory,
    pub title: String,
    #[serde(flatten)]
    pub data: ClueData,
}

impl Clue {
    /// Tag a loaded clue entity with its category.
    ///
    /// The title resolves `title` -> `name` -> slug.
    pub fn new(entity: Entity<ClueData>, category: ClueCategory) -> Self {
        let title = entity
            .data
            .display_title()
            .map(str::to_string)
            .unwrap_or_else(|| entity.slug.to_string());
        Self {
            slug: entity.slug,
            category,
            title,
            data: entity.data,
        }
    }

    /// The observation written for `reader`, if any.
    pub fn interpretation_for(&self, reader: &str) -> Option<&str> {
        interpretation_for(&self.data.character_interpretations, reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue(json: &str) -> Clue {
        let data: ClueData = serde_json::from_str(json).unwrap();
        Clue::new(Entity::new(Slug::new("letter"), data), ClueCategory::Document)
    }

    #[test]
    fn test_title_prefers_title_field() {
        let clue = clue(r#"{"title": "A Letter", "name": "letter"}"#);
        assert_eq!(clue.title, "A Letter");
        assert_eq!(clue.category, ClueCategory::Document);
    }

    #[test]
    fn test_title_falls_back_to_name() {
        assert_eq!(clue(r#"{"name": "Nightshade"}"#).title, "Nightshade");
        assert_eq!(clue(r#"{"title": "", "name": "Nightshade"}"#).title, "Nightshade");
    }

    #[test]
    fn test_title_falls_back_to_slug() {
        assert_eq!(clue(r#"{"text": "..."}"#).title, "letter");
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(clue(r#"{"name": "Vial", "material": "glass"}"#)).unwrap();
        assert_eq!(value["clueType"], "document");
        assert_eq!(value["title"], "Vial");
        assert_eq!(value["material"], "glass");
    }

    #[test]
    fn test_category_directories() {
        let dirs: Vec<_> = ClueCategory::ALL.iter().map(|c| c.directory()).collect();
        assert_eq!(dirs, vec!["documents", "botanicals", "artifacts"]);
    }
}
