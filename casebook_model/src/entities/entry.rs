//! Dated narrative entries shared by book chapters and journals.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Reader identifier -> interpretation text, in source order.
pub type Interpretations = IndexMap<String, String>;

/// Look up the interpretation written for `reader`, treating blank text as absent.
pub fn interpretation_for<'a>(interpretations: &'a Interpretations, reader: &str) -> Option<&'a str> {
    interpretations
        .get(reader)
        .map(String::as_str)
        .filter(|text| !text.is_empty())
}

/// One dated passage of a chapter or journal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Free text; paragraphs are separated by blank lines.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_italic: bool,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub character_interpretations: Interpretations,
}

impl Entry {
    /// Create an entry with the given date and content.
    pub fn new(date: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Mark the entry as set in italics.
    pub fn italic(mut self) -> Self {
        self.is_italic = true;
        self
    }

    /// Attach an interpretation for a reader.
    pub fn with_interpretation(mut self, reader: impl Into<String>, text: impl Into<String>) -> Self {
        self.character_interpretations.insert(reader.into(), text.into());
        self
    }

    /// The interpretation of this entry written for `reader`, if any.
    pub fn interpretation_for(&self, reader: &str) -> Option<&str> {
        interpretation_for(&self.character_interpretations, reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_defaults() {
        let entry: Entry = serde_json::from_str(r#"{"date": "1890-03-05"}"#).unwrap();
        assert_eq!(entry.date, "1890-03-05");
        assert!(entry.location.is_none());
        assert!(entry.content.is_empty());
        assert!(!entry.is_italic);
        assert!(entry.character_interpretations.is_empty());
    }

    #[test]
    fn test_entry_null_fields() {
        let entry: Entry =
            serde_json::from_str(r#"{"date": null, "content": null, "is_italic": null}"#).unwrap();
        assert!(entry.date.is_empty());
        assert!(!entry.is_italic);
    }

    #[test]
    fn test_interpretation_lookup() {
        let entry = Entry::new("1890-03-05", "It rained.")
            .with_interpretation("detective", "The ink is smudged.")
            .with_interpretation("butler", "");

        assert_eq!(entry.interpretation_for("detective"), Some("The ink is smudged."));
        assert_eq!(entry.interpretation_for("butler"), None);
        assert_eq!(entry.interpretation_for("maid"), None);
    }
}
