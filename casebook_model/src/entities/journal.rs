//! Journals: diaries made of dated entries, annotated per reader.

use serde::{Deserialize, Serialize};

use super::{first_present, interpretation_for, null_as_default, Entity, Entry, Interpretations, Slug};

/// Fields of a journal file (`data/journals/<slug>.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalData {
    #[serde(default, skip_serializing)]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<Entry>,

    /// Journal-level interpretations, one per reader.
    #[serde(
        default,
        alias = "interpretations",
        deserialize_with = "null_as_default",
        skip_serializing_if = "indexmap::IndexMap::is_empty"
    )]
    pub character_interpretations: Interpretations,

    /// Any other fields of the source file, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A journal with its resolved display title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Journal {
    pub slug: Slug,
    pub title: String,
    #[serde(flatten)]
    pub data: JournalData,
}

impl Journal {
    /// Resolve the title from the `title` field, else from the slug.
    pub fn new(entity: Entity<JournalData>) -> Self {
        let title = first_present(&[entity.data.title.as_deref()])
            .map(str::to_string)
            .unwrap_or_else(|| entity.slug.to_title());
        Self {
            slug: entity.slug,
            title,
            data: entity.data,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.data.entries
    }

    /// The journal-level interpretation written for `reader`, if any.
    pub fn interpretation_for(&self, reader: &str) -> Option<&str> {
        interpretation_for(&self.data.character_interpretations, reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journal(slug: &str, json: &str) -> Journal {
        let data: JournalData = serde_json::from_str(json).unwrap();
        Journal::new(Entity::new(Slug::new(slug), data))
    }

    #[test]
    fn test_title_from_slug() {
        let journal = journal("the_gardeners_diary", r#"{"entries": []}"#);
        assert_eq!(journal.title, "The Gardeners Diary");
    }

    #[test]
    fn test_explicit_title() {
        let journal = journal("diary", r#"{"title": "Private Notes"}"#);
        assert_eq!(journal.title, "Private Notes");
    }

    #[test]
    fn test_entries_keep_order_and_interpretations() {
        let journal = journal(
            "diary",
            r#"{
                "entries": [
                    {"date": "1890-03-01", "content": "First."},
                    {"date": "1890-03-02", "content": "Second.",
                     "character_interpretations": {"doctor": "Shaky hand."}}
                ],
                "character_interpretations": {"doctor": "Written in haste."}
            }"#,
        );

        assert_eq!(journal.entries().len(), 2);
        assert_eq!(journal.entries()[0].content, "First.");
        assert_eq!(journal.entries()[1].interpretation_for("doctor"), Some("Shaky hand."));
        assert_eq!(journal.interpretation_for("doctor"), Some("Written in haste."));
        assert_eq!(journal.interpretation_for("butler"), None);
    }

    #[test]
    fn test_interpretations_alias() {
        let journal = journal("diary", r#"{"interpretations": {"maid": "She knows."}}"#);
        assert_eq!(journal.interpretation_for("maid"), Some("She knows."));
    }
}
