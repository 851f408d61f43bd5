//! Book chapters.

use serde::{Deserialize, Serialize};

use super::{null_as_default, Entry, Slug};

/// Fields of a chapter file (`data/book/<slug>.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChapterData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<Entry>,

    /// Any other fields of the source file, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A chapter placed in reading order.
///
/// `index` and the adjacent slugs come from the position of the source file
/// in lexical filename order, never from the file's contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chapter {
    pub slug: Slug,
    pub index: usize,
    #[serde(rename = "prevSlug")]
    pub prev_slug: Option<Slug>,
    #[serde(rename = "nextSlug")]
    pub next_slug: Option<Slug>,
    #[serde(flatten)]
    pub data: ChapterData,
}

impl Chapter {
    pub fn is_first(&self) -> bool {
        self.prev_slug.is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next_slug.is_none()
    }

    /// Title to display; falls back to the slug.
    pub fn display_title(&self) -> String {
        match self.data.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => self.slug.to_title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_data_keeps_unknown_fields() {
        let data: ChapterData = serde_json::from_str(
            r#"{"title": "Arrival", "epigraph": "Fog.", "entries": [{"date": "1890-03-05", "content": "x"}]}"#,
        )
        .unwrap();

        assert_eq!(data.title.as_deref(), Some("Arrival"));
        assert_eq!(data.entries.len(), 1);
        assert_eq!(data.extra["epigraph"], "Fog.");
    }

    #[test]
    fn test_chapter_serializes_navigation_keys() {
        let chapter = Chapter {
            slug: Slug::new("b"),
            index: 1,
            prev_slug: Some(Slug::new("a")),
            next_slug: None,
            data: ChapterData::default(),
        };

        let value = serde_json::to_value(&chapter).unwrap();
        assert_eq!(value["slug"], "b");
        assert_eq!(value["index"], 1);
        assert_eq!(value["prevSlug"], "a");
        assert!(value["nextSlug"].is_null());
        assert!(chapter.is_last());
        assert!(!chapter.is_first());
    }

    #[test]
    fn test_display_title_fallback() {
        let chapter = Chapter {
            slug: Slug::new("chapter_one"),
            index: 0,
            prev_slug: None,
            next_slug: None,
            data: ChapterData::default(),
        };
        assert_eq!(chapter.display_title(), "Chapter One");
    }
}
