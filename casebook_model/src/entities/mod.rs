//! Entity definitions for the case file.

mod chapter;
mod character;
mod clue;
mod entry;
mod journal;

pub use chapter::*;
pub use character::*;
pub use clue::*;
pub use entry::*;
pub use journal::*;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Borrow;
use std::ops::Deref;
use std::path::Path;

/// Identifier of an entity, derived from its source filename minus extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Create a slug from an already-derived identifier.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Derive the slug from a content file path (`data/book/ch1.json` -> `ch1`).
    ///
    /// Returns `None` when the file stem is not valid UTF-8.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .map(|stem| Self(stem.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable form: underscores become spaces and every word starts
    /// upper-case (`the_old_diary` -> `The Old Diary`).
    pub fn to_title(&self) -> String {
        let mut title = String::with_capacity(self.0.len());
        let mut at_word_start = true;
        for c in self.0.chars() {
            let c = if c == '_' { ' ' } else { c };
            if c.is_alphanumeric() {
                if at_word_start {
                    title.extend(c.to_uppercase());
                } else {
                    title.push(c);
                }
                at_word_start = false;
            } else {
                title.push(c);
                at_word_start = true;
            }
        }
        title
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for Slug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Kinds of pages the case file is published as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Chapter,
    Character,
    Clue,
    Journal,
}

impl EntityKind {
    /// URL path segment the kind is published under.
    pub fn url_segment(&self) -> &'static str {
        match self {
            EntityKind::Chapter => "book",
            EntityKind::Character => "character",
            EntityKind::Clue => "clue",
            EntityKind::Journal => "journal",
        }
    }
}

/// A record parsed from one content file, tagged with its slug.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity<T> {
    pub slug: Slug,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Entity<T> {
    pub fn new(slug: Slug, data: T) -> Self {
        Self { slug, data }
    }

    /// Transform the payload, keeping the slug.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Entity<U> {
        Entity {
            slug: self.slug,
            data: f(self.data),
        }
    }
}

impl<T> Deref for Entity<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

/// Decode a field that may be absent or `null` into its default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a map of free text leniently: `null` values become empty text and
/// numbers or booleans keep their JSON spelling.
pub(crate) fn lenient_text_map<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Option<IndexMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                serde_json::Value::Null => String::new(),
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            };
            (key, text)
        })
        .collect())
}

/// First of the candidates that is present and non-empty.
pub(crate) fn first_present<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_slug_from_path() {
        let slug = Slug::from_path(&PathBuf::from("data/book/chapter10.json")).unwrap();
        assert_eq!(slug.as_str(), "chapter10");
    }

    #[test]
    fn test_slug_to_title() {
        assert_eq!(Slug::new("the_old_diary").to_title(), "The Old Diary");
        assert_eq!(Slug::new("doctor_o'hara").to_title(), "Doctor O'Hara");
        assert_eq!(Slug::new("entry2").to_title(), "Entry2");
    }

    #[test]
    fn test_url_segments() {
        assert_eq!(EntityKind::Chapter.url_segment(), "book");
        assert_eq!(EntityKind::Journal.url_segment(), "journal");
    }

    #[test]
    fn test_first_present_skips_blank() {
        assert_eq!(first_present(&[Some(""), Some("Name")]), Some("Name"));
        assert_eq!(first_present(&[None, None]), None);
    }
}
