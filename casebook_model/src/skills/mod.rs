//! The skills lookup table and the key -> title resolution rule.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::entities::null_as_default;

/// An entry of the skills table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Any other fields of the entry, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Skill {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Skill key -> skill record (`data/skills.json`).
///
/// Characters reference skills by key only; an unknown key is displayed as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillTable(IndexMap<String, Skill>);

impl SkillTable {
    /// Create an empty skills table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, skill: Skill) {
        self.0.insert(key.into(), skill);
    }

    pub fn get(&self, key: &str) -> Option<&Skill> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Resolve a skill key to its display title.
    ///
    /// Falls back to the key itself when the key is unknown or its title is
    /// empty, so the result is never blank for a non-blank key.
    pub fn title_of<'a>(&'a self, key: &'a str) -> &'a str {
        match self.0.get(key) {
            Some(skill) if !skill.title.is_empty() => &skill.title,
            _ => key,
        }
    }

    /// Resolve every key and join the titles with `", "`.
    pub fn joined_titles<S: AsRef<str>>(&self, keys: &[S]) -> String {
        keys.iter()
            .map(|key| self.title_of(key.as_ref()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Skill)> {
        self.0.iter().map(|(key, skill)| (key.as_str(), skill))
    }
}

impl<K: Into<String>> FromIterator<(K, Skill)> for SkillTable {
    fn from_iter<I: IntoIterator<Item = (K, Skill)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, skill)| (key.into(), skill)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SkillTable {
        [
            ("fencing", Skill::new("Swordsmanship")),
            ("poisons", Skill::new("Toxicology")),
            ("blank", Skill::new("")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_known_key_resolves_to_title() {
        let skills = table();
        assert_eq!(skills.title_of("fencing"), "Swordsmanship");
        assert_eq!(skills.title_of("poisons"), "Toxicology");
    }

    #[test]
    fn test_unknown_key_is_identity() {
        let skills = table();
        assert_eq!(skills.title_of("herbalism"), "herbalism");
        assert_eq!(skills.title_of("blank"), "blank");
        assert_eq!(SkillTable::new().title_of("fencing"), "fencing");
    }

    #[test]
    fn test_joined_titles() {
        let skills = table();
        assert_eq!(
            skills.joined_titles(&["fencing", "herbalism"]),
            "Swordsmanship, herbalism"
        );
        assert_eq!(skills.joined_titles::<&str>(&[]), "");
    }

    #[test]
    fn test_decode_table() {
        let skills: SkillTable = serde_json::from_str(
            r#"{"fencing": {"title": "Swordsmanship", "description": "Blades."}, "riding": {}}"#,
        )
        .unwrap();

        assert_eq!(skills.len(), 2);
        assert_eq!(skills.title_of("fencing"), "Swordsmanship");
        assert_eq!(skills.title_of("riding"), "riding");
        assert_eq!(skills.get("fencing").unwrap().extra["description"], "Blades.");
    }
}
