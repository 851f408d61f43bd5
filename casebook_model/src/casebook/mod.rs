//! The case file - every collection of the site, loaded together.

use serde::Serialize;

use crate::entities::{Chapter, Character, Clue, ClueCategory, Entity, Journal, Slug};
use crate::skills::SkillTable;

/// All content of the site.
///
/// Each collection is owned independently; cross-references (character ->
/// skill, entry -> reader) stay string keys and are resolved at render time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Casebook {
    /// Book chapters in reading order.
    pub chapters: Vec<Chapter>,

    pub characters: Vec<Entity<Character>>,

    pub skills: SkillTable,

    /// Clues of all categories: documents, then botanicals, then artifacts.
    pub clues: Vec<Clue>,

    pub journals: Vec<Journal>,
}

impl Casebook {
    /// Create an empty case file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get chapter by slug.
    pub fn chapter(&self, slug: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.slug.as_str() == slug)
    }

    /// Get character by slug.
    pub fn character(&self, slug: &str) -> Option<&Entity<Character>> {
        self.characters.iter().find(|c| c.slug.as_str() == slug)
    }

    /// Get clue by slug.
    pub fn clue(&self, slug: &str) -> Option<&Clue> {
        self.clues.iter().find(|c| c.slug.as_str() == slug)
    }

    /// Get journal by slug.
    pub fn journal(&self, slug: &str) -> Option<&Journal> {
        self.journals.iter().find(|j| j.slug.as_str() == slug)
    }

    /// Clues of one category, in load order.
    pub fn clues_in(&self, category: ClueCategory) -> impl Iterator<Item = &Clue> {
        self.clues.iter().filter(move |c| c.category == category)
    }

    /// Skill keys referenced by characters that the skills table does not define.
    pub fn unresolved_skill_keys(&self) -> Vec<(&Slug, &str)> {
        let skills = &self.skills;
        self.characters
            .iter()
            .flat_map(move |character| {
                character
                    .skill_keys()
                    .filter(move |key| !skills.contains(key))
                    .map(move |key| (&character.slug, key))
            })
            .collect()
    }

    /// Slugs shared by more than one clue. Clue pages are published under
    /// one URL namespace regardless of category, so these collide.
    pub fn colliding_clue_slugs(&self) -> Vec<&Slug> {
        let mut seen = std::collections::HashSet::new();
        let mut colliding = Vec::new();
        for clue in &self.clues {
            if !seen.insert(&clue.slug) && !colliding.contains(&&clue.slug) {
                colliding.push(&clue.slug);
            }
        }
        colliding
    }
}
