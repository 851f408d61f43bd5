//! Loader module - reads the content tree into entities.
//!
//! The content tree consists of:
//! - **book/**: One file per chapter, ordered by filename
//! - **character/**: One dossier per character
//! - **skills.json**: The skills lookup table
//! - **documents/, botanicals/, artifacts/**: Clues, one directory per category
//! - **journals/**: Journals made of dated entries

mod chapters;
mod clues;
mod skills;

pub use chapters::*;
pub use clues::*;
pub use skills::*;

use casebook_model::{Casebook, Character, Entity, Slug};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{LoadError, Result};

pub const BOOK_DIR: &str = "book";
pub const CHARACTER_DIR: &str = "character";
pub const SKILLS_FILE: &str = "skills.json";
pub const JOURNAL_DIR: &str = "journals";

/// How to treat a content directory that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryPolicy {
    /// Absence aborts the load.
    Required,
    /// Absence yields an empty collection.
    Optional,
}

/// List the `.json` files of a directory in lexical filename order.
///
/// Subdirectories and files with any other extension are ignored.
pub fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| LoadError::io(dir, e))? {
        let path = entry.map_err(|e| LoadError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read and decode a single JSON file.
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every JSON file of `dir` as an entity, tagging each with its slug.
///
/// Entities come back in lexical filename order. A malformed file fails the
/// whole directory; a missing directory fails only under
/// [`DirectoryPolicy::Required`].
pub fn load_entities<T: DeserializeOwned>(dir: &Path, policy: DirectoryPolicy) -> Result<Vec<Entity<T>>> {
    if !dir.is_dir() {
        return match policy {
            DirectoryPolicy::Required => Err(LoadError::MissingDirectory(dir.to_path_buf())),
            DirectoryPolicy::Optional => {
                debug!(dir = %dir.display(), "optional content directory absent");
                Ok(Vec::new())
            }
        };
    }

    let mut entities = Vec::new();
    for path in json_files(dir)? {
        // Stems that are not UTF-8 cannot name a page.
        let Some(slug) = Slug::from_path(&path) else {
            warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        let data = load_json_file(&path)?;
        debug!(%slug, path = %path.display(), "loaded entity");
        entities.push(Entity::new(slug, data));
    }
    Ok(entities)
}

/// Load character dossiers from `data/character/`.
pub fn load_characters(data_dir: &Path) -> Result<Vec<Entity<Character>>> {
    load_entities(&data_dir.join(CHARACTER_DIR), DirectoryPolicy::Required)
}

/// Load the whole content tree rooted at `data_dir`.
///
/// Stops at the first fatal error; nothing is returned partially.
pub fn load_casebook(data_dir: &Path) -> Result<Casebook> {
    let casebook = Casebook {
        chapters: load_chapters(&data_dir.join(BOOK_DIR))?,
        characters: load_characters(data_dir)?,
        skills: load_skill_table(&data_dir.join(SKILLS_FILE))?,
        clues: load_clues(data_dir)?,
        journals: load_journals(&data_dir.join(JOURNAL_DIR))?,
    };

    for (character, key) in casebook.unresolved_skill_keys() {
        warn!(%character, key, "skill key not in skills table, shown as-is");
    }
    for slug in casebook.colliding_clue_slugs() {
        warn!(%slug, "clue slug used by more than one category");
    }

    info!(
        chapters = casebook.chapters.len(),
        characters = casebook.characters.len(),
        skills = casebook.skills.len(),
        clues = casebook.clues.len(),
        journals = casebook.journals.len(),
        "content loaded"
    );
    Ok(casebook)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::Path;

    /// Write `content` to `dir/name`, creating `dir` as needed.
    pub fn write(dir: &Path, name: &str, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    /// A small but complete content tree.
    pub fn content_tree(root: &Path) {
        write(&root.join("book"), "chapter1.json", r#"{"title": "Arrival", "entries": [{"date": "1890-03-05", "location": "Station", "content": "Fog."}]}"#);
        write(&root.join("book"), "chapter2.json", r#"{"title": "Dinner", "entries": []}"#);
        write(
            &root.join("character"),
            "butler.json",
            r#"{"title": "The Butler", "skills": {"expert": ["fencing", "herbalism"]}, "objectives": {"main": "Serve.", "private": "Inherit."}}"#,
        );
        write(root, "skills.json", r#"{"fencing": {"title": "Swordsmanship"}}"#);
        write(&root.join("documents"), "letter.json", r#"{"title": "A Letter", "character_interpretations": {"butler": "My hand."}}"#);
        write(&root.join("artifacts"), "vial.json", r#"{"name": "Empty Vial"}"#);
        write(
            &root.join("journals"),
            "lady_diary.json",
            r#"{"entries": [{"date": "1890-03-01", "content": "Cold.", "character_interpretations": {"butler": "She lies."}}]}"#,
        );
    }
}
