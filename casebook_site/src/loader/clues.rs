//! Clue and journal aggregation.

use casebook_model::{Clue, ClueCategory, ClueData, Journal, JournalData};
use std::path::Path;
use tracing::info;

use super::{load_entities, DirectoryPolicy};
use crate::error::Result;

/// Load the clues of one category from `data_dir/<category dir>/`.
/// A missing directory yields no clues.
pub fn load_clue_category(data_dir: &Path, category: ClueCategory) -> Result<Vec<Clue>> {
    let dir = data_dir.join(category.directory());
    let clues: Vec<Clue> = load_entities::<ClueData>(&dir, DirectoryPolicy::Optional)?
        .into_iter()
        .map(|entity| Clue::new(entity, category))
        .collect();
    info!(%category, count = clues.len(), "loaded clues");
    Ok(clues)
}

/// Load all clue categories into one sequence: documents, botanicals, artifacts.
pub fn load_clues(data_dir: &Path) -> Result<Vec<Clue>> {
    let mut clues = Vec::new();
    for category in ClueCategory::ALL {
        clues.extend(load_clue_category(data_dir, category)?);
    }
    Ok(clues)
}

/// Load journals from `dir`. Journals stay separate from the clue sequence.
pub fn load_journals(dir: &Path) -> Result<Vec<Journal>> {
    let journals: Vec<Journal> = load_entities::<JournalData>(dir, DirectoryPolicy::Optional)?
        .into_iter()
        .map(Journal::new)
        .collect();
    info!(count = journals.len(), "loaded journals");
    Ok(journals)
}
