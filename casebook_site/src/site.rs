//! Site build - writes one page per entity under the output directory.
//!
//! Pages land at `<output>/<kind>/<slug>.html`, mirroring slugs to URL paths,
//! next to an `index.json` listing every collection.

use casebook_model::{Casebook, EntityKind, Slug};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::error::BuildError;
use crate::loader::load_casebook;
use crate::present::{chapter_page_html, clue_page_html, journal_page_html, CharacterSheet};

pub const INDEX_FILE: &str = "index.json";

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub pages_written: usize,
}

/// Renders a loaded case file into the output tree.
pub struct SiteBuilder<'a> {
    casebook: &'a Casebook,
    output_dir: PathBuf,
    reader: Option<String>,
}

impl<'a> SiteBuilder<'a> {
    pub fn new(casebook: &'a Casebook, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            casebook,
            output_dir: output_dir.into(),
            reader: None,
        }
    }

    /// Pre-render clue and journal observations for this reader.
    pub fn with_reader(mut self, reader: Option<String>) -> Self {
        self.reader = reader;
        self
    }

    /// Path of the page for an entity.
    pub fn page_path(&self, kind: EntityKind, slug: &Slug) -> PathBuf {
        self.output_dir
            .join(kind.url_segment())
            .join(format!("{slug}.html"))
    }

    /// Write every page and the index. Stops at the first failure.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let casebook = self.casebook;
        let reader = self.reader.as_deref();
        let mut pages_written = 0;

        for chapter in &casebook.chapters {
            self.write_page(EntityKind::Chapter, &chapter.slug, &chapter_page_html(chapter)?)?;
            pages_written += 1;
        }
        for character in &casebook.characters {
            let sheet = CharacterSheet::render(character, &casebook.skills);
            self.write_page(EntityKind::Character, &character.slug, &sheet.to_html())?;
            pages_written += 1;
        }
        for clue in &casebook.clues {
            self.write_page(EntityKind::Clue, &clue.slug, &clue_page_html(clue, reader)?)?;
            pages_written += 1;
        }
        for journal in &casebook.journals {
            self.write_page(EntityKind::Journal, &journal.slug, &journal_page_html(journal, reader)?)?;
            pages_written += 1;
        }

        let index = serde_json::to_string_pretty(&site_index(casebook))?;
        write_file(&self.output_dir.join(INDEX_FILE), &index)?;

        info!(
            output = %self.output_dir.display(),
            pages = pages_written,
            "site build complete"
        );
        Ok(BuildReport {
            output_dir: self.output_dir.clone(),
            pages_written,
        })
    }

    fn write_page(&self, kind: EntityKind, slug: &Slug, html: &str) -> Result<(), BuildError> {
        let path = self.page_path(kind, slug);
        write_file(&path, html)?;
        debug!(path = %path.display(), "wrote page");
        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    let write = |source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write)?;
    }
    fs::write(path, contents).map_err(write)
}

/// Listing of every collection, in load order.
pub fn site_index(casebook: &Casebook) -> Value {
    json!({
        "chapters": casebook.chapters.iter().map(|chapter| json!({
            "slug": chapter.slug,
            "index": chapter.index,
            "title": chapter.display_title(),
            "prevSlug": chapter.prev_slug,
            "nextSlug": chapter.next_slug,
        })).collect::<Vec<_>>(),
        "characters": casebook.characters.iter().map(|character| json!({
            "slug": character.slug,
            "title": character.title,
        })).collect::<Vec<_>>(),
        "clues": casebook.clues.iter().map(|clue| json!({
            "slug": clue.slug,
            "clueType": clue.category,
            "title": clue.title,
        })).collect::<Vec<_>>(),
        "journals": casebook.journals.iter().map(|journal| json!({
            "slug": journal.slug,
            "title": journal.title,
        })).collect::<Vec<_>>(),
    })
}

/// Load the content tree named by `config` and build the site from it.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport, BuildError> {
    let casebook = load_casebook(&config.data_dir)?;
    SiteBuilder::new(&casebook, &config.output_dir)
        .with_reader(config.reader.clone())
        .build()
}
