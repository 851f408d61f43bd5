//! Character sheets - the dossier page of one character.

use casebook_model::{Character, SkillCategory, SkillTable};
use std::path::PathBuf;
use tracing::error;

use super::html::{element, escape_html, text_element};
use super::text::{relationship_label, split_sentences};
use crate::error::Result;
use crate::loader::{load_json_file, load_skill_table, CHARACTER_DIR, SKILLS_FILE};

/// Body of the page when the character or the skills table cannot be loaded.
pub const CHARACTER_ERROR_HTML: &str =
    "<div class=\"container\"><h1>Error loading character data</h1></div>";

/// One paragraph of resolved skill titles.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillLine {
    pub category: SkillCategory,
    /// Titles joined with `", "`.
    pub titles: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveItem {
    pub label: Option<&'static str>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipLine {
    /// `The <Key>` with the key formatted for display.
    pub label: String,
    pub text: String,
}

/// An entry of the starting items list.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemListEntry {
    Link { name: String, href: String },
    /// Shown alone when the character starts with nothing.
    Placeholder(&'static str),
}

impl ItemListEntry {
    pub fn text(&self) -> &str {
        match self {
            ItemListEntry::Link { name, .. } => name,
            ItemListEntry::Placeholder(text) => text,
        }
    }
}

/// A fully resolved character page.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSheet {
    pub title: String,
    pub name: String,
    pub personality: String,
    /// One line per non-empty skill category, in category order.
    pub skills: Vec<SkillLine>,
    /// Background split into sentences, one paragraph each.
    pub background: Vec<String>,
    /// Main objective, then the labelled private objective.
    pub objectives: Vec<ObjectiveItem>,
    pub strategy: String,
    pub relationships: Vec<RelationshipLine>,
    pub starting_items: Vec<ItemListEntry>,
}

impl CharacterSheet {
    /// Resolve a character against the skills table.
    pub fn render(character: &Character, skills: &SkillTable) -> Self {
        let skill_lines = character
            .skills
            .categories()
            .into_iter()
            .filter(|(_, keys)| !keys.is_empty())
            .map(|(category, keys)| SkillLine {
                category,
                titles: skills.joined_titles(keys),
            })
            .collect();

        let relationships = character
            .relationships
            .iter()
            .map(|(key, text)| RelationshipLine {
                label: format!("The {}", relationship_label(key)),
                text: text.clone(),
            })
            .collect();

        let starting_items = if character.starting_items.is_empty() {
            vec![ItemListEntry::Placeholder("None")]
        } else {
            character
                .starting_items
                .iter()
                .map(|item| ItemListEntry::Link {
                    name: item.name.clone(),
                    href: item.link.clone(),
                })
                .collect()
        };

        Self {
            title: character.title.clone(),
            name: character.title.clone(),
            personality: character.personality.clone(),
            skills: skill_lines,
            background: split_sentences(&character.background),
            objectives: vec![
                ObjectiveItem {
                    label: None,
                    text: character.objectives.main.clone(),
                },
                ObjectiveItem {
                    label: Some("Private (optional)"),
                    text: character.objectives.private.clone(),
                },
            ],
            strategy: character.strategy.clone(),
            relationships,
            starting_items,
        }
    }

    /// The rendered line for one skill category, if the character has any.
    pub fn skill_line(&self, category: SkillCategory) -> Option<&str> {
        self.skills
            .iter()
            .find(|line| line.category == category)
            .map(|line| line.titles.as_str())
    }

    /// Render the sheet into the character page template.
    ///
    /// Plain-text fields are escaped. Skill titles, the private objective and
    /// relationship texts are authored markup and are inserted unchanged.
    pub fn to_html(&self) -> String {
        let skills: String = self
            .skills
            .iter()
            .map(|line| {
                element(
                    "p",
                    None,
                    &format!(
                        "<strong>{} {}:</strong> {}",
                        line.category.icon(),
                        line.category.label(),
                        line.titles
                    ),
                )
            })
            .collect();

        let background: String = self
            .background
            .iter()
            .map(|paragraph| text_element("p", None, paragraph))
            .collect();

        let objectives: String = self
            .objectives
            .iter()
            .map(|item| match item.label {
                Some(label) => element("li", None, &format!("<strong>{label}:</strong> {}", item.text)),
                None => text_element("li", None, &item.text),
            })
            .collect();

        let relationships: String = self
            .relationships
            .iter()
            .map(|line| {
                element(
                    "p",
                    None,
                    &format!("<strong>{}:</strong> {}", escape_html(&line.label), line.text),
                )
            })
            .collect();

        let items: String = self
            .starting_items
            .iter()
            .map(|entry| match entry {
                ItemListEntry::Link { name, href } => element(
                    "li",
                    None,
                    &format!("<a href=\"{}\">{}</a>", escape_html(href), escape_html(name)),
                ),
                ItemListEntry::Placeholder(text) => text_element("li", None, text),
            })
            .collect();

        [
            text_element("h1", Some("character-title"), &self.title),
            text_element("h2", Some("character-name"), &self.name),
            text_element("p", Some("personality"), &self.personality),
            element("div", Some("skills"), &skills),
            element("div", Some("background"), &background),
            element("ol", Some("objectives"), &objectives),
            text_element("p", Some("strategy"), &self.strategy),
            element("div", Some("relationships"), &relationships),
            element("ul", Some("starting-items"), &items),
        ]
        .join("\n")
    }
}

/// Outcome of rendering a character page: all of it, or the error notice.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacterPage {
    Sheet(CharacterSheet),
    Failed,
}

impl CharacterPage {
    /// Join the two loads of a character page.
    ///
    /// Rendering starts only when both succeeded; a failure of either
    /// replaces the whole page with the error notice.
    pub fn from_loads(character: Result<Character>, skills: Result<SkillTable>) -> Self {
        match (character, skills) {
            (Ok(character), Ok(skills)) => CharacterPage::Sheet(CharacterSheet::render(&character, &skills)),
            (Err(err), _) | (_, Err(err)) => {
                error!(error = %err, "error loading character data");
                CharacterPage::Failed
            }
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            CharacterPage::Sheet(sheet) => sheet.to_html(),
            CharacterPage::Failed => CHARACTER_ERROR_HTML.to_string(),
        }
    }
}

/// Where a character page gets its two documents from.
pub trait ContentSource {
    fn character(&self, slug: &str) -> Result<Character>;
    fn skills(&self) -> Result<SkillTable>;
}

/// Reads documents straight from a content tree on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    data_dir: PathBuf,
}

impl DirectorySource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl ContentSource for DirectorySource {
    fn character(&self, slug: &str) -> Result<Character> {
        load_json_file(&self.data_dir.join(CHARACTER_DIR).join(format!("{slug}.json")))
    }

    fn skills(&self) -> Result<SkillTable> {
        load_skill_table(&self.data_dir.join(SKILLS_FILE))
    }
}

/// Fetch a character and the skills table, then render the page.
pub fn load_character_page(source: &impl ContentSource, slug: &str) -> CharacterPage {
    let character = source.character(slug);
    let skills = source.skills();
    CharacterPage::from_loads(character, skills)
}
