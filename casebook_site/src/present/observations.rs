//! Reader-specific observations on clue and journal pages.
//!
//! Each lookup takes the current reader explicitly. With no reader, or no
//! interpretation written for the reader, the observation region stays hidden.

use casebook_model::{Clue, Journal};

use super::book::{entry_content_html, entry_date_line};
use super::html::{element, observation_region, script_global, text_element};

/// Observations of one reader on a journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalObservations<'a> {
    /// One slot per entry, in entry order.
    pub entries: Vec<Option<&'a str>>,
    /// The journal-level observation.
    pub journal: Option<&'a str>,
}

impl JournalObservations<'_> {
    pub fn is_empty(&self) -> bool {
        self.journal.is_none() && self.entries.iter().all(Option::is_none)
    }
}

/// Resolve the per-entry and journal-level observations for `reader`.
pub fn journal_observations<'a>(journal: &'a Journal, reader: Option<&str>) -> JournalObservations<'a> {
    JournalObservations {
        entries: journal
            .entries()
            .iter()
            .map(|entry| reader.and_then(|reader| entry.interpretation_for(reader)))
            .collect(),
        journal: reader.and_then(|reader| journal.interpretation_for(reader)),
    }
}

/// Resolve the observation on a clue for `reader`.
pub fn clue_observation<'a>(clue: &'a Clue, reader: Option<&str>) -> Option<&'a str> {
    reader.and_then(|reader| clue.interpretation_for(reader))
}

/// Render a journal page for `reader`.
///
/// The entries and the journal-level interpretations are embedded as
/// `entries` and `journalInterpretations` so page scripts can reveal the
/// observations of a reader chosen in the browser.
pub fn journal_page_html(journal: &Journal, reader: Option<&str>) -> Result<String, serde_json::Error> {
    let observations = journal_observations(journal, reader);
    let entries = serde_json::to_value(journal.entries())?;
    let interpretations = serde_json::to_value(&journal.data.character_interpretations)?;

    let mut parts = vec![text_element("h1", Some("journalTitle"), &journal.title)];
    for (index, (entry, observation)) in journal
        .entries()
        .iter()
        .zip(&observations.entries)
        .enumerate()
    {
        let number = index + 1;
        let body = [
            text_element("div", None, &entry_date_line(entry)),
            element("div", None, &entry_content_html(entry)),
            observation_region(
                &format!("entryObservation-{number}"),
                &format!("entryAnalysis-{number}"),
                *observation,
            ),
        ]
        .concat();
        parts.push(element("article", Some(&format!("entry-{number}")), &body));
    }
    parts.push(observation_region(
        "characterObservations",
        "characterAnalysis",
        observations.journal,
    ));
    let globals = [
        script_global("entries", &entries),
        script_global("journalInterpretations", &interpretations),
    ]
    .join("\n");
    parts.push(element("script", None, &globals));
    Ok(parts.join("\n"))
}

/// Render a clue page for `reader`, embedding the clue for page scripts.
pub fn clue_page_html(clue: &Clue, reader: Option<&str>) -> Result<String, serde_json::Error> {
    let analysis = clue_observation(clue, reader).map(|text| element("p", None, text));
    let data = serde_json::to_value(clue)?;

    Ok([
        text_element("h1", Some("clueTitle"), &clue.title),
        text_element("p", Some("clueType"), clue.category.label()),
        observation_region("characterObservations", "characterAnalysis", analysis.as_deref()),
        element("script", None, &script_global("clue", &data)),
    ]
    .join("\n"))
}
