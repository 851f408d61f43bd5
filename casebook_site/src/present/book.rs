//! The book reader - one chapter page, shown one entry at a time.
//!
//! Moving past the first or last entry leaves the page for the adjacent
//! chapter; backwards moves land on that chapter's last entry.

use casebook_model::{Chapter, Entry};
use serde_json::json;

use super::html::{element, escape_html, script_global, text_element};
use super::text::{format_date, split_paragraphs};

/// Location fragment that opens a chapter on its final entry.
pub const LAST_ENTRY_FRAGMENT: &str = "last";

/// URL of a chapter page, optionally opened on its last entry.
pub fn chapter_url(slug: &str, at_last_entry: bool) -> String {
    if at_last_entry {
        format!("/book/{slug}.html#{LAST_ENTRY_FRAGMENT}")
    } else {
        format!("/book/{slug}.html")
    }
}

/// `"<formatted date> - <location>"`, with an empty location when absent.
pub fn entry_date_line(entry: &Entry) -> String {
    format!(
        "{} - {}",
        format_date(&entry.date),
        entry.location.as_deref().unwrap_or_default()
    )
}

/// Entry content as paragraph markup, wrapped in emphasis for italic entries.
pub fn entry_content_html(entry: &Entry) -> String {
    let paragraphs: String = split_paragraphs(&entry.content)
        .iter()
        .map(|paragraph| element("p", None, paragraph))
        .collect();
    if entry.is_italic {
        element("em", None, &paragraphs)
    } else {
        paragraphs
    }
}

/// Pick the entry to open from the page's location fragment.
///
/// `last` opens the final entry; a leading positive number `k` within the
/// entry count opens entry `k - 1`; anything else opens the first entry.
pub fn start_entry(fragment: Option<&str>, entry_count: usize) -> usize {
    match fragment {
        Some(LAST_ENTRY_FRAGMENT) => entry_count.saturating_sub(1),
        Some(fragment) => match leading_number(fragment) {
            Some(number) if number > 0 && number <= entry_count => number - 1,
            _ => 0,
        },
        None => 0,
    }
}

// Integer prefix of the fragment, ignoring leading whitespace ("3abc" -> 3).
fn leading_number(fragment: &str) -> Option<usize> {
    let trimmed = fragment.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub label: &'static str,
    pub disabled: bool,
}

/// Everything the reader shows for one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView {
    pub index: usize,
    pub date_line: String,
    pub content_html: String,
    /// `Entry i of n`.
    pub page_label: String,
    /// Fragment the location is set to while the entry is shown.
    pub fragment: String,
    pub previous: ButtonState,
    pub next: ButtonState,
}

/// Result of a previous/next action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Show another entry of this chapter.
    Entry(usize),
    /// Leave for another page.
    Page(String),
    /// Nothing further in that direction.
    Stay,
}

/// Reading position within one chapter.
#[derive(Debug, Clone)]
pub struct BookReader<'a> {
    entries: &'a [Entry],
    prev_chapter: Option<&'a str>,
    next_chapter: Option<&'a str>,
    current: usize,
}

impl<'a> BookReader<'a> {
    /// Open a chapter on its first entry.
    pub fn new(chapter: &'a Chapter) -> Self {
        Self {
            entries: &chapter.data.entries,
            prev_chapter: chapter.prev_slug.as_ref().map(|s| s.as_str()),
            next_chapter: chapter.next_slug.as_ref().map(|s| s.as_str()),
            current: 0,
        }
    }

    /// Open a chapter at the entry named by a location fragment.
    pub fn open(chapter: &'a Chapter, fragment: Option<&str>) -> Self {
        let mut reader = Self::new(chapter);
        reader.current = start_entry(fragment, reader.entries.len());
        reader
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// View of the current entry; `None` for a chapter without entries.
    pub fn view(&self) -> Option<EntryView> {
        self.entry_view(self.current)
    }

    pub fn entry_view(&self, index: usize) -> Option<EntryView> {
        let entry = self.entries.get(index)?;
        let is_first = index == 0;
        let is_last = index + 1 == self.entries.len();

        let previous = ButtonState {
            label: if is_first && self.prev_chapter.is_some() {
                "← Previous Chapter"
            } else {
                "← Previous Entry"
            },
            disabled: is_first && self.prev_chapter.is_none(),
        };
        let next = ButtonState {
            label: if is_last && self.next_chapter.is_some() {
                "Next Chapter →"
            } else {
                "Next Entry →"
            },
            disabled: is_last && self.next_chapter.is_none(),
        };

        Some(EntryView {
            index,
            date_line: entry_date_line(entry),
            content_html: entry_content_html(entry),
            page_label: format!("Entry {} of {}", index + 1, self.entries.len()),
            fragment: (index + 1).to_string(),
            previous,
            next,
        })
    }

    /// Step back one entry, or leave for the previous chapter's last entry.
    pub fn previous(&mut self) -> Navigation {
        if self.current > 0 {
            self.current -= 1;
            Navigation::Entry(self.current)
        } else if let Some(prev) = self.prev_chapter {
            Navigation::Page(chapter_url(prev, true))
        } else {
            Navigation::Stay
        }
    }

    /// Step forward one entry, or leave for the next chapter.
    pub fn next(&mut self) -> Navigation {
        if self.current + 1 < self.entries.len() {
            self.current += 1;
            Navigation::Entry(self.current)
        } else if let Some(next) = self.next_chapter {
            Navigation::Page(chapter_url(next, false))
        } else {
            Navigation::Stay
        }
    }
}

/// Render a chapter page: the first entry pre-filled, plus the page globals
/// `entries`, `prevChapter` and `nextChapter` for the in-page reader.
pub fn chapter_page_html(chapter: &Chapter) -> Result<String, serde_json::Error> {
    let reader = BookReader::new(chapter);
    let mut parts = vec![text_element("h1", Some("chapterTitle"), &chapter.display_title())];

    if let Some(view) = reader.view() {
        parts.push(text_element("div", Some("entryDate"), &view.date_line));
        parts.push(element("div", Some("entryContent"), &view.content_html));
        parts.push(text_element("div", Some("pageNum"), &view.page_label));
        parts.push(button("prevBtn", "previousEntry()", view.previous));
        parts.push(button("nextBtn", "nextEntry()", view.next));
    }

    let globals = [
        script_global("entries", &serde_json::to_value(&chapter.data.entries)?),
        script_global("prevChapter", &json!(chapter.prev_slug)),
        script_global("nextChapter", &json!(chapter.next_slug)),
    ]
    .join("\n");
    parts.push(element("script", None, &globals));

    Ok(parts.join("\n"))
}

fn button(id: &str, action: &str, state: ButtonState) -> String {
    format!(
        "<button id=\"{id}\" onclick=\"{action}\"{}>{}</button>",
        if state.disabled { " disabled" } else { "" },
        escape_html(state.label)
    )
}
