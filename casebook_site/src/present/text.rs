//! Text shaping shared by the build-time pages and the in-page scripts.

use chrono::{NaiveDate, TimeDelta};
use regex::Regex;
use std::sync::LazyLock;

// A period, whitespace, then an upper-case letter starts a new sentence.
static SENTENCE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s+[A-Z]").expect("sentence break pattern"));

static PARAGRAPH_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\n+").expect("paragraph break pattern"));

/// Split text into sentences at every `.` + whitespace + capital letter.
///
/// The period stays with the sentence it ends, the whitespace is dropped, and
/// fragments are trimmed; empty fragments are discarded.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut start = 0;
    for found in SENTENCE_BREAK_RE.find_iter(text) {
        fragments.push(&text[start..found.start() + 1]);
        // The capital is ASCII, one byte wide.
        start = found.end() - 1;
    }
    fragments.push(&text[start..]);

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split entry content into paragraphs at blank lines.
///
/// Blank paragraphs are dropped and single newlines inside a paragraph become spaces.
pub fn split_paragraphs(content: &str) -> Vec<String> {
    PARAGRAPH_BREAK_RE
        .split(content)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .map(|paragraph| paragraph.replace('\n', " "))
        .collect()
}

/// Format a `YYYY-MM-DD` date in the en-US long form (`March 5, 1890`).
///
/// Dates resolve the way a browser `Date` does. Years 0 to 99 mean 1900 to
/// 1999, and an out-of-range month or day rolls over, so `1890-02-30` is
/// `March 2, 1890`. Empty input gives an empty string; anything that is not
/// three numeric parts is returned unchanged.
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    parse_date(date)
        .map(|parsed| parsed.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = date.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return None;
    };
    let year: i64 = year.trim().parse().ok()?;
    let month: i64 = month.trim().parse().ok()?;
    let day: i64 = day.trim().parse().ok()?;

    let year = if (0..=99).contains(&year) { year + 1900 } else { year };
    let months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let first = NaiveDate::from_ymd_opt(
        i32::try_from(months.div_euclid(12)).ok()?,
        u32::try_from(months.rem_euclid(12) + 1).ok()?,
        1,
    )?;
    first.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

/// Label for a relationship key: first character upper-cased, underscores
/// replaced by spaces (`lady_of_the_house` -> `Lady of the house`).
pub fn relationship_label(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.map(|c| if c == '_' { ' ' } else { c }))
            .collect(),
        None => String::new(),
    }
}
