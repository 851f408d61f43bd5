//! Chapter sequencing - reading order of the book.
//!
//! Order is the lexical order of the chapter filenames, so `chapter10.json`
//! comes before `chapter2.json`. Build-time page links and the in-page reader
//! both follow this order.

use casebook_model::{Chapter, ChapterData, Entity};
use std::path::Path;
use tracing::info;

use super::{load_entities, DirectoryPolicy};
use crate::error::Result;

/// Load the chapters of `dir` and link them into reading order.
pub fn load_chapters(dir: &Path) -> Result<Vec<Chapter>> {
    let entities = load_entities::<ChapterData>(dir, DirectoryPolicy::Required)?;
    let chapters = sequence_chapters(entities);
    info!(count = chapters.len(), "loaded book chapters");
    Ok(chapters)
}

/// Sort chapter entities by source filename and assign index and neighbours.
pub fn sequence_chapters(mut entities: Vec<Entity<ChapterData>>) -> Vec<Chapter> {
    // Compare full filenames, not bare slugs: "a-b.json" < "a.json" but "a" < "a-b".
    entities.sort_by_cached_key(|entity| format!("{}.json", entity.slug));

    let slugs: Vec<_> = entities.iter().map(|entity| entity.slug.clone()).collect();
    entities
        .into_iter()
        .enumerate()
        .map(|(index, entity)| Chapter {
            slug: entity.slug,
            index,
            prev_slug: index.checked_sub(1).map(|i| slugs[i].clone()),
            next_slug: slugs.get(index + 1).cloned(),
            data: entity.data,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::loader::fixtures::write;
    use casebook_model::Slug;

    fn chapter(slug: &str) -> Entity<ChapterData> {
        Entity::new(Slug::new(slug), ChapterData::default())
    }

    fn order(chapters: &[Chapter]) -> Vec<&str> {
        chapters.iter().map(|c| c.slug.as_str()).collect()
    }

    #[test]
    fn test_sequence_links_neighbours() {
        let chapters = sequence_chapters(vec![chapter("b"), chapter("a"), chapter("c")]);

        assert_eq!(order(&chapters), vec!["a", "b", "c"]);
        assert_eq!(chapters.iter().map(|c| c.index).collect::<Vec<_>>(), vec![0, 1, 2]);

        assert!(chapters[0].prev_slug.is_none());
        assert_eq!(chapters[0].next_slug.as_ref().unwrap().as_str(), "b");
        assert_eq!(chapters[1].prev_slug.as_ref().unwrap().as_str(), "a");
        assert_eq!(chapters[1].next_slug.as_ref().unwrap().as_str(), "c");
        assert_eq!(chapters[2].prev_slug.as_ref().unwrap().as_str(), "b");
        assert!(chapters[2].next_slug.is_none());
    }

    #[test]
    fn test_order_is_lexical_not_numeric() {
        let chapters = sequence_chapters(vec![chapter("chapter2"), chapter("chapter10"), chapter("chapter1")]);
        assert_eq!(order(&chapters), vec!["chapter1", "chapter10", "chapter2"]);
    }

    #[test]
    fn test_order_follows_filenames() {
        let chapters = sequence_chapters(vec![chapter("a"), chapter("a-b")]);
        assert_eq!(order(&chapters), vec!["a-b", "a"]);
    }

    #[test]
    fn test_single_and_empty_book() {
        let chapters = sequence_chapters(vec![chapter("only")]);
        assert!(chapters[0].is_first() && chapters[0].is_last());
        assert!(sequence_chapters(Vec::new()).is_empty());
    }

    #[test]
    fn test_load_chapters_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.json", r#"{"entries": [{"date": "1890-03-02", "content": "B"}]}"#);
        write(dir.path(), "a.json", r#"{"entries": []}"#);
        write(dir.path(), "c.json", r#"{}"#);

        let chapters = load_chapters(dir.path()).unwrap();
        assert_eq!(order(&chapters), vec!["a", "b", "c"]);
        assert_eq!(chapters[1].data.entries[0].content, "B");
        assert!(chapters[2].data.entries.is_empty());
    }

    #[test]
    fn test_book_directory_is_required() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_chapters(&dir.path().join("book")).unwrap_err();
        assert!(matches!(err, LoadError::MissingDirectory(_)));
    }
}
