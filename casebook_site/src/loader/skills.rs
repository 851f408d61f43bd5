//! Loading the skills lookup table.

use casebook_model::SkillTable;
use std::path::Path;
use tracing::info;

use super::load_json_file;
use crate::error::Result;

/// Load the skills table from a single JSON object file. The file is required.
pub fn load_skill_table(path: &Path) -> Result<SkillTable> {
    let skills: SkillTable = load_json_file(path)?;
    info!(count = skills.len(), "loaded skills table");
    Ok(skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::loader::fixtures::write;

    #[test]
    fn test_load_skill_table() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "skills.json",
            r#"{"fencing": {"title": "Swordsmanship"}, "poisons": {"title": "Toxicology"}}"#,
        );

        let skills = load_skill_table(&dir.path().join("skills.json")).unwrap();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills.title_of("poisons"), "Toxicology");
        assert_eq!(skills.title_of("herbalism"), "herbalism");
    }

    #[test]
    fn test_skill_table_must_be_an_object() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "skills.json", r#"["fencing"]"#);

        let err = load_skill_table(&dir.path().join("skills.json")).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }
}
