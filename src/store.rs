use crate::error::{GradeError, Result};
use crate::types::config::GradingConfig;
use crate::types::subject::{Semester, Subject};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SemesterFile {
    semester: SemesterMeta,
    #[serde(default, rename = "subject")]
    subjects: Vec<SubjectRecord>,
}

#[derive(Debug, Deserialize)]
struct SemesterMeta {
    id: String,
    recorded: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubjectRecord {
    id: String,
    name: Option<String>,
    internal: f64,
    external: f64,
    credits: u32,
}

/// Parses a semester TOML file into a validated `Semester`. Every subject
/// is checked against the active scheme here, so the engine only ever sees
/// in-range records.
pub fn load_semester(path: &Path, config: &GradingConfig) -> Result<Semester> {
    let content = std::fs::read_to_string(path)?;
    let file: SemesterFile = toml::from_str(&content)
        .map_err(|e| GradeError::Validation(format!("{}: {}", path.display(), e)))?;

    if file.semester.id.trim().is_empty() {
        return Err(GradeError::Validation(format!(
            "{}: semester id must not be empty",
            path.display()
        )));
    }
    let recorded = match &file.semester.recorded {
        Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
            GradeError::Validation(format!("semester.recorded {raw:?}: {e}"))
        })?),
        None => None,
    };

    let mut seen = HashSet::new();
    let mut subjects = Vec::with_capacity(file.subjects.len());
    for record in file.subjects {
        let subject = Subject {
            name: record.name.unwrap_or_else(|| record.id.clone()),
            id: record.id,
            internal_marks: record.internal,
            external_marks: record.external,
            credits: record.credits,
        };
        subject.validate(config)?;
        if !seen.insert(subject.id.clone()) {
            return Err(GradeError::Validation(format!(
                "duplicate subject id {:?}",
                subject.id
            )));
        }
        subjects.push(subject);
    }

    Ok(Semester {
        id: file.semester.id,
        recorded,
        subjects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_semester(content: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("sem3.toml");
        fs::write(&path, content).expect("semester file should write");
        (dir, path)
    }

    #[test]
    fn well_formed_file_loads() {
        let config = GradingConfig::default_scheme();
        let (_dir, path) = write_semester(
            r#"
[semester]
id = "sem3"
recorded = "2026-01-15"

[[subject]]
id = "MA201"
name = "Mathematics III"
internal = 40.0
external = 60.0
credits = 4

[[subject]]
id = "PH202"
internal = 45.0
external = 80.0
credits = 3
"#,
        );

        let semester = load_semester(&path, &config).expect("semester should load");
        assert_eq!(semester.id, "sem3");
        assert_eq!(
            semester.recorded,
            NaiveDate::from_ymd_opt(2026, 1, 15)
        );
        assert_eq!(semester.subjects.len(), 2);
        assert_eq!(semester.subjects[0].name, "Mathematics III");
        // A missing name falls back to the id.
        assert_eq!(semester.subjects[1].name, "PH202");
    }

    #[test]
    fn out_of_range_marks_fail_validation() {
        let config = GradingConfig::default_scheme();
        let (_dir, path) = write_semester(
            r#"
[semester]
id = "sem3"

[[subject]]
id = "MA201"
internal = 75.0
external = 60.0
credits = 4
"#,
        );
        assert!(matches!(
            load_semester(&path, &config),
            Err(GradeError::Validation(_))
        ));
    }

    #[test]
    fn bad_recorded_date_is_rejected() {
        let config = GradingConfig::default_scheme();
        let (_dir, path) = write_semester(
            r#"
[semester]
id = "sem3"
recorded = "15-01-2026"
"#,
        );
        let err = load_semester(&path, &config).expect_err("bad date should fail");
        assert!(err.to_string().contains("recorded"));
    }

    #[test]
    fn duplicate_subject_ids_are_rejected() {
        let config = GradingConfig::default_scheme();
        let (_dir, path) = write_semester(
            r#"
[semester]
id = "sem3"

[[subject]]
id = "MA201"
internal = 40.0
external = 60.0
credits = 4

[[subject]]
id = "MA201"
internal = 30.0
external = 50.0
credits = 3
"#,
        );
        let err = load_semester(&path, &config).expect_err("duplicate id should fail");
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let config = GradingConfig::default_scheme();
        let dir = TempDir::new().expect("temp dir should be created");
        assert!(matches!(
            load_semester(&dir.path().join("absent.toml"), &config),
            Err(GradeError::Io(_))
        ));
    }
}
