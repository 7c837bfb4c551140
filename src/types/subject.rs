use crate::error::{GradeError, Result};
use crate::types::config::GradingConfig;
use chrono::NaiveDate;
use serde::Serialize;

/// One subject's raw marks as entered by the user. The engine never
/// mutates a subject in place; hypothetical probes clone the list and
/// override a single field on the copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub internal_marks: f64,
    pub external_marks: f64,
    pub credits: u32,
}

impl Subject {
    pub fn validate(&self, config: &GradingConfig) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(GradeError::Validation(
                "subject id must not be empty".to_string(),
            ));
        }
        if !self.internal_marks.is_finite()
            || !(0.0..=config.scale.max_internal).contains(&self.internal_marks)
        {
            return Err(GradeError::Validation(format!(
                "subject {:?}: internal marks {} outside [0, {}]",
                self.id, self.internal_marks, config.scale.max_internal
            )));
        }
        if !self.external_marks.is_finite()
            || !(0.0..=config.scale.max_external).contains(&self.external_marks)
        {
            return Err(GradeError::Validation(format!(
                "subject {:?}: external marks {} outside [0, {}]",
                self.id, self.external_marks, config.scale.max_external
            )));
        }
        if self.credits == 0 {
            return Err(GradeError::Validation(format!(
                "subject {:?}: credits must be positive",
                self.id
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Semester {
    pub id: String,
    pub recorded: Option<NaiveDate>,
    pub subjects: Vec<Subject>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(internal: f64, external: f64, credits: u32) -> Subject {
        Subject {
            id: "MA201".to_string(),
            name: "Mathematics III".to_string(),
            internal_marks: internal,
            external_marks: external,
            credits,
        }
    }

    #[test]
    fn valid_subject_passes() {
        let config = GradingConfig::default_scheme();
        subject(40.0, 60.0, 4)
            .validate(&config)
            .expect("in-range subject should validate");
    }

    #[test]
    fn marks_over_maximum_are_rejected() {
        let config = GradingConfig::default_scheme();
        assert!(matches!(
            subject(51.0, 60.0, 4).validate(&config),
            Err(GradeError::Validation(_))
        ));
        assert!(matches!(
            subject(40.0, 101.0, 4).validate(&config),
            Err(GradeError::Validation(_))
        ));
    }

    #[test]
    fn negative_marks_are_rejected() {
        let config = GradingConfig::default_scheme();
        assert!(subject(-1.0, 60.0, 4).validate(&config).is_err());
        assert!(subject(40.0, -0.5, 4).validate(&config).is_err());
    }

    #[test]
    fn zero_credits_are_rejected() {
        let config = GradingConfig::default_scheme();
        assert!(subject(40.0, 60.0, 0).validate(&config).is_err());
    }

    #[test]
    fn empty_id_is_rejected() {
        let config = GradingConfig::default_scheme();
        let mut bad = subject(40.0, 60.0, 4);
        bad.id = "  ".to_string();
        assert!(bad.validate(&config).is_err());
    }
}
