use crate::error::{GradeError, Result};
use crate::types::config::GradingConfig;
use crate::types::result::CriticalMark;
use std::cmp::Ordering;

/// For fixed internal marks, the external marks needed to cross each grade
/// boundary, one entry per bucket, ascending by required marks. Entries
/// whose unclamped requirement falls outside the external scale are kept
/// but flagged unreachable; the greedy planner uses the reachable ones as
/// jump targets.
pub fn find_critical_external_marks(
    internal_marks: f64,
    config: &GradingConfig,
) -> Result<Vec<CriticalMark>> {
    if !internal_marks.is_finite() || !(0.0..=config.scale.max_internal).contains(&internal_marks)
    {
        return Err(GradeError::Validation(format!(
            "internal marks {} outside [0, {}]",
            internal_marks, config.scale.max_internal
        )));
    }

    let inverse_scale = config.scale.max_external / config.scale.max_internal;
    let mut marks: Vec<CriticalMark> = config
        .buckets
        .iter()
        .map(|bucket| {
            let required = (bucket.min_total - internal_marks) * inverse_scale;
            let reachable = (0.0..=config.scale.max_external).contains(&required);
            CriticalMark {
                grade_label: bucket.label.clone(),
                grade_point: bucket.grade_point,
                cutoff_total: bucket.min_total,
                required_external_marks: required.clamp(0.0, config.scale.max_external),
                reachable,
            }
        })
        .collect();

    marks.sort_by(|a, b| {
        a.required_external_marks
            .partial_cmp(&b.required_external_marks)
            .unwrap_or(Ordering::Equal)
    });
    Ok(marks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirements_are_inverse_scaled_and_ascending() {
        let config = GradingConfig::default_scheme();
        let marks =
            find_critical_external_marks(40.0, &config).expect("critical marks should compute");
        assert_eq!(marks.len(), config.buckets.len());

        // With internal 40 and a 2x inverse scale: cutoff 70 needs 60,
        // cutoff 80 needs 80, cutoff 90 needs 100.
        let a_grade = marks
            .iter()
            .find(|mark| mark.grade_label == "A")
            .expect("A entry");
        assert_eq!(a_grade.required_external_marks, 60.0);
        assert!(a_grade.reachable);

        let o_grade = marks
            .iter()
            .find(|mark| mark.grade_label == "O")
            .expect("O entry");
        assert_eq!(o_grade.required_external_marks, 100.0);
        assert!(o_grade.reachable);

        for pair in marks.windows(2) {
            assert!(pair[0].required_external_marks <= pair[1].required_external_marks);
        }
    }

    #[test]
    fn cutoffs_already_met_are_clamped_and_unreachable() {
        let config = GradingConfig::default_scheme();
        let marks =
            find_critical_external_marks(45.0, &config).expect("critical marks should compute");
        // Internal 45 alone clears the 40-cutoff C bucket; its raw
        // requirement is negative.
        let c_grade = marks
            .iter()
            .find(|mark| mark.grade_label == "C")
            .expect("C entry");
        assert_eq!(c_grade.required_external_marks, 0.0);
        assert!(!c_grade.reachable);
    }

    #[test]
    fn cutoffs_beyond_the_scale_are_clamped_and_unreachable() {
        let config = GradingConfig::default_scheme();
        let marks =
            find_critical_external_marks(10.0, &config).expect("critical marks should compute");
        // Internal 10 would need external 160 for the 90 cutoff.
        let o_grade = marks
            .iter()
            .find(|mark| mark.grade_label == "O")
            .expect("O entry");
        assert_eq!(o_grade.required_external_marks, 100.0);
        assert!(!o_grade.reachable);
    }

    #[test]
    fn out_of_range_internal_marks_are_rejected() {
        let config = GradingConfig::default_scheme();
        assert!(find_critical_external_marks(-1.0, &config).is_err());
        assert!(find_critical_external_marks(50.5, &config).is_err());
    }
}
