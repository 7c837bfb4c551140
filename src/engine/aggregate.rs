use crate::engine::metrics::compute_metrics;
use crate::error::Result;
use crate::types::config::GradingConfig;
use crate::types::result::{CumulativeResult, SemesterResult, SemesterSummary, SubjectLine};
use crate::types::subject::{Semester, Subject};

/// Sums per-subject metrics into a semester GPA. An empty subject list
/// aggregates to zeroed figures rather than failing; treating that as an
/// error is the caller's policy.
pub fn aggregate_semester(subjects: &[Subject], config: &GradingConfig) -> Result<SemesterResult> {
    let mut lines = Vec::with_capacity(subjects.len());
    let mut total_credits: u32 = 0;
    let mut total_weighted_points = 0.0;
    for subject in subjects {
        let metrics = compute_metrics(subject, config)?;
        total_credits += subject.credits;
        total_weighted_points += metrics.weighted_points;
        lines.push(SubjectLine {
            subject_id: subject.id.clone(),
            subject_name: subject.name.clone(),
            credits: subject.credits,
            internal_marks: subject.internal_marks,
            external_marks: subject.external_marks,
            metrics,
        });
    }

    let gpa = if total_credits > 0 {
        config.round_gpa(total_weighted_points / f64::from(total_credits))
    } else {
        0.0
    };
    let best_attainable_gpa = config.round_gpa(best_attainable_unrounded(subjects, config)?);

    Ok(SemesterResult {
        lines,
        total_credits,
        total_weighted_points,
        gpa,
        best_attainable_gpa,
    })
}

/// Credit-weighted CGPA over per-semester GPAs. Zero total credits yield a
/// zeroed result, mirroring the semester convention.
pub fn aggregate_cumulative(
    semesters: &[Semester],
    config: &GradingConfig,
) -> Result<CumulativeResult> {
    let mut summaries = Vec::with_capacity(semesters.len());
    let mut total_credits: u32 = 0;
    let mut weighted_gpa_sum = 0.0;
    for semester in semesters {
        let result = aggregate_semester(&semester.subjects, config)?;
        total_credits += result.total_credits;
        weighted_gpa_sum += result.gpa * f64::from(result.total_credits);
        summaries.push(SemesterSummary {
            semester_id: semester.id.clone(),
            gpa: result.gpa,
            credits: result.total_credits,
        });
    }

    let cgpa = if total_credits > 0 {
        config.round_gpa(weighted_gpa_sum / f64::from(total_credits))
    } else {
        0.0
    };

    Ok(CumulativeResult {
        cgpa,
        total_credits,
        semesters: summaries,
    })
}

/// Unrounded semester GPA; the planners probe with this so rounding never
/// masks a real delta.
pub(crate) fn unrounded_gpa(subjects: &[Subject], config: &GradingConfig) -> Result<f64> {
    let mut total_credits: u32 = 0;
    let mut total_weighted_points = 0.0;
    for subject in subjects {
        let metrics = compute_metrics(subject, config)?;
        total_credits += subject.credits;
        total_weighted_points += metrics.weighted_points;
    }
    if total_credits == 0 {
        return Ok(0.0);
    }
    Ok(total_weighted_points / f64::from(total_credits))
}

/// Unrounded GPA with a single subject's external marks overridden on a
/// copy. Inputs are never mutated in place.
pub(crate) fn unrounded_gpa_with_external(
    subjects: &[Subject],
    index: usize,
    external_marks: f64,
    config: &GradingConfig,
) -> Result<f64> {
    let mut probe = subjects.to_vec();
    probe[index].external_marks = external_marks;
    unrounded_gpa(&probe, config)
}

fn best_attainable_unrounded(subjects: &[Subject], config: &GradingConfig) -> Result<f64> {
    let raised: Vec<Subject> = subjects
        .iter()
        .cloned()
        .map(|mut subject| {
            subject.external_marks = config.scale.max_external;
            subject
        })
        .collect();
    unrounded_gpa(&raised, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(id: &str, internal: f64, external: f64, credits: u32) -> Subject {
        Subject {
            id: id.to_string(),
            name: id.to_string(),
            internal_marks: internal,
            external_marks: external,
            credits,
        }
    }

    #[test]
    fn single_subject_semester() {
        let config = GradingConfig::default_scheme();
        let result = aggregate_semester(&[subject("MA201", 40.0, 60.0, 4)], &config)
            .expect("semester should aggregate");
        assert_eq!(result.gpa, 8.0);
        assert_eq!(result.total_credits, 4);
        assert_eq!(result.total_weighted_points, 32.0);
    }

    #[test]
    fn two_subject_semester_rounds_the_final_ratio() {
        let config = GradingConfig::default_scheme();
        let subjects = [
            subject("MA201", 40.0, 60.0, 4),
            subject("PH202", 45.0, 80.0, 3),
        ];
        let result = aggregate_semester(&subjects, &config).expect("semester should aggregate");
        assert_eq!(result.total_credits, 7);
        assert_eq!(result.total_weighted_points, 59.0);
        // 59 / 7 = 8.4285..., rounded to two digits.
        assert_eq!(result.gpa, 8.43);
    }

    #[test]
    fn empty_semester_aggregates_to_zero() {
        let config = GradingConfig::default_scheme();
        let result = aggregate_semester(&[], &config).expect("empty semester should aggregate");
        assert_eq!(result.gpa, 0.0);
        assert_eq!(result.total_credits, 0);
        assert_eq!(result.best_attainable_gpa, 0.0);
    }

    #[test]
    fn best_attainable_equals_everyone_at_maximum() {
        let config = GradingConfig::default_scheme();
        let subjects = [
            subject("MA201", 40.0, 60.0, 4),
            subject("PH202", 10.0, 0.0, 3),
        ];
        let result = aggregate_semester(&subjects, &config).expect("semester should aggregate");

        let raised = [
            subject("MA201", 40.0, 100.0, 4),
            subject("PH202", 10.0, 100.0, 3),
        ];
        let ceiling = aggregate_semester(&raised, &config).expect("semester should aggregate");
        assert_eq!(result.best_attainable_gpa, ceiling.gpa);
    }

    #[test]
    fn cumulative_weights_semesters_by_credits() {
        let config = GradingConfig::default_scheme();
        let semesters = [
            Semester {
                id: "sem1".to_string(),
                recorded: None,
                subjects: vec![subject("MA101", 40.0, 60.0, 4)], // gpa 8.0
            },
            Semester {
                id: "sem2".to_string(),
                recorded: None,
                subjects: vec![subject("MA201", 45.0, 90.0, 2)], // total 90, gpa 10.0
            },
        ];
        let result = aggregate_cumulative(&semesters, &config).expect("cgpa should aggregate");
        assert_eq!(result.total_credits, 6);
        // (8.0 * 4 + 10.0 * 2) / 6 = 8.6666...
        assert_eq!(result.cgpa, 8.67);
        assert_eq!(result.semesters.len(), 2);
        assert_eq!(result.semesters[1].gpa, 10.0);
    }

    #[test]
    fn cumulative_over_no_semesters_is_zeroed() {
        let config = GradingConfig::default_scheme();
        let result = aggregate_cumulative(&[], &config).expect("empty input should aggregate");
        assert_eq!(result.cgpa, 0.0);
        assert_eq!(result.total_credits, 0);
        assert!(result.semesters.is_empty());
    }

    #[test]
    fn raising_one_subject_never_lowers_the_gpa() {
        let config = GradingConfig::default_scheme();
        let subjects = vec![
            subject("MA201", 40.0, 40.0, 4),
            subject("PH202", 30.0, 55.0, 3),
        ];
        let mut previous = unrounded_gpa(&subjects, &config).expect("gpa should compute");
        for external in 41..=100 {
            let gpa = unrounded_gpa_with_external(&subjects, 0, f64::from(external), &config)
                .expect("gpa should compute");
            assert!(gpa >= previous);
            previous = gpa;
        }
    }
}
