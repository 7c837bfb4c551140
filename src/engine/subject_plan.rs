use crate::engine::aggregate::{unrounded_gpa, unrounded_gpa_with_external};
use crate::error::{GradeError, Result};
use crate::types::config::GradingConfig;
use crate::types::result::SubjectPlan;
use crate::types::subject::Subject;

/// Binary-searches the smallest integer external marks on one subject that
/// lift the whole semester GPA to the target. Probes run on copies; the
/// input list is never modified. The search predicate is monotonic because
/// raising one subject's marks can only raise its grade point and leaves
/// every other subject's contribution unchanged.
pub fn find_minimal_external_marks_for_target(
    subjects: &[Subject],
    target_id: &str,
    target_gpa: f64,
    config: &GradingConfig,
) -> Result<SubjectPlan> {
    let index = subjects
        .iter()
        .position(|subject| subject.id == target_id)
        .ok_or_else(|| GradeError::NotFound(target_id.to_string()))?;
    let subject = &subjects[index];
    let max_external = config.scale.max_external;

    let current_raw = unrounded_gpa(subjects, config)?;
    let current_gpa = config.round_gpa(current_raw);

    let bumped_marks = (subject.external_marks + 1.0).min(max_external);
    let marginal_gain =
        unrounded_gpa_with_external(subjects, index, bumped_marks, config)? - current_raw;

    let ceiling_raw = unrounded_gpa_with_external(subjects, index, max_external, config)?;
    let ceiling_gpa = config.round_gpa(ceiling_raw);

    // Already-met targets return the current marks untouched.
    if current_gpa >= target_gpa {
        return Ok(SubjectPlan {
            subject_id: subject.id.clone(),
            target_gpa,
            current_gpa,
            possible: true,
            minimal_external_marks: Some(subject.external_marks),
            projected_gpa: Some(current_gpa),
            marginal_gain,
            ceiling_gpa,
        });
    }

    let meets = |marks: i64| -> Result<bool> {
        let gpa = config.round_gpa(unrounded_gpa_with_external(
            subjects,
            index,
            marks as f64,
            config,
        )?);
        tracing::debug!(subject = target_id, marks, gpa, "target probe");
        Ok(gpa >= target_gpa)
    };

    let mut lo = subject.external_marks.ceil() as i64;
    let mut hi = max_external.floor() as i64;
    if !meets(hi)? {
        return Ok(SubjectPlan {
            subject_id: subject.id.clone(),
            target_gpa,
            current_gpa,
            possible: false,
            minimal_external_marks: None,
            projected_gpa: None,
            marginal_gain,
            ceiling_gpa,
        });
    }
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if meets(mid)? {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    let minimal = lo as f64;
    let projected = config.round_gpa(unrounded_gpa_with_external(subjects, index, minimal, config)?);
    Ok(SubjectPlan {
        subject_id: subject.id.clone(),
        target_gpa,
        current_gpa,
        possible: true,
        minimal_external_marks: Some(minimal),
        projected_gpa: Some(projected),
        marginal_gain,
        ceiling_gpa,
    })
}
