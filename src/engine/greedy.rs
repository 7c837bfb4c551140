use crate::engine::aggregate::{unrounded_gpa, unrounded_gpa_with_external};
use crate::engine::critical::find_critical_external_marks;
use crate::error::Result;
use crate::types::config::GradingConfig;
use crate::types::result::{GreedyOutcome, PlanStep};
use crate::types::subject::Subject;

const MAX_ITERATIONS: usize = 1000;

/// Greedy multi-subject planner: repeatedly raises the subject whose next
/// grade-boundary jump buys the most GPA per mark spent, until the target
/// is met or no subject can still cross a boundary.
///
/// Grade points are piecewise constant in marks, so every productive move
/// lands on the next boundary; marks between boundaries buy nothing. The
/// plan is a heuristic and makes no claim of minimal total mark increase.
pub fn greedy_plan(
    subjects: &[Subject],
    target_gpa: f64,
    config: &GradingConfig,
) -> Result<GreedyOutcome> {
    let mut working = subjects.to_vec();
    let mut raw = unrounded_gpa(&working, config)?;
    let starting_gpa = config.round_gpa(raw);
    let best_attainable_gpa = best_attainable(subjects, config)?;

    let mut steps = Vec::new();
    // Each productive step crosses at least one grade boundary, so
    // subjects x buckets bounds the step count; the fixed cap guards
    // against anything pathological slipping past validation.
    let cap = (working.len() * config.buckets.len()).clamp(1, MAX_ITERATIONS);

    while config.round_gpa(raw) < target_gpa {
        if steps.len() >= cap {
            tracing::debug!(cap, "iteration cap reached");
            break;
        }
        if working
            .iter()
            .all(|subject| subject.external_marks >= config.scale.max_external)
        {
            break;
        }

        // Probe every subject's next boundary jump and keep the best
        // positive gain per mark spent. Ties keep the earliest subject.
        let mut best: Option<(usize, f64, f64)> = None;
        for (index, subject) in working.iter().enumerate() {
            let Some(jump) = next_jump(subject, config)? else {
                continue;
            };
            let probed = unrounded_gpa_with_external(&working, index, jump, config)?;
            let gain_per_mark = (probed - raw) / (jump - subject.external_marks);
            if gain_per_mark > 0.0 && best.map_or(true, |(_, _, rate)| gain_per_mark > rate) {
                best = Some((index, jump, gain_per_mark));
            }
        }
        // No subject can cross another boundary: local optimum.
        let Some((index, jump, _)) = best else {
            break;
        };

        let from = working[index].external_marks;
        working[index].external_marks = jump;
        raw = unrounded_gpa(&working, config)?;
        let resulting_gpa = config.round_gpa(raw);
        tracing::debug!(
            subject = working[index].id.as_str(),
            from,
            to = jump,
            gpa = resulting_gpa,
            "greedy step"
        );
        steps.push(PlanStep {
            subject_id: working[index].id.clone(),
            from_external_marks: from,
            to_external_marks: jump,
            resulting_gpa,
        });
    }

    let final_gpa = config.round_gpa(raw);
    Ok(GreedyOutcome {
        target_gpa,
        starting_gpa,
        final_gpa,
        target_reached: final_gpa >= target_gpa,
        best_attainable_gpa,
        steps,
    })
}

/// The subject's next candidate marks: the smallest integer at or above
/// its next critical value (so a jump never undershoots the boundary), or
/// one mark up when no boundary remains, clamped to the scale maximum.
fn next_jump(subject: &Subject, config: &GradingConfig) -> Result<Option<f64>> {
    let max_external = config.scale.max_external;
    if subject.external_marks >= max_external {
        return Ok(None);
    }
    let criticals = find_critical_external_marks(subject.internal_marks, config)?;
    let jump = criticals
        .iter()
        .filter(|mark| mark.reachable)
        .map(|mark| mark.required_external_marks.ceil())
        .find(|&marks| marks > subject.external_marks)
        .unwrap_or(subject.external_marks + 1.0);
    Ok(Some(jump.min(max_external)))
}

fn best_attainable(subjects: &[Subject], config: &GradingConfig) -> Result<f64> {
    let raised: Vec<Subject> = subjects
        .iter()
        .cloned()
        .map(|mut subject| {
            subject.external_marks = config.scale.max_external;
            subject
        })
        .collect();
    Ok(config.round_gpa(unrounded_gpa(&raised, config)?))
}
