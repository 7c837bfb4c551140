use crate::error::Result;
use crate::types::config::GradingConfig;
use crate::types::result::SubjectMetrics;
use crate::types::subject::Subject;

/// Converts one subject's raw marks into scaled total, grade point and
/// weighted points under the given scheme. Pure and deterministic.
pub fn compute_metrics(subject: &Subject, config: &GradingConfig) -> Result<SubjectMetrics> {
    subject.validate(config)?;
    let scaled_external = config.scaled(subject.external_marks);
    let total = subject.internal_marks + scaled_external;
    let bucket = config.bucket_for(total)?;
    Ok(SubjectMetrics {
        scaled_external,
        total,
        grade_point: bucket.grade_point,
        grade_label: bucket.label.clone(),
        weighted_points: bucket.grade_point * f64::from(subject.credits),
    })
}
