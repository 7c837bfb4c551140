use crate::error::{GradeError, Result};
use serde::Deserialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradeBucket {
    pub min_total: f64,
    pub grade_point: f64,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScaleConfig {
    pub max_internal: f64,
    pub max_external: f64,
    #[serde(default = "default_rounding_digits")]
    pub rounding_digits: u32,
}

fn default_rounding_digits() -> u32 {
    2
}

/// A grading scheme: the marks scale plus the ordered grade-point bucket
/// table. Immutable once validated; every computation takes it as an
/// explicit parameter so two runs with equal schemes produce equal results.
#[derive(Debug, Clone, Deserialize)]
pub struct GradingConfig {
    pub scale: ScaleConfig,
    #[serde(rename = "bucket")]
    pub buckets: Vec<GradeBucket>,
}

impl GradingConfig {
    /// The built-in 10-point scheme used when no grading.toml is present.
    pub fn default_scheme() -> Self {
        let bucket = |min_total: f64, grade_point: f64, label: &str| GradeBucket {
            min_total,
            grade_point,
            label: label.to_string(),
        };
        Self {
            scale: ScaleConfig {
                max_internal: 50.0,
                max_external: 100.0,
                rounding_digits: 2,
            },
            buckets: vec![
                bucket(90.0, 10.0, "O"),
                bucket(80.0, 9.0, "A+"),
                bucket(70.0, 8.0, "A"),
                bucket(60.0, 7.0, "B+"),
                bucket(50.0, 6.0, "B"),
                bucket(40.0, 5.0, "C"),
                bucket(0.0, 4.0, "P"),
            ],
        }
    }

    /// External marks rescaled onto the internal-marks axis.
    pub fn scaled(&self, external_marks: f64) -> f64 {
        external_marks * (self.scale.max_internal / self.scale.max_external)
    }

    /// Upper end of the total-marks range the bucket table must cover.
    pub fn max_total(&self) -> f64 {
        self.scale.max_internal + self.scaled(self.scale.max_external)
    }

    /// The bucket a total falls into: highest `min_total` at or below it.
    pub fn bucket_for(&self, total: f64) -> Result<&GradeBucket> {
        self.buckets
            .iter()
            .filter(|bucket| bucket.min_total <= total)
            .max_by(|a, b| {
                a.min_total
                    .partial_cmp(&b.min_total)
                    .unwrap_or(Ordering::Equal)
            })
            .ok_or_else(|| {
                GradeError::Configuration(format!("no grade bucket matches total {total}"))
            })
    }

    /// Round-half-away-from-zero to the configured number of digits.
    /// Applied to final ratios only, never to intermediate sums.
    pub fn round_gpa(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.scale.rounding_digits as i32);
        (value * factor).round() / factor
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.scale.max_internal.is_finite() && self.scale.max_internal > 0.0) {
            return Err(GradeError::Configuration(
                "scale.max_internal must be a positive number".to_string(),
            ));
        }
        if !(self.scale.max_external.is_finite() && self.scale.max_external > 0.0) {
            return Err(GradeError::Configuration(
                "scale.max_external must be a positive number".to_string(),
            ));
        }
        if self.scale.rounding_digits > 6 {
            return Err(GradeError::Configuration(format!(
                "scale.rounding_digits must be at most 6 (found {})",
                self.scale.rounding_digits
            )));
        }

        if self.buckets.is_empty() {
            return Err(GradeError::Configuration(
                "at least one grade bucket is required".to_string(),
            ));
        }
        for bucket in &self.buckets {
            if bucket.label.trim().is_empty() {
                return Err(GradeError::Configuration(format!(
                    "bucket at min_total {} has an empty label",
                    bucket.min_total
                )));
            }
            if !bucket.min_total.is_finite()
                || !(0.0..=self.max_total()).contains(&bucket.min_total)
            {
                return Err(GradeError::Configuration(format!(
                    "bucket {:?} has min_total {} outside [0, {}]",
                    bucket.label,
                    bucket.min_total,
                    self.max_total()
                )));
            }
            if !bucket.grade_point.is_finite() || bucket.grade_point < 0.0 {
                return Err(GradeError::Configuration(format!(
                    "bucket {:?} has an invalid grade point {}",
                    bucket.label, bucket.grade_point
                )));
            }
        }

        // The floor bucket guarantees every total classifies somewhere.
        if !self.buckets.iter().any(|bucket| bucket.min_total == 0.0) {
            return Err(GradeError::Configuration(
                "a floor bucket with min_total = 0 is required".to_string(),
            ));
        }

        // Non-overlapping partition and the planners' monotonicity
        // precondition: grade points strictly increase with min_total.
        let mut ascending: Vec<&GradeBucket> = self.buckets.iter().collect();
        ascending.sort_by(|a, b| {
            a.min_total
                .partial_cmp(&b.min_total)
                .unwrap_or(Ordering::Equal)
        });
        for pair in ascending.windows(2) {
            if pair[0].min_total == pair[1].min_total {
                return Err(GradeError::Configuration(format!(
                    "buckets {:?} and {:?} share min_total {}",
                    pair[0].label, pair[1].label, pair[0].min_total
                )));
            }
            if pair[0].grade_point >= pair[1].grade_point {
                return Err(GradeError::Configuration(format!(
                    "grade points must increase with min_total: {:?} ({}) is not above {:?} ({})",
                    pair[1].label, pair[1].grade_point, pair[0].label, pair[0].grade_point
                )));
            }
        }

        Ok(())
    }
}
