pub mod json;
pub mod md;

use crate::error::{GradeError, Result};
use crate::types::result::{
    CriticalMark, CumulativeResult, GreedyOutcome, SemesterResult, SubjectPlan,
};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Everything a report can show, tagged for the JSON consumer.
#[derive(Debug, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum ReportView {
    Semester {
        semester_id: String,
        recorded: Option<NaiveDate>,
        result: SemesterResult,
    },
    Cumulative {
        result: CumulativeResult,
    },
    Critical {
        subject_id: String,
        internal_marks: f64,
        marks: Vec<CriticalMark>,
    },
    Target {
        plan: SubjectPlan,
    },
    Plan {
        outcome: GreedyOutcome,
    },
}

pub fn render(view: &ReportView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(view).map_err(GradeError::Json),
        OutputFormat::Md => Ok(md::to_markdown(view)),
    }
}
