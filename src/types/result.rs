use serde::Serialize;

/// Derived figures for one subject. A pure function of the subject and the
/// grading scheme; callers may cache and recompute on any marks change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectMetrics {
    pub scaled_external: f64,
    pub total: f64,
    pub grade_point: f64,
    pub grade_label: String,
    pub weighted_points: f64,
}

/// One row of a semester result: the subject's input marks alongside its
/// computed metrics, for display and caching by the persistence layer.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectLine {
    pub subject_id: String,
    pub subject_name: String,
    pub credits: u32,
    pub internal_marks: f64,
    pub external_marks: f64,
    pub metrics: SubjectMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct SemesterResult {
    pub lines: Vec<SubjectLine>,
    pub total_credits: u32,
    pub total_weighted_points: f64,
    pub gpa: f64,
    /// Semester GPA if every subject's external marks were raised to the
    /// scale maximum.
    pub best_attainable_gpa: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SemesterSummary {
    pub semester_id: String,
    pub gpa: f64,
    pub credits: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CumulativeResult {
    pub cgpa: f64,
    pub total_credits: u32,
    pub semesters: Vec<SemesterSummary>,
}

/// One grade boundary expressed as the external marks needed to cross it,
/// given fixed internal marks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalMark {
    pub grade_label: String,
    pub grade_point: f64,
    pub cutoff_total: f64,
    /// Clamped into [0, max_external]; see `reachable` for the raw range.
    pub required_external_marks: f64,
    /// Whether the unclamped requirement lies within [0, max_external].
    pub reachable: bool,
}

/// Outcome of the single-subject planner.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectPlan {
    pub subject_id: String,
    pub target_gpa: f64,
    pub current_gpa: f64,
    pub possible: bool,
    /// Smallest external marks on the target subject that lift the
    /// semester GPA to the target; `None` when even the maximum falls
    /// short.
    pub minimal_external_marks: Option<f64>,
    pub projected_gpa: Option<f64>,
    /// GPA delta from raising the subject's current marks by exactly one,
    /// on the unmodified input. Comparative display only.
    pub marginal_gain: f64,
    /// Semester GPA with this subject alone raised to the maximum.
    pub ceiling_gpa: f64,
}

/// One move in a greedy plan; order is application order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanStep {
    pub subject_id: String,
    pub from_external_marks: f64,
    pub to_external_marks: f64,
    pub resulting_gpa: f64,
}

/// Outcome of the greedy multi-subject planner. The plan is a heuristic:
/// it reaches the target when it can, but makes no claim of minimal total
/// mark increase.
#[derive(Debug, Clone, Serialize)]
pub struct GreedyOutcome {
    pub target_gpa: f64,
    pub starting_gpa: f64,
    pub final_gpa: f64,
    pub target_reached: bool,
    /// Independent ceiling (all subjects at maximum external marks),
    /// reported whether or not the target was reached.
    pub best_attainable_gpa: f64,
    pub steps: Vec<PlanStep>,
}
