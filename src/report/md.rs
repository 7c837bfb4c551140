use crate::report::ReportView;

pub fn to_markdown(view: &ReportView) -> String {
    match view {
        ReportView::Semester {
            semester_id,
            recorded,
            result,
        } => {
            let mut output = String::new();
            output.push_str("# Semester Report\n\n");
            output.push_str(&format!("Semester: {semester_id}\n"));
            if let Some(date) = recorded {
                output.push_str(&format!("Recorded: {date}\n"));
            }
            output.push_str("\n## Subjects\n\n");
            if result.lines.is_empty() {
                output.push_str("- none\n");
            }
            for line in &result.lines {
                output.push_str(&format!(
                    "- {} {}: internal {:.1} + scaled external {:.1} = total {:.1}, grade {} ({:.0}), weighted {:.1} over {} credits\n",
                    line.subject_id,
                    line.subject_name,
                    line.internal_marks,
                    line.metrics.scaled_external,
                    line.metrics.total,
                    line.metrics.grade_label,
                    line.metrics.grade_point,
                    line.metrics.weighted_points,
                    line.credits
                ));
            }
            output.push_str(&format!(
                "\nTotal credits: {}\nTotal weighted points: {:.1}\nGPA: {:.2}\nBest attainable GPA: {:.2}\n",
                result.total_credits,
                result.total_weighted_points,
                result.gpa,
                result.best_attainable_gpa
            ));
            output
        }
        ReportView::Cumulative { result } => {
            let mut output = String::new();
            output.push_str("# Cumulative Report\n\n## Semesters\n\n");
            if result.semesters.is_empty() {
                output.push_str("- none\n");
            }
            for semester in &result.semesters {
                output.push_str(&format!(
                    "- {}: GPA {:.2} over {} credits\n",
                    semester.semester_id, semester.gpa, semester.credits
                ));
            }
            output.push_str(&format!(
                "\nTotal credits: {}\nCGPA: {:.2}\n",
                result.total_credits, result.cgpa
            ));
            output
        }
        ReportView::Critical {
            subject_id,
            internal_marks,
            marks,
        } => {
            let mut output = String::new();
            output.push_str("# Critical Marks\n\n");
            output.push_str(&format!(
                "Subject: {subject_id} (internal {internal_marks:.1})\n\n"
            ));
            for mark in marks {
                let status = if mark.reachable {
                    "reachable"
                } else {
                    "out of range"
                };
                output.push_str(&format!(
                    "- {} ({:.0}): total cutoff {:.1} needs external {:.1} [{}]\n",
                    mark.grade_label,
                    mark.grade_point,
                    mark.cutoff_total,
                    mark.required_external_marks,
                    status
                ));
            }
            output
        }
        ReportView::Target { plan } => {
            let mut output = String::new();
            output.push_str("# Target Plan\n\n");
            output.push_str(&format!(
                "Subject: {}\nTarget GPA: {:.2}\nCurrent GPA: {:.2}\n",
                plan.subject_id, plan.target_gpa, plan.current_gpa
            ));
            match plan.minimal_external_marks {
                Some(marks) => {
                    output.push_str(&format!(
                        "\nTarget is reachable: raise external marks to {:.0} (projected GPA {:.2})\n",
                        marks,
                        plan.projected_gpa.unwrap_or(plan.current_gpa)
                    ));
                }
                None => {
                    output.push_str(&format!(
                        "\nTarget is not possible through this subject; ceiling is {:.2}\n",
                        plan.ceiling_gpa
                    ));
                }
            }
            output.push_str(&format!(
                "Marginal gain of one extra mark: {:.4}\n",
                plan.marginal_gain
            ));
            output
        }
        ReportView::Plan { outcome } => {
            let mut output = String::new();
            output.push_str("# Improvement Plan\n\n");
            output.push_str(&format!(
                "Target GPA: {:.2}\nStarting GPA: {:.2}\n\n## Steps\n\n",
                outcome.target_gpa, outcome.starting_gpa
            ));
            if outcome.steps.is_empty() {
                output.push_str("- none\n");
            }
            for (index, step) in outcome.steps.iter().enumerate() {
                output.push_str(&format!(
                    "{}. {}: external {:.0} -> {:.0} (GPA {:.2})\n",
                    index + 1,
                    step.subject_id,
                    step.from_external_marks,
                    step.to_external_marks,
                    step.resulting_gpa
                ));
            }
            if outcome.target_reached {
                output.push_str(&format!(
                    "\nTarget reached: final GPA {:.2}\n",
                    outcome.final_gpa
                ));
            } else {
                output.push_str(&format!(
                    "\nTarget not reached: final GPA {:.2}, best attainable {:.2}\n",
                    outcome.final_gpa, outcome.best_attainable_gpa
                ));
            }
            output
        }
    }
}
