use crate::report::ReportView;

pub fn to_json(view: &ReportView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::aggregate::aggregate_semester;
    use crate::types::config::GradingConfig;
    use crate::types::subject::Subject;

    #[test]
    fn semester_report_serializes_the_computed_figures() {
        let config = GradingConfig::default_scheme();
        let subjects = [Subject {
            id: "MA201".to_string(),
            name: "Mathematics III".to_string(),
            internal_marks: 40.0,
            external_marks: 60.0,
            credits: 4,
        }];
        let result = aggregate_semester(&subjects, &config).expect("semester should aggregate");
        let view = ReportView::Semester {
            semester_id: "sem3".to_string(),
            recorded: None,
            result,
        };

        let rendered = to_json(&view).expect("json should serialize");
        assert!(rendered.contains("\"report\": \"semester\""));
        assert!(rendered.contains("\"gpa\": 8.0"));
        assert!(rendered.contains("\"grade_label\": \"A\""));
    }
}
