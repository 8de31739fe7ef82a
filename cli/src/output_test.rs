use super::*;

fn sample_report() -> AnalysisReport {
    AnalysisReport {
        id: "abc".into(),
        file_name: "baby.png".into(),
        diagnosis: Diagnosis::Hypothermic,
        nurse_plan: vec!["Dry the baby".into(), "Start skin-to-skin contact".into()],
        parent_message: "चिंता न करें".into(),
        video_id: "Z42K_t-v8MY".into(),
        considerations: vec!["Check temperature every 15 minutes".into()],
    }
}

#[test]
fn evaluation_summary_reports_accuracy_and_matrix() {
    let mut evaluation = Evaluation::default();
    evaluation.record(Diagnosis::Normal, Diagnosis::Normal);
    evaluation.record(Diagnosis::Hypothermic, Diagnosis::Hypothermic);
    evaluation.record(Diagnosis::Hypothermic, Diagnosis::Normal);

    let text = evaluation_summary(&evaluation);
    assert!(text.starts_with("accuracy: 66.67% (2/3)\n"));
    let normal_row = text.lines().find(|l| l.starts_with("Normal ")).unwrap();
    let counts: Vec<&str> = normal_row.split_whitespace().skip(1).collect();
    assert_eq!(counts, vec!["0", "0", "1"]);
    assert!(text.contains("Hyperthermic  recall      n/a"));
}

#[test]
fn evaluation_summary_empty_is_zero_accuracy() {
    let text = evaluation_summary(&Evaluation::default());
    assert!(text.starts_with("accuracy: 0.00% (0/0)"));
}

#[test]
fn report_text_numbers_plan_steps() {
    let text = report_text(&sample_report());
    assert!(text.contains("diagnosis: Hypothermic\n"));
    assert!(text.contains("  1. Dry the baby\n"));
    assert!(text.contains("  2. Start skin-to-skin contact\n"));
    assert!(text.contains("  - Check temperature every 15 minutes\n"));
    assert!(text.contains("https://www.youtube.com/embed/Z42K_t-v8MY"));
}

#[test]
fn report_text_omits_empty_considerations() {
    let report = AnalysisReport { considerations: Vec::new(), ..sample_report() };
    assert!(!report_text(&report).contains("considerations:"));
}
