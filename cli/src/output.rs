//! Plain-text renderings for terminal output.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use std::fmt::Write;

use vision::model::Evaluation;
use vision::{AnalysisReport, Diagnosis};

const LABEL_WIDTH: usize = 13;

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |v| format!("{:.2}%", v * 100.0))
}

/// Accuracy, confusion matrix (rows actual, columns predicted) and per-class
/// recall and precision.
pub fn evaluation_summary(evaluation: &Evaluation) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "accuracy: {} ({}/{})",
        percent(Some(evaluation.accuracy())),
        evaluation.correct,
        evaluation.total
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "confusion matrix (rows = actual, columns = predicted)");
    let _ = write!(out, "{:LABEL_WIDTH$}", "");
    for d in Diagnosis::TRAINABLE {
        let _ = write!(out, " {:>LABEL_WIDTH$}", d.label());
    }
    let _ = writeln!(out);
    for (actual, row) in Diagnosis::TRAINABLE.iter().zip(evaluation.matrix.iter()) {
        let _ = write!(out, "{:<LABEL_WIDTH$}", actual.label());
        for count in row {
            let _ = write!(out, " {count:>LABEL_WIDTH$}");
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(out);
    for d in Diagnosis::TRAINABLE {
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$} recall {:>8}  precision {:>8}",
            d.label(),
            percent(evaluation.recall(d)),
            percent(evaluation.precision(d))
        );
    }
    out
}

/// Human-readable analysis report.
pub fn report_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "report:    {}", report.id);
    let _ = writeln!(out, "file:      {}", report.file_name);
    let _ = writeln!(out, "diagnosis: {}", report.diagnosis);
    let _ = writeln!(out);
    let _ = writeln!(out, "nurse plan:");
    for (i, step) in report.nurse_plan.iter().enumerate() {
        let _ = writeln!(out, "  {}. {step}", i + 1);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "parent message:");
    let _ = writeln!(out, "  {}", report.parent_message);
    if !report.considerations.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "considerations:");
        for item in &report.considerations {
            let _ = writeln!(out, "  - {item}");
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "video:     {}", report.video_embed_url());
    out
}
