//! Report card renderer
//!
//! Renders a report card to a readable markdown table.

use crate::app::{ReportCard, SubjectSummary};

/// Format a score with two decimals, trimming a trailing ".00"
pub fn format_score(score: f64) -> String {
    let formatted = format!("{:.2}", score);
    match formatted.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

/// Render a report card to markdown format
pub fn render_report_card(card: &ReportCard) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("# Report Card: {}\n\n", card.name));
    buf.push_str(&format!("Email: {}\n", card.email_address));
    buf.push_str(&format!("Student ID: {}\n\n", card.student_id));

    buf.push_str("| Subject | Grades | Sum | Average |\n");
    buf.push_str("|---|---|---|---|\n");
    for summary in &card.subjects {
        buf.push_str(&render_subject(summary));
        buf.push('\n');
    }
    buf.push('\n');

    match card.overall_average {
        Some(avg) => buf.push_str(&format!("Overall average: {}\n", format_score(avg))),
        None => buf.push_str("_No grades recorded yet._\n"),
    }

    buf
}

fn render_subject(summary: &SubjectSummary) -> String {
    let average = summary
        .average
        .map(format_score)
        .unwrap_or_else(|| "-".to_string());

    format!(
        "| {} | {} | {} | {} |",
        summary.subject,
        summary.count,
        format_score(summary.sum),
        average
    )
}
