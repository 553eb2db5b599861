//! Report formatting utilities for coverage outputs.

use std::fmt::Write;

use serde::Serialize;

use crate::domain::{CoverageRecord, ProjectCoverage};

/// Render project coverage as a Markdown table.
pub fn render_coverage_markdown(coverage: &ProjectCoverage) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Documentation coverage\n");
    let _ = writeln!(output, "Global coverage : {}%\n", coverage.count);
    append_records(&mut output, &coverage.files);
    output
}

/// Render any serializable report payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

/// Format the statements cell of a record, e.g. `66% - (2/3)`.
pub fn format_statements(record: &CoverageRecord) -> String {
    format!("{}% - ({})", record.coverage_percent, record.coverage_count)
}

fn append_records(output: &mut String, records: &[CoverageRecord]) {
    if records.is_empty() {
        let _ = writeln!(output, "No documented entities found.");
        return;
    }
    let _ = writeln!(output, "| File | Type | Identifier | Statements |");
    let _ = writeln!(output, "| --- | --- | --- | --- |");
    for record in records {
        let _ = writeln!(
            output,
            "| {} | {} | {} | {} |",
            escape_cell(&record.file_path),
            record.kind,
            escape_cell(&record.name),
            format_statements(record)
        );
    }
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
