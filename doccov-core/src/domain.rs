//! Coverage results produced by the engine.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::EntityKind;
use crate::status::CoverageStatus;

/// Documentation coverage of a single entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoverageRecord {
    /// Source file declaring the entity.
    pub file_path: String,
    /// Kind of the entity.
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Link segment used by page renderers.
    pub link_type: String,
    /// Entity identifier.
    pub name: String,
    /// Documented statements as a floored percentage, 0-100.
    pub coverage_percent: u8,
    /// Documented and documentable statements, formatted as `documented/total`.
    pub coverage_count: String,
    /// Quality band of `coverage_percent`.
    pub status: CoverageStatus,
}

/// Coverage of the whole project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCoverage {
    /// Floored mean of every record's percentage, 0 when there are no records.
    pub count: u8,
    /// Quality band of `count`.
    pub status: CoverageStatus,
    /// Records ordered by file path.
    pub files: Vec<CoverageRecord>,
}

impl ProjectCoverage {
    /// Fold per-entity records into project coverage.
    ///
    /// Records are stably sorted by file path, so entities sharing a file keep the order in
    /// which they were collected.
    pub fn from_records(mut files: Vec<CoverageRecord>) -> Self {
        files.sort_by(|a, b| a.file_path.cmp(&b.file_path));
        let count = mean_percent(&files);
        Self {
            count,
            status: CoverageStatus::from_percent(count),
            files,
        }
    }

    /// Records ordered by ascending percentage, ties keeping file path order.
    pub fn by_percent(&self) -> Vec<&CoverageRecord> {
        let mut ordered: Vec<&CoverageRecord> = self.files.iter().collect();
        ordered.sort_by_key(|record| record.coverage_percent);
        ordered
    }
}

fn mean_percent(files: &[CoverageRecord]) -> u8 {
    if files.is_empty() {
        return 0;
    }
    let sum: u64 = files
        .iter()
        .map(|record| u64::from(record.coverage_percent))
        .sum();
    let mean = sum / files.len() as u64;
    mean.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, name: &str, percent: u8) -> CoverageRecord {
        CoverageRecord {
            file_path: path.to_string(),
            kind: EntityKind::Class,
            link_type: EntityKind::Class.link_type().to_string(),
            name: name.to_string(),
            coverage_percent: percent,
            coverage_count: format!("{percent}/100"),
            status: CoverageStatus::from_percent(percent),
        }
    }

    #[test]
    fn empty_project_scores_zero_and_low() {
        let coverage = ProjectCoverage::from_records(Vec::new());
        assert_eq!(coverage.count, 0);
        assert_eq!(coverage.status, CoverageStatus::Low);
        assert!(coverage.files.is_empty());
    }

    #[test]
    fn count_is_floored_mean() {
        let coverage = ProjectCoverage::from_records(vec![
            record("a.ts", "A", 100),
            record("b.ts", "B", 66),
            record("c.ts", "C", 0),
        ]);
        assert_eq!(coverage.count, 55);
        assert_eq!(coverage.status, CoverageStatus::Good);
    }

    #[test]
    fn files_are_sorted_by_path_stably() {
        let coverage = ProjectCoverage::from_records(vec![
            record("src/z.ts", "Z", 10),
            record("src/a.ts", "First", 90),
            record("src/a.ts", "Second", 20),
        ]);
        let names: Vec<&str> = coverage.files.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Z"]);
    }

    #[test]
    fn by_percent_leaves_canonical_order_untouched() {
        let coverage = ProjectCoverage::from_records(vec![
            record("a.ts", "A", 80),
            record("b.ts", "B", 10),
            record("c.ts", "C", 10),
        ]);

        let ascending: Vec<&str> = coverage
            .by_percent()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(ascending, vec!["B", "C", "A"]);
        assert_eq!(coverage.files[0].name, "A");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let coverage = ProjectCoverage::from_records(vec![record("a.ts", "A", 80)]);
        let value = serde_json::to_value(&coverage).expect("json");
        assert_eq!(value["files"][0]["filePath"], "a.ts");
        assert_eq!(value["files"][0]["type"], "class");
        assert_eq!(value["files"][0]["linkType"], "classe");
        assert_eq!(value["files"][0]["status"], "very-good");
    }
}
