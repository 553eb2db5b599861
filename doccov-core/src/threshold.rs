//! Pass/fail evaluation of coverage against configured thresholds.
//!
//! Evaluation is pure: it returns the outcome together with the messages that explain it.
//! Logging them and turning the outcome into an exit status is left to the caller.

use log::{error, info};

use crate::domain::{CoverageRecord, ProjectCoverage};
use crate::settings::CoverageSettings;

const PER_FILE_RULE: &str = "-------------------";

/// Terminal decision of a coverage check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No check was requested; documentation generation carries on.
    Continue,
    /// Every requested check passed.
    Pass,
    /// At least one requested check failed.
    Fail,
}

impl Outcome {
    /// Process exit code for this outcome.
    ///
    /// A failure only maps to a non-zero code when `threshold_fail` is set.
    pub fn exit_code(self, threshold_fail: bool) -> i32 {
        match self {
            Self::Continue | Self::Pass => 0,
            Self::Fail if threshold_fail => 1,
            Self::Fail => 0,
        }
    }
}

/// Severity of a finding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FindingLevel {
    /// Informational.
    Info,
    /// A failed expectation.
    Error,
}

/// A message produced while evaluating thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Severity.
    pub level: FindingLevel,
    /// Human-readable message.
    pub message: String,
}

impl Finding {
    fn info(message: impl Into<String>) -> Self {
        Self {
            level: FindingLevel::Info,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: FindingLevel::Error,
            message: message.into(),
        }
    }
}

/// Records split around the per-file minimum, each side in ascending percentage order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PerFileSplit {
    /// Records at or above the minimum.
    pub over_files: Vec<CoverageRecord>,
    /// Records below the minimum.
    pub under_files: Vec<CoverageRecord>,
}

/// Result of evaluating a project's coverage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Final decision.
    pub outcome: Outcome,
    /// Messages in the order they should be reported.
    pub findings: Vec<Finding>,
    /// Per-file split, present when the per-file check ran.
    pub per_file: Option<PerFileSplit>,
}

impl Evaluation {
    /// Emit every finding through the `log` facade.
    pub fn log(&self) {
        for finding in &self.findings {
            match finding.level {
                FindingLevel::Info => info!("{}", finding.message),
                FindingLevel::Error => error!("{}", finding.message),
            }
        }
    }

    /// Findings reported at error level.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|finding| finding.level == FindingLevel::Error)
    }
}

/// Evaluate project coverage against the configured checks.
pub fn evaluate(coverage: &ProjectCoverage, settings: &CoverageSettings) -> Evaluation {
    if !settings.coverage_test && !settings.coverage_test_per_file {
        return Evaluation {
            outcome: Outcome::Continue,
            findings: Vec::new(),
            per_file: None,
        };
    }

    let mut findings = Vec::new();
    let mut passed = true;

    let per_file = if settings.coverage_test_per_file {
        Some(split_per_file(
            coverage,
            settings.coverage_minimum_per_file,
            &mut findings,
        ))
    } else {
        None
    };

    if settings.coverage_test {
        passed &= check_global(coverage, settings.coverage_test_threshold, &mut findings);
    }

    if let Some(split) = &per_file {
        if split.under_files.is_empty() {
            findings.push(Finding::info("Documentation coverage per file is achieved"));
        } else {
            findings.push(Finding::error(
                "Documentation coverage per file is not achieved",
            ));
            passed = false;
        }
    }

    Evaluation {
        outcome: if passed { Outcome::Pass } else { Outcome::Fail },
        findings,
        per_file,
    }
}

fn check_global(coverage: &ProjectCoverage, threshold: u8, findings: &mut Vec<Finding>) -> bool {
    if coverage.count >= threshold {
        findings.push(Finding::info(format!(
            "Documentation coverage ({}%) is over threshold",
            coverage.count
        )));
        true
    } else {
        findings.push(Finding::error(format!(
            "Documentation coverage ({}%) is not over threshold",
            coverage.count
        )));
        false
    }
}

fn split_per_file(
    coverage: &ProjectCoverage,
    minimum: u8,
    findings: &mut Vec<Finding>,
) -> PerFileSplit {
    findings.push(Finding::info("Process documentation coverage per file"));
    findings.push(Finding::info(PER_FILE_RULE));

    let ordered = coverage.by_percent();
    let mut split = PerFileSplit::default();
    for record in ordered.iter().filter(|r| r.coverage_percent >= minimum) {
        findings.push(Finding::info(format!(
            "{} % for file {} - over minimum per file",
            record.coverage_percent, record.file_path
        )));
        split.over_files.push((*record).clone());
    }
    for record in ordered.iter().filter(|r| r.coverage_percent < minimum) {
        findings.push(Finding::error(format!(
            "{} % for file {} - under minimum per file",
            record.coverage_percent, record.file_path
        )));
        split.under_files.push((*record).clone());
    }

    findings.push(Finding::info(PER_FILE_RULE));
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityKind;
    use crate::status::CoverageStatus;

    fn record(path: &str, percent: u8) -> CoverageRecord {
        CoverageRecord {
            file_path: path.to_string(),
            kind: EntityKind::Component,
            link_type: "component".to_string(),
            name: path.to_string(),
            coverage_percent: percent,
            coverage_count: format!("{percent}/100"),
            status: CoverageStatus::from_percent(percent),
        }
    }

    fn project(count: u8, files: Vec<CoverageRecord>) -> ProjectCoverage {
        ProjectCoverage {
            count,
            status: CoverageStatus::from_percent(count),
            files,
        }
    }

    fn settings(global: bool, per_file: bool) -> CoverageSettings {
        CoverageSettings {
            coverage_test: global,
            coverage_test_per_file: per_file,
            ..CoverageSettings::default()
        }
    }

    fn messages(evaluation: &Evaluation, level: FindingLevel) -> Vec<&str> {
        evaluation
            .findings
            .iter()
            .filter(|finding| finding.level == level)
            .map(|finding| finding.message.as_str())
            .collect()
    }

    #[test]
    fn no_checks_continue_silently() {
        let evaluation = evaluate(&project(0, Vec::new()), &settings(false, false));
        assert_eq!(evaluation.outcome, Outcome::Continue);
        assert!(evaluation.findings.is_empty());
        assert!(evaluation.per_file.is_none());
    }

    #[test]
    fn global_threshold_is_inclusive() {
        let mut config = settings(true, false);
        config.coverage_test_threshold = 70;

        let pass = evaluate(&project(70, Vec::new()), &config);
        assert_eq!(pass.outcome, Outcome::Pass);
        assert_eq!(
            messages(&pass, FindingLevel::Info),
            vec!["Documentation coverage (70%) is over threshold"]
        );

        let fail = evaluate(&project(69, Vec::new()), &config);
        assert_eq!(fail.outcome, Outcome::Fail);
        assert_eq!(
            messages(&fail, FindingLevel::Error),
            vec!["Documentation coverage (69%) is not over threshold"]
        );
    }

    #[test]
    fn per_file_check_reports_under_files() {
        let mut config = settings(false, true);
        config.coverage_minimum_per_file = 50;
        let coverage = project(50, vec![record("src/a.ts", 60), record("src/b.ts", 40)]);

        let evaluation = evaluate(&coverage, &config);

        assert_eq!(evaluation.outcome, Outcome::Fail);
        let split = evaluation.per_file.as_ref().expect("per-file split");
        assert_eq!(split.under_files.len(), 1);
        assert_eq!(split.under_files[0].file_path, "src/b.ts");
        assert_eq!(split.over_files[0].file_path, "src/a.ts");
        assert_eq!(
            messages(&evaluation, FindingLevel::Error),
            vec![
                "40 % for file src/b.ts - under minimum per file",
                "Documentation coverage per file is not achieved",
            ]
        );
        assert!(
            messages(&evaluation, FindingLevel::Info)
                .contains(&"60 % for file src/a.ts - over minimum per file")
        );
    }

    #[test]
    fn per_file_check_passes_when_nothing_is_under() {
        let mut config = settings(false, true);
        config.coverage_minimum_per_file = 40;
        let coverage = project(50, vec![record("src/a.ts", 60), record("src/b.ts", 40)]);

        let evaluation = evaluate(&coverage, &config);

        assert_eq!(evaluation.outcome, Outcome::Pass);
        assert_eq!(evaluation.errors().count(), 0);
        let split = evaluation.per_file.expect("split");
        let percents: Vec<u8> = split.over_files.iter().map(|r| r.coverage_percent).collect();
        assert_eq!(percents, vec![40, 60]);
    }

    #[test]
    fn combined_checks_fail_when_per_file_fails() {
        let mut config = settings(true, true);
        config.coverage_test_threshold = 70;
        config.coverage_minimum_per_file = 50;
        let coverage = project(80, vec![record("src/a.ts", 100), record("src/b.ts", 30)]);

        let evaluation = evaluate(&coverage, &config);

        assert_eq!(evaluation.outcome, Outcome::Fail);
        assert!(
            messages(&evaluation, FindingLevel::Info)
                .contains(&"Documentation coverage (80%) is over threshold")
        );
        assert!(
            messages(&evaluation, FindingLevel::Error)
                .contains(&"Documentation coverage per file is not achieved")
        );
    }

    #[test]
    fn combined_checks_cover_every_combination() {
        let mut config = settings(true, true);
        config.coverage_test_threshold = 70;
        config.coverage_minimum_per_file = 50;

        let cases = [
            (80, 60, Outcome::Pass),
            (80, 40, Outcome::Fail),
            (60, 40, Outcome::Fail),
            (60, 60, Outcome::Fail),
        ];
        for (count, file_percent, expected) in cases {
            let coverage = project(count, vec![record("src/a.ts", file_percent)]);
            let evaluation = evaluate(&coverage, &config);
            assert_eq!(
                evaluation.outcome, expected,
                "count {count}, file {file_percent}"
            );
        }
    }

    #[test]
    fn global_failure_with_per_file_success_logs_both() {
        let mut config = settings(true, true);
        config.coverage_test_threshold = 70;
        let evaluation = evaluate(&project(60, vec![record("src/a.ts", 60)]), &config);

        assert_eq!(evaluation.outcome, Outcome::Fail);
        assert_eq!(
            messages(&evaluation, FindingLevel::Error),
            vec!["Documentation coverage (60%) is not over threshold"]
        );
        assert!(
            messages(&evaluation, FindingLevel::Info)
                .contains(&"Documentation coverage per file is achieved")
        );
    }

    #[test]
    fn exit_codes_follow_outcome_and_fail_flag() {
        assert_eq!(Outcome::Continue.exit_code(true), 0);
        assert_eq!(Outcome::Pass.exit_code(true), 0);
        assert_eq!(Outcome::Fail.exit_code(true), 1);
        assert_eq!(Outcome::Fail.exit_code(false), 0);
    }
}
