//! Coverage engine orchestration.

use log::info;

use crate::coverage::compute_coverage;
use crate::domain::ProjectCoverage;
use crate::error::Result;
use crate::model::ProjectModel;
use crate::settings::{CoverageSettings, ExportFormat};
use crate::sink::{Page, ReportSink};
use crate::threshold::{Evaluation, evaluate};

/// Computed coverage together with its threshold evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRun {
    /// Project coverage, records ordered by file path.
    pub coverage: ProjectCoverage,
    /// Threshold decision.
    pub evaluation: Evaluation,
}

impl CoverageRun {
    /// Exit code the hosting process should terminate with.
    pub fn exit_code(&self, settings: &CoverageSettings) -> i32 {
        self.evaluation
            .outcome
            .exit_code(settings.coverage_test_threshold_fail)
    }
}

/// Computes coverage, hands it to a sink and evaluates thresholds.
#[derive(Debug, Clone, Default)]
pub struct CoverageEngine {
    settings: CoverageSettings,
}

impl CoverageEngine {
    /// Create an engine with the given settings.
    pub fn new(settings: CoverageSettings) -> Self {
        Self { settings }
    }

    /// Settings used by this engine.
    pub fn settings(&self) -> &CoverageSettings {
        &self.settings
    }

    /// Run coverage for a project.
    ///
    /// The coverage page is always registered. The badge is only rendered for HTML exports.
    /// Threshold findings are logged before returning; a failed check is reported through
    /// the returned outcome, never as an error.
    pub fn run(&self, model: &ProjectModel, sink: &mut dyn ReportSink) -> Result<CoverageRun> {
        let coverage = compute_coverage(model);
        info!(
            "Documentation coverage: {}% ({}) across {} entities",
            coverage.count,
            coverage.status,
            coverage.files.len()
        );

        sink.register_page(Page::coverage(&coverage))?;
        if self.settings.export_format == ExportFormat::Html {
            sink.render_badge(&self.settings.output, &coverage)?;
        }

        let evaluation = evaluate(&coverage, &self.settings);
        evaluation.log();

        Ok(CoverageRun {
            coverage,
            evaluation,
        })
    }
}
