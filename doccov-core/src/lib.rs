#![deny(missing_docs)]
//! doccov core library.
//!
//! Computes documentation coverage for a parsed project model, classifies it into quality
//! bands and decides whether configured coverage checks pass.

pub mod badge;
pub mod coverage;
pub mod domain;
pub mod engine;
pub mod error;
pub mod fs;
pub mod model;
pub mod report;
pub mod schema;
pub mod settings;
pub mod sink;
pub mod status;
pub mod threshold;

pub use badge::render_badge;
pub use coverage::{StatementTally, compute_coverage, record_for, tally};
pub use domain::{CoverageRecord, ProjectCoverage};
pub use engine::{CoverageEngine, CoverageRun};
pub use error::{DocCovError, Result};
pub use fs::{FileSystem, StdFileSystem};
pub use model::{
    Constructor, CoverableEntity, EntityKind, Member, ProjectModel, RawEntity, Shape, Visibility,
};
pub use report::{format_statements, render_coverage_markdown, render_json};
pub use schema::coverage_schema_json;
pub use settings::{
    CoverageSettings, DEFAULT_COVERAGE_MINIMUM_PER_FILE, DEFAULT_COVERAGE_THRESHOLD,
    DEFAULT_OUTPUT, ExportFormat,
};
pub use sink::{FileReportSink, MemorySink, Page, PageType, ReportSink};
pub use status::CoverageStatus;
pub use threshold::{Evaluation, Finding, FindingLevel, Outcome, PerFileSplit, evaluate};
