//! Destinations for computed coverage.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::badge::{BADGE_FILE_NAME, render_badge};
use crate::domain::{CoverageRecord, ProjectCoverage};
use crate::error::Result;
use crate::fs::FileSystem;
use crate::report::{render_coverage_markdown, render_json};

/// Name, id and context of the coverage page.
pub const COVERAGE_PAGE: &str = "coverage";

/// Where a page sits in the generated documentation tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// Top-level page.
    Root,
    /// Page nested under another one.
    Internal,
}

/// A page registered with the documentation generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Page name.
    pub name: String,
    /// Page identifier.
    pub id: String,
    /// Template context.
    pub context: String,
    /// Depth in the output tree.
    pub depth: u32,
    /// Page placement.
    pub page_type: PageType,
    /// Records listed on the page.
    pub files: Vec<CoverageRecord>,
    /// Full coverage dataset.
    pub data: ProjectCoverage,
}

impl Page {
    /// Build the root coverage page for a project.
    pub fn coverage(coverage: &ProjectCoverage) -> Self {
        Self {
            name: COVERAGE_PAGE.to_string(),
            id: COVERAGE_PAGE.to_string(),
            context: COVERAGE_PAGE.to_string(),
            depth: 0,
            page_type: PageType::Root,
            files: coverage.files.clone(),
            data: coverage.clone(),
        }
    }
}

/// Receives coverage results for persistence and rendering.
#[cfg_attr(test, mockall::automock)]
pub trait ReportSink {
    /// Register a page with the documentation output.
    fn register_page(&mut self, page: Page) -> Result<()>;
    /// Render the coverage badge into the output directory.
    fn render_badge(&mut self, output: &Path, coverage: &ProjectCoverage) -> Result<()>;
}

/// Sink keeping everything in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    /// Registered pages, in registration order.
    pub pages: Vec<Page>,
    /// Badges requested, as (output directory, rendered SVG).
    pub badges: Vec<(PathBuf, String)>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for MemorySink {
    fn register_page(&mut self, page: Page) -> Result<()> {
        self.pages.push(page);
        Ok(())
    }

    fn render_badge(&mut self, output: &Path, coverage: &ProjectCoverage) -> Result<()> {
        self.badges.push((output.to_path_buf(), render_badge(coverage)));
        Ok(())
    }
}

/// Sink writing pages and badges below an output directory.
///
/// A registered page lands as `<name>.json` and `<name>.md`; the badge goes to
/// `images/coverage-badge-documentation.svg` under the directory passed to `render_badge`.
pub struct FileReportSink<F: FileSystem> {
    fs: F,
    root: PathBuf,
}

impl<F: FileSystem> FileReportSink<F> {
    /// Create a sink writing pages into `root`.
    pub fn new(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }
}

impl<F: FileSystem> ReportSink for FileReportSink<F> {
    fn register_page(&mut self, page: Page) -> Result<()> {
        self.fs.create_dir_all(&self.root)?;
        let json_path = self.root.join(format!("{}.json", page.name));
        self.fs.write(&json_path, &render_json(&page)?)?;
        let markdown_path = self.root.join(format!("{}.md", page.name));
        self.fs
            .write(&markdown_path, &render_coverage_markdown(&page.data))?;
        Ok(())
    }

    fn render_badge(&mut self, output: &Path, coverage: &ProjectCoverage) -> Result<()> {
        let images = output.join("images");
        self.fs.create_dir_all(&images)?;
        self.fs
            .write(&images.join(BADGE_FILE_NAME), &render_badge(coverage))
    }
}
