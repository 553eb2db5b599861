#![deny(missing_docs)]
//! doccov command-line interface.
//!
//! Computes documentation coverage for a parsed project model, writes the coverage page and
//! badge, and exits with a status reflecting the configured coverage checks.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use doccov_core::{
    CoverageEngine, CoverageRun, CoverageSettings, DEFAULT_COVERAGE_MINIMUM_PER_FILE,
    DEFAULT_COVERAGE_THRESHOLD, DEFAULT_OUTPUT, ExportFormat, FileReportSink, Outcome,
    ProjectCoverage, ProjectModel, StdFileSystem, coverage_schema_json, format_statements,
    render_coverage_markdown, render_json,
};
use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "doccov", version, about = "Documentation coverage for parsed projects")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct CheckArgs {
    /// Check project coverage against `--coverage-test-threshold`.
    #[arg(long, env = "DOCCOV_COVERAGE_TEST")]
    coverage_test: bool,
    /// Minimum project coverage the global check requires.
    #[arg(
        long,
        env = "DOCCOV_COVERAGE_TEST_THRESHOLD",
        value_name = "PERCENT",
        default_value_t = DEFAULT_COVERAGE_THRESHOLD
    )]
    coverage_test_threshold: u8,
    /// Check every entity against the per-file minimum.
    #[arg(long, env = "DOCCOV_COVERAGE_TEST_PER_FILE")]
    coverage_test_per_file: bool,
    /// Minimum coverage each entity must reach.
    #[arg(
        long = "coverage-min-per-file",
        env = "DOCCOV_COVERAGE_MIN_PER_FILE",
        default_value_t = DEFAULT_COVERAGE_MINIMUM_PER_FILE
    )]
    coverage_minimum_per_file: u8,
    /// Exit with a failure code when a coverage check fails.
    #[arg(
        long,
        env = "DOCCOV_COVERAGE_TEST_THRESHOLD_FAIL",
        action = ArgAction::Set,
        default_value_t = true
    )]
    coverage_test_threshold_fail: bool,
}

#[derive(Args, Clone)]
struct OutputArgs {
    /// Output format for the coverage summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the summary to a file instead of stdout.
    #[arg(long = "report-output")]
    report_output: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct ReportArgs {
    /// JSON project model produced by the documentation parser.
    model: PathBuf,
    /// Directory receiving the coverage page and badge.
    #[arg(short = 'd', long, env = "DOCCOV_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Documentation export format; the badge is only rendered for html.
    #[arg(long, value_enum, default_value_t = ExportFormatArg::Html)]
    export_format: ExportFormatArg,
    #[command(flatten)]
    check: CheckArgs,
    #[command(flatten)]
    report: OutputArgs,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum ExportFormatArg {
    Html,
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(value: ExportFormatArg) -> Self {
        match value {
            ExportFormatArg::Html => ExportFormat::Html,
            ExportFormatArg::Json => ExportFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute coverage for a project model and run the configured checks.
    Report(ReportArgs),
    /// Print the schema of the exported coverage dataset.
    Schema,
}

impl ReportArgs {
    fn settings(&self) -> CoverageSettings {
        CoverageSettings {
            coverage_test: self.check.coverage_test,
            coverage_test_per_file: self.check.coverage_test_per_file,
            coverage_test_threshold: self.check.coverage_test_threshold,
            coverage_minimum_per_file: self.check.coverage_minimum_per_file,
            coverage_test_threshold_fail: self.check.coverage_test_threshold_fail,
            export_format: self.export_format.into(),
            output: self.output.clone(),
        }
    }
}

#[cfg(not(test))]
#[tokio::main]
async fn main() -> CliResult<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Report(args) => run_report(args).await?,
        Commands::Schema => {
            print!("{}", coverage_schema_json()?);
            0
        }
    };

    Ok(ExitCode::from(exit_status(code)))
}

#[cfg(test)]
fn main() {}

fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

async fn run_report(args: ReportArgs) -> CliResult<i32> {
    let contents = tokio::fs::read_to_string(&args.model).await?;
    let model = ProjectModel::from_json(&contents)?;
    let settings = args.settings();
    log::info!(
        "Loaded {} entities from {}",
        model.len(),
        args.model.display()
    );

    let engine = CoverageEngine::new(settings.clone());
    let run = tokio::task::spawn_blocking(move || {
        let mut sink = FileReportSink::new(StdFileSystem::new(), engine.settings().output.clone());
        engine.run(&model, &mut sink)
    })
    .await??;

    emit_summary(&run, &args.report).await?;

    let code = run.exit_code(&settings);
    if run.evaluation.outcome == Outcome::Fail && code == 0 {
        log::warn!("Coverage check failed but threshold failures are not fatal");
    }
    Ok(code)
}

async fn emit_summary(run: &CoverageRun, output: &OutputArgs) -> CliResult<()> {
    let contents = match output.format {
        OutputFormat::Text => render_coverage_text(&run.coverage),
        OutputFormat::Markdown => render_coverage_markdown(&run.coverage),
        OutputFormat::Json => render_json(&run.coverage)?,
    };
    emit_output(output, contents).await
}

async fn emit_output(output: &OutputArgs, contents: String) -> CliResult<()> {
    if let Some(path) = &output.report_output {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await?;
    } else {
        print!("{contents}");
    }
    Ok(())
}

fn render_coverage_text(coverage: &ProjectCoverage) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Documentation coverage: {}% ({})",
        coverage.count, coverage.status
    );
    if coverage.files.is_empty() {
        let _ = writeln!(output, "Entities: none");
        return output;
    }
    let _ = writeln!(output, "Entities:");
    for record in &coverage.files {
        let _ = writeln!(
            output,
            "- {} {} ({}): {} [{}]",
            record.kind,
            record.name,
            record.file_path,
            format_statements(record),
            record.status
        );
    }
    output
}
