//! SVG badge showing project documentation coverage.

use crate::domain::ProjectCoverage;

/// File name of the badge inside the output's `images` directory.
pub const BADGE_FILE_NAME: &str = "coverage-badge-documentation.svg";

const LABEL: &str = "documentation";
const LABEL_WIDTH: u32 = 90;
const CHAR_WIDTH: u32 = 7;
const VALUE_PADDING: u32 = 10;

/// Render a flat "documentation | N%" badge colored by coverage status.
pub fn render_badge(coverage: &ProjectCoverage) -> String {
    let value = format!("{}%", coverage.count);
    let value_width = value.len() as u32 * CHAR_WIDTH + VALUE_PADDING;
    let width = LABEL_WIDTH + value_width;
    let label_x = LABEL_WIDTH / 2;
    let value_x = LABEL_WIDTH + value_width / 2;
    let color = coverage.status.badge_color();

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="20" role="img" aria-label="{LABEL}: {value}">
  <title>{LABEL}: {value}</title>
  <rect width="{LABEL_WIDTH}" height="20" fill="#555"/>
  <rect x="{LABEL_WIDTH}" width="{value_width}" height="20" fill="{color}"/>
  <g fill="#fff" text-anchor="middle" font-family="Verdana,Geneva,sans-serif" font-size="11">
    <text x="{label_x}" y="14">{LABEL}</text>
    <text x="{value_x}" y="14">{value}</text>
  </g>
</svg>
"##
    )
}
