//! OpenAPI components describing the coverage dataset.

use utoipa::OpenApi;

use crate::domain::{CoverageRecord, ProjectCoverage};
use crate::error::Result;
use crate::model::EntityKind;
use crate::status::CoverageStatus;

/// Schema document for consumers of the exported coverage JSON.
#[derive(OpenApi)]
#[openapi(
    info(title = "doccov coverage dataset"),
    components(schemas(ProjectCoverage, CoverageRecord, CoverageStatus, EntityKind))
)]
pub struct CoverageApiDoc;

/// Render the schema document as pretty JSON.
pub fn coverage_schema_json() -> Result<String> {
    Ok(CoverageApiDoc::openapi().to_pretty_json()?)
}

#[cfg(test)]
mod tests {
    use super::coverage_schema_json;

    #[test]
    fn schema_lists_coverage_components() {
        let json = coverage_schema_json().expect("schema");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        let schemas = &value["components"]["schemas"];
        assert!(schemas["ProjectCoverage"].is_object());
        assert!(schemas["CoverageRecord"].is_object());
        assert!(schemas["CoverageRecord"]["properties"]["coveragePercent"].is_object());
        assert!(schemas["CoverageStatus"].is_object());
    }
}
