//! Documentation coverage computation.

use log::debug;

use crate::domain::{CoverageRecord, ProjectCoverage};
use crate::model::{CoverableEntity, EntityKind, ProjectModel, Shape};
use crate::status::CoverageStatus;

/// Documented versus documentable statements of one entity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StatementTally {
    /// Statements carrying a non-empty description.
    pub documented: u32,
    /// Statements that count toward coverage. Signed because private members retract slots.
    pub total: i64,
}

impl StatementTally {
    /// Floored percentage of documented statements; 0 when nothing is documentable.
    pub fn percent(&self) -> u8 {
        if self.total <= 0 {
            return 0;
        }
        let percent = i64::from(self.documented) * 100 / self.total;
        percent.clamp(0, 100) as u8
    }

    /// `documented/total` label shown next to the percentage.
    pub fn count_label(&self) -> String {
        format!("{}/{}", self.documented, self.total)
    }
}

/// Count documented and documentable statements of a coverable entity.
///
/// The entity itself is one statement, each member of the kind's member lists is one, and a
/// declared constructor is one more. Private members take their slot back and are never
/// inspected. Pipes only ever count their own description.
pub fn tally(entity: &CoverableEntity<'_>) -> StatementTally {
    let raw = entity.entity;
    if entity.kind == EntityKind::Pipe {
        return StatementTally {
            documented: u32::from(is_documented(raw.description.as_deref())),
            total: 1,
        };
    }

    let member_count: usize = entity.member_lists.iter().map(|list| list.len()).sum();
    let mut tally = StatementTally {
        documented: 0,
        total: 1 + member_count as i64,
    };

    if let Some(constructor) = &raw.constructor_obj {
        tally.total += 1;
        if is_documented(constructor.description.as_deref()) {
            tally.documented += 1;
        }
    }
    if is_documented(raw.description.as_deref()) {
        tally.documented += 1;
    }

    for member in entity.member_lists.iter().flat_map(|list| list.iter()) {
        if member.visibility.is_private() {
            tally.total -= 1;
        } else if is_documented(member.description.as_deref()) {
            tally.documented += 1;
        }
    }

    tally
}

/// Build the coverage record of a coverable entity.
pub fn record_for(entity: &CoverableEntity<'_>) -> CoverageRecord {
    let tally = tally(entity);
    let coverage_percent = tally.percent();
    CoverageRecord {
        file_path: entity.entity.file.clone(),
        kind: entity.kind,
        link_type: entity.kind.link_type().to_string(),
        name: entity.entity.name.clone(),
        coverage_percent,
        coverage_count: tally.count_label(),
        status: CoverageStatus::from_percent(coverage_percent),
    }
}

/// Compute coverage for every well-formed entity of the project.
///
/// Entities missing a member list required by their kind are left out without error.
pub fn compute_coverage(model: &ProjectModel) -> ProjectCoverage {
    let mut files = Vec::new();
    let mut malformed = 0usize;

    for (kind, raw) in model.entities() {
        match raw.classify(kind) {
            Shape::Coverable(entity) => files.push(record_for(&entity)),
            Shape::Malformed => {
                malformed += 1;
                debug!("skipping incomplete {kind} {} ({})", raw.name, raw.file);
            }
        }
    }

    if malformed > 0 {
        debug!("{malformed} incomplete entities excluded from coverage");
    }
    ProjectCoverage::from_records(files)
}

fn is_documented(description: Option<&str>) -> bool {
    description.is_some_and(|text| !text.is_empty())
}
