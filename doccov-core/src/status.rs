//! Quality bands for coverage percentages.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Quality band assigned to a coverage percentage.
///
/// Variants are declared in ascending order so `Ord` follows the band order.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum CoverageStatus {
    /// 0 to 25 percent.
    Low,
    /// 26 to 50 percent.
    Medium,
    /// 51 to 75 percent.
    Good,
    /// 76 percent and above.
    VeryGood,
}

impl CoverageStatus {
    /// Classify a percentage. Each band is inclusive on its upper bound.
    pub fn from_percent(percent: u8) -> Self {
        if percent <= 25 {
            Self::Low
        } else if percent <= 50 {
            Self::Medium
        } else if percent <= 75 {
            Self::Good
        } else {
            Self::VeryGood
        }
    }

    /// Stable identifier used in reports and CSS classes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::Good => "good",
            Self::VeryGood => "very-good",
        }
    }

    /// Fill color used when rendering the coverage badge.
    pub fn badge_color(self) -> &'static str {
        match self {
            Self::Low => "#d9534f",
            Self::Medium => "#dba25f",
            Self::Good => "#e7e04a",
            Self::VeryGood => "#5cb85c",
        }
    }
}

impl fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
