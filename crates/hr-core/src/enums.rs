//! Closed sets used by the report layer: departments and report kinds.
//!
//! Both enums parse case-insensitively from their display names so they can
//! be read straight from CLI arguments and config files.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Department
// ---------------------------------------------------------------------------

/// The fixed set of departments a report can be filtered to.
///
/// The stored `departments.name` column holds [`Department::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum Department {
    #[serde(rename = "HR")]
    Hr,
    Engineering,
    Sales,
    Marketing,
    Finance,
}

impl Department {
    /// Every department, in `dept_id` order of the seeded dataset.
    pub const ALL: [Self; 5] = [
        Self::Hr,
        Self::Engineering,
        Self::Sales,
        Self::Marketing,
        Self::Finance,
    ];

    /// Name as stored in `departments.name`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hr => "HR",
            Self::Engineering => "Engineering",
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Finance => "Finance",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|dept| dept.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "department",
                value: s.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|d| d.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

// ---------------------------------------------------------------------------
// ReportKind
// ---------------------------------------------------------------------------

/// The report views the dispatcher can produce.
///
/// ```text
/// kind                    month range  threshold
/// performance-trends      yes          yes
/// department-performance  no           no
/// attrition               yes          no
/// department-load         yes          no
/// tenure-ladder           no           no
/// project-overlap         no           no
/// project-timelines       no           no
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    PerformanceTrends,
    DepartmentPerformance,
    Attrition,
    DepartmentLoad,
    TenureLadder,
    ProjectOverlap,
    ProjectTimelines,
}

impl ReportKind {
    pub const ALL: [Self; 7] = [
        Self::PerformanceTrends,
        Self::DepartmentPerformance,
        Self::Attrition,
        Self::DepartmentLoad,
        Self::TenureLadder,
        Self::ProjectOverlap,
        Self::ProjectTimelines,
    ];

    /// Identifier used on the command line and in cache keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PerformanceTrends => "performance-trends",
            Self::DepartmentPerformance => "department-performance",
            Self::Attrition => "attrition",
            Self::DepartmentLoad => "department-load",
            Self::TenureLadder => "tenure-ladder",
            Self::ProjectOverlap => "project-overlap",
            Self::ProjectTimelines => "project-timelines",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::PerformanceTrends => "Performance Trends",
            Self::DepartmentPerformance => "Department Performance",
            Self::Attrition => "Attrition Analysis",
            Self::DepartmentLoad => "Department Load",
            Self::TenureLadder => "Employee Tenure Ladder",
            Self::ProjectOverlap => "Project Overlap Detection",
            Self::ProjectTimelines => "Employee Project Timelines",
        }
    }

    /// Label used when deriving export file names.
    #[must_use]
    pub const fn file_label(self) -> &'static str {
        match self {
            Self::PerformanceTrends => "Performance",
            Self::DepartmentPerformance => "Department_Performance",
            Self::Attrition => "Attrition",
            Self::DepartmentLoad => "DeptLoad",
            Self::TenureLadder => "Tenure_Ladder",
            Self::ProjectOverlap => "Project_Overlap",
            Self::ProjectTimelines => "Project_Timelines",
        }
    }

    /// Whether the report is filtered by a month range.
    #[must_use]
    pub const fn uses_months(self) -> bool {
        matches!(
            self,
            Self::PerformanceTrends | Self::Attrition | Self::DepartmentLoad
        )
    }

    /// Whether the report is filtered by a minimum performance score.
    #[must_use]
    pub const fn uses_threshold(self) -> bool {
        matches!(self, Self::PerformanceTrends)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(&needle))
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "report",
                value: s.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|k| k.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
