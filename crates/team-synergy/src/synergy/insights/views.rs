use serde::Serialize;

use super::super::domain::{Dimension, DimensionShares};

/// Human-readable reading of a team's score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamInsights {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub dimension_distribution: DimensionShares,
    pub missing_dimensions: Vec<Dimension>,
}

/// Fixed per-dimension vocabulary describing what a candidate brings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateTraits {
    pub strengths: Vec<&'static str>,
    pub challenges: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    MissingDimension,
    Imbalance,
    Compatibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapSeverity {
    High,
    Medium,
}

impl GapSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

/// A single improvement opportunity for an existing team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamGap {
    pub kind: GapKind,
    pub area: String,
    pub severity: GapSeverity,
    pub impact: String,
    pub recommendation: String,
}
