use super::super::domain::Dimension;
use super::super::scoring::ScoreBreakdown;
use super::views::{GapKind, GapSeverity, TeamGap};

const IMBALANCE_THRESHOLD: f64 = 0.6;
const COMPATIBILITY_THRESHOLD: f64 = 0.7;

pub fn identify_gaps(missing: &[Dimension], breakdown: &ScoreBreakdown) -> Vec<TeamGap> {
    let mut gaps: Vec<TeamGap> = missing
        .iter()
        .map(|dimension| TeamGap {
            kind: GapKind::MissingDimension,
            area: dimension.label().to_string(),
            severity: GapSeverity::High,
            impact: format!("Team lacks {}-oriented perspective", dimension.label()),
            recommendation: format!("Add a {}-focused member", dimension.label()),
        })
        .collect();

    if breakdown.dimension_balance < IMBALANCE_THRESHOLD {
        gaps.push(TeamGap {
            kind: GapKind::Imbalance,
            area: "overall".to_string(),
            severity: GapSeverity::Medium,
            impact: "Unbalanced team composition may lead to blind spots".to_string(),
            recommendation: "Rebalance team by adding underrepresented dimensions".to_string(),
        });
    }

    if breakdown.type_compatibility < COMPATIBILITY_THRESHOLD {
        gaps.push(TeamGap {
            kind: GapKind::Compatibility,
            area: "team_dynamics".to_string(),
            severity: GapSeverity::Medium,
            impact: "Potential conflicts or communication issues".to_string(),
            recommendation: "Consider team building activities or mediation".to_string(),
        });
    }

    gaps
}
