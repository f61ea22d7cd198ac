use super::super::domain::{DimensionShares, SizeRange, TeamMember};
use super::super::ranking::{missing_dimensions, GAP_THRESHOLD};
use super::super::scoring::ScoreBreakdown;
use super::views::TeamInsights;

const STRONG_BALANCE: f64 = 0.8;
const WEAK_BALANCE: f64 = 0.6;
const STRONG_COMPATIBILITY: f64 = 0.85;
const WEAK_COMPATIBILITY: f64 = 0.7;
const STRONG_CULTURAL_FIT: f64 = 0.8;
const DOMINANT_SHARE: f64 = 0.4;
const WEAK_TEAM_SIZE: f64 = 0.7;

/// Strengths, weaknesses and recommendations for `members` given their breakdown.
///
/// `size_range` is the optimal range of the size category the breakdown was
/// scored against; it decides whether a weak team-size score reads as
/// undersized or oversized.
pub fn generate_insights(
    members: &[TeamMember],
    breakdown: &ScoreBreakdown,
    size_range: SizeRange,
) -> TeamInsights {
    let distribution = DimensionShares::of_team(members);
    let missing = missing_dimensions(members, GAP_THRESHOLD);

    let mut strengths = Vec::new();
    if breakdown.dimension_balance > STRONG_BALANCE {
        strengths.push("Excellent dimension balance".to_string());
    }
    if breakdown.type_compatibility > STRONG_COMPATIBILITY {
        strengths.push("High team compatibility".to_string());
    }
    if breakdown.cultural_fit > STRONG_CULTURAL_FIT {
        strengths.push("Strong cultural alignment".to_string());
    }

    let (dominant, dominant_share) = distribution.dominant();
    if dominant_share > DOMINANT_SHARE {
        strengths.push(format!("Strong {} focus", dominant.label()));
    }

    let mut weaknesses = Vec::new();
    if breakdown.dimension_balance < WEAK_BALANCE {
        weaknesses.push("Unbalanced dimension distribution".to_string());
    }
    if breakdown.type_compatibility < WEAK_COMPATIBILITY {
        weaknesses.push("Potential compatibility issues".to_string());
    }
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|dimension| dimension.label()).collect();
        weaknesses.push(format!("Missing dimensions: {}", names.join(", ")));
    }

    let mut recommendations: Vec<String> = missing
        .iter()
        .map(|dimension| format!("Consider adding a {}-oriented member", dimension.label()))
        .collect();

    if breakdown.team_size < WEAK_TEAM_SIZE {
        if members.len() < size_range.min {
            recommendations.push("Team might be too small for complex projects".to_string());
        } else {
            recommendations.push("Team might be too large, consider splitting".to_string());
        }
    }

    if strengths.is_empty() {
        strengths.push("Team has potential for improvement".to_string());
    }
    if weaknesses.is_empty() {
        weaknesses.push("No major weaknesses identified".to_string());
    }
    if recommendations.is_empty() {
        recommendations.push("Team composition is solid".to_string());
    }

    TeamInsights {
        strengths,
        weaknesses,
        recommendations,
        dimension_distribution: distribution,
        missing_dimensions: missing,
    }
}
