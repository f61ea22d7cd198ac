use super::super::domain::Dimension;
use super::super::ranking::RankedCandidate;
use super::views::CandidateTraits;

const SIGNIFICANT_IMPROVEMENT: f64 = 0.1;
const EXCELLENT_COMPATIBILITY: f64 = 0.85;
const TRAITS_SHOWN: usize = 2;

/// Sentence-per-reason explanation of why a candidate ranks where it does.
pub fn candidate_reasoning(ranked: &RankedCandidate) -> String {
    let mut reasons = Vec::new();

    if ranked.fills_gap {
        reasons.push(format!(
            "Brings needed {} dimension to the team",
            ranked.candidate.dimension().label()
        ));
    }

    let improvement = ranked.improvement;
    if improvement > SIGNIFICANT_IMPROVEMENT {
        reasons.push(format!(
            "Significantly improves team synergy by {:.0}%",
            improvement * 100.0
        ));
    } else if improvement > 0.0 {
        reasons.push(format!(
            "Improves team synergy by {:.0}%",
            improvement * 100.0
        ));
    }

    if ranked.detailed_breakdown.type_compatibility > EXCELLENT_COMPATIBILITY {
        reasons.push("Excellent compatibility with existing team members".to_string());
    }

    if reasons.is_empty() {
        reasons.push("Good fit for team composition".to_string());
    }

    format!("{}.", reasons.join(". "))
}

pub fn candidate_traits(dimension: Dimension) -> CandidateTraits {
    let (strengths, challenges): (&[&'static str], &[&'static str]) = match dimension {
        Dimension::Vision => (
            &["Strategic thinking", "Long-term planning", "Vision alignment"],
            &["May focus too much on big picture", "Could overlook details"],
        ),
        Dimension::Innovation => (
            &["Creative problem-solving", "Innovation", "New ideas"],
            &[
                "Might prioritize novelty over practicality",
                "Could be impatient with routine",
            ],
        ),
        Dimension::Expertise => (
            &["Technical expertise", "Deep knowledge", "Quality focus"],
            &["May be overly perfectionistic", "Could resist change"],
        ),
        Dimension::Connection => (
            &["Team collaboration", "Communication", "Relationship building"],
            &[
                "Might avoid necessary conflicts",
                "Could be too consensus-oriented",
            ],
        ),
    };

    CandidateTraits {
        strengths: strengths.iter().take(TRAITS_SHOWN).copied().collect(),
        challenges: challenges.iter().take(TRAITS_SHOWN).copied().collect(),
    }
}
