use serde::Serialize;
use tracing::trace;

use super::domain::{Dimension, DimensionShares, ProjectType, TeamMember};
use super::scoring::{ScoreBreakdown, ScoringEngine, ScoringOptions};

/// Share below which a dimension counts as missing from a team.
pub const GAP_THRESHOLD: f64 = 0.15;

/// Dimensions whose share of the team is strictly below `threshold`, in V, I, E, C order.
pub fn missing_dimensions(members: &[TeamMember], threshold: f64) -> Vec<Dimension> {
    DimensionShares::of_team(members)
        .iter()
        .filter(|(_, share)| *share < threshold)
        .map(|(dimension, _)| dimension)
        .collect()
}

/// Team total before and after adding one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SynergyPrediction {
    pub before_total: f64,
    pub after_total: f64,
}

impl SynergyPrediction {
    pub fn improvement(&self) -> f64 {
        self.after_total - self.before_total
    }
}

/// A candidate together with the predicted effect of joining the team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub candidate: TeamMember,
    pub predicted_total: f64,
    pub before_total: f64,
    pub after_total: f64,
    pub improvement: f64,
    pub fills_gap: bool,
    pub detailed_breakdown: ScoreBreakdown,
}

/// Orders candidates by the total their addition would produce.
#[derive(Debug, Clone, Copy)]
pub struct CandidateRanker<'m> {
    engine: ScoringEngine<'m>,
}

impl Default for CandidateRanker<'static> {
    fn default() -> Self {
        Self::new(ScoringEngine::default())
    }
}

impl<'m> CandidateRanker<'m> {
    pub fn new(engine: ScoringEngine<'m>) -> Self {
        Self { engine }
    }

    /// Scores are computed with the default size category and historical prior.
    pub fn predict_synergy(
        &self,
        team: &[TeamMember],
        candidate: &TeamMember,
        project: ProjectType,
    ) -> SynergyPrediction {
        let options = ScoringOptions::for_project(project);
        SynergyPrediction {
            before_total: self.engine.total(team, &options),
            after_total: self.engine.total(&with_candidate(team, candidate), &options),
        }
    }

    /// Sorted by `predicted_total` descending; equal totals keep their input order.
    pub fn rank(
        &self,
        team: &[TeamMember],
        candidates: &[TeamMember],
        project: ProjectType,
        top_n: usize,
    ) -> Vec<RankedCandidate> {
        let options = ScoringOptions::for_project(project);
        let before_total = self.engine.total(team, &options);
        let gaps = missing_dimensions(team, GAP_THRESHOLD);

        let mut ranked: Vec<RankedCandidate> = candidates
            .iter()
            .map(|candidate| {
                let breakdown = self
                    .engine
                    .score(&with_candidate(team, candidate), &options);
                let fills_gap = gaps.contains(&candidate.dimension());

                trace!(
                    candidate = %candidate.id,
                    type_code = %candidate.type_code,
                    before_total,
                    after_total = breakdown.total,
                    fills_gap,
                    "scored candidate"
                );

                RankedCandidate {
                    candidate: candidate.clone(),
                    predicted_total: breakdown.total,
                    before_total,
                    after_total: breakdown.total,
                    improvement: breakdown.total - before_total,
                    fills_gap,
                    detailed_breakdown: breakdown,
                }
            })
            .collect();

        // Stable sort: ties stay in input order.
        ranked.sort_by(|a, b| b.predicted_total.total_cmp(&a.predicted_total));
        ranked.truncate(top_n);
        ranked
    }
}

fn with_candidate(team: &[TeamMember], candidate: &TeamMember) -> Vec<TeamMember> {
    let mut extended = Vec::with_capacity(team.len() + 1);
    extended.extend_from_slice(team);
    extended.push(candidate.clone());
    extended
}
