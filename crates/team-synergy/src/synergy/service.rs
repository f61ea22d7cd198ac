use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::directory::{DirectoryError, TeamDirectory, TeamId, TeamRecord};
use super::domain::{Dimension, DimensionShares, ProjectType, SizeCategory, TeamMember};
use super::insights::{
    candidate_reasoning, candidate_traits, generate_insights, identify_gaps, TeamGap,
    TeamInsights,
};
use super::ranking::{missing_dimensions, CandidateRanker, RankedCandidate, GAP_THRESHOLD};
use super::scoring::{ScoreBreakdown, ScoringEngine, ScoringOptions};
use super::validation::{
    size_category_for_headcount, validate_historical_prior, validate_top_n, ValidationError,
};
use crate::config::EngineConfig;

/// Inline roster to score, with optional overrides of the configured defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluationRequest {
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub size_category: Option<SizeCategory>,
    /// Requested headcount; ignored when `size_category` is present.
    #[serde(default)]
    pub target_size: Option<usize>,
    #[serde(default)]
    pub historical_success: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingRequest {
    pub team: Vec<TeamMember>,
    pub candidates: Vec<TeamMember>,
    #[serde(default)]
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

/// Options for recommending members to a stored team.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    pub project_type: ProjectType,
    pub size_category: SizeCategory,
    pub breakdown: ScoreBreakdown,
    pub insights: TeamInsights,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub project_type: ProjectType,
    pub before_total: f64,
    pub candidates: Vec<RankedCandidate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberRecommendation {
    #[serde(flatten)]
    pub ranked: RankedCandidate,
    pub reasoning: String,
    pub strengths: Vec<&'static str>,
    pub challenges: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentTeamAnalysis {
    pub size: usize,
    pub total: f64,
    pub dimension_distribution: DimensionShares,
    pub missing_dimensions: Vec<Dimension>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberRecommendations {
    pub team_id: TeamId,
    pub project_type: ProjectType,
    pub current_team: CurrentTeamAnalysis,
    pub recommendations: Vec<MemberRecommendation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamGapReport {
    pub team_id: TeamId,
    pub team_name: String,
    pub current_total: f64,
    pub gaps: Vec<TeamGap>,
    pub detailed_scores: ScoreBreakdown,
    pub insights: TeamInsights,
}

/// Service composing the team directory with the scoring and ranking engines.
pub struct TeamSynergyService<D> {
    directory: Arc<D>,
    engine: ScoringEngine<'static>,
    ranker: CandidateRanker<'static>,
    config: EngineConfig,
}

impl<D> TeamSynergyService<D>
where
    D: TeamDirectory + 'static,
{
    pub fn new(directory: Arc<D>, config: EngineConfig) -> Self {
        let engine = ScoringEngine::default();
        Self {
            directory,
            engine,
            ranker: CandidateRanker::new(engine),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score an inline roster and explain the result.
    pub fn evaluate(
        &self,
        request: EvaluationRequest,
    ) -> Result<TeamReport, SynergyServiceError> {
        let size_category = match (request.size_category, request.target_size) {
            (Some(category), _) => category,
            (None, Some(headcount)) => size_category_for_headcount(headcount)?,
            (None, None) => self.config.default_size,
        };
        let historical_success = match request.historical_success {
            Some(prior) => validate_historical_prior(prior)?,
            None => self.config.historical_prior,
        };
        let project_type = request.project_type.unwrap_or(self.config.default_project);

        let options = ScoringOptions::for_project(project_type)
            .with_size_category(size_category)
            .with_historical_success(historical_success);
        let breakdown = self.engine.score(&request.members, &options);
        let insights = generate_insights(
            &request.members,
            &breakdown,
            self.engine.model().size_range(size_category),
        );

        info!(
            members = request.members.len(),
            project = project_type.label(),
            size = size_category.label(),
            total = breakdown.total,
            "evaluated team"
        );

        Ok(TeamReport {
            project_type,
            size_category,
            breakdown,
            insights,
        })
    }

    /// Rank inline candidates against an inline team.
    pub fn rank(&self, request: RankingRequest) -> Result<RankingReport, SynergyServiceError> {
        let top_n = self.resolve_top_n(request.top_n)?;
        let project_type = request.project_type.unwrap_or(self.config.default_project);

        let options = ScoringOptions::for_project(project_type);
        let before_total = self.engine.total(&request.team, &options);
        let candidates = self
            .ranker
            .rank(&request.team, &request.candidates, project_type, top_n);

        info!(
            team_size = request.team.len(),
            candidates = request.candidates.len(),
            top_n,
            project = project_type.label(),
            before_total,
            "ranked candidates"
        );

        Ok(RankingReport {
            project_type,
            before_total,
            candidates,
        })
    }

    /// Recommend people from the team's organization, best first.
    pub fn recommend_members(
        &self,
        team_id: &TeamId,
        request: RecommendationRequest,
    ) -> Result<MemberRecommendations, SynergyServiceError> {
        let top_n = self.resolve_top_n(request.top_n)?;
        let project_type = request.project_type.unwrap_or(self.config.default_project);

        let team = self.populated_team(team_id)?;
        let candidates = self.directory.candidates_for(&team)?;
        if candidates.is_empty() {
            return Err(SynergyServiceError::NoCandidates(team.id));
        }

        debug!(
            team = %team.id,
            candidates = candidates.len(),
            "loaded candidate pool"
        );

        let options = ScoringOptions::for_project(project_type);
        let breakdown = self.engine.score(&team.members, &options);
        let insights = generate_insights(
            &team.members,
            &breakdown,
            self.engine.model().size_range(options.size_category),
        );

        let recommendations: Vec<MemberRecommendation> = self
            .ranker
            .rank(&team.members, &candidates, project_type, top_n)
            .into_iter()
            .map(|ranked| {
                let traits = candidate_traits(ranked.candidate.dimension());
                MemberRecommendation {
                    reasoning: candidate_reasoning(&ranked),
                    strengths: traits.strengths,
                    challenges: traits.challenges,
                    ranked,
                }
            })
            .collect();

        info!(
            team = %team.id,
            project = project_type.label(),
            top_n,
            returned = recommendations.len(),
            current_total = breakdown.total,
            "recommended members"
        );

        Ok(MemberRecommendations {
            current_team: CurrentTeamAnalysis {
                size: team.members.len(),
                total: breakdown.total,
                dimension_distribution: insights.dimension_distribution,
                missing_dimensions: insights.missing_dimensions,
                strengths: insights.strengths,
                weaknesses: insights.weaknesses,
            },
            team_id: team.id,
            project_type,
            recommendations,
        })
    }

    /// Improvement opportunities for a stored team under the configured defaults.
    pub fn team_gaps(&self, team_id: &TeamId) -> Result<TeamGapReport, SynergyServiceError> {
        let team = self.populated_team(team_id)?;

        let options = ScoringOptions::for_project(self.config.default_project)
            .with_size_category(self.config.default_size)
            .with_historical_success(self.config.historical_prior);
        let breakdown = self.engine.score(&team.members, &options);
        let missing = missing_dimensions(&team.members, GAP_THRESHOLD);
        let gaps = identify_gaps(&missing, &breakdown);
        let insights = generate_insights(
            &team.members,
            &breakdown,
            self.engine.model().size_range(options.size_category),
        );

        info!(
            team = %team.id,
            gaps = gaps.len(),
            total = breakdown.total,
            "analyzed team gaps"
        );

        Ok(TeamGapReport {
            team_id: team.id,
            team_name: team.name,
            current_total: breakdown.total,
            gaps,
            detailed_scores: breakdown,
            insights,
        })
    }

    fn resolve_top_n(&self, requested: Option<usize>) -> Result<usize, ValidationError> {
        validate_top_n(requested.unwrap_or(self.config.default_top_n))
    }

    fn populated_team(&self, team_id: &TeamId) -> Result<TeamRecord, SynergyServiceError> {
        let team = self
            .directory
            .team(team_id)?
            .ok_or_else(|| SynergyServiceError::TeamNotFound(team_id.clone()))?;

        if team.members.is_empty() {
            return Err(SynergyServiceError::EmptyTeam(team.id));
        }

        Ok(team)
    }
}

/// Error raised by the synergy service.
#[derive(Debug, thiserror::Error)]
pub enum SynergyServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("team {0} not found")]
    TeamNotFound(TeamId),
    #[error("team {0} has no members")]
    EmptyTeam(TeamId),
    #[error("no candidates available for team {0}")]
    NoCandidates(TeamId),
}
