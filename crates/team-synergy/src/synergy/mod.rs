//! Team synergy scoring: reference tables, the six-factor scoring engine,
//! candidate ranking, rule-based insights and the service shell around them.

pub mod directory;
pub mod domain;
pub mod insights;
pub mod model;
pub mod ranking;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use directory::{DirectoryError, OrganizationId, TeamDirectory, TeamId, TeamRecord};
pub use domain::{
    CultureDimension, CulturalProfile, Dimension, DimensionShares, MemberId, PersonalityType,
    ProjectType, SizeCategory, SizeRange, TeamMember, TypeCodeError,
};
pub use insights::{
    candidate_reasoning, candidate_traits, generate_insights, identify_gaps, CandidateTraits,
    GapKind, GapSeverity, TeamGap, TeamInsights,
};
pub use model::{CompatibilityEntry, CompatibilityModel, NEUTRAL_COMPATIBILITY, TABLE_VERSION};
pub use ranking::{
    missing_dimensions, CandidateRanker, RankedCandidate, SynergyPrediction, GAP_THRESHOLD,
};
pub use router::synergy_router;
pub use scoring::{
    ScoreBreakdown, ScoreFactor, ScoringEngine, ScoringOptions, ScoringWeights,
    DEFAULT_HISTORICAL_SUCCESS, NEUTRAL_CULTURAL_FIT, SCORING_WEIGHTS,
};
pub use service::{
    CurrentTeamAnalysis, EvaluationRequest, MemberRecommendation, MemberRecommendations,
    RankingReport, RankingRequest, RecommendationRequest, SynergyServiceError, TeamGapReport,
    TeamReport, TeamSynergyService,
};
pub use validation::{
    size_category_for_headcount, validate_historical_prior, validate_top_n, ValidationError,
};
