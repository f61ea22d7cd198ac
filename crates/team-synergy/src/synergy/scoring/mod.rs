mod rules;
mod weights;

pub use weights::{ScoringWeights, SCORING_WEIGHTS};

pub use rules::NEUTRAL_CULTURAL_FIT;

use super::domain::{ProjectType, SizeCategory, TeamMember};
use super::model::CompatibilityModel;
use serde::{Deserialize, Serialize};

/// Prior used when no outcome feedback is available for a team.
pub const DEFAULT_HISTORICAL_SUCCESS: f64 = 0.5;

/// Per-call knobs; everything else about scoring is fixed reference data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOptions {
    pub project_type: ProjectType,
    pub size_category: SizeCategory,
    pub historical_success: f64,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            project_type: ProjectType::Balanced,
            size_category: SizeCategory::Medium,
            historical_success: DEFAULT_HISTORICAL_SUCCESS,
        }
    }
}

impl ScoringOptions {
    pub fn for_project(project_type: ProjectType) -> Self {
        Self {
            project_type,
            ..Self::default()
        }
    }

    pub fn with_size_category(mut self, size_category: SizeCategory) -> Self {
        self.size_category = size_category;
        self
    }

    pub fn with_historical_success(mut self, historical_success: f64) -> Self {
        self.historical_success = historical_success;
        self
    }
}

/// Named factors contributing to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    DimensionBalance,
    TypeCompatibility,
    ProjectFit,
    TeamSize,
    CulturalFit,
    HistoricalSuccess,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::DimensionBalance => "dimension_balance",
            Self::TypeCompatibility => "type_compatibility",
            Self::ProjectFit => "project_fit",
            Self::TeamSize => "team_size",
            Self::CulturalFit => "cultural_fit",
            Self::HistoricalSuccess => "historical_success",
        }
    }

    pub const fn weight(self, weights: &ScoringWeights) -> u8 {
        match self {
            Self::DimensionBalance => weights.dimension_balance,
            Self::TypeCompatibility => weights.type_compatibility,
            Self::ProjectFit => weights.project_fit,
            Self::TeamSize => weights.team_size,
            Self::CulturalFit => weights.cultural_fit,
            Self::HistoricalSuccess => weights.historical_success,
        }
    }
}

/// Six sub-scores in `[0, 1]` and their weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub dimension_balance: f64,
    pub type_compatibility: f64,
    pub project_fit: f64,
    pub team_size: f64,
    pub cultural_fit: f64,
    pub historical_success: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    pub fn factors(&self) -> [(ScoreFactor, f64); 6] {
        [
            (ScoreFactor::DimensionBalance, self.dimension_balance),
            (ScoreFactor::TypeCompatibility, self.type_compatibility),
            (ScoreFactor::ProjectFit, self.project_fit),
            (ScoreFactor::TeamSize, self.team_size),
            (ScoreFactor::CulturalFit, self.cultural_fit),
            (ScoreFactor::HistoricalSuccess, self.historical_success),
        ]
    }
}

/// Stateless scorer over a fixed compatibility model.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'m> {
    model: &'m CompatibilityModel,
    weights: ScoringWeights,
}

impl Default for ScoringEngine<'static> {
    fn default() -> Self {
        Self::new(CompatibilityModel::standard())
    }
}

impl<'m> ScoringEngine<'m> {
    pub fn new(model: &'m CompatibilityModel) -> Self {
        Self {
            model,
            weights: SCORING_WEIGHTS,
        }
    }

    pub fn model(&self) -> &'m CompatibilityModel {
        self.model
    }

    pub fn dimension_balance(&self, members: &[TeamMember]) -> f64 {
        rules::dimension_balance(members)
    }

    pub fn type_compatibility(&self, members: &[TeamMember]) -> f64 {
        rules::type_compatibility(self.model, members)
    }

    pub fn project_fit(&self, members: &[TeamMember], project: ProjectType) -> f64 {
        rules::project_fit(self.model, members, project)
    }

    pub fn team_size(&self, size: usize, category: SizeCategory) -> f64 {
        rules::team_size(size, self.model.size_range(category))
    }

    pub fn cultural_fit(&self, members: &[TeamMember]) -> f64 {
        rules::cultural_fit(members)
    }

    pub fn score(&self, members: &[TeamMember], options: &ScoringOptions) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown {
            dimension_balance: self.dimension_balance(members),
            type_compatibility: self.type_compatibility(members),
            project_fit: self.project_fit(members, options.project_type),
            team_size: self.team_size(members.len(), options.size_category),
            cultural_fit: self.cultural_fit(members),
            historical_success: options.historical_success,
            total: 0.0,
        };

        breakdown.total = breakdown
            .factors()
            .iter()
            .map(|(factor, score)| {
                score * ScoringWeights::fraction(factor.weight(&self.weights))
            })
            .sum();

        breakdown
    }

    pub fn total(&self, members: &[TeamMember], options: &ScoringOptions) -> f64 {
        self.score(members, options).total
    }
}
