use super::domain::SizeCategory;

pub const MIN_HEADCOUNT: usize = 3;
pub const MAX_HEADCOUNT: usize = 12;
pub const MAX_TOP_N: usize = 20;

/// Rejections raised at the service boundary before any scoring happens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("team size {0} is outside the supported range 3-12")]
    Headcount(usize),
    #[error("historical success prior {0} must be a finite value between 0 and 1")]
    HistoricalPrior(f64),
    #[error("top_n {0} must be between 1 and 20")]
    TopN(usize),
}

/// Maps a requested headcount onto the size bracket used for scoring.
pub fn size_category_for_headcount(headcount: usize) -> Result<SizeCategory, ValidationError> {
    match headcount {
        MIN_HEADCOUNT..=5 => Ok(SizeCategory::Small),
        6..=8 => Ok(SizeCategory::Medium),
        9..=MAX_HEADCOUNT => Ok(SizeCategory::Large),
        other => Err(ValidationError::Headcount(other)),
    }
}

pub fn validate_historical_prior(prior: f64) -> Result<f64, ValidationError> {
    if prior.is_finite() && (0.0..=1.0).contains(&prior) {
        Ok(prior)
    } else {
        Err(ValidationError::HistoricalPrior(prior))
    }
}

pub fn validate_top_n(top_n: usize) -> Result<usize, ValidationError> {
    if (1..=MAX_TOP_N).contains(&top_n) {
        Ok(top_n)
    } else {
        Err(ValidationError::TopN(top_n))
    }
}
