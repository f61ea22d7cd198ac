use serde::Serialize;

/// Factor weights expressed in whole percent so the sum can be checked at
/// compile time without floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringWeights {
    pub dimension_balance: u8,
    pub type_compatibility: u8,
    pub project_fit: u8,
    pub team_size: u8,
    pub cultural_fit: u8,
    pub historical_success: u8,
}

pub const SCORING_WEIGHTS: ScoringWeights = ScoringWeights {
    dimension_balance: 25,
    type_compatibility: 25,
    project_fit: 20,
    team_size: 10,
    cultural_fit: 10,
    historical_success: 10,
};

const _: () = assert!(SCORING_WEIGHTS.percent_sum() == 100);

impl ScoringWeights {
    pub const fn percent_sum(&self) -> u32 {
        self.dimension_balance as u32
            + self.type_compatibility as u32
            + self.project_fit as u32
            + self.team_size as u32
            + self.cultural_fit as u32
            + self.historical_success as u32
    }

    pub(crate) fn fraction(percent: u8) -> f64 {
        f64::from(percent) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert_eq!(SCORING_WEIGHTS.percent_sum(), 100);
        assert_eq!(ScoringWeights::fraction(SCORING_WEIGHTS.project_fit), 0.2);
    }
}
