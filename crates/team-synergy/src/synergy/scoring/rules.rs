use super::super::domain::{
    CultureDimension, CulturalProfile, DimensionShares, ProjectType, SizeRange, TeamMember,
};
use super::super::model::CompatibilityModel;

const IDEAL_SHARE: f64 = 0.25;
// One dimension at 100% and the rest at 0% averages to 0.75.
const MAX_AVERAGE_DEVIATION: f64 = 0.75;
const OVERSIZE_PENALTY_EXPONENT: f64 = 1.5;
pub const NEUTRAL_CULTURAL_FIT: f64 = 0.8;
const MISSING_CULTURE_VALUE: f64 = 5.0;
// Approximate ceiling for the variance of values on a 0-10 scale.
const MAX_CULTURE_VARIANCE: f64 = 25.0;

pub(crate) fn dimension_balance(members: &[TeamMember]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }

    let shares = DimensionShares::of_team(members);
    let total_deviation: f64 = shares
        .iter()
        .map(|(_, share)| (share - IDEAL_SHARE).abs())
        .sum();
    let average_deviation = total_deviation / 4.0;

    (1.0 - average_deviation / MAX_AVERAGE_DEVIATION).clamp(0.0, 1.0)
}

/// Mean of `compatibility(i, j)` over every pair with `i < j` in roster order.
pub(crate) fn type_compatibility(model: &CompatibilityModel, members: &[TeamMember]) -> f64 {
    if members.len() < 2 {
        return 1.0;
    }

    let mut total = 0.0;
    let mut pairs = 0usize;
    for (index, first) in members.iter().enumerate() {
        for second in &members[index + 1..] {
            total += model.compatibility(first.type_code, second.type_code);
            pairs += 1;
        }
    }

    total / pairs as f64
}

/// Cosine similarity between the team's dimension mix and the project's ideal mix.
pub(crate) fn project_fit(
    model: &CompatibilityModel,
    members: &[TeamMember],
    project: ProjectType,
) -> f64 {
    if members.is_empty() {
        return 0.0;
    }

    let ideal = model.ideal_profile(project);
    let actual = DimensionShares::of_team(members);
    let ideal_magnitude = ideal.magnitude();
    let actual_magnitude = actual.magnitude();

    if ideal_magnitude == 0.0 || actual_magnitude == 0.0 {
        return 0.0;
    }

    (ideal.dot(&actual) / (ideal_magnitude * actual_magnitude)).clamp(0.0, 1.0)
}

pub(crate) fn team_size(size: usize, range: SizeRange) -> f64 {
    if range.contains(size) {
        1.0
    } else if size < range.min {
        (size as f64 / range.min as f64).max(0.0)
    } else {
        let excess = (size - range.max) as f64 / range.max as f64;
        (1.0 - excess.powf(OVERSIZE_PENALTY_EXPONENT)).max(0.0)
    }
}

pub(crate) fn cultural_fit(members: &[TeamMember]) -> f64 {
    let profiles: Vec<&CulturalProfile> = members
        .iter()
        .filter_map(TeamMember::populated_profile)
        .collect();

    if profiles.len() < 2 {
        return NEUTRAL_CULTURAL_FIT;
    }

    let dimensions = CultureDimension::ordered();
    let variance_sum: f64 = dimensions
        .iter()
        .map(|dimension| {
            let values: Vec<f64> = profiles
                .iter()
                .map(|profile| profile.get(*dimension).unwrap_or(MISSING_CULTURE_VALUE))
                .collect();
            population_variance(&values)
        })
        .sum();
    let average_variance = variance_sum / dimensions.len() as f64;

    1.0 - (average_variance / MAX_CULTURE_VARIANCE).min(1.0)
}

fn population_variance(values: &[f64]) -> f64 {
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / count
}
