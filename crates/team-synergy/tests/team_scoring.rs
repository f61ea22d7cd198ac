use proptest::prelude::*;
use team_synergy::synergy::{
    CultureDimension, CulturalProfile, PersonalityType, ProjectType, ScoringEngine,
    ScoringOptions, SizeCategory, TeamMember,
};

fn personality() -> impl Strategy<Value = PersonalityType> {
    (0usize..12).prop_map(|index| {
        PersonalityType::all()
            .nth(index)
            .expect("twelve personality types")
    })
}

fn culture() -> impl Strategy<Value = Option<CulturalProfile>> {
    proptest::option::of(proptest::collection::vec(0.0f64..=10.0, 0..=7).prop_map(|values| {
        CultureDimension::ordered()
            .into_iter()
            .zip(values)
            .collect::<CulturalProfile>()
    }))
}

fn team(max: usize) -> impl Strategy<Value = Vec<TeamMember>> {
    proptest::collection::vec((personality(), culture()), 0..=max).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (type_code, profile))| {
                let member = TeamMember::new(format!("m-{index}"), format!("Member {index}"), type_code);
                match profile {
                    Some(profile) => member.with_cultural_profile(profile),
                    None => member,
                }
            })
            .collect()
    })
}

fn project() -> impl Strategy<Value = ProjectType> {
    proptest::sample::select(ProjectType::ordered().to_vec())
}

fn size_category() -> impl Strategy<Value = SizeCategory> {
    proptest::sample::select(SizeCategory::ordered().to_vec())
}

proptest! {
    #[test]
    fn every_score_stays_within_unit_interval(
        members in team(16),
        project in project(),
        category in size_category(),
        prior in 0.0f64..=1.0,
    ) {
        let engine = ScoringEngine::default();
        let options = ScoringOptions::for_project(project)
            .with_size_category(category)
            .with_historical_success(prior);
        let breakdown = engine.score(&members, &options);

        for (factor, score) in breakdown.factors() {
            prop_assert!((0.0..=1.0).contains(&score), "{} = {}", factor.label(), score);
        }
        prop_assert!(breakdown.total >= 0.0);
        prop_assert!(breakdown.total <= 1.0 + 1e-12);
    }

    #[test]
    fn total_is_bit_identical_across_calls(members in team(12), project in project()) {
        let engine = ScoringEngine::default();
        let options = ScoringOptions::for_project(project);
        let first = engine.total(&members, &options);
        let second = engine.total(&members, &options);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}

#[test]
fn scores_serialize_with_factor_names() {
    let members: Vec<TeamMember> = ["V1", "I2", "E3", "C1"]
        .iter()
        .enumerate()
        .map(|(index, code)| {
            TeamMember::new(
                format!("m-{index}"),
                format!("Member {index}"),
                code.parse().expect("valid code"),
            )
        })
        .collect();

    let breakdown = ScoringEngine::default().score(&members, &ScoringOptions::default());
    let json = serde_json::to_value(breakdown).expect("breakdown serializes");

    for key in [
        "dimension_balance",
        "type_compatibility",
        "project_fit",
        "team_size",
        "cultural_fit",
        "historical_success",
        "total",
    ] {
        assert!(json[key].is_number(), "missing {key}");
    }
}
