use proptest::prelude::*;
use team_synergy::synergy::{
    candidate_reasoning, missing_dimensions, CandidateRanker, PersonalityType, ProjectType,
    ScoringEngine, ScoringOptions, TeamMember, GAP_THRESHOLD,
};

fn member(id: &str, code: &str) -> TeamMember {
    TeamMember::new(id, format!("Person {id}"), code.parse().expect("valid code"))
}

fn roster(prefix: &'static str, max: usize) -> impl Strategy<Value = Vec<TeamMember>> {
    proptest::collection::vec(0usize..12, 0..=max).prop_map(move |indices| {
        indices
            .into_iter()
            .enumerate()
            .map(|(position, index)| {
                let type_code = PersonalityType::all()
                    .nth(index)
                    .expect("twelve personality types");
                TeamMember::new(format!("{prefix}-{position}"), "Generated", type_code)
            })
            .collect()
    })
}

#[test]
fn vision_only_team_is_steered_toward_missing_dimensions() {
    let team = vec![member("a", "V1"), member("b", "V2"), member("c", "V1")];
    let candidates = vec![
        member("v", "V3"),
        member("e", "E1"),
        member("i", "I1"),
        member("c2", "C2"),
    ];

    let ranked = CandidateRanker::default().rank(&team, &candidates, ProjectType::Balanced, 3);
    assert_eq!(ranked.len(), 3);
    assert!(ranked.iter().all(|entry| entry.fills_gap));
    assert!(ranked.iter().all(|entry| entry.improvement > 0.0));

    let reasoning = candidate_reasoning(&ranked[0]);
    assert!(reasoning.ends_with('.'));
    assert!(reasoning.contains("Brings needed"));
}

proptest! {
    #[test]
    fn ranking_is_sorted_truncated_and_consistent(
        team in roster("t", 8),
        candidates in roster("c", 10),
        top_n in 0usize..=12,
    ) {
        let ranker = CandidateRanker::default();
        let engine = ScoringEngine::default();
        let options = ScoringOptions::for_project(ProjectType::Strategic);
        let before = engine.total(&team, &options);
        let gaps = missing_dimensions(&team, GAP_THRESHOLD);

        let ranked = ranker.rank(&team, &candidates, ProjectType::Strategic, top_n);

        prop_assert_eq!(ranked.len(), top_n.min(candidates.len()));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].predicted_total >= pair[1].predicted_total);
        }
        for entry in &ranked {
            let mut extended = team.clone();
            extended.push(entry.candidate.clone());
            let after = engine.total(&extended, &options);
            prop_assert_eq!(entry.before_total, before);
            prop_assert_eq!(entry.after_total, after);
            prop_assert_eq!(entry.improvement, after - before);
            prop_assert_eq!(entry.fills_gap, gaps.contains(&entry.candidate.dimension()));
        }
    }
}
