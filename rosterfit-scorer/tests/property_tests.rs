//! Property-based tests for the scoring functions.
//!
//! # Invariants tested
//!
//! - Match results are positive and sorted by descending score.
//! - Holding one more required skill adds exactly one match point.
//! - Recommendations respect `top_n` and the minimum score.
//! - Displayed values are the rounded form of the ranking values.
//! - Skill-derived scores ignore token case and surrounding whitespace.
//! - Reserialising a parsed skill list is idempotent.


use proptest::prelude::*;
use rosterfit_core::{InterestCounts, Requirement, SkillSet, round_to_tenth, whole_points};
use rosterfit_scorer::{
    composite_score, comparison_score, leaderboard, match_players, match_score, recommend,
};

use proptest_support::{player_strategy, requirement_strategy, roster_strategy, skills_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn matches_are_positive_and_sorted(
        requirement in requirement_strategy(),
        players in roster_strategy(12),
    ) {
        let results = match_players(&requirement, &players);
        prop_assert!(results.iter().all(|result| result.score > 0));
        prop_assert!(results.windows(2).all(|pair| pair[0].score >= pair[1].score));
        prop_assert!(results.len() <= players.len());
    }

    #[test]
    fn one_more_required_skill_adds_one_point(player in player_strategy()) {
        let requirement = Requirement::new(1, "Soccer", "Striker").with_skills("finishing,heading");
        let without = player.clone().with_skills("dribbling");
        let with = player.with_skills("dribbling, Finishing");
        prop_assert_eq!(
            match_score(&requirement, &with),
            match_score(&requirement, &without) + 1
        );
    }

    #[test]
    fn recommendations_respect_limits(
        requirement in requirement_strategy(),
        players in roster_strategy(12),
        top_n in 0_usize..8,
    ) {
        let picks = recommend(&requirement, &players, &InterestCounts::default(), top_n);
        prop_assert!(picks.len() <= top_n);
        prop_assert!(picks.iter().all(|pick| pick.raw_score > 10.0));
        prop_assert!(picks.iter().all(|pick| pick.confidence <= 100));
        prop_assert!(picks.windows(2).all(|pair| pair[0].raw_score >= pair[1].raw_score));
    }

    #[test]
    fn displayed_values_round_the_ranking_values(
        requirement in requirement_strategy(),
        players in roster_strategy(12),
    ) {
        for pick in recommend(&requirement, &players, &InterestCounts::default(), 12) {
            prop_assert_eq!(pick.ai_score, round_to_tenth(pick.raw_score));
            prop_assert_eq!(pick.confidence, whole_points(pick.raw_score).min(100));
        }
        for entry in leaderboard(&players, None) {
            prop_assert_eq!(entry.composite, round_to_tenth(entry.raw_composite));
        }
    }

    #[test]
    fn skill_free_requirement_earns_no_skill_points(players in roster_strategy(12)) {
        let requirement = Requirement::new(1, "Soccer", "Goalkeeper");
        for pick in recommend(&requirement, &players, &InterestCounts::default(), 12) {
            prop_assert_eq!(pick.factors.skill_match, 0.0);
            prop_assert!(pick.matched_skills.is_empty());
        }
    }

    #[test]
    fn skill_scores_ignore_case_and_padding(player in player_strategy(), skills in skills_strategy()) {
        let shouted: Vec<String> = skills
            .split(',')
            .map(|token| format!("  {} ", token.to_uppercase()))
            .collect();
        let compact = player.clone().with_skills(&skills);
        let padded = player.with_skills(&shouted.join(","));
        prop_assert_eq!(composite_score(&compact), composite_score(&padded));
        prop_assert_eq!(comparison_score(&compact), comparison_score(&padded));
    }

    #[test]
    fn reserialising_skills_is_idempotent(raw in "[a-zA-Z ,]{0,40}") {
        let once = SkillSet::parse(&raw).to_string();
        let twice = SkillSet::parse(&once).to_string();
        prop_assert_eq!(once, twice);
    }
}
