//! Multi-factor recommendation scoring with explainable breakdowns.
//!
//! Seven independently capped factors are summed into an unrounded score:
//!
//! | Factor | Points |
//! |---|---|
//! | share of required skills held | `0..=40` |
//! | sport match | `0` or `20` |
//! | position match | `0` or `15` |
//! | experience fit | `0..=10` |
//! | average rating | `0..=10` |
//! | social proof (interests anywhere) | `0..=5` |
//! | requirement city inside player city | `0` or `5` |
//!
//! Candidates are ranked on the unrounded sum. Display values (the one-decimal
//! score, whole-number breakdown and confidence) are derived afterwards.

use log::{debug, trace};
use rosterfit_core::{InterestCounts, Player, Requirement, SkillSet, round_to_tenth, whole_points};
use serde::Serialize;

use crate::weights::recommend::{
    CONFIDENCE_CAP, EXPERIENCE_OPEN_ROOKIE, EXPERIENCE_OPEN_SEASONED, EXPERIENCE_PER_RATIO,
    EXPERIENCE_RATIO_CAP, LOCATION, MIN_SCORE, POSITION, RATING_PER_STAR, SKILL_MATCH,
    SOCIAL_CAP, SOCIAL_PER_INTEREST, SPORT,
};
use crate::{count_as_f64, same_label};

/// Unrounded contribution of each recommendation factor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FactorScores {
    /// Share of required skills held.
    pub skill_match: f64,
    /// Sport match.
    pub sport: f64,
    /// Position match.
    pub position: f64,
    /// Experience fit.
    pub experience: f64,
    /// Average rating.
    pub rating: f64,
    /// Social proof.
    pub social: f64,
    /// Location affinity.
    pub location: f64,
}

impl FactorScores {
    /// Unrounded sum of every factor.
    #[expect(clippy::float_arithmetic, reason = "factors are summed as floats")]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.skill_match
            + self.sport
            + self.position
            + self.experience
            + self.rating
            + self.social
            + self.location
    }

    /// Whole-number view of the factors for display.
    #[must_use]
    pub fn rounded(&self) -> Breakdown {
        Breakdown {
            skill_match: whole_points(self.skill_match),
            sport: whole_points(self.sport),
            position: whole_points(self.position),
            experience: whole_points(self.experience),
            rating: whole_points(self.rating),
            social: whole_points(self.social),
            location: whole_points(self.location),
        }
    }
}

/// Per-factor points rounded half away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Breakdown {
    /// Share of required skills held.
    pub skill_match: u32,
    /// Sport match.
    pub sport: u32,
    /// Position match.
    pub position: u32,
    /// Experience fit.
    pub experience: u32,
    /// Average rating.
    pub rating: u32,
    /// Social proof.
    pub social: u32,
    /// Location affinity.
    pub location: u32,
}

/// A recommended player with explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    /// Recommended player.
    pub player: &'a Player,
    /// Score rounded to one decimal for display.
    pub ai_score: f64,
    /// Unrounded score used for ranking.
    #[serde(skip)]
    pub raw_score: f64,
    /// Required skills the player holds.
    pub matched_skills: SkillSet,
    /// Whole-number factor points.
    pub breakdown: Breakdown,
    /// Unrounded factor points.
    #[serde(skip)]
    pub factors: FactorScores,
    /// Score rounded to a whole number and capped at 100.
    pub confidence: u32,
}

/// Compute every factor for one player.
///
/// `interest_count` is the player's interest total across all requirements.
#[must_use]
pub fn score_factors(requirement: &Requirement, player: &Player, interest_count: u32) -> FactorScores {
    let matched = requirement.skills.intersection(&player.skills);
    factors_with_matched(requirement, player, &matched, interest_count)
}

/// Rank players for `requirement`, keeping at most `top_n` scoring above 10.
///
/// # Examples
/// ```
/// use rosterfit_core::{InterestCounts, Player, Requirement};
/// use rosterfit_scorer::recommend;
///
/// let opening = Requirement::new(1, "Soccer", "Striker").with_skills("pace");
/// let players = vec![
///     Player::new(1, "Soccer", "Striker").with_skills("pace").with_experience(2),
///     Player::new(2, "Chess", "Board 1"),
/// ];
/// let ranked = recommend(&opening, &players, &InterestCounts::default(), 5);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].ai_score, 85.0);
/// assert_eq!(ranked[0].confidence, 85);
/// ```
#[must_use]
pub fn recommend<'a>(
    requirement: &Requirement,
    players: &'a [Player],
    interests: &InterestCounts,
    top_n: usize,
) -> Vec<Recommendation<'a>> {
    let mut results: Vec<Recommendation<'a>> = players
        .iter()
        .filter_map(|player| {
            let matched_skills = requirement.skills.intersection(&player.skills);
            let factors = factors_with_matched(
                requirement,
                player,
                &matched_skills,
                interests.count(player.id),
            );
            let raw_score = factors.total();
            trace!("player {} raw recommendation score {raw_score}", player.id);
            (raw_score > MIN_SCORE).then(|| Recommendation {
                player,
                ai_score: round_to_tenth(raw_score),
                raw_score,
                matched_skills,
                breakdown: factors.rounded(),
                factors,
                confidence: whole_points(raw_score).min(CONFIDENCE_CAP),
            })
        })
        .collect();
    let eligible = results.len();
    // Stable sort on the unrounded score; ties keep store order.
    results.sort_by(|left, right| right.raw_score.total_cmp(&left.raw_score));
    results.truncate(top_n);
    debug!(
        "requirement {}: {eligible} eligible candidates, returning {}",
        requirement.id,
        results.len()
    );
    results
}

fn factors_with_matched(
    requirement: &Requirement,
    player: &Player,
    matched: &SkillSet,
    interest_count: u32,
) -> FactorScores {
    FactorScores {
        skill_match: skill_match_points(matched.len(), requirement.skills.len()),
        sport: flag_points(same_label(&player.sport, &requirement.sport), SPORT),
        position: flag_points(same_label(&player.position, &requirement.position), POSITION),
        experience: experience_points(player.experience_years, requirement.min_experience),
        rating: rating_points(player.avg_rating()),
        social: social_points(interest_count),
        location: flag_points(location_matches(requirement, player), LOCATION),
    }
}

const fn flag_points(hit: bool, points: f64) -> f64 {
    if hit { points } else { 0.0 }
}

#[expect(
    clippy::float_arithmetic,
    reason = "skill share is a ratio scaled to points"
)]
fn skill_match_points(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    count_as_f64(matched) / count_as_f64(required) * SKILL_MATCH
}

#[expect(
    clippy::float_arithmetic,
    reason = "experience fit is a capped ratio scaled to points"
)]
fn experience_points(years: u32, minimum: u32) -> f64 {
    if minimum > 0 {
        let ratio = (f64::from(years) / f64::from(minimum)).min(EXPERIENCE_RATIO_CAP);
        ratio * EXPERIENCE_PER_RATIO
    } else if years > 0 {
        EXPERIENCE_OPEN_SEASONED
    } else {
        EXPERIENCE_OPEN_ROOKIE
    }
}

#[expect(clippy::float_arithmetic, reason = "rating points scale the average")]
fn rating_points(average: f64) -> f64 {
    average * RATING_PER_STAR
}

#[expect(clippy::float_arithmetic, reason = "social proof scales the count")]
fn social_points(interest_count: u32) -> f64 {
    (f64::from(interest_count) * SOCIAL_PER_INTEREST).min(SOCIAL_CAP)
}

fn location_matches(requirement: &Requirement, player: &Player) -> bool {
    if requirement.location.is_empty() || player.location.is_empty() {
        return false;
    }
    let wanted = requirement.city();
    !wanted.is_empty() && player.city().contains(&wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterfit_core::test_support::{goalkeeper_requirement, rated, seasoned_goalkeeper};
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    fn goalkeeper_example_breakdown() {
        let factors = score_factors(&goalkeeper_requirement(), &seasoned_goalkeeper(), 0);

        assert!((factors.skill_match - 40.0).abs() < TOLERANCE);
        assert!((factors.experience - 7.5).abs() < TOLERANCE);
        assert!((factors.rating - 8.0).abs() < TOLERANCE);
        assert!((factors.total() - 90.5).abs() < TOLERANCE);

        let breakdown = factors.rounded();
        assert_eq!(
            breakdown,
            Breakdown {
                skill_match: 40,
                sport: 20,
                position: 15,
                experience: 8,
                rating: 8,
                social: 0,
                location: 0,
            }
        );
    }

    #[rstest]
    fn goalkeeper_example_rounding_points() {
        let players = vec![seasoned_goalkeeper()];
        let ranked = recommend(&goalkeeper_requirement(), &players, &InterestCounts::default(), 5);
        let top = ranked.first().expect("goalkeeper is recommended");

        assert!((top.raw_score - 90.5).abs() < TOLERANCE);
        assert!((top.ai_score - 90.5).abs() < TOLERANCE);
        // Half away from zero: 90.5 rounds up.
        assert_eq!(top.confidence, 91);
    }

    #[rstest]
    #[case(0, 0, 5.0)]
    #[case(3, 0, 10.0)]
    #[case(0, 2, 0.0)]
    #[case(1, 2, 2.5)]
    #[case(2, 2, 5.0)]
    #[case(4, 2, 10.0)]
    #[case(40, 2, 10.0)]
    fn experience_fit(#[case] years: u32, #[case] minimum: u32, #[case] expected: f64) {
        assert!((experience_points(years, minimum) - expected).abs() < TOLERANCE);
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(1, 1.5)]
    #[case(3, 4.5)]
    #[case(4, 5.0)]
    #[case(100, 5.0)]
    fn social_proof_is_capped(#[case] count: u32, #[case] expected: f64) {
        assert!((social_points(count) - expected).abs() < TOLERANCE);
    }

    #[rstest]
    #[case("Leeds, UK", "Leeds", true)]
    #[case("leeds", "North Leeds, West Yorkshire", true)]
    #[case("Leeds", "Manchester", false)]
    #[case("", "Leeds", false)]
    #[case("Leeds", "", false)]
    #[case(", UK", "Leeds, UK", false)]
    fn location_affinity(#[case] wanted: &str, #[case] actual: &str, #[case] expected: bool) {
        let requirement = Requirement::new(1, "Soccer", "Striker").with_location(wanted);
        let player = Player::new(1, "Soccer", "Striker").with_location(actual);
        assert_eq!(location_matches(&requirement, &player), expected);
    }

    #[rstest]
    fn skillless_requirement_awards_no_skill_points() {
        let requirement = Requirement::new(1, "Soccer", "Striker");
        let player = Player::new(1, "Soccer", "Striker").with_skills("pace, finishing");
        let factors = score_factors(&requirement, &player, 0);
        assert!(factors.skill_match.abs() < TOLERANCE);
    }

    #[rstest]
    fn partial_skill_share() {
        let requirement = Requirement::new(1, "Soccer", "Striker").with_skills("a,b,c");
        let player = Player::new(1, "Soccer", "Striker").with_skills("b");
        let factors = score_factors(&requirement, &player, 0);
        assert!((factors.skill_match - 40.0 / 3.0).abs() < TOLERANCE);
        assert_eq!(factors.rounded().skill_match, 13);
    }

    #[rstest]
    fn threshold_excludes_scores_of_ten() {
        // Only the rookie experience default (5) plus a 2.5 rating (5): exactly 10.
        let requirement = Requirement::new(1, "Soccer", "Striker");
        let players = vec![Player::new(1, "Golf", "Caddie").with_ratings(rated(2.5, 2))];
        let ranked = recommend(&requirement, &players, &InterestCounts::default(), 5);
        assert!(ranked.is_empty());
    }

    #[rstest]
    fn truncates_to_top_n_after_sorting() {
        let requirement = Requirement::new(1, "Soccer", "Striker").with_skills("pace");
        let players = vec![
            Player::new(1, "Soccer", "Keeper"),
            Player::new(2, "Soccer", "Striker").with_skills("pace"),
            Player::new(3, "Soccer", "Striker"),
        ];
        let ranked = recommend(&requirement, &players, &InterestCounts::default(), 2);
        let ids: Vec<u64> = ranked.iter().map(|entry| entry.player.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[rstest]
    fn ranks_on_unrounded_scores() {
        // Raw scores 25.025 and 25.0 both display as 25.0; the higher raw score
        // must still rank first even though it appears later in the roster.
        let requirement = Requirement::new(1, "Soccer", "Striker").with_min_experience(200);
        let players = vec![
            Player::new(1, "Soccer", "Keeper").with_experience(0).with_ratings(rated(2.5, 1)),
            Player::new(2, "Soccer", "Keeper").with_experience(1).with_ratings(rated(2.5, 1)),
        ];
        let ranked = recommend(&requirement, &players, &InterestCounts::default(), 5);
        let ids: Vec<u64> = ranked.iter().map(|entry| entry.player.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(ranked.iter().all(|entry| (entry.ai_score - 25.0).abs() < 0.1));
    }
}
