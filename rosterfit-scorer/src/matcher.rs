//! Deterministic integer scoring of players against one requirement.
//!
//! Each player earns fixed points for sport, position, experience, every
//! overlapping skill, and a bonus for high ratings. Players with a positive
//! score are returned in descending score order; equal scores keep the
//! store's iteration order.

use log::debug;
use rosterfit_core::{Player, Requirement, SkillSet};
use serde::Serialize;

use crate::same_label;
use crate::weights::matcher::{
    EXPERIENCE, GOOD_RATING, GOOD_RATING_BONUS, PER_SKILL, POSITION, SPORT, TOP_RATING,
    TOP_RATING_BONUS,
};

/// One player's deterministic match against a requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    /// Scored player.
    pub player: &'a Player,
    /// Integer match score, always positive in results.
    pub score: u32,
    /// Required skills the player holds.
    pub matched_skills: SkillSet,
    /// Number of skills the requirement asks for.
    pub total_required_skills: usize,
}

/// Score every player against `requirement` and rank those scoring above zero.
///
/// # Examples
/// ```
/// use rosterfit_core::{Player, Requirement};
/// use rosterfit_scorer::match_players;
///
/// let opening = Requirement::new(1, "Soccer", "Striker").with_skills("finishing,pace");
/// let players = vec![
///     Player::new(1, "Tennis", "Singles"),
///     Player::new(2, "Soccer", "Striker").with_skills("Pace"),
/// ];
/// let ranked = match_players(&opening, &players);
/// assert_eq!(ranked[0].player.id, 2);
/// assert_eq!(ranked[0].score, 3 + 2 + 1 + 1);
/// assert_eq!(ranked.len(), 2);
/// ```
#[must_use]
pub fn match_players<'a>(requirement: &Requirement, players: &'a [Player]) -> Vec<MatchResult<'a>> {
    let total_required_skills = requirement.skills.len();
    let mut results: Vec<MatchResult<'a>> = players
        .iter()
        .filter_map(|player| {
            let matched_skills = requirement.skills.intersection(&player.skills);
            let score = score_with_matched(requirement, player, &matched_skills);
            (score > 0).then_some(MatchResult {
                player,
                score,
                matched_skills,
                total_required_skills,
            })
        })
        .collect();
    // `sort_by` is stable, so ties keep store order.
    results.sort_by(|left, right| right.score.cmp(&left.score));
    debug!(
        "requirement {} matched {} of {} players",
        requirement.id,
        results.len(),
        players.len()
    );
    results
}

/// Deterministic score for a single player.
///
/// # Examples
/// ```
/// use rosterfit_core::{Player, Requirement};
/// use rosterfit_scorer::match_score;
///
/// let opening = Requirement::new(1, "Rugby", "Hooker").with_min_experience(4);
/// let rookie = Player::new(2, "rugby", "Prop").with_experience(1);
/// assert_eq!(match_score(&opening, &rookie), 3);
/// ```
#[must_use]
pub fn match_score(requirement: &Requirement, player: &Player) -> u32 {
    let matched = requirement.skills.intersection(&player.skills);
    score_with_matched(requirement, player, &matched)
}

fn score_with_matched(requirement: &Requirement, player: &Player, matched: &SkillSet) -> u32 {
    let mut score = 0_u32;
    if same_label(&player.sport, &requirement.sport) {
        score += SPORT;
    }
    if same_label(&player.position, &requirement.position) {
        score += POSITION;
    }
    if player.experience_years >= requirement.min_experience {
        score += EXPERIENCE;
    }
    let skill_points = u32::try_from(matched.len())
        .unwrap_or(u32::MAX)
        .saturating_mul(PER_SKILL);
    score = score.saturating_add(skill_points);
    score.saturating_add(rating_bonus(player.avg_rating()))
}

fn rating_bonus(average: f64) -> u32 {
    if average >= TOP_RATING {
        TOP_RATING_BONUS
    } else if average >= GOOD_RATING {
        GOOD_RATING_BONUS
    } else {
        0
    }
}
