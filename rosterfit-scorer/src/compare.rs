//! Head-to-head comparison of two players.

use log::debug;
use rosterfit_core::{Player, PlayerId, SkillSet, round_to_tenth};
use serde::Serialize;

use crate::count_as_f64;
use crate::weights::compare::{
    EXPERIENCE_CAP, EXPERIENCE_PER_YEAR, RATING_PER_STAR, SKILL_CAP, SKILL_PER_TOKEN,
};

/// Skill overlap and per-player scores for two distinct players.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison<'a> {
    /// First player.
    pub first: &'a Player,
    /// Second player.
    pub second: &'a Player,
    /// Skills both players hold.
    pub common_skills: SkillSet,
    /// Skills only the first player holds.
    pub first_unique: SkillSet,
    /// Skills only the second player holds.
    pub second_unique: SkillSet,
    /// First player's score, one decimal.
    pub first_score: f64,
    /// Second player's score, one decimal.
    pub second_score: f64,
}

/// Comparison score: rating, capped experience and capped skill breadth.
///
/// # Examples
/// ```
/// use rosterfit_core::Player;
/// use rosterfit_scorer::comparison_score;
///
/// let veteran = Player::new(1, "Soccer", "Striker")
///     .with_experience(20)
///     .with_skills("pace");
/// assert_eq!(comparison_score(&veteran), 50.0 + 3.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "comparison blends capped float terms"
)]
#[must_use]
pub fn comparison_score(player: &Player) -> f64 {
    let rating = player.avg_rating() * RATING_PER_STAR;
    let experience =
        (f64::from(player.experience_years) * EXPERIENCE_PER_YEAR).min(EXPERIENCE_CAP);
    let skills = (count_as_f64(player.skills.len()) * SKILL_PER_TOKEN).min(SKILL_CAP);
    rating + experience + skills
}

/// Compare two players.
///
/// Returns `None` when both arguments carry the same identifier, so a player
/// is never compared with itself.
#[must_use]
pub fn compare<'a>(first: &'a Player, second: &'a Player) -> Option<Comparison<'a>> {
    if first.id == second.id {
        debug!("refusing to compare player {} with itself", first.id);
        return None;
    }
    Some(Comparison {
        first,
        second,
        common_skills: first.skills.intersection(&second.skills),
        first_unique: first.skills.difference(&second.skills),
        second_unique: second.skills.difference(&first.skills),
        first_score: round_to_tenth(comparison_score(first)),
        second_score: round_to_tenth(comparison_score(second)),
    })
}

/// Resolve two optional identifiers against `players` and compare them.
///
/// Yields `None` if either identifier is missing or unknown, or both name the
/// same player.
///
/// # Examples
/// ```
/// use rosterfit_core::Player;
/// use rosterfit_scorer::compare_players;
///
/// let players = vec![
///     Player::new(1, "Soccer", "Striker").with_skills("pace,finishing"),
///     Player::new(2, "Soccer", "Winger").with_skills("pace,crossing"),
/// ];
/// let comparison = compare_players(&players, Some(1), Some(2)).unwrap();
/// assert_eq!(comparison.common_skills.to_string(), "pace");
/// assert!(compare_players(&players, Some(1), Some(1)).is_none());
/// assert!(compare_players(&players, Some(1), None).is_none());
/// ```
#[must_use]
pub fn compare_players(
    players: &[Player],
    first: Option<PlayerId>,
    second: Option<PlayerId>,
) -> Option<Comparison<'_>> {
    let find = |id: PlayerId| players.iter().find(|player| player.id == id);
    let first = first.and_then(find)?;
    let second = second.and_then(find)?;
    compare(first, second)
}
