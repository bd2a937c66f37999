//! Composite leaderboard scoring.

use std::collections::BTreeSet;

use log::debug;
use rosterfit_core::{Player, round_to_tenth};
use serde::Serialize;

use crate::count_as_f64;
use crate::weights::leaderboard::{
    ACHIEVEMENT_CAP, ACHIEVEMENT_PER_ITEM, EXPERIENCE_CAP, EXPERIENCE_PER_YEAR, RATING_PER_STAR,
    SKILL_CAP, SKILL_PER_TOKEN, VIEWS_CAP, VIEWS_PER_VIEW,
};

/// A leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry<'a> {
    /// Ranked player.
    pub player: &'a Player,
    /// Composite rounded to one decimal for display.
    pub composite: f64,
    /// Unrounded composite used for ranking.
    #[serde(skip)]
    pub raw_composite: f64,
    /// Player's mean rating.
    pub avg_rating: f64,
    /// Number of ratings behind the mean.
    pub rating_count: u32,
}

/// Single-player aggregate of rating, experience, popularity, skills and
/// achievements.
///
/// Rating contributes up to 100 points uncapped; the other terms are capped
/// at 30, 20, 20 and 10 respectively.
///
/// # Examples
/// ```
/// use rosterfit_core::Player;
/// use rosterfit_scorer::composite_score;
///
/// let player = Player::new(1, "Soccer", "Striker")
///     .with_experience(4)
///     .with_profile_views(10)
///     .with_skills("pace, finishing")
///     .with_achievements(1);
/// assert_eq!(composite_score(&player), 12.0 + 5.0 + 4.0 + 5.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "composite blends capped float terms"
)]
#[must_use]
pub fn composite_score(player: &Player) -> f64 {
    let rating = player.avg_rating() * RATING_PER_STAR;
    let experience = (f64::from(player.experience_years) * EXPERIENCE_PER_YEAR).min(EXPERIENCE_CAP);
    let popularity = (f64::from(player.profile_views) * VIEWS_PER_VIEW).min(VIEWS_CAP);
    let skills = (count_as_f64(player.skills.len()) * SKILL_PER_TOKEN).min(SKILL_CAP);
    let achievements =
        (f64::from(player.achievement_count) * ACHIEVEMENT_PER_ITEM).min(ACHIEVEMENT_CAP);
    rating + experience + popularity + skills + achievements
}

/// Rank players by composite score, optionally keeping only sports that
/// contain `sport_filter` (case-insensitive).
///
/// A blank filter keeps every player. Equal composites keep store order.
#[must_use]
pub fn leaderboard<'a>(players: &'a [Player], sport_filter: Option<&str>) -> Vec<LeaderboardEntry<'a>> {
    let needle = sport_filter
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);
    let mut board: Vec<LeaderboardEntry<'a>> = players
        .iter()
        .filter(|player| {
            needle
                .as_deref()
                .is_none_or(|term| player.sport.to_lowercase().contains(term))
        })
        .map(|player| {
            let raw_composite = composite_score(player);
            LeaderboardEntry {
                player,
                composite: round_to_tenth(raw_composite),
                raw_composite,
                avg_rating: player.avg_rating(),
                rating_count: player.ratings.count(),
            }
        })
        .collect();
    board.sort_by(|left, right| right.raw_composite.total_cmp(&left.raw_composite));
    debug!("leaderboard ranked {} of {} players", board.len(), players.len());
    board
}

/// Distinct sport names, sorted, for populating a filter control.
#[must_use]
pub fn available_sports(players: &[Player]) -> Vec<String> {
    players
        .iter()
        .map(|player| player.sport.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
