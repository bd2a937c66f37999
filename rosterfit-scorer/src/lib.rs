//! Scoring core for matching players to team requirements.
//!
//! The crate provides four pure scoring capabilities over in-memory roster
//! records supplied by a [`RosterStore`](rosterfit_core::RosterStore):
//! - **Deterministic matching** awards integer points for sport, position,
//!   experience, overlapping skills and high ratings.
//! - **Recommendations** blend seven weighted factors into a roughly `0..=100`
//!   score with a per-factor breakdown and a confidence clamp.
//! - **Leaderboard** ranks single players on a capped composite score.
//! - **Comparison** contrasts two players' skills and scores.
//!
//! Analytics helpers reuse the matcher to answer dashboard questions. Every
//! ranking sorts on unrounded values and displays rounded ones.
//!
//! # Examples
//!
//! ```
//! use rosterfit_core::{InterestCounts, Player, Requirement};
//! use rosterfit_scorer::{match_players, recommend};
//!
//! let opening = Requirement::new(1, "Soccer", "Goalkeeper")
//!     .with_skills("reflexes")
//!     .with_min_experience(2);
//! let players = vec![
//!     Player::new(10, "Soccer", "Goalkeeper")
//!         .with_skills("Reflexes")
//!         .with_experience(4),
//!     Player::new(11, "Tennis", "Singles"),
//! ];
//!
//! let matches = match_players(&opening, &players);
//! assert_eq!(matches.len(), 1);
//!
//! let picks = recommend(&opening, &players, &InterestCounts::default(), 5);
//! assert_eq!(picks[0].player.id, 10);
//! assert_eq!(picks[0].confidence, 85);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analytics;
mod compare;
mod leaderboard;
mod matcher;
mod recommend;
pub mod weights;

pub use analytics::{
    PlayerSummary, RequirementInterest, SportCount, TeamSummary, match_count, player_summary,
    team_summary,
};
pub use compare::{Comparison, compare, compare_players, comparison_score};
pub use leaderboard::{LeaderboardEntry, available_sports, composite_score, leaderboard};
pub use matcher::{MatchResult, match_players, match_score};
pub use recommend::{Breakdown, FactorScores, Recommendation, recommend, score_factors};

/// Case-insensitive label equality for sports and positions.
pub(crate) fn same_label(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

/// Widen a collection length for float formulas.
///
/// Lengths beyond `u32::MAX` saturate; rosters never approach that.
pub(crate) fn count_as_f64(count: usize) -> f64 {
    f64::from(u32::try_from(count).unwrap_or(u32::MAX))
}
