//! Facade crate for the rosterfit player matching engine.
//!
//! This crate re-exports the roster domain types and every scoring function,
//! so callers can depend on one crate.
//!
//! ```
//! use rosterfit::{Player, Requirement, match_score};
//!
//! let opening = Requirement::new(1, "Soccer", "Goalkeeper");
//! let keeper = Player::new(7, "soccer", "goalkeeper");
//! assert_eq!(match_score(&opening, &keeper), 6);
//! ```

#![forbid(unsafe_code)]

pub use rosterfit_core::{
    Interest, InterestCounts, Player, PlayerFilter, PlayerId, RatingError, RatingSummary,
    Requirement, RequirementFilter, RequirementId, RosterSnapshot, RosterStore, SkillSet,
    SnapshotError,
};

pub use rosterfit_scorer::{
    Breakdown, Comparison, FactorScores, LeaderboardEntry, MatchResult, PlayerSummary,
    Recommendation, TeamSummary, available_sports, compare, compare_players, comparison_score,
    composite_score, leaderboard, match_count, match_players, match_score, player_summary,
    recommend, score_factors, team_summary, weights,
};

#[cfg(feature = "test-support")]
pub use rosterfit_core::test_support;
