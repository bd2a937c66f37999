//! Test-only fixtures shared by unit and behaviour tests.

use crate::{Player, RatingSummary, Requirement, RosterSnapshot};

/// Rating summary with an explicit average, for fixtures.
///
/// Out-of-range averages fall back to [`RatingSummary::UNRATED`].
#[must_use]
pub fn rated(average: f64, count: u32) -> RatingSummary {
    RatingSummary::new(average, count).unwrap_or(RatingSummary::UNRATED)
}

/// Soccer goalkeeper opening requiring reflexes and communication with two
/// years of experience.
#[must_use]
pub fn goalkeeper_requirement() -> Requirement {
    Requirement::new(100, "Soccer", "Goalkeeper")
        .with_team_name("Harbour FC")
        .with_skills("reflexes,communication")
        .with_min_experience(2)
}

/// Goalkeeper matching [`goalkeeper_requirement`] on every deterministic
/// factor, rated `4.0`.
#[must_use]
pub fn seasoned_goalkeeper() -> Player {
    Player::new(1, "Soccer", "Goalkeeper")
        .with_skills("reflexes,communication,leadership")
        .with_experience(3)
        .with_ratings(rated(4.0, 2))
}

/// Small mixed roster used by behaviour scenarios.
#[must_use]
pub fn sample_snapshot() -> RosterSnapshot {
    RosterSnapshot {
        players: vec![
            seasoned_goalkeeper(),
            Player::new(2, "soccer", "Defender")
                .with_skills("Tackling, communication")
                .with_experience(1)
                .with_location("Leeds, UK")
                .with_ratings(rated(4.6, 5))
                .with_profile_views(12),
            Player::new(3, "Basketball", "Guard")
                .with_skills("dribbling")
                .with_experience(6)
                .with_profile_views(80)
                .with_achievements(3),
            Player::new(4, "Soccer", "Goalkeeper")
                .with_skills("Reflexes")
                .with_location("Leeds")
                .with_ratings(rated(3.5, 2)),
        ],
        requirements: vec![goalkeeper_requirement().with_location("Leeds, West Yorkshire")],
        interests: Vec::new(),
    }
}
