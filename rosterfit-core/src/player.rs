//! Player profiles as consumed by the scoring functions.

use crate::{RatingSummary, SkillSet};

/// Identifier of a player profile.
pub type PlayerId = u64;

/// An athlete's profile as seen by the scoring functions.
///
/// Values arrive fully resolved from a [`RosterStore`](crate::RosterStore):
/// ratings are already aggregated and related records are reduced to counts.
///
/// # Examples
/// ```
/// use rosterfit_core::Player;
///
/// let player = Player::new(7, "Soccer", "Goalkeeper")
///     .with_skills("Reflexes, communication")
///     .with_experience(3)
///     .with_location("Leeds, UK");
/// assert_eq!(player.skills.len(), 2);
/// assert_eq!(player.city(), "leeds");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Player {
    /// Unique identifier.
    pub id: PlayerId,
    /// Sport the athlete plays.
    pub sport: String,
    /// Preferred playing position.
    pub position: String,
    /// Normalised skill tokens.
    pub skills: SkillSet,
    /// Years of competitive experience.
    pub experience_years: u32,
    /// Free-text location, city first.
    pub location: String,
    /// Aggregated ratings from teams.
    pub ratings: RatingSummary,
    /// Number of distinct profile views.
    pub profile_views: u32,
    /// Number of recorded achievements.
    pub achievement_count: u32,
}

impl Player {
    /// Construct an unrated player with no skills or experience.
    pub fn new(id: PlayerId, sport: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id,
            sport: sport.into(),
            position: position.into(),
            ..Self::default()
        }
    }

    /// Replace the skill list with the parsed contents of `raw`.
    #[must_use]
    pub fn with_skills(mut self, raw: &str) -> Self {
        self.skills = SkillSet::parse(raw);
        self
    }

    /// Set years of experience.
    #[must_use]
    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience_years = years;
        self
    }

    /// Set the free-text location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Attach an aggregated rating summary.
    #[must_use]
    pub fn with_ratings(mut self, ratings: RatingSummary) -> Self {
        self.ratings = ratings;
        self
    }

    /// Set the profile view counter.
    #[must_use]
    pub fn with_profile_views(mut self, views: u32) -> Self {
        self.profile_views = views;
        self
    }

    /// Set the number of achievements.
    #[must_use]
    pub fn with_achievements(mut self, count: u32) -> Self {
        self.achievement_count = count;
        self
    }

    /// Mean rating, `0.0` when unrated.
    #[must_use]
    pub const fn avg_rating(&self) -> f64 {
        self.ratings.average()
    }

    /// First comma segment of the location, trimmed and lowercased.
    #[must_use]
    pub fn city(&self) -> String {
        city_of(&self.location)
    }
}

pub(crate) fn city_of(location: &str) -> String {
    location
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}
