//! Browse filters applied to players and requirements before display.
//!
//! Every criterion is optional and matches as a case-insensitive substring.
//! Blank criteria are ignored, mirroring an empty search box.

use crate::{Player, Requirement};

/// Criteria for narrowing a player listing.
///
/// # Examples
/// ```
/// use rosterfit_core::{Player, PlayerFilter};
///
/// let players = vec![
///     Player::new(1, "Soccer", "Striker").with_skills("finishing"),
///     Player::new(2, "Basketball", "Guard").with_skills("dribbling"),
/// ];
/// let filter = PlayerFilter::default().with_sport("soc");
/// let found: Vec<_> = filter.apply(&players).map(|p| p.id).collect();
/// assert_eq!(found, vec![1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerFilter {
    /// Substring of the player's sport.
    pub sport: Option<String>,
    /// Substring of the player's position.
    pub position: Option<String>,
    /// Substring of the player's skill list.
    pub skill: Option<String>,
    /// Substring of the player's location.
    pub location: Option<String>,
}

impl PlayerFilter {
    /// Restrict to sports containing `sport`.
    #[must_use]
    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    /// Restrict to positions containing `position`.
    #[must_use]
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Restrict to skill lists containing `skill`.
    #[must_use]
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = Some(skill.into());
        self
    }

    /// Restrict to locations containing `location`.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Report whether `player` satisfies every populated criterion.
    #[must_use]
    pub fn matches(&self, player: &Player) -> bool {
        criterion_matches(self.sport.as_deref(), &player.sport)
            && criterion_matches(self.position.as_deref(), &player.position)
            && criterion_matches(self.skill.as_deref(), &player.skills.to_string())
            && criterion_matches(self.location.as_deref(), &player.location)
    }

    /// Iterate over matching players, preserving input order.
    pub fn apply<'a>(&'a self, players: &'a [Player]) -> impl Iterator<Item = &'a Player> + 'a {
        players.iter().filter(move |player| self.matches(player))
    }
}

/// Criteria for narrowing a requirement listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RequirementFilter {
    /// Substring of the requirement's sport.
    pub sport: Option<String>,
    /// Substring of the requirement's position.
    pub position: Option<String>,
    /// Substring of the requirement's location.
    pub location: Option<String>,
}

impl RequirementFilter {
    /// Report whether `requirement` satisfies every populated criterion.
    #[must_use]
    pub fn matches(&self, requirement: &Requirement) -> bool {
        criterion_matches(self.sport.as_deref(), &requirement.sport)
            && criterion_matches(self.position.as_deref(), &requirement.position)
            && criterion_matches(self.location.as_deref(), &requirement.location)
    }

    /// Matching requirements, newest (highest id) first.
    #[must_use]
    pub fn apply<'a>(&self, requirements: &'a [Requirement]) -> Vec<&'a Requirement> {
        let mut found: Vec<&Requirement> = requirements
            .iter()
            .filter(|requirement| self.matches(requirement))
            .collect();
        found.sort_by(|left, right| right.id.cmp(&left.id));
        found
    }
}

/// Case-insensitive substring test that treats blank needles as wildcards.
pub(crate) fn criterion_matches(needle: Option<&str>, haystack: &str) -> bool {
    match needle.map(str::trim) {
        None | Some("") => true,
        Some(term) => haystack.to_lowercase().contains(&term.to_lowercase()),
    }
}
