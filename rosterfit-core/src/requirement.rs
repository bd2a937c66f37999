//! Team openings that players are scored against.

use crate::SkillSet;
use crate::player::city_of;

/// Identifier of a team requirement.
pub type RequirementId = u64;

/// A team's posted opening.
///
/// # Examples
/// ```
/// use rosterfit_core::Requirement;
///
/// let opening = Requirement::new(3, "Soccer", "Goalkeeper")
///     .with_team_name("Harbour FC")
///     .with_skills("reflexes,communication")
///     .with_min_experience(2);
/// assert_eq!(opening.skills.len(), 2);
/// assert_eq!(opening.min_experience, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Requirement {
    /// Unique identifier.
    pub id: RequirementId,
    /// Name of the posting team.
    pub team_name: String,
    /// Sport the team plays.
    pub sport: String,
    /// Position the team wants to fill.
    pub position: String,
    /// Required skill tokens.
    pub skills: SkillSet,
    /// Minimum years of experience.
    pub min_experience: u32,
    /// Free-text location, city first.
    pub location: String,
}

impl Requirement {
    /// Construct a requirement without skills, experience floor or location.
    pub fn new(id: RequirementId, sport: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id,
            sport: sport.into(),
            position: position.into(),
            ..Self::default()
        }
    }

    /// Set the posting team's name.
    #[must_use]
    pub fn with_team_name(mut self, name: impl Into<String>) -> Self {
        self.team_name = name.into();
        self
    }

    /// Replace the required skills with the parsed contents of `raw`.
    #[must_use]
    pub fn with_skills(mut self, raw: &str) -> Self {
        self.skills = SkillSet::parse(raw);
        self
    }

    /// Set the minimum years of experience.
    #[must_use]
    pub fn with_min_experience(mut self, years: u32) -> Self {
        self.min_experience = years;
        self
    }

    /// Set the free-text location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// First comma segment of the location, trimmed and lowercased.
    #[must_use]
    pub fn city(&self) -> String {
        city_of(&self.location)
    }
}
