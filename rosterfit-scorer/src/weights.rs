//! Fixed weights for every scoring formula.

/// Points awarded by the deterministic matcher.
pub mod matcher {
    /// Sport matches the requirement.
    pub const SPORT: u32 = 3;
    /// Position matches the requirement.
    pub const POSITION: u32 = 2;
    /// Player meets the minimum experience.
    pub const EXPERIENCE: u32 = 1;
    /// Each required skill the player holds.
    pub const PER_SKILL: u32 = 1;
    /// Average rating at or above [`TOP_RATING`].
    pub const TOP_RATING_BONUS: u32 = 2;
    /// Average rating at or above [`GOOD_RATING`].
    pub const GOOD_RATING_BONUS: u32 = 1;
    /// Threshold for the top rating bonus.
    pub const TOP_RATING: f64 = 4.5;
    /// Threshold for the good rating bonus.
    pub const GOOD_RATING: f64 = 3.5;
}

/// Factor ceilings and multipliers for recommendations.
pub mod recommend {
    /// Share of required skills held, scaled to this many points.
    pub const SKILL_MATCH: f64 = 40.0;
    /// Exact sport match.
    pub const SPORT: f64 = 20.0;
    /// Exact position match.
    pub const POSITION: f64 = 15.0;
    /// Experience ratio is capped at this multiple of the minimum.
    pub const EXPERIENCE_RATIO_CAP: f64 = 2.0;
    /// Points per unit of experience ratio.
    pub const EXPERIENCE_PER_RATIO: f64 = 5.0;
    /// Experience points when no minimum is set and the player has some.
    pub const EXPERIENCE_OPEN_SEASONED: f64 = 10.0;
    /// Experience points when no minimum is set and the player has none.
    pub const EXPERIENCE_OPEN_ROOKIE: f64 = 5.0;
    /// Points per star of average rating.
    pub const RATING_PER_STAR: f64 = 2.0;
    /// Points per recorded interest.
    pub const SOCIAL_PER_INTEREST: f64 = 1.5;
    /// Ceiling on social proof.
    pub const SOCIAL_CAP: f64 = 5.0;
    /// City of the requirement appears in the player's city.
    pub const LOCATION: f64 = 5.0;
    /// Candidates must score strictly above this to be recommended.
    pub const MIN_SCORE: f64 = 10.0;
    /// Ceiling on the displayed confidence.
    pub const CONFIDENCE_CAP: u32 = 100;
    /// Number of recommendations returned when the caller does not say.
    pub const DEFAULT_TOP_N: usize = 5;
}

/// Multipliers and ceilings for the leaderboard composite.
pub mod leaderboard {
    /// Points per star of average rating.
    pub const RATING_PER_STAR: f64 = 20.0;
    /// Points per year of experience.
    pub const EXPERIENCE_PER_YEAR: f64 = 3.0;
    /// Ceiling on experience points.
    pub const EXPERIENCE_CAP: f64 = 30.0;
    /// Points per profile view.
    pub const VIEWS_PER_VIEW: f64 = 0.5;
    /// Ceiling on popularity points.
    pub const VIEWS_CAP: f64 = 20.0;
    /// Points per skill token.
    pub const SKILL_PER_TOKEN: f64 = 2.0;
    /// Ceiling on skill points.
    pub const SKILL_CAP: f64 = 20.0;
    /// Points per achievement.
    pub const ACHIEVEMENT_PER_ITEM: f64 = 5.0;
    /// Ceiling on achievement points.
    pub const ACHIEVEMENT_CAP: f64 = 10.0;
}

/// Multipliers and ceilings for head-to-head comparison.
pub mod compare {
    /// Points per star of average rating.
    pub const RATING_PER_STAR: f64 = 20.0;
    /// Points per year of experience.
    pub const EXPERIENCE_PER_YEAR: f64 = 5.0;
    /// Ceiling on experience points.
    pub const EXPERIENCE_CAP: f64 = 50.0;
    /// Points per skill token.
    pub const SKILL_PER_TOKEN: f64 = 3.0;
    /// Ceiling on skill points.
    pub const SKILL_CAP: f64 = 30.0;
}
