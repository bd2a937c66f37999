//! Aggregated star ratings received by a player.

use thiserror::Error;

use crate::round_to_tenth;

/// Lowest star value a team may award.
pub const MIN_STARS: u8 = 1;
/// Highest star value a team may award.
pub const MAX_STARS: u8 = 5;

/// Errors returned when building a [`RatingSummary`].
#[derive(Debug, Error, PartialEq)]
pub enum RatingError {
    /// A single rating fell outside `1..=5`.
    #[error("rating {stars} is outside the range 1..=5")]
    OutOfRange {
        /// Offending star value.
        stars: u8,
    },
    /// A pre-computed average was not finite or outside `0.0..=5.0`.
    #[error("average rating {average} must be finite and within 0.0..=5.0")]
    InvalidAverage {
        /// Offending average.
        average: f64,
    },
    /// A non-zero average was supplied without any ratings behind it.
    #[error("average rating {average} requires at least one rating")]
    UnratedAverage {
        /// Offending average.
        average: f64,
    },
}

/// Mean rating and the number of ratings it was computed from.
///
/// A player without ratings has an average of exactly `0.0`.
///
/// # Examples
/// ```
/// use rosterfit_core::RatingSummary;
///
/// # fn main() -> Result<(), rosterfit_core::RatingError> {
/// let summary = RatingSummary::from_stars(&[5, 4, 4])?;
/// assert_eq!(summary.average(), 4.3);
/// assert_eq!(summary.count(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRatingSummary"))]
pub struct RatingSummary {
    average: f64,
    count: u32,
}

/// Unchecked wire form; every decoded summary passes through
/// [`RatingSummary::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRatingSummary {
    #[serde(default)]
    average: f64,
    #[serde(default)]
    count: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRatingSummary> for RatingSummary {
    type Error = RatingError;

    fn try_from(raw: RawRatingSummary) -> Result<Self, Self::Error> {
        Self::new(raw.average, raw.count)
    }
}

impl RatingSummary {
    /// Summary for a player nobody has rated yet.
    pub const UNRATED: Self = Self {
        average: 0.0,
        count: 0,
    };

    /// Wrap an average that a store already resolved.
    ///
    /// # Errors
    /// Returns [`RatingError::InvalidAverage`] when `average` is not finite or
    /// lies outside `0.0..=5.0`, and [`RatingError::UnratedAverage`] when
    /// `count` is zero but `average` is not.
    pub fn new(average: f64, count: u32) -> Result<Self, RatingError> {
        if !average.is_finite() || !(0.0..=f64::from(MAX_STARS)).contains(&average) {
            return Err(RatingError::InvalidAverage { average });
        }
        if count == 0 && average > 0.0 {
            return Err(RatingError::UnratedAverage { average });
        }
        Ok(Self { average, count })
    }

    /// Average a list of star ratings, rounded to one decimal.
    ///
    /// # Errors
    /// Returns [`RatingError::OutOfRange`] for the first value outside `1..=5`.
    #[expect(
        clippy::float_arithmetic,
        reason = "the mean divides the star total by the rating count"
    )]
    pub fn from_stars(stars: &[u8]) -> Result<Self, RatingError> {
        if let Some(&bad) = stars
            .iter()
            .find(|&&value| !(MIN_STARS..=MAX_STARS).contains(&value))
        {
            return Err(RatingError::OutOfRange { stars: bad });
        }
        let Ok(count) = u32::try_from(stars.len()) else {
            return Err(RatingError::InvalidAverage { average: f64::NAN });
        };
        if count == 0 {
            return Ok(Self::UNRATED);
        }
        let total: u32 = stars.iter().copied().map(u32::from).sum();
        let average = round_to_tenth(f64::from(total) / f64::from(count));
        Ok(Self { average, count })
    }

    /// Mean rating rounded to one decimal, `0.0` when unrated.
    #[must_use]
    pub const fn average(&self) -> f64 {
        self.average
    }

    /// Number of ratings received.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }
}
