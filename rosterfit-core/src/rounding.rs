//! Display rounding shared by every scoring surface.
//!
//! Ranking always happens on unrounded values. These helpers are applied only
//! when a value is presented, and they all round half away from zero, so a
//! raw `90.5` displays as `91` and a raw `0.25` to one decimal as `0.3`.

/// Round to one decimal place, half away from zero.
///
/// # Examples
/// ```
/// use rosterfit_core::round_to_tenth;
///
/// assert_eq!(round_to_tenth(90.54), 90.5);
/// assert_eq!(round_to_tenth(3.75), 3.8);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "decimal rounding scales by ten around f64::round"
)]
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to the nearest whole number, half away from zero.
///
/// # Examples
/// ```
/// use rosterfit_core::round_to_whole;
///
/// assert_eq!(round_to_whole(7.5), 8.0);
/// assert_eq!(round_to_whole(2.5), 3.0);
/// ```
#[must_use]
pub fn round_to_whole(value: f64) -> f64 {
    value.round()
}

/// Round to a whole number and convert to `u32`.
///
/// Non-finite and negative inputs map to `0`; values beyond `u32::MAX`
/// saturate.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded, finite and clamped to the u32 range first"
)]
#[must_use]
pub fn whole_points(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    round_to_whole(value).clamp(0.0, f64::from(u32::MAX)) as u32
}
