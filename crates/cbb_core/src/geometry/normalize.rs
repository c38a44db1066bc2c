//! # Coordinate Normalization
//!
//! Converts raw 0-100 full-court positions into hoop-centered feet.
//!
//! ## Coordinate Systems
//!
//! **Raw/Feed Coordinates** (0-100 on both axes, full court):
//! - X: 0 = left baseline, 100 = right baseline (LENGTH direction, 94 ft)
//! - Y: 0-100 across the court (WIDTH direction, 50 ft)
//!
//! **Hoop-Centered Feet** (used by classification and renderers):
//! - origin at the basket
//! - X: negative toward midcourt, baseline at +5.25 ft
//! - Y: signed lateral offset
//!
//! Standardization first mirrors left-half shots so every attempt attacks one
//! conceptual basket, then applies a second, half-specific y-mirror for
//! records tagged with the configured half label (the feed records first-half
//! shots laterally flipped).

use crate::geometry::GeometryConfig;

/// Full court length in feet.
pub const COURT_LENGTH_FT: f32 = 94.0;
/// Full court width in feet.
pub const COURT_WIDTH_FT: f32 = 50.0;
/// Midcourt divider in raw 0-100 units.
pub const HALF_DIVIDER: f32 = 50.0;
/// Hoop offset from the baseline in feet.
pub const HOOP_FROM_BASELINE_FT: f32 = 5.25;
/// Hoop position along the court length, feet from the far baseline.
pub const HOOP_X_FT: f32 = COURT_LENGTH_FT - HOOP_FROM_BASELINE_FT;

/// Standardize a raw position so the shot attacks one conceptual basket.
///
/// Shots on the left half (`raw_x < 50`) are mirrored across both axes.
/// Afterwards, shots from the configured mirrored half get an independent
/// y-mirror about the lateral centerline; this second correction touches
/// only y.
pub fn standardize_to_one_basket(
    raw_x: f32,
    raw_y: f32,
    half: &str,
    config: &GeometryConfig,
) -> (f32, f32) {
    let (mut x, mut y) = (raw_x, raw_y);

    if x < HALF_DIVIDER {
        x = 100.0 - x;
        y = 100.0 - y;
    }

    if half == config.mirrored_half_label {
        y = 100.0 - y;
    }

    (x, y)
}

/// Convert standardized 0-100 coordinates to hoop-centered feet.
///
/// Guarantees the hoop sits at the plot origin and the baseline at
/// `x_plot = +5.25` regardless of which side or half the shot came from.
pub fn to_feet_hoop_centered(x_std: f32, y_std: f32) -> (f32, f32) {
    let x_ft = x_std * (COURT_LENGTH_FT / 100.0);
    let y_ft = (y_std - 50.0) * (COURT_WIDTH_FT / 100.0);

    (x_ft - HOOP_X_FT, y_ft)
}

/// Distance (ft) and angle (degrees) from the hoop for a plot position.
///
/// The angle is `atan2(y, -x)` in `(-180, 180]`: 0 points up the floor toward
/// midcourt, positive angles are one lateral side, negative the other.
pub fn dist_angle(x_plot: f32, y_plot: f32) -> (f32, f32) {
    let dist = (x_plot * x_plot + y_plot * y_plot).sqrt();
    let angle = y_plot.atan2(-x_plot).to_degrees();
    (dist, angle)
}
