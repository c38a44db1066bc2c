//! # Efficiency Color Mapping
//!
//! Maps a zone's make percentage onto a continuous color scale, normalized
//! against that zone family's valid range. Saturation encodes "efficient for
//! that shot type", not an absolute percentage: 45% reads hot from three and
//! cold at the rim.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::FamilyPctRanges;
use crate::model::ZoneLabel;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// CSS `rgb(r,g,b)` string, the form the chart layer consumes.
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Sequential scale stops, light to saturated, evenly spaced over [0, 1].
const SCALE_STOPS: [Rgb; 7] = [
    Rgb { r: 253, g: 224, b: 197 },
    Rgb { r: 252, g: 210, b: 179 },
    Rgb { r: 250, g: 196, b: 162 },
    Rgb { r: 248, g: 181, b: 145 },
    Rgb { r: 246, g: 167, b: 129 },
    Rgb { r: 243, g: 152, b: 114 },
    Rgb { r: 238, g: 135, b: 98 },
];

/// Sample the continuous scale at `t`, clamped to [0, 1], interpolating
/// linearly between adjacent stops.
pub fn sample_scale(t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let span = (SCALE_STOPS.len() - 1) as f64;
    let pos = t * span;
    let idx = (pos.floor() as usize).min(SCALE_STOPS.len() - 2);
    let frac = pos - idx as f64;

    let lo = SCALE_STOPS[idx];
    let hi = SCALE_STOPS[idx + 1];
    let lerp = |a: u8, b: u8| -> u8 { (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8 };

    Rgb { r: lerp(lo.r, hi.r), g: lerp(lo.g, hi.g), b: lerp(lo.b, hi.b) }
}

/// Color for a zone shooting `pct`, normalized into the zone family's valid
/// range and clamped to the scale ends.
pub fn zone_color(pct: f64, zone: ZoneLabel, ranges: &FamilyPctRanges) -> Result<Rgb> {
    let (lo, hi) = ranges.range(zone.family()?);
    let t = (pct - lo) / (hi - lo);
    Ok(sample_scale(t))
}
