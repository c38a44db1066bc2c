//! # Shot Data Model
//!
//! Raw shot records as supplied by the ingestion collaborator, and the
//! decorated per-shot output the pipeline hands to renderers and reporting.
//!
//! A [`ShotRecord`] is decorated into a [`Shot`], never re-created: the raw
//! fields travel with every derived field the pipeline adds.

pub mod zone;

pub use zone::{ZoneFamily, ZoneLabel, MID_TO_THREE, THREE_TO_MID, ZONE_FAMILY};

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Externally recorded shot-range tag, normalized the way the chart data
/// carries it (lowercase, spaces collapsed to hyphens).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShotRange {
    #[serde(rename = "3pt")]
    ThreePoint,
    MidRange,
    #[serde(rename = "freethrow")]
    FreeThrow,
    Other,
}

impl ShotRange {
    /// Parse a raw tag. Unknown tags map to [`ShotRange::Other`] rather than
    /// failing; reconciliation simply ignores them.
    pub fn parse(label: &str) -> ShotRange {
        match label.trim().to_lowercase().replace(' ', "-").as_str() {
            "3pt" => ShotRange::ThreePoint,
            "mid-range" => ShotRange::MidRange,
            "freethrow" => ShotRange::FreeThrow,
            _ => ShotRange::Other,
        }
    }
}

/// One raw shot attempt in normalized 0-100 full-court coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Unique within one game; drives de-duplication and the distinct-attempt
    /// count behind FGA.
    pub shot_id: String,
    pub team: String,
    pub shooter: String,
    pub raw_x: f32,
    pub raw_y: f32,
    pub made: bool,
    /// "1st Half" / "2nd Half" as recorded by the feed.
    pub half: String,
    #[serde(default)]
    pub opponent: Option<String>,
    /// Opponent strength bucket ("Q1A".."Q4", "Non-D1"); missing means the
    /// weakest bucket.
    #[serde(default)]
    pub quad: Option<String>,
    /// "Home" / "Away" / "Neutral".
    #[serde(default)]
    pub location: Option<String>,
    /// External range tag: "3pt" / "mid-range" / "freethrow" / other.
    #[serde(default)]
    pub shot_range: Option<String>,
    /// The five players on the floor, when the feed recorded a valid lineup.
    #[serde(default)]
    pub lineup: Option<Vec<String>>,
    #[serde(default)]
    pub assisted: Option<bool>,
}

impl ShotRecord {
    /// Parsed range tag, if any.
    pub fn range_tag(&self) -> Option<ShotRange> {
        self.shot_range.as_deref().map(ShotRange::parse)
    }

    /// Validate the invariants the pipeline relies on.
    ///
    /// Coordinates must be finite and within the 0-100 court bounds and
    /// `shot_id` must be present. Anything else is tolerated.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.shot_id.trim().is_empty() {
            return Err(RecordError::MissingShotId);
        }
        if !self.raw_x.is_finite() || !self.raw_y.is_finite() {
            return Err(RecordError::NonFiniteCoordinate);
        }
        let in_bounds = |v: f32| (0.0..=100.0).contains(&v);
        if !in_bounds(self.raw_x) || !in_bounds(self.raw_y) {
            return Err(RecordError::CoordinateOutOfBounds { x: self.raw_x, y: self.raw_y });
        }
        Ok(())
    }
}

/// A shot decorated with every derived field the pipeline computes.
///
/// Immutable once aggregation has run; renderers consume
/// `{x_plot, y_plot, dist, angle, zone, is_three}` directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    #[serde(flatten)]
    pub record: ShotRecord,
    /// Standardized 0-100 coordinates, every shot attacking one basket.
    pub x_std: f32,
    pub y_std: f32,
    /// Hoop-centered feet; the hoop is at the plot origin, the baseline at
    /// `x_plot = +5.25`.
    pub x_plot: f32,
    pub y_plot: f32,
    /// Distance from the hoop in feet.
    pub dist: f32,
    /// Degrees in `(-180, 180]`, `atan2(y, -x)`.
    pub angle: f32,
    pub zone: ZoneLabel,
    pub is_three: bool,
}
