//! # Geometry Configuration
//!
//! All zone-boundary constants live here, never as literals at the call site.
//! Observed chart snapshots drifted between seasons, so each deployment's
//! constants are pinned as a named, versioned profile.
//!
//! ## Usage
//!
//! ```rust
//! use cbb_core::geometry::GeometryConfig;
//!
//! // Current season boundaries
//! let config = GeometryConfig::default();
//!
//! // A pinned historical snapshot
//! let legacy = GeometryConfig::season_2025();
//!
//! // From environment variable
//! let from_env = GeometryConfig::from_env_or_default();
//! ```
//!
//! ## Environment Variables
//!
//! - `CBB_GEOMETRY_PROFILE`: select a profile (`season_2026`, `season_2025`)

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::model::ZoneFamily;

/// Immutable per-run geometry: radii and angle cutoffs in hoop-centered feet
/// and degrees, plus the label-handedness flag.
///
/// Must not change mid-run; every shot in one batch is classified against
/// identical boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Rim zone radius (ft). Observed values drifted between 4.25 and 5.5.
    pub r_rim: f32,
    /// Outer edge of the non-rim paint band (ft).
    pub r_paint_edge: f32,
    /// Three-point radius (ft).
    pub r_three: f32,
    /// Mid/three boundary used by classification (ft).
    pub r_three_edge: f32,
    /// Wing cutoff: |angle| above this leaves the top band (degrees).
    pub wing_angle_deg: f32,
    /// Corner cutoff: |angle| at or above this is baseline/corner (degrees).
    pub corner_angle_deg: f32,
    /// Left/middle/right split inside the paint band (degrees).
    pub paint_split_deg: f32,
    /// Flip left/right naming for the baseline/corner tiers relative to raw
    /// angle sign. Snapshots disagree on handedness; `false` means labels
    /// follow angle sign exactly like the wing tiers.
    pub invert_baseline_label: bool,
    /// The recorded half whose shots get the extra lateral y-mirror.
    pub mirrored_half_label: String,
    /// Per-family make-percentage ranges for the efficiency color scale.
    pub pct_ranges: FamilyPctRanges,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self::season_2026()
    }
}

impl GeometryConfig {
    /// Current-season profile (2026 chart snapshot).
    pub fn season_2026() -> Self {
        GeometryConfig {
            r_rim: 5.5,
            r_paint_edge: 11.0,
            r_three: 22.25,
            r_three_edge: 22.25,
            wing_angle_deg: 22.0,
            corner_angle_deg: 67.0,
            paint_split_deg: 60.0,
            invert_baseline_label: false,
            mirrored_half_label: "1st Half".to_string(),
            pct_ranges: FamilyPctRanges::default(),
        }
    }

    /// Prior-season profile: tighter rim, shorter arc, flipped baseline
    /// handedness.
    pub fn season_2025() -> Self {
        GeometryConfig {
            r_rim: 4.25,
            r_paint_edge: 10.0,
            r_three: 22.0,
            r_three_edge: 22.25,
            invert_baseline_label: true,
            ..Self::season_2026()
        }
    }

    /// Look up a profile by name.
    pub fn by_name(name: &str) -> Result<Self, PipelineError> {
        match name.to_lowercase().as_str() {
            "season_2026" | "default" => Ok(Self::season_2026()),
            "season_2025" | "legacy" => Ok(Self::season_2025()),
            _ => Err(PipelineError::UnknownProfile { name: name.to_string() }),
        }
    }

    /// Load from `CBB_GEOMETRY_PROFILE` or fall back to the default profile.
    pub fn from_env_or_default() -> Self {
        match env::var("CBB_GEOMETRY_PROFILE") {
            Ok(name) => Self::by_name(&name).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

/// Valid make-percentage range per zone family.
///
/// The color scale normalizes a family's percentage into its range, so
/// "more saturated" reads as "more efficient for that shot type" rather than
/// an absolute percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FamilyPctRanges {
    pub paint: (f64, f64),
    pub short_mid: (f64, f64),
    pub mid: (f64, f64),
    pub three: (f64, f64),
}

impl Default for FamilyPctRanges {
    fn default() -> Self {
        FamilyPctRanges {
            paint: (0.30, 0.75),
            short_mid: (0.30, 0.65),
            mid: (0.20, 0.60),
            three: (0.20, 0.50),
        }
    }
}

impl FamilyPctRanges {
    pub fn range(&self, family: ZoneFamily) -> (f64, f64) {
        match family {
            ZoneFamily::Paint => self.paint,
            ZoneFamily::ShortMid => self.short_mid,
            ZoneFamily::Mid => self.mid,
            ZoneFamily::Three => self.three,
        }
    }
}
