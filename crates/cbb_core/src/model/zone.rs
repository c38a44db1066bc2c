//! # Zone Taxonomy
//!
//! The closed 14-zone shooting taxonomy and its static lookup tables.
//!
//! Every zone maps to exactly one [`ZoneFamily`]; the mid/three tables drive
//! reconciliation against the externally recorded shot-range tag.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// One of the 14 shooting zones.
///
/// Serialized and displayed with the chart labels ("Paint (Non-Rim) Left",
/// "Left Mid Low", ...) so downstream consumers see the historical strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneLabel {
    #[serde(rename = "Rim")]
    Rim,
    #[serde(rename = "Paint (Non-Rim) Left")]
    PaintLeft,
    #[serde(rename = "Paint (Non-Rim) Middle")]
    PaintMiddle,
    #[serde(rename = "Paint (Non-Rim) Right")]
    PaintRight,
    #[serde(rename = "Top Mid")]
    TopMid,
    #[serde(rename = "Left Mid")]
    LeftMid,
    #[serde(rename = "Right Mid")]
    RightMid,
    #[serde(rename = "Left Mid Low")]
    LeftMidLow,
    #[serde(rename = "Right Mid Low")]
    RightMidLow,
    #[serde(rename = "Top 3")]
    Top3,
    #[serde(rename = "Left Wing 3")]
    LeftWing3,
    #[serde(rename = "Right Wing 3")]
    RightWing3,
    #[serde(rename = "Left Corner 3")]
    LeftCorner3,
    #[serde(rename = "Right Corner 3")]
    RightCorner3,
}

impl ZoneLabel {
    /// All 14 zones, in draw order.
    pub const ALL: [ZoneLabel; 14] = [
        ZoneLabel::Rim,
        ZoneLabel::PaintLeft,
        ZoneLabel::PaintMiddle,
        ZoneLabel::PaintRight,
        ZoneLabel::TopMid,
        ZoneLabel::LeftMid,
        ZoneLabel::RightMid,
        ZoneLabel::LeftMidLow,
        ZoneLabel::RightMidLow,
        ZoneLabel::Top3,
        ZoneLabel::LeftWing3,
        ZoneLabel::RightWing3,
        ZoneLabel::LeftCorner3,
        ZoneLabel::RightCorner3,
    ];

    /// Chart label for this zone.
    pub fn label(&self) -> &'static str {
        match self {
            ZoneLabel::Rim => "Rim",
            ZoneLabel::PaintLeft => "Paint (Non-Rim) Left",
            ZoneLabel::PaintMiddle => "Paint (Non-Rim) Middle",
            ZoneLabel::PaintRight => "Paint (Non-Rim) Right",
            ZoneLabel::TopMid => "Top Mid",
            ZoneLabel::LeftMid => "Left Mid",
            ZoneLabel::RightMid => "Right Mid",
            ZoneLabel::LeftMidLow => "Left Mid Low",
            ZoneLabel::RightMidLow => "Right Mid Low",
            ZoneLabel::Top3 => "Top 3",
            ZoneLabel::LeftWing3 => "Left Wing 3",
            ZoneLabel::RightWing3 => "Right Wing 3",
            ZoneLabel::LeftCorner3 => "Left Corner 3",
            ZoneLabel::RightCorner3 => "Right Corner 3",
        }
    }

    /// Look up this zone's family.
    ///
    /// A missing table entry is a fatal invariant violation
    /// ([`PipelineError::UnknownZoneFamily`]), never a per-record issue.
    pub fn family(&self) -> Result<ZoneFamily, PipelineError> {
        ZONE_FAMILY
            .get(self)
            .copied()
            .ok_or(PipelineError::UnknownZoneFamily { zone: *self })
    }
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse zone grouping sharing one efficiency color scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneFamily {
    Paint,
    ShortMid,
    Mid,
    Three,
}

impl ZoneFamily {
    /// The four families in reporting order: rim/close first, threes last.
    pub const ALL: [ZoneFamily; 4] =
        [ZoneFamily::Paint, ZoneFamily::ShortMid, ZoneFamily::Mid, ZoneFamily::Three];

    pub fn label(&self) -> &'static str {
        match self {
            ZoneFamily::Paint => "paint",
            ZoneFamily::ShortMid => "short_mid",
            ZoneFamily::Mid => "mid",
            ZoneFamily::Three => "three",
        }
    }
}

impl fmt::Display for ZoneFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Zone -> family table. Read-only, initialized once.
pub static ZONE_FAMILY: Lazy<HashMap<ZoneLabel, ZoneFamily>> = Lazy::new(|| {
    HashMap::from([
        (ZoneLabel::Rim, ZoneFamily::Paint),
        (ZoneLabel::PaintLeft, ZoneFamily::ShortMid),
        (ZoneLabel::PaintMiddle, ZoneFamily::ShortMid),
        (ZoneLabel::PaintRight, ZoneFamily::ShortMid),
        (ZoneLabel::TopMid, ZoneFamily::Mid),
        (ZoneLabel::LeftMid, ZoneFamily::Mid),
        (ZoneLabel::RightMid, ZoneFamily::Mid),
        (ZoneLabel::LeftMidLow, ZoneFamily::Mid),
        (ZoneLabel::RightMidLow, ZoneFamily::Mid),
        (ZoneLabel::Top3, ZoneFamily::Three),
        (ZoneLabel::LeftWing3, ZoneFamily::Three),
        (ZoneLabel::RightWing3, ZoneFamily::Three),
        (ZoneLabel::LeftCorner3, ZoneFamily::Three),
        (ZoneLabel::RightCorner3, ZoneFamily::Three),
    ])
});

/// Three-zone -> mid-zone remap used when the range tag says "mid-range".
pub static THREE_TO_MID: Lazy<HashMap<ZoneLabel, ZoneLabel>> = Lazy::new(|| {
    HashMap::from([
        (ZoneLabel::Top3, ZoneLabel::TopMid),
        (ZoneLabel::LeftWing3, ZoneLabel::LeftMid),
        (ZoneLabel::RightWing3, ZoneLabel::RightMid),
        (ZoneLabel::LeftCorner3, ZoneLabel::LeftMidLow),
        (ZoneLabel::RightCorner3, ZoneLabel::RightMidLow),
    ])
});

/// Inverse of [`THREE_TO_MID`], used when the range tag says "3pt".
pub static MID_TO_THREE: Lazy<HashMap<ZoneLabel, ZoneLabel>> =
    Lazy::new(|| THREE_TO_MID.iter().map(|(three, mid)| (*mid, *three)).collect());
