use thiserror::Error;

use crate::model::ZoneLabel;

/// Fatal pipeline errors.
///
/// These indicate an incomplete or inconsistent configuration, not a data
/// problem, and abort the run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("zone '{zone}' has no family mapping")]
    UnknownZoneFamily { zone: ZoneLabel },

    #[error("unknown geometry profile: {name}")]
    UnknownProfile { name: String },
}

/// Per-record validation failures.
///
/// A bad record is rejected and counted; the batch continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("coordinates ({x}, {y}) outside the 0-100 court bounds")]
    CoordinateOutOfBounds { x: f32, y: f32 },

    #[error("non-finite coordinate")]
    NonFiniteCoordinate,

    #[error("missing shot_id")]
    MissingShotId,
}

pub type Result<T> = std::result::Result<T, PipelineError>;
