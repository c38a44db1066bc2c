//! # Classification Pipeline
//!
//! The fixed linear batch transform: Normalize -> Classify -> Reconcile.
//! A deterministic, branch-free pass over an immutable input collection; the
//! only shared value is the [`GeometryConfig`], which must not change mid-run.
//!
//! Malformed records are rejected and counted, never aborting the batch.
//! Per-record stages are independent and run on rayon parallel iterators.

pub mod classify;
pub mod reconcile;

pub use classify::{assign_zone, assign_zone_polar};
pub use reconcile::{reconcile, reconcile_shot};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{RecordError, Result};
use crate::geometry::{dist_angle, standardize_to_one_basket, to_feet_hoop_centered, GeometryConfig};
use crate::model::{Shot, ShotRange, ShotRecord, ZoneFamily};

/// Counts of rejected records by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionCounts {
    pub out_of_bounds: usize,
    pub non_finite: usize,
    pub missing_shot_id: usize,
}

impl RejectionCounts {
    pub fn total(&self) -> usize {
        self.out_of_bounds + self.non_finite + self.missing_shot_id
    }

    fn record(&mut self, err: &RecordError) {
        match err {
            RecordError::CoordinateOutOfBounds { .. } => self.out_of_bounds += 1,
            RecordError::NonFiniteCoordinate => self.non_finite += 1,
            RecordError::MissingShotId => self.missing_shot_id += 1,
        }
    }
}

/// Decorated shots plus the rejection tally for the batch.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub shots: Vec<Shot>,
    pub rejections: RejectionCounts,
}

/// Decorate one validated record with every derived field.
///
/// `is_three` comes from the range tag when one is present ("3pt" / not);
/// untagged shots fall back to the zone family.
pub fn decorate(record: ShotRecord, config: &GeometryConfig) -> Result<Shot> {
    let (x_std, y_std) =
        standardize_to_one_basket(record.raw_x, record.raw_y, &record.half, config);
    let (x_plot, y_plot) = to_feet_hoop_centered(x_std, y_std);
    let (dist, angle) = dist_angle(x_plot, y_plot);
    let zone = assign_zone_polar(dist, angle, config);

    let is_three = match record.range_tag() {
        Some(ShotRange::ThreePoint) => true,
        Some(ShotRange::MidRange) => false,
        _ => zone.family()? == ZoneFamily::Three,
    };

    Ok(Shot { record, x_std, y_std, x_plot, y_plot, dist, angle, zone, is_three })
}

/// Run the full pipeline over a batch of raw records.
///
/// Invalid records are dropped and counted; configuration-level failures
/// ([`crate::error::PipelineError`]) abort the run.
pub fn run(records: Vec<ShotRecord>, config: &GeometryConfig) -> Result<PipelineOutput> {
    let total = records.len();

    let mut rejections = RejectionCounts::default();
    let mut valid = Vec::with_capacity(total);
    for record in records {
        match record.validate() {
            Ok(()) => valid.push(record),
            Err(err) => {
                debug!(shot_id = %record.shot_id, %err, "rejecting malformed record");
                rejections.record(&err);
            }
        }
    }

    let mut shots = valid
        .into_par_iter()
        .map(|record| decorate(record, config))
        .collect::<Result<Vec<Shot>>>()?;

    reconcile(&mut shots);

    info!(
        total,
        kept = shots.len(),
        rejected = rejections.total(),
        "shot pipeline complete"
    );

    Ok(PipelineOutput { shots, rejections })
}
