//! # Zone Reconciliation
//!
//! Corrects geometric zone labels near the arc using the independently
//! recorded shot-range tag. Pure geometry cannot always tell a toe-on-the-line
//! two from a three; the feed's range tag wins.
//!
//! - three zone + "mid-range" tag -> remap via [`THREE_TO_MID`]
//! - mid zone + "3pt" tag -> remap via [`MID_TO_THREE`]
//! - paint/rim zones are never remapped
//!
//! Idempotent: after one pass the remapped zone agrees with the tag, so a
//! second pass changes nothing. Must run before any statistic that depends on
//! zone family or `is_three`.

use rayon::prelude::*;

use crate::model::{Shot, ShotRange, MID_TO_THREE, THREE_TO_MID};

/// Reconcile one shot's zone against its range tag.
///
/// Shots without a tag are skipped; that is not an error.
pub fn reconcile_shot(shot: &mut Shot) {
    let Some(tag) = shot.record.range_tag() else {
        return;
    };

    match tag {
        ShotRange::MidRange => {
            if let Some(&mid) = THREE_TO_MID.get(&shot.zone) {
                shot.zone = mid;
                shot.is_three = false;
            }
        }
        ShotRange::ThreePoint => {
            if let Some(&three) = MID_TO_THREE.get(&shot.zone) {
                shot.zone = three;
                shot.is_three = true;
            }
        }
        ShotRange::FreeThrow | ShotRange::Other => {}
    }
}

/// Reconcile a batch in place. Per-record independent.
pub fn reconcile(shots: &mut [Shot]) {
    shots.par_iter_mut().for_each(reconcile_shot);
}
