//! # Record Preparation and Filtering
//!
//! The slicing layer between ingestion and the pipeline: free-throw removal,
//! `shot_id` de-duplication, default backfills, and the chart's filter set
//! (shooter, half, opponent, location, strength quad, lineup, on/off court).
//!
//! Filters operate on raw records so every downstream statistic sees the same
//! slice.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{ShotRange, ShotRecord};

/// Default strength bucket for records missing a quad tag.
pub const DEFAULT_QUAD: &str = "Q4";
/// Opponent backfill; the feed leaves non-D1 opponents blank.
pub const NON_D1_OPPONENT: &str = "Non-D1";

/// Clean a raw batch before the pipeline runs.
///
/// - drops free-throw-tagged records (they are not field-goal attempts)
/// - de-duplicates by `shot_id`, keeping the first occurrence
/// - backfills a missing/blank quad with the weakest bucket
/// - backfills a missing opponent with "Non-D1"
pub fn prepare_records(records: Vec<ShotRecord>) -> Vec<ShotRecord> {
    let before = records.len();
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(before);

    for mut record in records {
        if record.range_tag() == Some(ShotRange::FreeThrow) {
            continue;
        }
        if !seen.insert(record.shot_id.clone()) {
            continue;
        }

        let quad_blank = record.quad.as_deref().map(|q| q.trim().is_empty()).unwrap_or(true);
        if quad_blank {
            record.quad = Some(DEFAULT_QUAD.to_string());
        }
        if record.opponent.is_none() {
            record.opponent = Some(NON_D1_OPPONENT.to_string());
        }

        out.push(record);
    }

    debug!(before, after = out.len(), "prepared shot records");
    out
}

/// A chart filter selection. Empty vectors mean "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShotFilter {
    pub shooters: Vec<String>,
    pub halves: Vec<String>,
    pub opponents: Vec<String>,
    pub locations: Vec<String>,
    pub quads: Vec<String>,
    /// Exact five-player lineup; matches regardless of player order.
    pub lineup: Option<Vec<String>>,
    /// Every listed player must be on the floor.
    pub on_court: Vec<String>,
    /// None of the listed players may be on the floor.
    pub off_court: Vec<String>,
    /// Drop shots from games against non-D1 opponents.
    pub exclude_non_d1: bool,
}

impl ShotFilter {
    pub fn matches(&self, record: &ShotRecord) -> bool {
        let in_list = |list: &[String], value: &str| list.is_empty() || list.iter().any(|v| v == value);

        if !in_list(&self.shooters, &record.shooter) {
            return false;
        }
        if !in_list(&self.halves, &record.half) {
            return false;
        }
        if !in_list(&self.opponents, record.opponent.as_deref().unwrap_or(NON_D1_OPPONENT)) {
            return false;
        }
        if !in_list(&self.locations, record.location.as_deref().unwrap_or("")) {
            return false;
        }
        let quad = record.quad.as_deref().unwrap_or(DEFAULT_QUAD);
        if !in_list(&self.quads, quad) {
            return false;
        }
        if self.exclude_non_d1 && quad == NON_D1_OPPONENT {
            return false;
        }

        let lineup_set = |r: &ShotRecord| -> Option<HashSet<String>> {
            r.lineup.as_ref().filter(|l| l.len() == 5).map(|l| l.iter().cloned().collect())
        };

        if let Some(wanted) = &self.lineup {
            let wanted: HashSet<String> = wanted.iter().cloned().collect();
            match lineup_set(record) {
                Some(on_floor) if on_floor == wanted => {}
                _ => return false,
            }
        }

        if !self.on_court.is_empty() {
            match lineup_set(record) {
                Some(on_floor) if self.on_court.iter().all(|p| on_floor.contains(p)) => {}
                _ => return false,
            }
        }

        if !self.off_court.is_empty() {
            match lineup_set(record) {
                Some(on_floor) if self.off_court.iter().all(|p| !on_floor.contains(p)) => {}
                _ => return false,
            }
        }

        true
    }

    pub fn apply(&self, records: Vec<ShotRecord>) -> Vec<ShotRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Split a batch into (offense, defense) slices for one team: shots the team
/// took versus shots taken against it.
pub fn split_offense_defense(
    records: Vec<ShotRecord>,
    team: &str,
) -> (Vec<ShotRecord>, Vec<ShotRecord>) {
    records.into_iter().partition(|r| r.team == team)
}
