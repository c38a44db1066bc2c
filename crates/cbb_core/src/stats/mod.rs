//! # Shooting Statistics
//!
//! Aggregate and per-family efficiency metrics over reconciled shots.
//!
//! Grouping is an explicit typed reduction: shots are folded into
//! [`ZoneAgg`] accumulators whose `merge` is associative and commutative, so
//! partial aggregates computed over disjoint shards combine in any order to
//! the same result. All ratios zero-guard; a filtered slice with no shots
//! still produces a well-formed, all-zero statistics object.

pub mod color;

pub use color::{zone_color, Rgb};

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Shot, ZoneFamily, ZoneLabel};

/// Read-only aggregate shooting summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub fgm: u32,
    pub fga: u32,
    pub fg_pct: f64,
    pub efg_pct: f64,
    pub pts_per_shot: f64,
    pub assisted_pct: f64,
}

/// Per-zone-family slice of the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FamilyStats {
    pub family: ZoneFamily,
    pub attempts: u32,
    pub makes: u32,
    pub pct: f64,
    /// Share of all attempts taken from this family, in percent.
    pub frequency_share: f64,
    pub assisted_pct: f64,
}

/// Attempts/makes for one zone, with its chart color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneStat {
    pub zone: ZoneLabel,
    pub attempts: u32,
    pub makes: u32,
    pub pct: f64,
}

/// Associative shot accumulator.
///
/// `merge` is the combine step for sharded aggregation; order of combination
/// never changes the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneAgg {
    pub attempts: u32,
    pub makes: u32,
    pub three_makes: u32,
    pub assisted_makes: u32,
}

impl ZoneAgg {
    pub fn observe(&mut self, shot: &Shot) {
        self.attempts += 1;
        if shot.record.made {
            self.makes += 1;
            if shot.is_three {
                self.three_makes += 1;
            }
            if shot.record.assisted == Some(true) {
                self.assisted_makes += 1;
            }
        }
    }

    pub fn merge(self, other: ZoneAgg) -> ZoneAgg {
        ZoneAgg {
            attempts: self.attempts + other.attempts,
            makes: self.makes + other.makes,
            three_makes: self.three_makes + other.three_makes,
            assisted_makes: self.assisted_makes + other.assisted_makes,
        }
    }

    pub fn pct(&self) -> f64 {
        ratio(self.makes, self.attempts)
    }

    pub fn assisted_pct(&self) -> f64 {
        ratio(self.assisted_makes, self.makes)
    }
}

fn ratio(num: u32, den: u32) -> f64 {
    if den == 0 {
        0.0
    } else {
        f64::from(num) / f64::from(den)
    }
}

/// Compute the aggregate shooting summary.
///
/// FGA counts distinct `shot_id`s; rebounded tip attempts sharing an id never
/// inflate the denominator.
pub fn summary(shots: &[Shot]) -> SummaryStats {
    let fga = shots.iter().map(|s| s.record.shot_id.as_str()).collect::<HashSet<_>>().len() as u32;

    let mut agg = ZoneAgg::default();
    for shot in shots {
        agg.observe(shot);
    }

    SummaryStats {
        fgm: agg.makes,
        fga,
        fg_pct: ratio(agg.makes, fga),
        efg_pct: if fga == 0 {
            0.0
        } else {
            (f64::from(agg.makes) + 0.5 * f64::from(agg.three_makes)) / f64::from(fga)
        },
        pts_per_shot: ratio(2 * agg.makes + agg.three_makes, fga),
        assisted_pct: agg.assisted_pct(),
    }
}

/// Group shots by an arbitrary key into [`ZoneAgg`] accumulators.
fn aggregate_by<K, F>(shots: &[Shot], key: F) -> Result<HashMap<K, ZoneAgg>>
where
    K: std::hash::Hash + Eq,
    F: Fn(&Shot) -> Result<K>,
{
    let mut groups: HashMap<K, ZoneAgg> = HashMap::new();
    for shot in shots {
        groups.entry(key(shot)?).or_default().observe(shot);
    }
    Ok(groups)
}

/// Per-family breakdown in reporting order (paint, short_mid, mid, three).
///
/// Families without attempts still appear, zeroed, so a filtered slice always
/// yields a complete table.
pub fn breakdown(shots: &[Shot]) -> Result<Vec<FamilyStats>> {
    let groups = aggregate_by(shots, |s| s.zone.family())?;
    let total: u32 = groups.values().map(|g| g.attempts).sum();

    Ok(ZoneFamily::ALL
        .iter()
        .map(|&family| {
            let agg = groups.get(&family).copied().unwrap_or_default();
            FamilyStats {
                family,
                attempts: agg.attempts,
                makes: agg.makes,
                pct: agg.pct(),
                frequency_share: 100.0 * ratio(agg.attempts, total),
                assisted_pct: agg.assisted_pct(),
            }
        })
        .collect())
}

/// Attempts/makes per fine-grained zone, in draw order. Zones with no
/// attempts are omitted.
pub fn zone_stats(shots: &[Shot]) -> Result<Vec<ZoneStat>> {
    let groups = aggregate_by(shots, |s| Ok(s.zone))?;

    Ok(ZoneLabel::ALL
        .iter()
        .filter_map(|&zone| {
            groups.get(&zone).map(|agg| ZoneStat {
                zone,
                attempts: agg.attempts,
                makes: agg.makes,
                pct: agg.pct(),
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShotRecord;

    fn shot(id: &str, zone: ZoneLabel, made: bool, is_three: bool, assisted: Option<bool>) -> Shot {
        Shot {
            record: ShotRecord {
                shot_id: id.into(),
                team: "Wisconsin".into(),
                shooter: "Shooter".into(),
                raw_x: 90.0,
                raw_y: 50.0,
                made,
                half: "2nd Half".into(),
                opponent: None,
                quad: None,
                location: None,
                shot_range: None,
                lineup: None,
                assisted,
            },
            x_std: 90.0,
            y_std: 50.0,
            x_plot: -4.15,
            y_plot: 0.0,
            dist: 4.15,
            angle: 0.0,
            zone,
            is_three,
        }
    }

    #[test]
    fn empty_slice_yields_zeroed_summary() {
        let stats = summary(&[]);
        assert_eq!(stats, SummaryStats::default());
        assert_eq!(stats.fga, 0);
        assert_eq!(stats.fg_pct, 0.0);
    }

    #[test]
    fn efg_and_pps_formulas() {
        // 10 shots, 6 made, 3 of the makes from three: eFG 0.75, PPS 1.5.
        let mut shots = Vec::new();
        for i in 0..3 {
            shots.push(shot(&format!("three-{i}"), ZoneLabel::Top3, true, true, None));
        }
        for i in 0..3 {
            shots.push(shot(&format!("two-{i}"), ZoneLabel::Rim, true, false, None));
        }
        for i in 0..4 {
            shots.push(shot(&format!("miss-{i}"), ZoneLabel::TopMid, false, false, None));
        }

        let stats = summary(&shots);
        assert_eq!(stats.fga, 10);
        assert_eq!(stats.fgm, 6);
        assert!((stats.fg_pct - 0.6).abs() < 1e-9);
        assert!((stats.efg_pct - 0.75).abs() < 1e-9);
        assert!((stats.pts_per_shot - 1.5).abs() < 1e-9);
    }

    #[test]
    fn fga_counts_distinct_shot_ids() {
        let shots = vec![
            shot("dup", ZoneLabel::Rim, true, false, None),
            shot("dup", ZoneLabel::Rim, false, false, None),
            shot("solo", ZoneLabel::Rim, false, false, None),
        ];
        assert_eq!(summary(&shots).fga, 2);
    }

    #[test]
    fn assisted_pct_is_over_makes_only() {
        let shots = vec![
            shot("a", ZoneLabel::Rim, true, false, Some(true)),
            shot("b", ZoneLabel::Rim, true, false, Some(false)),
            shot("c", ZoneLabel::Rim, true, false, None),
            shot("d", ZoneLabel::Rim, false, false, Some(true)),
        ];
        let stats = summary(&shots);
        assert!((stats.assisted_pct - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_partitions_by_family_with_shares() {
        let shots = vec![
            shot("r1", ZoneLabel::Rim, true, false, None),
            shot("r2", ZoneLabel::Rim, false, false, None),
            shot("m1", ZoneLabel::TopMid, true, false, None),
            shot("t1", ZoneLabel::Top3, false, true, None),
        ];
        let families = breakdown(&shots).unwrap();
        assert_eq!(families.len(), 4);

        let paint = families.iter().find(|f| f.family == ZoneFamily::Paint).unwrap();
        assert_eq!(paint.attempts, 2);
        assert_eq!(paint.makes, 1);
        assert!((paint.frequency_share - 50.0).abs() < 1e-9);

        let short_mid = families.iter().find(|f| f.family == ZoneFamily::ShortMid).unwrap();
        assert_eq!(short_mid.attempts, 0);
        assert_eq!(short_mid.pct, 0.0);
    }

    #[test]
    fn merge_is_associative_and_commutative() {
        let shots: Vec<Shot> = (0..9)
            .map(|i| shot(&format!("s{i}"), ZoneLabel::Rim, i % 2 == 0, i % 3 == 0, Some(i % 4 == 0)))
            .collect();

        let mut aggs: Vec<ZoneAgg> = shots
            .chunks(3)
            .map(|chunk| {
                let mut agg = ZoneAgg::default();
                chunk.iter().for_each(|s| agg.observe(s));
                agg
            })
            .collect();

        let left_fold = aggs[0].merge(aggs[1]).merge(aggs[2]);
        let right_fold = aggs[0].merge(aggs[1].merge(aggs[2]));
        aggs.reverse();
        let reversed = aggs[0].merge(aggs[1]).merge(aggs[2]);

        assert_eq!(left_fold, right_fold);
        assert_eq!(left_fold, reversed);
    }

    #[test]
    fn zone_stats_groups_in_draw_order() {
        let shots = vec![
            shot("t1", ZoneLabel::Top3, true, true, None),
            shot("r1", ZoneLabel::Rim, true, false, None),
            shot("t2", ZoneLabel::Top3, false, true, None),
        ];
        let zones = zone_stats(&shots).unwrap();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].zone, ZoneLabel::Rim);
        assert_eq!(zones[1].zone, ZoneLabel::Top3);
        assert_eq!(zones[1].attempts, 2);
        assert!((zones[1].pct - 0.5).abs() < 1e-9);
    }
}
