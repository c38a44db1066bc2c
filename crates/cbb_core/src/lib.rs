//! # cbb_core - Shot-Zone Classification and Shooting-Efficiency Pipeline
//!
//! Converts raw basketball shot-location records (normalized 0-100 court
//! coordinates) into a canonical hoop-centered geometry, classifies each shot
//! into a closed 14-zone taxonomy, reconciles the geometric label against the
//! independently recorded shot-range tag, and computes shooting-efficiency
//! statistics per zone family and in aggregate.
//!
//! ## Pipeline
//! Normalize -> Classify -> Reconcile -> Aggregate, a deterministic batch
//! transform over an immutable input collection. Rendering, ingestion, and
//! name normalization live in collaborators; this crate only produces the
//! per-shot geometry, the statistics, and the efficiency color mapping they
//! consume.

pub mod error;
pub mod filter;
pub mod geometry;
pub mod model;
pub mod pipeline;
pub mod stats;

pub use error::{PipelineError, RecordError, Result};
pub use filter::{prepare_records, split_offense_defense, ShotFilter};
pub use geometry::{rotate_for_display, FamilyPctRanges, GeometryConfig};
pub use model::{Shot, ShotRange, ShotRecord, ZoneFamily, ZoneLabel};
pub use pipeline::{assign_zone, reconcile, PipelineOutput, RejectionCounts};
pub use stats::{breakdown, summary, zone_color, zone_stats, FamilyStats, SummaryStats, ZoneStat};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, raw_x: f32, raw_y: f32, made: bool, range: Option<&str>) -> ShotRecord {
        ShotRecord {
            shot_id: id.into(),
            team: "Wisconsin".into(),
            shooter: "Shooter".into(),
            raw_x,
            raw_y,
            made,
            half: "2nd Half".into(),
            opponent: Some("Purdue".into()),
            quad: Some("Q1A".into()),
            location: Some("Home".into()),
            shot_range: range.map(str::to_string),
            lineup: None,
            assisted: Some(made),
        }
    }

    #[test]
    fn end_to_end_prepare_run_summarize() {
        let mut ft = record("ft", 95.0, 50.0, true, Some("freethrow"));
        ft.made = true;

        let records = vec![
            record("rim", 95.0, 50.0, true, None),
            record("three", 70.0, 50.0, true, Some("3pt")),
            record("mid", 80.0, 50.0, false, Some("mid-range")),
            ft,
        ];

        let config = GeometryConfig::default();
        let prepared = prepare_records(records);
        assert_eq!(prepared.len(), 3, "free throws never reach the pipeline");

        let out = pipeline::run(prepared, &config).unwrap();
        assert_eq!(out.rejections.total(), 0);

        let stats = summary(&out.shots);
        assert_eq!(stats.fga, 3);
        assert_eq!(stats.fgm, 2);
        // 2 makes, 1 from three: eFG = 2.5/3, PPS = 5/3
        assert!((stats.efg_pct - 2.5 / 3.0).abs() < 1e-9);
        assert!((stats.pts_per_shot - 5.0 / 3.0).abs() < 1e-9);

        let families = breakdown(&out.shots).unwrap();
        let total_share: f64 = families.iter().map(|f| f.frequency_share).sum();
        assert!((total_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn renderer_payload_fields_survive_serialization() {
        let out =
            pipeline::run(vec![record("s1", 95.0, 50.0, true, None)], &GeometryConfig::default())
                .unwrap();
        let json = serde_json::to_value(&out.shots[0]).unwrap();
        for key in ["x_plot", "y_plot", "dist", "angle", "zone", "is_three", "shot_id"] {
            assert!(json.get(key).is_some(), "missing {key} in renderer payload");
        }
    }
}
