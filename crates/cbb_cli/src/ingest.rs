//! CSV ingestion for shot-location exports.
//!
//! Maps the feed's column names (`team_name`, `period`, `Quad`, `loc`, a
//! Python-list-formatted `lineup`) onto [`ShotRecord`]s. All semantic
//! interpretation happens downstream in `cbb_core`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use cbb_core::ShotRecord;

#[derive(Debug, Deserialize)]
struct CsvShot {
    shot_id: String,
    #[serde(rename = "team_name")]
    team: String,
    shooter: String,
    x: f32,
    y: f32,
    result: String,
    period: String,
    #[serde(default)]
    opponent: Option<String>,
    #[serde(rename = "Quad", default)]
    quad: Option<String>,
    #[serde(rename = "loc", default)]
    location: Option<String>,
    #[serde(default)]
    shot_range: Option<String>,
    #[serde(default)]
    lineup: Option<String>,
    #[serde(default)]
    assisted: Option<f64>,
}

impl From<CsvShot> for ShotRecord {
    fn from(row: CsvShot) -> Self {
        ShotRecord {
            shot_id: row.shot_id,
            team: row.team,
            shooter: row.shooter,
            raw_x: row.x,
            raw_y: row.y,
            made: row.result.eq_ignore_ascii_case("made"),
            half: row.period,
            opponent: row.opponent.filter(|s| !s.trim().is_empty()),
            quad: row.quad.filter(|s| !s.trim().is_empty()),
            location: row.location.filter(|s| !s.trim().is_empty()),
            shot_range: row.shot_range.filter(|s| !s.trim().is_empty()),
            lineup: row.lineup.as_deref().and_then(parse_lineup),
            assisted: row.assisted.map(|v| v != 0.0),
        }
    }
}

/// Read a shot-location CSV into raw records.
pub fn read_csv(path: &Path) -> Result<Vec<ShotRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening shot CSV {}", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize::<CsvShot>() {
        let row = row.with_context(|| format!("parsing shot CSV {}", path.display()))?;
        records.push(ShotRecord::from(row));
    }
    Ok(records)
}

/// Parse the feed's Python-list lineup string, e.g.
/// `"['A. Guard', 'B. Wing', ...]"`. Returns `None` for blanks or anything
/// that does not contain at least one player name.
fn parse_lineup(raw: &str) -> Option<Vec<String>> {
    let inner = raw.trim().strip_prefix('[')?.strip_suffix(']')?;
    let players: Vec<String> = inner
        .split(',')
        .map(|p| p.trim().trim_matches(|c| c == '\'' || c == '"').to_string())
        .filter(|p| !p.is_empty())
        .collect();
    if players.is_empty() {
        None
    } else {
        Some(players)
    }
}
