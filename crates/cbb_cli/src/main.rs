//! # cbb_cli - Shot-Chart Reporting Front End
//!
//! Reads a shot-location CSV export, runs the zone pipeline, and either
//! prints a shooting report or writes the chart layer's JSON payload.

mod ingest;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cbb_core::{
    breakdown, pipeline, prepare_records, split_offense_defense, summary, zone_color, zone_stats,
    GeometryConfig, Shot, ShotFilter,
};

#[derive(Parser)]
#[command(name = "cbb_cli", version, about = "Shot-zone analytics over shot-location exports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a shooting report for a filtered slice of the data
    Summary(RunArgs),
    /// Write the decorated shots and zone statistics as JSON
    Export {
        #[command(flatten)]
        run: RunArgs,
        /// Output path for the JSON payload
        #[arg(short, long)]
        out: PathBuf,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Shot-location CSV export
    #[arg(short, long)]
    csv: PathBuf,

    /// Geometry profile name (falls back to CBB_GEOMETRY_PROFILE, then the
    /// current season)
    #[arg(short, long)]
    geometry: Option<String>,

    /// Restrict to one team's shots; with --defense, to shots against it
    #[arg(short, long)]
    team: Option<String>,

    /// With --team, report the shots opponents took against the team
    #[arg(long, requires = "team")]
    defense: bool,

    #[arg(long = "shooter")]
    shooters: Vec<String>,
    #[arg(long = "half")]
    halves: Vec<String>,
    #[arg(long = "opponent")]
    opponents: Vec<String>,
    #[arg(long = "location")]
    locations: Vec<String>,
    #[arg(long = "quad")]
    quads: Vec<String>,

    /// Exact five-player lineup, comma separated
    #[arg(long, value_delimiter = ',')]
    lineup: Option<Vec<String>>,
    /// Players who must be on the floor
    #[arg(long = "on")]
    on_court: Vec<String>,
    /// Players who must not be on the floor
    #[arg(long = "off")]
    off_court: Vec<String>,
    /// Drop shots from non-D1 games
    #[arg(long)]
    exclude_non_d1: bool,
}

impl RunArgs {
    fn filter(&self) -> ShotFilter {
        ShotFilter {
            shooters: self.shooters.clone(),
            halves: self.halves.clone(),
            opponents: self.opponents.clone(),
            locations: self.locations.clone(),
            quads: self.quads.clone(),
            lineup: self.lineup.clone(),
            on_court: self.on_court.clone(),
            off_court: self.off_court.clone(),
            exclude_non_d1: self.exclude_non_d1,
        }
    }
}

/// JSON payload the chart layer consumes.
#[derive(Serialize)]
struct ExportPayload {
    geometry: GeometryConfig,
    summary: cbb_core::SummaryStats,
    families: Vec<cbb_core::FamilyStats>,
    zones: Vec<ZonePayload>,
    shots: Vec<Shot>,
}

#[derive(Serialize)]
struct ZonePayload {
    #[serde(flatten)]
    stat: cbb_core::ZoneStat,
    color: String,
}

fn load_shots(args: &RunArgs) -> Result<(Vec<Shot>, GeometryConfig)> {
    let config = match &args.geometry {
        Some(name) => GeometryConfig::by_name(name)?,
        None => GeometryConfig::from_env_or_default(),
    };

    let records = ingest::read_csv(&args.csv)?;
    info!(count = records.len(), "loaded shot records");

    let mut records = prepare_records(records);
    if let Some(team) = &args.team {
        let (offense, defense) = split_offense_defense(records, team);
        records = if args.defense { defense } else { offense };
        if records.is_empty() {
            bail!("no shots found for team '{team}'");
        }
    }
    let records = args.filter().apply(records);

    let out = pipeline::run(records, &config)?;
    if out.rejections.total() > 0 {
        info!(
            out_of_bounds = out.rejections.out_of_bounds,
            non_finite = out.rejections.non_finite,
            missing_shot_id = out.rejections.missing_shot_id,
            "rejected malformed records"
        );
    }
    Ok((out.shots, config))
}

fn print_summary(shots: &[Shot], config: &GeometryConfig) -> Result<()> {
    let stats = summary(shots);
    println!("FGM/FGA   {}/{}", stats.fgm, stats.fga);
    println!("FG%       {:.1}%", 100.0 * stats.fg_pct);
    println!("eFG%      {:.1}%", 100.0 * stats.efg_pct);
    println!("PPS       {:.2}", stats.pts_per_shot);
    println!("Assisted  {:.1}%", 100.0 * stats.assisted_pct);

    println!("\n{:<12} {:>4} {:>4} {:>7} {:>7} {:>9}", "Family", "FGM", "FGA", "FG%", "Freq%", "Assisted%");
    for family in breakdown(shots)? {
        println!(
            "{:<12} {:>4} {:>4} {:>6.1}% {:>6.1}% {:>8.1}%",
            family.family.label(),
            family.makes,
            family.attempts,
            100.0 * family.pct,
            family.frequency_share,
            100.0 * family.assisted_pct,
        );
    }

    println!("\n{:<24} {:>4} {:>4} {:>7}  Color", "Zone", "FGM", "FGA", "FG%");
    for zone in zone_stats(shots)? {
        let color = zone_color(zone.pct, zone.zone, &config.pct_ranges)?;
        println!(
            "{:<24} {:>4} {:>4} {:>6.1}%  {}",
            zone.zone.label(),
            zone.makes,
            zone.attempts,
            100.0 * zone.pct,
            color.to_css(),
        );
    }
    Ok(())
}

fn export(shots: Vec<Shot>, config: GeometryConfig, out: &PathBuf) -> Result<()> {
    let zones = zone_stats(&shots)?
        .into_iter()
        .map(|stat| {
            let color = zone_color(stat.pct, stat.zone, &config.pct_ranges)?;
            Ok(ZonePayload { stat, color: color.to_css() })
        })
        .collect::<Result<Vec<_>>>()?;

    let payload = ExportPayload {
        summary: summary(&shots),
        families: breakdown(&shots)?,
        zones,
        shots,
        geometry: config,
    };

    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
    info!(path = %out.display(), "wrote chart payload");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Summary(args) => {
            let (shots, config) = load_shots(&args)?;
            print_summary(&shots, &config)?;
        }
        Commands::Export { run, out } => {
            let (shots, config) = load_shots(&run)?;
            export(shots, config, &out)?;
        }
    }
    Ok(())
}
