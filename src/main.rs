use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use rayon::prelude::*;
use serde::Serialize;

use matchtrack::breakdown::{self, CategoryLine, ViewMode};
use matchtrack::fixture_feed;
use matchtrack::model::{MatchRecord, MatchSegment};
use matchtrack::momentum::{self, MomentumSeries, MomentumWeights};
use matchtrack::taxonomy::{StatEntry, Taxonomy};
use matchtrack::timeline::{self, TimelineSegment};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SegmentStats {
    name: String,
    code: String,
    categories: Vec<CategoryLine>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchReport {
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
    segments: Vec<SegmentStats>,
    overall: Vec<CategoryLine>,
    momentum: MomentumSeries,
    timeline: Vec<TimelineSegment>,
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    env_logger::init();

    let view = match env::var("VIEW_MODE")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "public" => ViewMode::Public,
        _ => ViewMode::Full,
    };
    let weights = MomentumWeights {
        shot: env_weight("MOMENTUM_SHOT_WEIGHT", 1.0),
        cross: env_weight("MOMENTUM_CROSS_WEIGHT", 1.0),
        corner: env_weight("MOMENTUM_CORNER_WEIGHT", 1.0),
    };
    let custom_taxonomy = load_taxonomy()?;
    let taxonomy = custom_taxonomy.as_ref().unwrap_or_else(|| Taxonomy::standard());

    let paths: Vec<PathBuf> = env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        info!("no input files given, reporting on a generated demo match");
        let record = fixture_feed::demo_match(&mut rand::thread_rng());
        print_report(&build_report(&record, taxonomy, view, weights))?;
        return Ok(());
    }

    let reports: Vec<Result<MatchReport>> = paths
        .par_iter()
        .map(|path| {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read match file {}", path.display()))?;
            let record: MatchRecord = serde_json::from_str(&raw)
                .with_context(|| format!("parse match file {}", path.display()))?;
            Ok(build_report(&record, taxonomy, view, weights))
        })
        .collect();

    for report in reports {
        print_report(&report?)?;
    }
    Ok(())
}

fn build_report(
    record: &MatchRecord,
    taxonomy: &Taxonomy,
    view: ViewMode,
    weights: MomentumWeights,
) -> MatchReport {
    let overall = MatchSegment::overall(&record.segments);
    MatchReport {
        home_team: record.home_team.clone(),
        away_team: record.away_team.clone(),
        home_score: record.home_score,
        away_score: record.away_score,
        segments: record
            .segments
            .iter()
            .map(|segment| SegmentStats {
                name: segment.name.clone(),
                code: segment.code.clone(),
                categories: breakdown::stat_breakdown(&segment.events, taxonomy, view),
            })
            .collect(),
        overall: breakdown::stat_breakdown(&overall.events, taxonomy, view),
        momentum: momentum::momentum_series(&record.segments, weights),
        timeline: timeline::build_timeline(&timeline::rows_from_segments(&record.segments)),
    }
}

fn print_report(report: &MatchReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    println!("{json}");
    Ok(())
}

fn env_weight(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|val| val.parse::<f64>().ok())
        .unwrap_or(default)
}

fn load_taxonomy() -> Result<Option<Taxonomy>> {
    let Ok(path) = env::var("TAXONOMY_FILE") else {
        return Ok(None);
    };
    if path.trim().is_empty() {
        return Ok(None);
    }
    let raw = fs::read_to_string(&path).with_context(|| format!("read taxonomy file {path}"))?;
    let entries: Vec<StatEntry> =
        serde_json::from_str(&raw).with_context(|| format!("parse taxonomy file {path}"))?;
    Ok(Some(Taxonomy::new(entries)?))
}
