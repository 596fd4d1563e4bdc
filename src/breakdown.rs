use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{Side, StatType, TeamEvents};
use crate::taxonomy::{Taxonomy, UNKNOWN_LABEL};

/// Substats shown for Shot on the public page; everything else collapses
/// to bare category totals there.
const PUBLIC_SHOT_SUBSTATS: [&str; 3] = ["On Target", "Goals", "Off Target"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Full,
    Public,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstatLine {
    pub label: String,
    pub home: u32,
    pub away: u32,
    pub home_pc: u32,
    pub away_pc: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLine {
    pub stat: StatType,
    pub home: u32,
    pub away: u32,
    pub substats: Vec<SubstatLine>,
}

/// Categorise a segment's events into per-stat, per-substat counts.
///
/// Every substat the taxonomy declares starts at zero, plus the implicit
/// Unknown bucket. An event always bumps its category's side total; it
/// bumps each substat whose outcome set contains its outcome id, and
/// falls through to Unknown when none do. Home/away order of processing
/// does not affect the result.
pub fn categorise_events(
    events: &TeamEvents,
    taxonomy: &Taxonomy,
    view: ViewMode,
) -> Vec<CategoryLine> {
    let mut categories: Vec<CategoryLine> = taxonomy
        .entries()
        .iter()
        .map(|entry| CategoryLine {
            stat: entry.stat,
            home: 0,
            away: 0,
            substats: entry
                .substats
                .iter()
                .map(|rule| rule.label.as_str())
                .chain([UNKNOWN_LABEL])
                .map(|label| SubstatLine {
                    label: label.to_string(),
                    home: 0,
                    away: 0,
                    home_pc: 0,
                    away_pc: 0,
                })
                .collect(),
        })
        .collect();

    for event in &events.home {
        tally(&mut categories, taxonomy, Side::Home, event.stat_type, event.outcome_id);
    }
    for event in &events.away {
        tally(&mut categories, taxonomy, Side::Away, event.stat_type, event.outcome_id);
    }

    match view {
        ViewMode::Public => {
            for category in &mut categories {
                match category.stat {
                    StatType::Shot => category
                        .substats
                        .retain(|line| PUBLIC_SHOT_SUBSTATS.contains(&line.label.as_str())),
                    StatType::Cross | StatType::Corner => category.substats.clear(),
                }
            }
        }
        ViewMode::Full => {
            // A zero Unknown bucket is noise; a non-zero one is a data-quality
            // signal and stays visible.
            for category in &mut categories {
                category
                    .substats
                    .retain(|line| line.label != UNKNOWN_LABEL || line.home + line.away > 0);
            }
        }
    }

    categories
}

fn tally(
    categories: &mut [CategoryLine],
    taxonomy: &Taxonomy,
    side: Side,
    stat: StatType,
    outcome_id: u32,
) {
    let Some(category) = categories.iter_mut().find(|category| category.stat == stat) else {
        return;
    };
    match side {
        Side::Home => category.home += 1,
        Side::Away => category.away += 1,
    }

    let mut matched = false;
    for rule in taxonomy.substats(stat) {
        if !rule.matches(outcome_id) {
            continue;
        }
        matched = true;
        bump(&mut category.substats, &rule.label, side);
    }
    if !matched {
        debug!("outcome id {outcome_id} has no substat under {stat:?}");
        bump(&mut category.substats, UNKNOWN_LABEL, side);
    }
}

fn bump(substats: &mut [SubstatLine], label: &str, side: Side) {
    if let Some(line) = substats.iter_mut().find(|line| line.label == label) {
        match side {
            Side::Home => line.home += 1,
            Side::Away => line.away += 1,
        }
    }
}

/// Attach `homePc`/`awayPc` to every substat. The base is the category's
/// side total unless the rule names a sibling via `calculate_total_from`,
/// in which case that sibling's counts are the base. A zero base yields 0.
pub fn annotate_percentages(categories: &mut [CategoryLine], taxonomy: &Taxonomy) {
    for category in categories.iter_mut() {
        let sibling_totals: HashMap<String, (u32, u32)> = category
            .substats
            .iter()
            .map(|line| (line.label.clone(), (line.home, line.away)))
            .collect();

        for line in category.substats.iter_mut() {
            let mut home_total = category.home;
            let mut away_total = category.away;
            let base = taxonomy
                .substats(category.stat)
                .iter()
                .find(|rule| rule.label == line.label)
                .and_then(|rule| rule.calculate_total_from.as_deref());
            if let Some(base) = base {
                if let Some(&(home, away)) = sibling_totals.get(base) {
                    home_total = home;
                    away_total = away;
                }
            }
            line.home_pc = percent(line.home, home_total);
            line.away_pc = percent(line.away, away_total);
        }
    }
}

/// Categorise and annotate in one go.
pub fn stat_breakdown(events: &TeamEvents, taxonomy: &Taxonomy, view: ViewMode) -> Vec<CategoryLine> {
    let mut categories = categorise_events(events, taxonomy, view);
    annotate_percentages(&mut categories, taxonomy);
    categories
}

fn percent(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}
