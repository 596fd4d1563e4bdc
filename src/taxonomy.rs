use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::StatType;

/// Reserved catch-all bucket for outcome ids no substat rule claims.
/// Declared implicitly for every stat type; custom tables may not use it
/// as a rule label.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// One substat bucket: the outcome ids that count toward it, and
/// optionally a sibling whose totals replace the category totals as the
/// percentage base (e.g. Goals as a share of On Target).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstatRule {
    pub label: String,
    pub outcome_ids: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculate_total_from: Option<String>,
}

impl SubstatRule {
    pub fn matches(&self, outcome_id: u32) -> bool {
        self.outcome_ids.contains(&outcome_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatEntry {
    pub stat: StatType,
    pub substats: Vec<SubstatRule>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxonomyError {
    #[error("no taxonomy entry for stat type {0:?}")]
    MissingStatType(StatType),
    #[error("duplicate taxonomy entry for stat type {0:?}")]
    DuplicateStatType(StatType),
    #[error("duplicate substat label {label:?} under {stat:?}")]
    DuplicateLabel { stat: StatType, label: String },
    #[error("substat label \"Unknown\" is reserved ({0:?})")]
    ReservedLabel(StatType),
    #[error("substat {label:?} under {stat:?} takes its total from unknown sibling {base:?}")]
    UnknownPercentBase {
        stat: StatType,
        label: String,
        base: String,
    },
}

/// The full outcome taxonomy: one validated entry per stat type, in
/// display order. Built once and read-only for the life of the process.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Taxonomy {
    entries: Vec<StatEntry>,
}

impl Taxonomy {
    /// Validates and takes ownership of a custom table. Every stat type
    /// must appear exactly once, labels must be unique per stat and may
    /// not shadow the reserved Unknown bucket, and every
    /// `calculate_total_from` must name a different sibling.
    pub fn new(entries: Vec<StatEntry>) -> Result<Taxonomy, TaxonomyError> {
        for stat in StatType::ALL {
            match entries.iter().filter(|entry| entry.stat == stat).count() {
                0 => return Err(TaxonomyError::MissingStatType(stat)),
                1 => {}
                _ => return Err(TaxonomyError::DuplicateStatType(stat)),
            }
        }

        for entry in &entries {
            for (i, rule) in entry.substats.iter().enumerate() {
                if rule.label == UNKNOWN_LABEL {
                    return Err(TaxonomyError::ReservedLabel(entry.stat));
                }
                if entry.substats[..i].iter().any(|prev| prev.label == rule.label) {
                    return Err(TaxonomyError::DuplicateLabel {
                        stat: entry.stat,
                        label: rule.label.clone(),
                    });
                }
                if let Some(base) = rule.calculate_total_from.as_deref() {
                    let found = entry
                        .substats
                        .iter()
                        .any(|sibling| sibling.label == base && sibling.label != rule.label);
                    if !found {
                        return Err(TaxonomyError::UnknownPercentBase {
                            stat: entry.stat,
                            label: rule.label.clone(),
                            base: base.to_string(),
                        });
                    }
                }
            }
        }

        Ok(Taxonomy { entries })
    }

    /// The built-in table, ids as recorded by the tracker UI.
    pub fn standard() -> &'static Taxonomy {
        static STANDARD: Lazy<Taxonomy> = Lazy::new(|| {
            Taxonomy::new(standard_entries()).expect("built-in taxonomy must validate")
        });
        &STANDARD
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[StatEntry] {
        &self.entries
    }

    pub fn substats(&self, stat: StatType) -> &[SubstatRule] {
        self.entries
            .iter()
            .find(|entry| entry.stat == stat)
            .map(|entry| entry.substats.as_slice())
            .unwrap_or(&[])
    }
}

fn rule(label: &str, outcome_ids: &[u32]) -> SubstatRule {
    SubstatRule {
        label: label.to_string(),
        outcome_ids: outcome_ids.to_vec(),
        calculate_total_from: None,
    }
}

fn standard_entries() -> Vec<StatEntry> {
    vec![
        StatEntry {
            stat: StatType::Cross,
            substats: vec![
                rule("Won", &[1, 2]),
                rule("Lost", &[3, 4, 13, 15]),
                rule("Missed", &[5, 6, 14]),
            ],
        },
        StatEntry {
            stat: StatType::Shot,
            substats: vec![
                rule("On Target", &[9, 8]),
                SubstatRule {
                    label: "Goals".to_string(),
                    outcome_ids: vec![9],
                    calculate_total_from: Some("On Target".to_string()),
                },
                rule("Blocked", &[7]),
                rule("Off Target", &[10, 16]),
            ],
        },
        StatEntry {
            stat: StatType::Corner,
            substats: vec![rule("Short", &[11]), rule("Crossed", &[12])],
        },
    ]
}
