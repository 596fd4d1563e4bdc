use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Side;

/// One pre-grouped row from the aggregation query: a count of events for
/// a stat category and side, optionally attributed to a substat bucket
/// and a specific outcome within it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRow {
    pub stat: String,
    pub side: Side,
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub bucket_collapsed: bool,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideCount {
    pub home: u32,
    pub away: u32,
}

impl SideCount {
    pub fn add(&mut self, side: Side, count: u32) {
        match side {
            Side::Home => self.home += count,
            Side::Away => self.away += count,
        }
    }

    fn merge(&mut self, other: SideCount) {
        self.home += other.home;
        self.away += other.away;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BucketNode {
    #[serde(flatten)]
    pub total: SideCount,
    pub substats: BTreeMap<String, SideCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatNode {
    pub total: SideCount,
    pub buckets: BTreeMap<String, BucketNode>,
}

pub type AggregateTree = BTreeMap<String, StatNode>;

/// Fold flat grouped rows into the stat -> bucket -> substat tree.
///
/// Every row feeds its stat's side total. Rows with a bucket feed that
/// bucket's total too; the outcome becomes a named substat only when it
/// adds information (present, non-empty, different from the bucket
/// label) and the bucket is not collapsed. Rows with no bucket or no
/// outcome contribute to totals alone.
pub fn reduce_rows(rows: &[AggregateRow]) -> AggregateTree {
    let mut tree = AggregateTree::new();
    for row in rows {
        let stat = tree.entry(row.stat.clone()).or_default();
        stat.total.add(row.side, row.count);

        let Some(bucket_label) = row.bucket.as_deref() else {
            continue;
        };
        let bucket = stat.buckets.entry(bucket_label.to_string()).or_default();
        bucket.total.add(row.side, row.count);

        if row.bucket_collapsed {
            continue;
        }
        let Some(outcome) = row.outcome.as_deref() else {
            continue;
        };
        if outcome.is_empty() || outcome == bucket_label {
            continue;
        }
        bucket
            .substats
            .entry(outcome.to_string())
            .or_default()
            .add(row.side, row.count);
    }
    tree
}

/// Sum per-segment trees into one overall tree. Any key present in any
/// input is present in the output, zero-initialized where an input lacks
/// it.
pub fn merge_trees<'a, I>(trees: I) -> AggregateTree
where
    I: IntoIterator<Item = &'a AggregateTree>,
{
    let mut out = AggregateTree::new();
    for tree in trees {
        for (stat_label, stat) in tree {
            let merged = out.entry(stat_label.clone()).or_default();
            merged.total.merge(stat.total);
            for (bucket_label, bucket) in &stat.buckets {
                let merged_bucket = merged.buckets.entry(bucket_label.clone()).or_default();
                merged_bucket.total.merge(bucket.total);
                for (outcome_label, count) in &bucket.substats {
                    merged_bucket
                        .substats
                        .entry(outcome_label.clone())
                        .or_default()
                        .merge(*count);
                }
            }
        }
    }
    out
}
