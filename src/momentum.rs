use serde::{Deserialize, Serialize};

use crate::model::{MatchSegment, StatType};

/// Chart resolution: one bucket per five minutes of play.
pub const BUCKET_MINS: u32 = 5;

/// Signed contribution of each stat type to the momentum score. Home
/// events add the weight, away events subtract it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MomentumWeights {
    pub shot: f64,
    pub cross: f64,
    pub corner: f64,
}

impl Default for MomentumWeights {
    fn default() -> Self {
        Self {
            shot: 1.0,
            cross: 1.0,
            corner: 1.0,
        }
    }
}

impl MomentumWeights {
    pub fn weight(&self, stat: StatType) -> f64 {
        match stat {
            StatType::Shot => self.shot,
            StatType::Cross => self.cross,
            StatType::Corner => self.corner,
        }
    }
}

/// Per-bucket event counts for one side, by stat type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketCounts {
    pub shot: u32,
    pub cross: u32,
    pub corner: u32,
}

impl BucketCounts {
    fn bump(&mut self, stat: StatType) {
        match stat {
            StatType::Shot => self.shot += 1,
            StatType::Cross => self.cross += 1,
            StatType::Corner => self.corner += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.shot + self.cross + self.corner
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSeries {
    pub name: String,
    pub code: String,
    pub momentum: Vec<f64>,
    pub home_counts: Vec<BucketCounts>,
    pub away_counts: Vec<BucketCounts>,
    pub home_goals: Vec<u32>,
    pub away_goals: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentumSeries {
    pub segments: Vec<SegmentSeries>,
    /// Largest absolute momentum score across every bucket of every
    /// segment; the chart scales its y-axis to this.
    pub max_momentum: f64,
    /// Largest combined (shot+cross+corner) count either side reaches in
    /// any single bucket.
    pub max_volume: u32,
}

/// Build the per-segment momentum and volume series.
///
/// Each segment gets `duration / 5` buckets. Events are placed by whole
/// elapsed minutes; anything past the end of regulation (injury or added
/// time) lands in the final bucket. A segment shorter than one bucket
/// yields an empty series and its events are not charted.
pub fn momentum_series(segments: &[MatchSegment], weights: MomentumWeights) -> MomentumSeries {
    let mut out = MomentumSeries {
        segments: Vec::with_capacity(segments.len()),
        max_momentum: 0.0,
        max_volume: 0,
    };

    for segment in segments {
        let num_buckets = (segment.duration_mins / BUCKET_MINS) as usize;
        let mut series = SegmentSeries {
            name: segment.name.clone(),
            code: segment.code.clone(),
            momentum: vec![0.0; num_buckets],
            home_counts: vec![BucketCounts::default(); num_buckets],
            away_counts: vec![BucketCounts::default(); num_buckets],
            home_goals: vec![0; num_buckets],
            away_goals: vec![0; num_buckets],
        };

        if num_buckets > 0 {
            for event in &segment.events.home {
                let index = bucket_index(event.timestamp_ms, segment.start_time_ms, num_buckets);
                series.momentum[index] += weights.weight(event.stat_type);
                series.home_counts[index].bump(event.stat_type);
                if event.is_goal {
                    series.home_goals[index] += 1;
                }
            }
            for event in &segment.events.away {
                let index = bucket_index(event.timestamp_ms, segment.start_time_ms, num_buckets);
                series.momentum[index] -= weights.weight(event.stat_type);
                series.away_counts[index].bump(event.stat_type);
                if event.is_goal {
                    series.away_goals[index] += 1;
                }
            }
        }

        for i in 0..num_buckets {
            out.max_momentum = out.max_momentum.max(series.momentum[i].abs());
            out.max_volume = out
                .max_volume
                .max(series.home_counts[i].total())
                .max(series.away_counts[i].total());
        }

        out.segments.push(series);
    }

    out
}

fn bucket_index(timestamp_ms: i64, start_time_ms: i64, num_buckets: usize) -> usize {
    let elapsed_mins = (timestamp_ms - start_time_ms).max(0) / 1000 / 60;
    let index = (elapsed_mins / BUCKET_MINS as i64) as usize;
    index.min(num_buckets - 1)
}
