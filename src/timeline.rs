use serde::{Deserialize, Serialize};

use crate::model::{MatchSegment, Side, StatType};

/// Playback starts this many seconds before the event itself.
pub const VIDEO_LOOKBACK_SECS: i64 = 5;

/// One flat event row, pre-ordered by segment start time then event
/// time. The ordering is the caller's contract: grouping follows the
/// row order, nothing is re-sorted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRow {
    pub segment_id: u64,
    pub segment_name: String,
    #[serde(default)]
    pub minute_offset: u32,
    #[serde(default)]
    pub video_offset_secs: Option<i64>,
    pub side: Side,
    pub elapsed_secs: i64,
    pub stat: StatType,
    pub outcome_id: u32,
    pub outcome: String,
    #[serde(default)]
    pub is_goal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub side: Side,
    pub elapsed_time: String,
    pub video_time: Option<String>,
    pub stat: StatType,
    pub is_goal: bool,
    pub outcome: String,
    pub outcome_id: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSegment {
    pub name: String,
    pub video_start_time: Option<String>,
    pub entries: Vec<TimelineEntry>,
}

/// Render elapsed seconds as zero-padded `MM:SS`, shifted by the
/// segment's minute offset. Minutes are not wrapped into hours. A
/// negative adjusted total (the video lookback near a segment start)
/// clamps to zero and renders `"00:00"`.
pub fn format_timestamp(total_secs: i64, minute_offset: u32) -> String {
    let adjusted = (total_secs + minute_offset as i64 * 60).max(0);
    format!("{:02}:{:02}", adjusted / 60, adjusted % 60)
}

/// Group ordered rows into displayable timeline segments. A new segment
/// starts exactly where the segment id changes from the previous row.
pub fn build_timeline(rows: &[TimelineRow]) -> Vec<TimelineSegment> {
    let mut segments: Vec<TimelineSegment> = Vec::new();
    let mut current: Option<u64> = None;

    for row in rows {
        if current != Some(row.segment_id) {
            current = Some(row.segment_id);
            segments.push(TimelineSegment {
                name: row.segment_name.clone(),
                video_start_time: row
                    .video_offset_secs
                    .map(|offset| format_timestamp(offset - VIDEO_LOOKBACK_SECS, row.minute_offset)),
                entries: Vec::new(),
            });
        }

        let entry = TimelineEntry {
            side: row.side,
            elapsed_time: format_timestamp(row.elapsed_secs, row.minute_offset),
            video_time: row.video_offset_secs.map(|offset| {
                format_timestamp(
                    row.elapsed_secs + offset - VIDEO_LOOKBACK_SECS,
                    row.minute_offset,
                )
            }),
            stat: row.stat,
            is_goal: row.is_goal,
            outcome: row.outcome.clone(),
            outcome_id: row.outcome_id,
        };
        if let Some(segment) = segments.last_mut() {
            segment.entries.push(entry);
        }
    }

    segments
}

/// Flatten in-memory segments into ordered timeline rows: segments in
/// the order given, each segment's home and away events interleaved
/// chronologically.
pub fn rows_from_segments(segments: &[MatchSegment]) -> Vec<TimelineRow> {
    let mut rows = Vec::new();
    for (index, segment) in segments.iter().enumerate() {
        for event in segment.events.interleaved() {
            rows.push(TimelineRow {
                segment_id: index as u64,
                segment_name: segment.name.clone(),
                minute_offset: segment.minute_offset,
                video_offset_secs: segment.video_offset_secs,
                side: event.side,
                elapsed_secs: (event.timestamp_ms - segment.start_time_ms) / 1000,
                stat: event.stat_type,
                outcome_id: event.outcome_id,
                outcome: event.outcome.clone(),
                is_goal: event.is_goal,
            });
        }
    }
    rows
}
