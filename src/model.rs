use serde::{Deserialize, Serialize};

/// Name given to the derived whole-match segment.
pub const OVERALL_NAME: &str = "Overall";
pub const OVERALL_CODE: &str = "ALL";
const OVERALL_DURATION_MINS: u32 = 45;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    Shot,
    Cross,
    Corner,
}

impl StatType {
    pub const ALL: [StatType; 3] = [StatType::Shot, StatType::Cross, StatType::Corner];

    pub fn label(self) -> &'static str {
        match self {
            StatType::Shot => "Shot",
            StatType::Cross => "Cross",
            StatType::Corner => "Corner",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// One recorded action. Created by the persistence collaborator and never
/// mutated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEvent {
    pub id: u64,
    pub stat_type: StatType,
    pub outcome_id: u32,
    pub outcome: String,
    /// Absolute timestamp in milliseconds, on the same clock as the
    /// owning segment's start time.
    pub timestamp_ms: i64,
    #[serde(default)]
    pub is_goal: bool,
    pub side: Side,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamEvents {
    pub home: Vec<MatchEvent>,
    pub away: Vec<MatchEvent>,
}

impl TeamEvents {
    pub fn len(&self) -> usize {
        self.home.len() + self.away.len()
    }

    pub fn is_empty(&self) -> bool {
        self.home.is_empty() && self.away.is_empty()
    }

    /// Both sides merged into one chronological list. Stable for equal
    /// timestamps, home entries first.
    pub fn interleaved(&self) -> Vec<&MatchEvent> {
        let mut combined: Vec<&MatchEvent> = self.home.iter().chain(self.away.iter()).collect();
        combined.sort_by_key(|event| event.timestamp_ms);
        combined
    }
}

/// A contiguous period of play. Every event timestamp is expected to be
/// >= `start_time_ms`; that ordering is the persistence collaborator's
/// contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSegment {
    pub name: String,
    pub code: String,
    pub start_time_ms: i64,
    pub duration_mins: u32,
    /// Where the match clock stands at segment start (45 for a second half).
    #[serde(default)]
    pub minute_offset: u32,
    #[serde(default)]
    pub video_offset_secs: Option<i64>,
    pub events: TeamEvents,
}

impl MatchSegment {
    /// Derived whole-match segment: all real segments' events concatenated,
    /// start time forced to 0 and duration fixed at 45. Never persisted.
    pub fn overall(segments: &[MatchSegment]) -> MatchSegment {
        let mut events = TeamEvents::default();
        for segment in segments {
            events.home.extend(segment.events.home.iter().cloned());
            events.away.extend(segment.events.away.iter().cloned());
        }
        MatchSegment {
            name: OVERALL_NAME.to_string(),
            code: OVERALL_CODE.to_string(),
            start_time_ms: 0,
            duration_mins: OVERALL_DURATION_MINS,
            minute_offset: 0,
            video_offset_secs: None,
            events,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub home_score: u32,
    #[serde(default)]
    pub away_score: u32,
    pub segments: Vec<MatchSegment>,
}
