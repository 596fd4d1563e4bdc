use chrono::Utc;
use rand::Rng;

use crate::model::{MatchEvent, MatchRecord, MatchSegment, Side, StatType, TeamEvents};

/// Outcome pool for generated events, ids matching the standard taxonomy.
const OUTCOMES: &[(u32, StatType, &str)] = &[
    (1, StatType::Cross, "Headed on"),
    (2, StatType::Cross, "Controlled"),
    (3, StatType::Cross, "Cleared"),
    (4, StatType::Cross, "Claimed by keeper"),
    (5, StatType::Cross, "Overhit"),
    (6, StatType::Cross, "Behind play"),
    (13, StatType::Cross, "Blocked"),
    (14, StatType::Cross, "Out of play"),
    (15, StatType::Cross, "Intercepted"),
    (7, StatType::Shot, "Blocked"),
    (8, StatType::Shot, "Saved"),
    (9, StatType::Shot, "Goal"),
    (10, StatType::Shot, "Wide"),
    (16, StatType::Shot, "Over the bar"),
    (11, StatType::Corner, "Short"),
    (12, StatType::Corner, "Crossed"),
];

const GOAL_OUTCOME_ID: u32 = 9;

/// Generate a plausible two-half match for the demo CLI and benches.
/// Timestamps include a few minutes of added time so the momentum
/// clamping path gets exercised by real-looking data.
pub fn demo_match(rng: &mut impl Rng) -> MatchRecord {
    let kickoff_ms = Utc::now().timestamp_millis();
    let mut next_id = 1u64;

    let first = random_segment(rng, &mut next_id, SegmentPlan {
        name: "First Half",
        code: "1H",
        start_time_ms: kickoff_ms,
        minute_offset: 0,
        video_offset_secs: Some(30),
        num_events: 28,
    });
    let second = random_segment(rng, &mut next_id, SegmentPlan {
        name: "Second Half",
        code: "2H",
        start_time_ms: kickoff_ms + 60 * 60 * 1000,
        minute_offset: 45,
        video_offset_secs: Some(3_330),
        num_events: 24,
    });

    let segments = vec![first, second];
    let (home_score, away_score) = count_goals(&segments);

    MatchRecord {
        home_team: "Northfield Rovers".to_string(),
        away_team: "Eastbrook Athletic".to_string(),
        home_score,
        away_score,
        segments,
    }
}

struct SegmentPlan {
    name: &'static str,
    code: &'static str,
    start_time_ms: i64,
    minute_offset: u32,
    video_offset_secs: Option<i64>,
    num_events: usize,
}

fn random_segment(rng: &mut impl Rng, next_id: &mut u64, plan: SegmentPlan) -> MatchSegment {
    let duration_mins = 45u32;
    let mut events = TeamEvents::default();

    for _ in 0..plan.num_events {
        let (outcome_id, stat_type, outcome) = OUTCOMES[rng.gen_range(0..OUTCOMES.len())];
        let side = if rng.gen_bool(0.5) { Side::Home } else { Side::Away };
        // Up to three minutes past regulation.
        let elapsed_secs = rng.gen_range(0..(duration_mins as i64 + 3) * 60);
        let event = MatchEvent {
            id: *next_id,
            stat_type,
            outcome_id,
            outcome: outcome.to_string(),
            timestamp_ms: plan.start_time_ms + elapsed_secs * 1000,
            is_goal: outcome_id == GOAL_OUTCOME_ID,
            side,
        };
        *next_id += 1;
        match side {
            Side::Home => events.home.push(event),
            Side::Away => events.away.push(event),
        }
    }
    events.home.sort_by_key(|event| event.timestamp_ms);
    events.away.sort_by_key(|event| event.timestamp_ms);

    MatchSegment {
        name: plan.name.to_string(),
        code: plan.code.to_string(),
        start_time_ms: plan.start_time_ms,
        duration_mins,
        minute_offset: plan.minute_offset,
        video_offset_secs: plan.video_offset_secs,
        events,
    }
}

fn count_goals(segments: &[MatchSegment]) -> (u32, u32) {
    let mut home = 0;
    let mut away = 0;
    for segment in segments {
        home += segment.events.home.iter().filter(|event| event.is_goal).count() as u32;
        away += segment.events.away.iter().filter(|event| event.is_goal).count() as u32;
    }
    (home, away)
}
