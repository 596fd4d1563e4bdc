use matchtrack::model::{MatchEvent, MatchSegment, Side, StatType, TeamEvents};
use matchtrack::momentum::{MomentumWeights, momentum_series};

const START_MS: i64 = 1_700_000_000_000;

fn event_at(minute: i64, stat_type: StatType, side: Side, is_goal: bool) -> MatchEvent {
    MatchEvent {
        id: minute as u64 + 1,
        stat_type,
        outcome_id: 0,
        outcome: String::new(),
        timestamp_ms: START_MS + minute * 60 * 1000,
        is_goal,
        side,
    }
}

fn segment(duration_mins: u32, home: Vec<MatchEvent>, away: Vec<MatchEvent>) -> MatchSegment {
    MatchSegment {
        name: "First Half".to_string(),
        code: "1H".to_string(),
        start_time_ms: START_MS,
        duration_mins,
        minute_offset: 0,
        video_offset_secs: None,
        events: TeamEvents { home, away },
    }
}

#[test]
fn bucket_count_is_duration_over_five() {
    let series = momentum_series(
        &[segment(45, Vec::new(), Vec::new()), segment(15, Vec::new(), Vec::new())],
        MomentumWeights::default(),
    );
    assert_eq!(series.segments[0].momentum.len(), 9);
    assert_eq!(series.segments[1].momentum.len(), 3);
}

#[test]
fn home_adds_and_away_subtracts_weighted_contributions() {
    let weights = MomentumWeights {
        shot: 3.0,
        cross: 2.0,
        corner: 1.0,
    };
    let seg = segment(
        45,
        vec![
            event_at(1, StatType::Shot, Side::Home, false),
            event_at(2, StatType::Corner, Side::Home, false),
        ],
        vec![event_at(3, StatType::Cross, Side::Away, false)],
    );
    let series = momentum_series(&[seg], weights);

    // Bucket 0: +3 (shot) + 1 (corner) - 2 (cross).
    assert_eq!(series.segments[0].momentum[0], 2.0);
    assert!(series.segments[0].momentum[1..].iter().all(|score| *score == 0.0));
}

#[test]
fn added_time_clamps_into_the_final_bucket() {
    let seg = segment(
        45,
        vec![
            event_at(45, StatType::Shot, Side::Home, false),
            event_at(49, StatType::Shot, Side::Home, false),
        ],
        Vec::new(),
    );
    let series = momentum_series(&[seg], MomentumWeights::default());

    let momentum = &series.segments[0].momentum;
    assert_eq!(momentum.len(), 9);
    assert_eq!(momentum[8], 2.0);
    assert_eq!(series.segments[0].home_counts[8].shot, 2);
}

#[test]
fn counts_are_per_bucket_and_per_side() {
    let seg = segment(
        45,
        vec![
            event_at(7, StatType::Shot, Side::Home, false),
            event_at(8, StatType::Cross, Side::Home, false),
        ],
        vec![event_at(23, StatType::Corner, Side::Away, false)],
    );
    let series = momentum_series(&[seg], MomentumWeights::default());
    let seg_series = &series.segments[0];

    assert_eq!(seg_series.home_counts[1].shot, 1);
    assert_eq!(seg_series.home_counts[1].cross, 1);
    assert_eq!(seg_series.away_counts[4].corner, 1);

    // No spill into sibling buckets or the other side's array.
    for (i, counts) in seg_series.home_counts.iter().enumerate() {
        if i != 1 {
            assert_eq!(counts.total(), 0, "home bucket {i} should be empty");
        }
    }
    for (i, counts) in seg_series.away_counts.iter().enumerate() {
        if i != 4 {
            assert_eq!(counts.total(), 0, "away bucket {i} should be empty");
        }
    }
}

#[test]
fn goals_tally_per_bucket_per_side() {
    let seg = segment(
        45,
        vec![event_at(11, StatType::Shot, Side::Home, true)],
        vec![
            event_at(11, StatType::Shot, Side::Away, true),
            event_at(12, StatType::Shot, Side::Away, true),
        ],
    );
    let series = momentum_series(&[seg], MomentumWeights::default());

    assert_eq!(series.segments[0].home_goals[2], 1);
    assert_eq!(series.segments[0].away_goals[2], 2);
    assert_eq!(series.segments[0].home_goals.iter().sum::<u32>(), 1);
}

#[test]
fn short_segment_yields_no_buckets() {
    let seg = MatchSegment {
        duration_mins: 4,
        ..segment(45, vec![event_at(1, StatType::Shot, Side::Home, false)], Vec::new())
    };
    let series = momentum_series(&[seg], MomentumWeights::default());

    assert!(series.segments[0].momentum.is_empty());
    assert!(series.segments[0].home_counts.is_empty());
    assert_eq!(series.max_momentum, 0.0);
    assert_eq!(series.max_volume, 0);
}

#[test]
fn maxima_track_across_all_segments() {
    let first = segment(
        45,
        vec![
            event_at(3, StatType::Shot, Side::Home, false),
            event_at(4, StatType::Cross, Side::Home, false),
        ],
        Vec::new(),
    );
    let second = MatchSegment {
        name: "Second Half".to_string(),
        code: "2H".to_string(),
        ..segment(
            45,
            Vec::new(),
            vec![
                event_at(10, StatType::Shot, Side::Away, false),
                event_at(11, StatType::Shot, Side::Away, false),
                event_at(12, StatType::Corner, Side::Away, false),
            ],
        )
    };
    let series = momentum_series(&[first, second], MomentumWeights::default());

    // Second half bucket 2 holds three away events: momentum -3, volume 3.
    assert_eq!(series.max_momentum, 3.0);
    assert_eq!(series.max_volume, 3);
}
