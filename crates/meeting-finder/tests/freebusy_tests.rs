//! Tests for free/busy computation.

use std::collections::BTreeSet;

use meeting_finder::freebusy::{busy_for, free_gaps, merge_busy_periods, open_windows};
use meeting_finder::time_range::{minutes, MINUTES_PER_DAY};
use meeting_finder::{Event, TimeRange};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end, false)
}

fn hours(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> TimeRange {
    range(minutes(start_hour, start_min), minutes(end_hour, end_min))
}

fn people(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn single_busy_period_produces_two_gaps() {
    // Window: 08:00-17:00, busy 10:00-11:00
    let gaps = free_gaps(&[hours(10, 0, 11, 0)], hours(8, 0, 17, 0));

    assert_eq!(gaps, vec![hours(8, 0, 10, 0), hours(11, 0, 17, 0)]);
    assert_eq!(gaps[0].duration(), 120);
    assert_eq!(gaps[1].duration(), 360);
}

#[test]
fn overlapping_periods_merged() {
    // 10:00-11:30 and 11:00-12:00 → 10:00-12:00
    let merged = merge_busy_periods([hours(11, 0, 12, 0), hours(10, 0, 11, 30)]);
    assert_eq!(merged, vec![hours(10, 0, 12, 0)]);
}

#[test]
fn adjacent_periods_merged() {
    let merged = merge_busy_periods([hours(9, 0, 10, 0), hours(10, 0, 11, 0)]);
    assert_eq!(merged, vec![hours(9, 0, 11, 0)]);
}

#[test]
fn nested_period_absorbed() {
    let merged = merge_busy_periods([hours(9, 0, 12, 0), hours(10, 0, 11, 0)]);
    assert_eq!(merged, vec![hours(9, 0, 12, 0)]);
}

#[test]
fn no_busy_entire_window_is_free() {
    let window = hours(8, 0, 17, 0);
    assert_eq!(free_gaps(&[], window), vec![window]);
}

#[test]
fn busy_filling_window_no_gaps() {
    let window = hours(9, 0, 12, 0);
    assert!(free_gaps(&[hours(8, 0, 13, 0)], window).is_empty());
}

#[test]
fn multiple_gaps_between_periods() {
    let busy = [hours(9, 0, 10, 0), hours(12, 0, 13, 0), hours(15, 0, 16, 0)];
    let gaps = free_gaps(&busy, hours(8, 0, 18, 0));

    let durations: Vec<u32> = gaps.iter().map(TimeRange::duration).collect();
    assert_eq!(durations, vec![60, 120, 120, 120]);
}

#[test]
fn busy_for_only_counts_named_people() {
    let events = vec![
        Event::new("standup", hours(9, 0, 9, 30), ["A", "B"]),
        Event::new("lunch", hours(12, 0, 13, 0), ["C"]),
        Event::new("review", hours(9, 15, 10, 0), ["B"]),
    ];
    assert_eq!(busy_for(&events, &people(&["B"])), vec![hours(9, 0, 10, 0)]);
    assert!(busy_for(&events, &people(&["D"])).is_empty());
}

#[test]
fn open_windows_match_free_gaps_for_short_meetings() {
    let events = vec![
        Event::new("a", hours(9, 0, 10, 0), ["A"]),
        Event::new("b", hours(9, 30, 11, 0), ["B"]),
        Event::new("c", hours(14, 0, 15, 0), ["A"]),
        Event::new("x", hours(12, 0, 13, 0), ["X"]),
    ];
    let required = people(&["A", "B"]);

    let open = open_windows(&events, &required, 1);
    let gaps = free_gaps(&busy_for(&events, &required), TimeRange::WHOLE_DAY);
    assert_eq!(open, gaps);
}

#[test]
fn open_windows_drop_pieces_too_short() {
    let events = vec![
        Event::new("a", hours(0, 20, 9, 0), ["A"]),
        Event::new("b", hours(9, 10, 23, 0), ["A"]),
    ];
    let open = open_windows(&events, &people(&["A"]), 30);
    assert_eq!(open, vec![range(minutes(23, 0), MINUTES_PER_DAY)]);
}
