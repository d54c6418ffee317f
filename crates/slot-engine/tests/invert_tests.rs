//! Tests for gap inversion: free-only schedule items → busy complement.

use chrono::{NaiveDate, NaiveDateTime};
use slot_engine::{busy_from_free_items, StatusInterval, StatusKind, TimeInterval, WorkWindow};

fn dt(hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn free(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> StatusInterval {
    StatusInterval::new(
        TimeInterval::new(dt(start_hour, start_min), dt(end_hour, end_min)).unwrap(),
        StatusKind::Free,
    )
}

fn window() -> WorkWindow {
    WorkWindow::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 9, 17).unwrap()
}

#[test]
fn free_morning_leaves_busy_afternoon() {
    // Free 09:00-12:00 over window 09:00-17:00 → busy [12:00,17:00).
    let busy = busy_from_free_items(&[free(9, 0, 12, 0)], &window());

    assert_eq!(busy.len(), 1);
    assert_eq!(busy[0].status, StatusKind::Busy);
    assert_eq!(busy[0].interval.start, dt(12, 0));
    assert_eq!(busy[0].interval.end, dt(17, 0));
}

#[test]
fn no_free_items_means_the_whole_window_is_busy() {
    let busy = busy_from_free_items(&[], &window());

    assert_eq!(busy.len(), 1);
    assert_eq!(busy[0].interval.start, dt(9, 0));
    assert_eq!(busy[0].interval.end, dt(17, 0));
}

#[test]
fn free_covering_the_whole_window_means_no_busy_time() {
    assert!(busy_from_free_items(&[free(8, 0, 18, 0)], &window()).is_empty());
}

#[test]
fn gaps_between_free_items_become_busy() {
    // Free 09:00-10:00 and 14:00-17:00 → busy gap [10:00,14:00).
    let busy = busy_from_free_items(&[free(9, 0, 10, 0), free(14, 0, 17, 0)], &window());

    assert_eq!(busy.len(), 1);
    assert_eq!(busy[0].interval.start, dt(10, 0));
    assert_eq!(busy[0].interval.end, dt(14, 0));
}

#[test]
fn overlapping_and_out_of_order_input_does_not_corrupt_output() {
    // Same coverage as the previous test, but reported out of order and
    // with overlapping duplicates.
    let items = vec![
        free(14, 0, 16, 0),
        free(9, 0, 10, 0),
        free(15, 0, 17, 0),
        free(9, 30, 10, 0),
    ];
    let busy = busy_from_free_items(&items, &window());

    assert_eq!(busy.len(), 1);
    assert_eq!(busy[0].interval.start, dt(10, 0));
    assert_eq!(busy[0].interval.end, dt(14, 0));
}

#[test]
fn non_free_items_are_ignored() {
    // A busy-labeled item is meaningless for this source shape.
    let mut items = vec![free(9, 0, 12, 0)];
    items.push(StatusInterval::new(
        TimeInterval::new(dt(12, 0), dt(13, 0)).unwrap(),
        StatusKind::Busy,
    ));

    let busy = busy_from_free_items(&items, &window());

    assert_eq!(busy.len(), 1);
    assert_eq!(busy[0].interval.start, dt(12, 0));
    assert_eq!(busy[0].interval.end, dt(17, 0));
}

#[test]
fn free_time_outside_the_window_is_clipped_away() {
    // Free 06:00-08:00 contributes nothing; the whole window is busy.
    let busy = busy_from_free_items(&[free(6, 0, 8, 0)], &window());

    assert_eq!(busy.len(), 1);
    assert_eq!(busy[0].interval.start, dt(9, 0));
    assert_eq!(busy[0].interval.end, dt(17, 0));
}
