//! Gap inversion: free-labeled items → complementary busy intervals.
//!
//! Some endpoints only report when a mailbox is free, never when it is
//! busy. The busy view is the complement of the reported free time within
//! the work window.

use crate::interval::{StatusInterval, StatusKind, TimeInterval, WorkWindow};

/// Compute the busy complement of free-labeled schedule items within the
/// work window.
///
/// Items whose status is not free are dropped (only free reports are
/// meaningful for this source shape). The rest are clamped to the window,
/// stably sorted, and swept with a forward-only cursor; every gap the
/// cursor crosses comes out as a `Busy` interval. Overlapping or
/// out-of-order input cannot corrupt the output.
pub fn busy_from_free_items(
    free_items: &[StatusInterval],
    window: &WorkWindow,
) -> Vec<StatusInterval> {
    let bounds = window.bounds();

    let mut free: Vec<TimeInterval> = free_items
        .iter()
        .filter(|item| item.status.is_free())
        .filter_map(|item| item.interval.clamp(&bounds))
        .collect();
    free.sort_by_key(|interval| interval.start);

    let mut busy = Vec::new();
    let mut cursor = bounds.start;

    for interval in &free {
        if interval.start > cursor {
            busy.push(StatusInterval::new(
                TimeInterval {
                    start: cursor,
                    end: interval.start,
                },
                StatusKind::Busy,
            ));
        }
        cursor = cursor.max(interval.end);
    }

    // Trailing gap after the last free interval.
    if cursor < bounds.end {
        busy.push(StatusInterval::new(
            TimeInterval {
                start: cursor,
                end: bounds.end,
            },
            StatusKind::Busy,
        ));
    }

    busy
}
