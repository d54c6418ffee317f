//! Free-slot extraction: busy-labeled items → complementary free slots.
//!
//! Structural dual of [`crate::invert`]: anything not fully free counts as
//! occupied, and the free view is the complement of the occupied coverage
//! within the work window.

use crate::interval::{StatusInterval, StatusKind, TimeInterval, WorkWindow};

/// Compute the free slots left by busy-labeled intervals within the work
/// window.
///
/// Any non-free status (tentative, busy, out of office, working elsewhere,
/// unknown) blocks a slot. Inputs are clamped to the window, stably sorted,
/// and swept with a cursor that never retreats, so overlapping busy
/// intervals cannot produce a spurious free gap between them. The result
/// is a maximal, non-overlapping, start-ascending partition of the window
/// time not covered by any busy interval.
pub fn free_slots(busy_items: &[StatusInterval], window: &WorkWindow) -> Vec<StatusInterval> {
    let bounds = window.bounds();

    let mut busy: Vec<TimeInterval> = busy_items
        .iter()
        .filter(|item| !item.status.is_free())
        .filter_map(|item| item.interval.clamp(&bounds))
        .collect();
    busy.sort_by_key(|interval| interval.start);

    let mut free = Vec::new();
    let mut cursor = bounds.start;

    for interval in &busy {
        if interval.start > cursor {
            free.push(StatusInterval::new(
                TimeInterval {
                    start: cursor,
                    end: interval.start,
                },
                StatusKind::Free,
            ));
        }
        cursor = cursor.max(interval.end);
    }

    // Trailing free slot after the last busy interval.
    if cursor < bounds.end {
        free.push(StatusInterval::new(
            TimeInterval {
                start: cursor,
                end: bounds.end,
            },
            StatusKind::Free,
        ));
    }

    free
}
