//! Decode a compressed availability view into coalesced status runs.
//!
//! The remote service reports other mailboxes' days as one character per
//! fixed-size time bucket (`'0'` free, `'1'` tentative, `'2'` busy, `'3'`
//! out of office, `'4'` working elsewhere). Contiguous buckets sharing the
//! same non-free status are merged into a single run; free buckets close
//! the open run and never start one.

use crate::interval::{StatusInterval, StatusKind, TimeInterval};
use chrono::{Duration, NaiveDateTime};

/// Bucket width used by the remote service unless the caller asked for a
/// different granularity.
pub const DEFAULT_BUCKET_MINUTES: u32 = 30;

/// Decode `code` into run-length-merged occupied blocks.
///
/// Bucket 0 starts at `view_start`; each character covers `bucket_minutes`.
/// Unrecognized characters decode to [`StatusKind::Unknown`] and participate
/// in merging like any other non-free status — an unknown run never merges
/// with a differently-typed neighbor. Runs come out in input order, which is
/// already start-ascending.
pub fn decode_availability_view(
    code: &str,
    view_start: NaiveDateTime,
    bucket_minutes: u32,
) -> Vec<StatusInterval> {
    let bucket = Duration::minutes(i64::from(bucket_minutes));
    let mut runs = Vec::new();
    let mut open: Option<(StatusKind, NaiveDateTime, NaiveDateTime)> = None;
    let mut cursor = view_start;

    for c in code.chars() {
        let status = StatusKind::from_view_code(c);
        let bucket_end = cursor + bucket;

        open = match open {
            // Same non-free status: extend the current run.
            Some((run_status, run_start, _)) if run_status == status => {
                Some((run_status, run_start, bucket_end))
            }
            // Status change: close the run, then open a new one unless the
            // bucket is free.
            Some((run_status, run_start, run_end)) => {
                runs.push(StatusInterval::new(
                    TimeInterval {
                        start: run_start,
                        end: run_end,
                    },
                    run_status,
                ));
                if status.is_free() {
                    None
                } else {
                    Some((status, cursor, bucket_end))
                }
            }
            None if status.is_free() => None,
            None => Some((status, cursor, bucket_end)),
        };

        cursor = bucket_end;
    }

    // Flush a trailing open run.
    if let Some((run_status, run_start, run_end)) = open {
        runs.push(StatusInterval::new(
            TimeInterval {
                start: run_start,
                end: run_end,
            },
            run_status,
        ));
    }

    runs
}
