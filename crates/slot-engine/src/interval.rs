//! Half-open time intervals and the status vocabulary attached to them.
//!
//! All timestamps are timezone-naive wall-clock instants within one logical
//! day; multi-timezone reconciliation is out of scope. Intervals are
//! half-open `[start, end)` and `start < end` is enforced at construction.

use crate::error::{EngineError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// A half-open wall-clock interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeInterval {
    /// Build an interval, rejecting empty or inverted ranges.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start >= end {
            return Err(EngineError::EmptyInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    /// Adjacent intervals (one ends exactly where the other starts) do not.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Intersect with `bound`. Returns `None` when the intersection is
    /// empty. Re-clamping an already-clamped interval to the same bound
    /// yields the identical interval.
    pub fn clamp(&self, bound: &TimeInterval) -> Option<TimeInterval> {
        let start = self.start.max(bound.start);
        let end = self.end.min(bound.end);
        if start >= end {
            return None;
        }
        Some(TimeInterval { start, end })
    }

    /// Duration in whole minutes, rounded to the nearest minute.
    pub fn duration_minutes(&self) -> i64 {
        let millis = (self.end - self.start).num_milliseconds();
        (millis as f64 / 60_000.0).round() as i64
    }
}

/// Calendar occupancy status. Any kind other than `Free` blocks a free
/// slot; the distinction between non-Free kinds only matters for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusKind {
    #[serde(rename = "free")]
    Free,
    #[serde(rename = "tentative")]
    Tentative,
    #[serde(rename = "busy")]
    Busy,
    #[serde(rename = "oof")]
    OutOfOffice,
    #[serde(rename = "workingElsewhere")]
    WorkingElsewhere,
    #[serde(rename = "unknown")]
    Unknown,
}

impl StatusKind {
    /// Parse the wire name used by the remote service. Anything
    /// unrecognized maps to `Unknown`, which counts as occupied.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "free" => StatusKind::Free,
            "tentative" => StatusKind::Tentative,
            "busy" => StatusKind::Busy,
            "oof" => StatusKind::OutOfOffice,
            "workingElsewhere" => StatusKind::WorkingElsewhere,
            _ => StatusKind::Unknown,
        }
    }

    /// Decode one character of a compressed availability view.
    pub fn from_view_code(c: char) -> Self {
        match c {
            '0' => StatusKind::Free,
            '1' => StatusKind::Tentative,
            '2' => StatusKind::Busy,
            '3' => StatusKind::OutOfOffice,
            '4' => StatusKind::WorkingElsewhere,
            _ => StatusKind::Unknown,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, StatusKind::Free)
    }

    /// One-character marker used in human-readable reports.
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusKind::Free => "○",
            StatusKind::Tentative => "◐",
            StatusKind::Busy => "●",
            StatusKind::OutOfOffice => "◆",
            StatusKind::WorkingElsewhere => "◇",
            StatusKind::Unknown => "?",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Free => "Free",
            StatusKind::Tentative => "Tentative",
            StatusKind::Busy => "Busy",
            StatusKind::OutOfOffice => "Out of office",
            StatusKind::WorkingElsewhere => "Working elsewhere",
            StatusKind::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(StatusKind::from_wire(&s))
    }
}

/// A time interval tagged with an occupancy status and an optional display
/// label (typically the event subject).
#[derive(Debug, Clone, PartialEq)]
pub struct StatusInterval {
    pub interval: TimeInterval,
    pub status: StatusKind,
    pub label: Option<String>,
}

impl StatusInterval {
    pub fn new(interval: TimeInterval, status: StatusKind) -> Self {
        Self {
            interval,
            status,
            label: None,
        }
    }

    pub fn with_label(interval: TimeInterval, status: StatusKind, label: impl Into<String>) -> Self {
        Self {
            interval,
            status,
            label: Some(label.into()),
        }
    }
}

/// The working-hours bound `[day@start_hour, day@end_hour)` against which
/// free/busy complementation is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWindow {
    day: NaiveDate,
    start_hour: u32,
    end_hour: u32,
    bounds: TimeInterval,
}

impl WorkWindow {
    /// Build a window, rejecting `start_hour >= end_hour` and hours past 23.
    pub fn new(day: NaiveDate, start_hour: u32, end_hour: u32) -> Result<Self> {
        if start_hour >= end_hour || end_hour > 23 {
            return Err(EngineError::InvalidWindow {
                start_hour,
                end_hour,
            });
        }
        let start = day
            .and_hms_opt(start_hour, 0, 0)
            .ok_or(EngineError::InvalidWindow {
                start_hour,
                end_hour,
            })?;
        let end = day
            .and_hms_opt(end_hour, 0, 0)
            .ok_or(EngineError::InvalidWindow {
                start_hour,
                end_hour,
            })?;
        Ok(Self {
            day,
            start_hour,
            end_hour,
            bounds: TimeInterval { start, end },
        })
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn bounds(&self) -> TimeInterval {
        self.bounds
    }
}

/// Stable ascending sort on interval start; ties keep input order.
/// Downstream sweeps rely on the stability.
pub fn sort_by_start(items: &mut [StatusInterval]) {
    items.sort_by_key(|item| item.interval.start);
}
