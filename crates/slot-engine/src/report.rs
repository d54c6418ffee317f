//! Rendering of normalized availability: durations, human-readable lines,
//! and the stable structured records exposed for machine consumption.
//!
//! No interval normalization happens here — this module only consumes the
//! already-sorted, non-overlapping output of the inverter and extractor.

use crate::interval::{StatusInterval, StatusKind, TimeInterval};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Structured record for one free slot. Field names are wire-stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeSlotRecord {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration: String,
}

/// Structured record for one busy interval. Field names are wire-stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusySummary {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: StatusKind,
}

/// Format an interval's length as `{h}h {m}m`, dropping whichever term is
/// zero; zero-length (or sub-minute) durations render as `0m`.
pub fn format_duration(interval: &TimeInterval) -> String {
    let minutes = interval.duration_minutes();
    let hours = minutes / 60;
    let rem = minutes % 60;
    match (hours, rem) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// One human-readable report line: glyph, time range, label or status,
/// duration.
pub fn human_line(item: &StatusInterval) -> String {
    let label = item.label.as_deref().unwrap_or(item.status.as_str());
    format!(
        "{} {}–{}  {} ({})",
        item.status.glyph(),
        item.interval.start.format("%H:%M"),
        item.interval.end.format("%H:%M"),
        label,
        format_duration(&item.interval),
    )
}

/// Convert extractor output into [`FreeSlotRecord`]s.
pub fn free_slot_records(slots: &[StatusInterval]) -> Vec<FreeSlotRecord> {
    slots
        .iter()
        .map(|slot| FreeSlotRecord {
            start: slot.interval.start,
            end: slot.interval.end,
            duration: format_duration(&slot.interval),
        })
        .collect()
}

/// Convert inverter (or raw busy) output into [`BusySummary`]s.
pub fn busy_summaries(busy: &[StatusInterval]) -> Vec<BusySummary> {
    busy
        .iter()
        .map(|item| BusySummary {
            start_time: item.interval.start,
            end_time: item.interval.end,
            status: item.status,
        })
        .collect()
}

/// One human-readable line for a free slot, without the status label.
pub fn free_line(slot: &StatusInterval) -> String {
    format!(
        "{} {}–{}  ({})",
        StatusKind::Free.glyph(),
        slot.interval.start.format("%H:%M"),
        slot.interval.end.format("%H:%M"),
        format_duration(&slot.interval),
    )
}
