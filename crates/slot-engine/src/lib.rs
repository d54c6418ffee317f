//! # slot-engine
//!
//! Availability reconciliation for mailbox calendars.
//!
//! A hosted calendar reports its occupied time in three different shapes
//! depending on which endpoint answered: a direct slot list, a list of
//! free-only schedule items, or a compressed per-bucket status string.
//! This crate normalizes all of them into one interval model bounded by a
//! working-hours window, and complements it in either direction: busy
//! intervals from free ones, free slots from busy ones.
//!
//! ## Modules
//!
//! - [`interval`] — Half-open time intervals, status kinds, work windows
//! - [`decode`] — Compressed availability-view string → status runs
//! - [`invert`] — Free-labeled items → complementary busy intervals
//! - [`extract`] — Busy-labeled items → complementary free slots
//! - [`report`] — Duration formatting, human lines, structured records
//! - [`error`] — Error types

pub mod decode;
pub mod error;
pub mod extract;
pub mod interval;
pub mod invert;
pub mod report;

pub use decode::{decode_availability_view, DEFAULT_BUCKET_MINUTES};
pub use error::EngineError;
pub use extract::free_slots;
pub use interval::{sort_by_start, StatusInterval, StatusKind, TimeInterval, WorkWindow};
pub use invert::busy_from_free_items;
pub use report::{
    busy_summaries, format_duration, free_line, free_slot_records, human_line, BusySummary,
    FreeSlotRecord,
};
