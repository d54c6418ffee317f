//! Error types for slot-engine operations.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Empty interval: start {start} is not before end {end}")]
    EmptyInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Invalid work window: hours {start_hour}..{end_hour}")]
    InvalidWindow { start_hour: u32, end_hour: u32 },
}

pub type Result<T> = std::result::Result<T, EngineError>;
