//! # daygrid-remote
//!
//! Async HTTP client for the hosted mailbox/calendar service. All mail and
//! calendar state lives remotely; this crate only translates typed requests
//! into API calls and normalizes the answers into the `slot-engine`
//! interval model at the moment of receipt.
//!
//! ## Modules
//!
//! - [`client`] — Bearer-authenticated request plumbing and endpoints
//! - [`model`] — Wire DTOs and shape normalization
//! - [`fallback`] — Sequential-attempt policy between schedule sources
//! - [`error`] — Error types

pub mod client;
pub mod error;
pub mod fallback;
pub mod model;

pub use client::{RemoteClient, RemoteConfig};
pub use error::RemoteError;
pub use fallback::{fetch_mailbox_busy, MailboxBusy, ScheduleSource, DEFAULT_SOURCE_PLAN};
pub use model::{
    BodyPayload, CalendarSlot, Event, MailboxSchedule, MessagePayload, RawAvailability,
    ScheduleItem,
};
