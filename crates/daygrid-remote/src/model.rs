//! Wire DTOs for the mailbox/calendar service and their normalization into
//! the `slot-engine` interval model.
//!
//! The service answers availability queries in three shapes depending on
//! which endpoint responded: a direct slot list with per-slot status, a
//! schedule-item list where only free items are meaningful, or a compressed
//! per-bucket availability view string. [`RawAvailability`] tags the shape
//! and normalizes it immediately, so nothing downstream special-cases the
//! source.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use slot_engine::{decode_availability_view, StatusInterval, StatusKind, TimeInterval};

/// Wrapper the service puts around every collection response.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub value: Vec<T>,
}

/// A date-time leaf as the service sends it (timezone-naive wall clock).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeSpec {
    pub date_time: NaiveDateTime,
}

// ---------------------------------------------------------------------------
// Mail
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMailRequest {
    pub message: MessagePayload,
    pub save_to_sent_items: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    pub subject: String,
    pub body: BodyPayload,
    pub to_recipients: Vec<Recipient>,
}

impl MessagePayload {
    /// Assemble an outgoing message. `html` selects the body content type;
    /// markdown conversion, if any, happens before this point.
    pub fn new(subject: impl Into<String>, body: impl Into<String>, html: bool, to: &[String]) -> Self {
        Self {
            subject: subject.into(),
            body: BodyPayload {
                content_type: if html { "HTML" } else { "Text" }.to_string(),
                content: body.into(),
            },
            to_recipients: to
                .iter()
                .map(|address| Recipient {
                    email_address: EmailAddress {
                        address: address.clone(),
                    },
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPayload {
    pub content_type: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub email_address: EmailAddress,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailAddress {
    pub address: String,
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

/// A calendar event as listed/deleted by id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub start: DateTimeSpec,
    pub end: DateTimeSpec,
}

/// One slot of the caller's own calendar view, carrying its real status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSlot {
    #[serde(default)]
    pub subject: Option<String>,
    pub show_as: StatusKind,
    pub start: DateTimeSpec,
    pub end: DateTimeSpec,
}

/// One reported occupied-or-free interval for an external mailbox.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub status: StatusKind,
    pub start: DateTimeSpec,
    pub end: DateTimeSpec,
    #[serde(default)]
    pub subject: Option<String>,
}

/// Per-mailbox answer from the multi-user schedule endpoint. Either the
/// compressed view or the item list may be present depending on the
/// mailbox's sharing settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailboxSchedule {
    pub schedule_id: String,
    #[serde(default)]
    pub availability_view: Option<String>,
    #[serde(default)]
    pub schedule_items: Vec<ScheduleItem>,
}

// ---------------------------------------------------------------------------
// Shape normalization
// ---------------------------------------------------------------------------

/// The three fetched shapes, tagged, normalized to `StatusInterval`s the
/// moment they arrive. Intervals the service reports with `start >= end`
/// are dropped rather than propagated.
#[derive(Debug, Clone)]
pub enum RawAvailability {
    Slots(Vec<CalendarSlot>),
    FreeItems(Vec<ScheduleItem>),
    View {
        code: String,
        view_start: NaiveDateTime,
        bucket_minutes: u32,
    },
}

impl RawAvailability {
    pub fn normalize(self) -> Vec<StatusInterval> {
        match self {
            RawAvailability::Slots(slots) => slots
                .into_iter()
                .filter_map(|slot| {
                    let interval =
                        TimeInterval::new(slot.start.date_time, slot.end.date_time).ok()?;
                    Some(match slot.subject {
                        Some(subject) => {
                            StatusInterval::with_label(interval, slot.show_as, subject)
                        }
                        None => StatusInterval::new(interval, slot.show_as),
                    })
                })
                .collect(),
            RawAvailability::FreeItems(items) => items
                .into_iter()
                .filter_map(|item| {
                    let interval =
                        TimeInterval::new(item.start.date_time, item.end.date_time).ok()?;
                    Some(match item.subject {
                        Some(subject) => StatusInterval::with_label(interval, item.status, subject),
                        None => StatusInterval::new(interval, item.status),
                    })
                })
                .collect(),
            RawAvailability::View {
                code,
                view_start,
                bucket_minutes,
            } => decode_availability_view(&code, view_start, bucket_minutes),
        }
    }
}
