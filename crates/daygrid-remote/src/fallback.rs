//! Sequential-attempt policy between the two multi-mailbox schedule
//! sources.
//!
//! The policy is data: an ordered slice of sources, each tried exactly
//! once, no backoff. The primary source is the compressed schedule
//! endpoint; when it fails, the per-mailbox calendar view (free items
//! only) is consulted instead.

use crate::client::RemoteClient;
use crate::error::{RemoteError, Result};
use crate::model::RawAvailability;
use slot_engine::{busy_from_free_items, StatusInterval, WorkWindow};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleSource {
    /// Compressed availability views for all mailboxes in one call.
    Schedules,
    /// One calendar-view call per mailbox; only free items are meaningful
    /// and the busy view is gap-inverted from them.
    FreeItems,
}

impl ScheduleSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleSource::Schedules => "schedules",
            ScheduleSource::FreeItems => "free-items",
        }
    }
}

/// Primary first, then the per-mailbox fallback.
pub const DEFAULT_SOURCE_PLAN: &[ScheduleSource] =
    &[ScheduleSource::Schedules, ScheduleSource::FreeItems];

/// Reconciled busy view for one external mailbox, tagged with the source
/// that produced it.
#[derive(Debug, Clone)]
pub struct MailboxBusy {
    pub mailbox: String,
    pub busy: Vec<StatusInterval>,
    pub source: ScheduleSource,
}

/// Fetch the busy view for several mailboxes, trying each source in plan
/// order. The first source that answers wins; a failed source is logged
/// and the next one attempted. When the plan is exhausted the collected
/// failures surface as [`RemoteError::AllSourcesFailed`].
pub async fn fetch_mailbox_busy(
    client: &RemoteClient,
    plan: &[ScheduleSource],
    mailboxes: &[String],
    window: &WorkWindow,
    bucket_minutes: u32,
) -> Result<Vec<MailboxBusy>> {
    let mut attempts = Vec::new();

    for source in plan {
        match fetch_via(client, *source, mailboxes, window, bucket_minutes).await {
            Ok(result) => return Ok(result),
            Err(err) => {
                warn!(source = source.as_str(), %err, "schedule source failed");
                attempts.push(format!("{}: {}", source.as_str(), err));
            }
        }
    }

    Err(RemoteError::AllSourcesFailed { attempts })
}

async fn fetch_via(
    client: &RemoteClient,
    source: ScheduleSource,
    mailboxes: &[String],
    window: &WorkWindow,
    bucket_minutes: u32,
) -> Result<Vec<MailboxBusy>> {
    match source {
        ScheduleSource::Schedules => {
            let schedules = client.schedules(mailboxes, window, bucket_minutes).await?;
            let view_start = window.bounds().start;
            Ok(schedules
                .into_iter()
                .map(|schedule| {
                    // A mailbox may answer with the compressed view or, when
                    // its sharing settings withhold it, with free items only.
                    let busy = match schedule.availability_view {
                        Some(code) => RawAvailability::View {
                            code,
                            view_start,
                            bucket_minutes,
                        }
                        .normalize(),
                        None => {
                            let items =
                                RawAvailability::FreeItems(schedule.schedule_items).normalize();
                            busy_from_free_items(&items, window)
                        }
                    };
                    MailboxBusy {
                        mailbox: schedule.schedule_id,
                        busy,
                        source,
                    }
                })
                .collect())
        }
        ScheduleSource::FreeItems => {
            let mut result = Vec::with_capacity(mailboxes.len());
            for mailbox in mailboxes {
                let items = client.free_items(mailbox, window).await?;
                let normalized = RawAvailability::FreeItems(items).normalize();
                result.push(MailboxBusy {
                    mailbox: mailbox.clone(),
                    busy: busy_from_free_items(&normalized, window),
                    source,
                });
            }
            Ok(result)
        }
    }
}
