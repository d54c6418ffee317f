//! Bearer-authenticated request plumbing and the service endpoints.
//!
//! Token acquisition is out of scope: the caller supplies an opaque bearer
//! token (normally via the environment). Every operation is one request,
//! awaited to completion; there are no retries here.

use crate::error::{RemoteError, Result};
use crate::model::{
    CalendarSlot, Event, ListResponse, MailboxSchedule, MessagePayload, RawAvailability,
    ScheduleItem, SendMailRequest,
};
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::de::DeserializeOwned;
use serde_json::json;
use slot_engine::{StatusInterval, WorkWindow};
use tracing::debug;

/// Default service root; override with `DAYGRID_BASE_URL` for testing or
/// sovereign-cloud deployments.
pub const DEFAULT_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    pub token: String,
}

impl RemoteConfig {
    /// Read configuration from the environment. `DAYGRID_TOKEN` is
    /// required; `DAYGRID_BASE_URL` falls back to the hosted service root.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("DAYGRID_TOKEN")
            .map_err(|_| RemoteError::MissingConfig("DAYGRID_TOKEN"))?;
        let base_url =
            std::env::var("DAYGRID_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self { base_url, token })
    }
}

pub struct RemoteClient {
    http: reqwest::Client,
    config: RemoteConfig,
}

impl RemoteClient {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Surface non-success answers verbatim as [`RemoteError::Api`].
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        Err(RemoteError::Api { status, message })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(&self.config.token)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Send a mail message. The service answers 202 with an empty body.
    pub async fn send_mail(&self, message: MessagePayload) -> Result<()> {
        let url = self.url("/me/sendMail");
        debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(&SendMailRequest {
                message,
                save_to_sent_items: true,
            })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// List the caller's events for one day.
    pub async fn list_events(&self, day: NaiveDate) -> Result<Vec<Event>> {
        let start = day.and_time(NaiveTime::MIN);
        let end = start + Duration::days(1);
        let response: ListResponse<Event> = self
            .get_json(
                "/me/calendarView",
                &[
                    ("startDateTime", start.format(WIRE_FORMAT).to_string()),
                    ("endDateTime", end.format(WIRE_FORMAT).to_string()),
                    ("$select", "id,subject,start,end".to_string()),
                    ("$orderby", "start/dateTime".to_string()),
                ],
            )
            .await?;
        Ok(response.value)
    }

    /// Delete one event by id.
    pub async fn delete_event(&self, event_id: &str) -> Result<()> {
        let url = self.url(&format!("/me/events/{event_id}"));
        debug!(%url, "DELETE");
        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.config.token)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Fetch the caller's own calendar slots within the work window,
    /// normalized to status intervals (shape 1: direct slot list).
    pub async fn own_slots(&self, window: &WorkWindow) -> Result<Vec<StatusInterval>> {
        let bounds = window.bounds();
        let response: ListResponse<CalendarSlot> = self
            .get_json(
                "/me/calendarView",
                &[
                    ("startDateTime", bounds.start.format(WIRE_FORMAT).to_string()),
                    ("endDateTime", bounds.end.format(WIRE_FORMAT).to_string()),
                    ("$select", "subject,showAs,start,end".to_string()),
                ],
            )
            .await?;
        Ok(RawAvailability::Slots(response.value).normalize())
    }

    /// Fetch the compressed schedule for several mailboxes (shape 3 with a
    /// per-mailbox fallback to shape 2 items).
    pub async fn schedules(
        &self,
        mailboxes: &[String],
        window: &WorkWindow,
        bucket_minutes: u32,
    ) -> Result<Vec<MailboxSchedule>> {
        let bounds = window.bounds();
        let url = self.url("/me/calendar/getSchedule");
        debug!(%url, mailboxes = mailboxes.len(), "POST");
        let body = json!({
            "schedules": mailboxes,
            "startTime": { "dateTime": bounds.start.format(WIRE_FORMAT).to_string(), "timeZone": "UTC" },
            "endTime": { "dateTime": bounds.end.format(WIRE_FORMAT).to_string(), "timeZone": "UTC" },
            "availabilityViewInterval": bucket_minutes,
        });
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.token)
            .json(&body)
            .send()
            .await?;
        let list: ListResponse<MailboxSchedule> = Self::check(response).await?.json().await?;
        Ok(list.value)
    }

    /// Fetch one external mailbox's calendar view (shape 2: only free items
    /// are meaningful; the caller inverts the gaps).
    pub async fn free_items(
        &self,
        mailbox: &str,
        window: &WorkWindow,
    ) -> Result<Vec<ScheduleItem>> {
        let bounds = window.bounds();
        let response: ListResponse<ScheduleItem> = self
            .get_json(
                &format!("/users/{mailbox}/calendarView"),
                &[
                    ("startDateTime", bounds.start.format(WIRE_FORMAT).to_string()),
                    ("endDateTime", bounds.end.format(WIRE_FORMAT).to_string()),
                    ("$select", "status,subject,start,end".to_string()),
                ],
            )
            .await?;
        Ok(response.value)
    }
}
