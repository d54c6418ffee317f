//! Integration tests for the remote client against a mock service.

use chrono::NaiveDate;
use daygrid_remote::{MessagePayload, RemoteClient, RemoteConfig, RemoteError};
use slot_engine::{StatusKind, WorkWindow};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RemoteClient {
    RemoteClient::new(RemoteConfig {
        base_url: server.uri(),
        token: "test-token".to_string(),
    })
}

fn window() -> WorkWindow {
    WorkWindow::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 9, 17).unwrap()
}

#[tokio::test]
async fn send_mail_posts_the_message_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/me/sendMail"))
        .and(body_partial_json(serde_json::json!({
            "message": {
                "subject": "Hello",
                "body": { "contentType": "Text", "content": "hi there" },
                "toRecipients": [
                    { "emailAddress": { "address": "a@example.com" } }
                ]
            },
            "saveToSentItems": true
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let message = MessagePayload::new("Hello", "hi there", false, &["a@example.com".to_string()]);
    client_for(&server).send_mail(message).await.unwrap();
}

#[tokio::test]
async fn list_events_unwraps_the_value_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/calendarView"))
        .and(query_param("startDateTime", "2024-01-01T00:00:00"))
        .and(query_param("endDateTime", "2024-01-02T00:00:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [
                {
                    "id": "evt-1",
                    "subject": "Standup",
                    "start": { "dateTime": "2024-01-01T10:00:00.0000000" },
                    "end": { "dateTime": "2024-01-01T10:30:00.0000000" }
                }
            ]
        })))
        .mount(&server)
        .await;

    let events = client_for(&server)
        .list_events(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .await
        .unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "evt-1");
    assert_eq!(events[0].subject.as_deref(), Some("Standup"));
}

#[tokio::test]
async fn delete_event_targets_the_event_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/me/events/evt-42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_event("evt-42").await.unwrap();
}

#[tokio::test]
async fn own_slots_normalize_status_and_label() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/calendarView"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [
                {
                    "subject": "Standup",
                    "showAs": "busy",
                    "start": { "dateTime": "2024-01-01T10:00:00" },
                    "end": { "dateTime": "2024-01-01T10:30:00" }
                },
                {
                    "showAs": "somethingNew",
                    "start": { "dateTime": "2024-01-01T11:00:00" },
                    "end": { "dateTime": "2024-01-01T11:30:00" }
                }
            ]
        })))
        .mount(&server)
        .await;

    let slots = client_for(&server).own_slots(&window()).await.unwrap();

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].status, StatusKind::Busy);
    assert_eq!(slots[0].label.as_deref(), Some("Standup"));
    // Unrecognized wire status lands on Unknown, which counts as occupied.
    assert_eq!(slots[1].status, StatusKind::Unknown);
}

#[tokio::test]
async fn degenerate_intervals_from_the_service_are_dropped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/calendarView"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [
                {
                    "showAs": "busy",
                    "start": { "dateTime": "2024-01-01T10:00:00" },
                    "end": { "dateTime": "2024-01-01T10:00:00" }
                }
            ]
        })))
        .mount(&server)
        .await;

    let slots = client_for(&server).own_slots(&window()).await.unwrap();
    assert!(slots.is_empty());
}

#[tokio::test]
async fn api_failure_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/calendarView"))
        .respond_with(ResponseTemplate::new(403).set_body_string("token expired"))
        .mount(&server)
        .await;

    let err = client_for(&server).own_slots(&window()).await.unwrap_err();
    match err {
        RemoteError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "token expired");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn schedules_posts_the_window_and_interval() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/me/calendar/getSchedule"))
        .and(body_partial_json(serde_json::json!({
            "schedules": ["a@example.com"],
            "availabilityViewInterval": 30
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [
                { "scheduleId": "a@example.com", "availabilityView": "0022" }
            ]
        })))
        .mount(&server)
        .await;

    let schedules = client_for(&server)
        .schedules(&["a@example.com".to_string()], &window(), 30)
        .await
        .unwrap();

    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].availability_view.as_deref(), Some("0022"));
}
