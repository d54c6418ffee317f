//! Human and JSON rendering of availability reports and event listings.
//!
//! Empty results are valid outcomes and get a distinct message rather than
//! an empty list (stdout is for people unless `--json` was asked for).

use daygrid_remote::{Event, MailboxBusy};
use slot_engine::{busy_summaries, free_line, free_slot_records, human_line, StatusInterval, WorkWindow};

pub fn render_free(slots: &[StatusInterval], window: &WorkWindow, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&free_slot_records(slots))?);
        return Ok(());
    }

    println!(
        "Free slots on {} ({:02}:00–{:02}:00):",
        window.day(),
        window.start_hour(),
        window.end_hour()
    );
    if slots.is_empty() {
        println!("  No free time in the work window.");
        return Ok(());
    }
    for slot in slots {
        println!("  {}", free_line(slot));
    }
    Ok(())
}

pub fn render_mailbox_busy(
    reports: &[MailboxBusy],
    window: &WorkWindow,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let value: Vec<serde_json::Value> = reports
            .iter()
            .map(|report| {
                serde_json::json!({
                    "mailbox": report.mailbox,
                    "busy": busy_summaries(&report.busy),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!(
        "Busy times on {} ({:02}:00–{:02}:00):",
        window.day(),
        window.start_hour(),
        window.end_hour()
    );
    for report in reports {
        println!("{}:", report.mailbox);
        if report.busy.is_empty() {
            println!("  All clear: no busy time in the work window.");
            continue;
        }
        for item in &report.busy {
            println!("  {}", human_line(item));
        }
    }
    Ok(())
}

pub fn render_events(events: &[Event]) {
    if events.is_empty() {
        println!("No events.");
        return;
    }
    for event in events {
        println!(
            "{}  {}–{}  {}",
            event.id,
            event.start.date_time.format("%H:%M"),
            event.end.date_time.format("%H:%M"),
            event.subject.as_deref().unwrap_or("(no subject)")
        );
    }
}
