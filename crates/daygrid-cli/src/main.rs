//! `daygrid` CLI — send mail, manage calendar events, and report free/busy
//! availability against the hosted mailbox service.
//!
//! ## Usage
//!
//! ```sh
//! # Send a plain-text mail
//! daygrid mail send --to a@example.com --subject "Hello" --body "hi"
//!
//! # List / delete today's events
//! daygrid events list
//! daygrid events delete AAMkAGI2...
//!
//! # My free slots tomorrow, 9-17
//! daygrid free --day tomorrow
//!
//! # Other mailboxes' busy times, as JSON
//! daygrid free-for a@example.com b@example.com --json
//! ```
//!
//! Configuration comes from the environment: `DAYGRID_TOKEN` (required
//! bearer token) and `DAYGRID_BASE_URL` (optional service root override).

mod day;
mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use daygrid_remote::{
    fetch_mailbox_busy, MessagePayload, RemoteClient, RemoteConfig, DEFAULT_SOURCE_PLAN,
};
use slot_engine::{free_slots, WorkWindow, DEFAULT_BUCKET_MINUTES};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "daygrid",
    version,
    about = "Mailbox and calendar CLI for the hosted service"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mail operations
    Mail {
        #[command(subcommand)]
        command: MailCommands,
    },
    /// Calendar event operations
    Events {
        #[command(subcommand)]
        command: EventCommands,
    },
    /// My free slots within the work window
    Free {
        #[command(flatten)]
        window: WindowArgs,
        /// Emit structured records instead of the human report
        #[arg(long)]
        json: bool,
    },
    /// Other mailboxes' busy times within the work window
    FreeFor {
        /// Mailbox addresses to query
        #[arg(required = true)]
        mailboxes: Vec<String>,
        #[command(flatten)]
        window: WindowArgs,
        /// Availability-view bucket width in minutes
        #[arg(long, default_value_t = DEFAULT_BUCKET_MINUTES)]
        interval: u32,
        /// Emit structured records instead of the human report
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum MailCommands {
    /// Send a message
    Send {
        /// Recipient addresses (repeatable)
        #[arg(long, required = true)]
        to: Vec<String>,
        #[arg(long)]
        subject: String,
        /// Message body; empty bodies are allowed
        #[arg(long, default_value = "")]
        body: String,
        /// Treat the body as pre-rendered HTML instead of plain text
        #[arg(long)]
        html: bool,
    },
}

#[derive(Subcommand)]
enum EventCommands {
    /// List events for a day
    List {
        /// Day spec: today, tomorrow, a weekday name, or YYYY-MM-DD
        #[arg(long, default_value = "today")]
        day: String,
    },
    /// Delete an event by id
    Delete {
        /// Event id as shown by `events list`
        id: String,
    },
}

#[derive(Args)]
struct WindowArgs {
    /// Day spec: today, tomorrow, a weekday name, or YYYY-MM-DD
    #[arg(long, default_value = "today")]
    day: String,
    /// First working hour (0-23)
    #[arg(long, default_value_t = 9)]
    start_hour: u32,
    /// Hour the work day ends (exclusive, 0-23)
    #[arg(long, default_value_t = 17)]
    end_hour: u32,
}

impl WindowArgs {
    fn resolve(&self) -> Result<WorkWindow> {
        let day = day::parse_day(&self.day, chrono::Local::now().date_naive());
        WorkWindow::new(day, self.start_hour, self.end_hour)
            .context("work window rejected; start hour must be before end hour, both 0-23")
    }
}

fn client() -> Result<RemoteClient> {
    let config = RemoteConfig::from_env().context("remote service configuration")?;
    Ok(RemoteClient::new(config))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Mail { command } => match command {
            MailCommands::Send {
                to,
                subject,
                body,
                html,
            } => {
                let message = MessagePayload::new(subject, body, html, &to);
                client()?.send_mail(message).await?;
                println!("Sent.");
            }
        },
        Commands::Events { command } => match command {
            EventCommands::List { day } => {
                let date = day::parse_day(&day, chrono::Local::now().date_naive());
                let events = client()?.list_events(date).await?;
                render::render_events(&events);
            }
            EventCommands::Delete { id } => {
                client()?.delete_event(&id).await?;
                println!("Deleted {id}.");
            }
        },
        Commands::Free { window, json } => {
            let window = window.resolve()?;
            let slots = client()?.own_slots(&window).await?;
            let free = free_slots(&slots, &window);
            render::render_free(&free, &window, json)?;
        }
        Commands::FreeFor {
            mailboxes,
            window,
            interval,
            json,
        } => {
            let window = window.resolve()?;
            let reports = fetch_mailbox_busy(
                &client()?,
                DEFAULT_SOURCE_PLAN,
                &mailboxes,
                &window,
                interval,
            )
            .await?;
            render::render_mailbox_busy(&reports, &window, json)?;
        }
    }

    Ok(())
}
