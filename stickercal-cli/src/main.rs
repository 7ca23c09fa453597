mod client;
mod commands;
mod render;
mod session;
mod utils;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stickercal_core::calendar::MonthCursor;
use stickercal_core::config::Config;

use crate::client::Client;
use crate::commands::month::Step;
use crate::session::CalendarSession;

#[derive(Parser)]
#[command(name = "stickercal")]
#[command(about = "Stick short events on calendar days")]
struct Cli {
    /// Server URL including the route prefix (overrides config)
    #[arg(long, global = true)]
    server: Option<String>,

    /// Bearer token sent with every request (overrides config)
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the stickers of a month
    Month {
        /// Month to show (YYYY-MM, defaults to the current month)
        month: Option<MonthCursor>,

        /// Show the month after
        #[arg(long, conflicts_with = "prev")]
        next: bool,

        /// Show the month before
        #[arg(long)]
        prev: bool,
    },
    /// List every sticker on one day
    Day {
        /// YYYY-MM-DD
        date: NaiveDate,
    },
    /// Stick a new event on a day
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Day to stick it on (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Change the title or day of a sticker
    Edit {
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Remove a sticker by id
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?.client;

    let server_url = cli.server.unwrap_or(config.server_url);
    let token = cli.token.or(config.token);
    let client = Client::new(&server_url, token)?;

    match cli.command {
        Commands::Month { month, next, prev } => {
            let cursor = month.unwrap_or_else(MonthCursor::today);
            let step = match (next, prev) {
                (true, _) => Step::Next,
                (_, true) => Step::Prev,
                _ => Step::Stay,
            };
            commands::month::run(CalendarSession::new(client, cursor), step).await
        }
        Commands::Day { date } => {
            let session = CalendarSession::new(client, MonthCursor::containing(date));
            commands::day::run(session, date).await
        }
        Commands::Add { title, date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let session = CalendarSession::new(client, MonthCursor::today());
            commands::add::run(session, date, &title.join(" ")).await
        }
        Commands::Edit { id, title, date } => {
            let session = CalendarSession::new(client, MonthCursor::today());
            commands::edit::run(session, &id, date, title.as_deref()).await
        }
        Commands::Delete { id } => {
            let session = CalendarSession::new(client, MonthCursor::today());
            commands::delete::run(session, &id).await
        }
    }
}
