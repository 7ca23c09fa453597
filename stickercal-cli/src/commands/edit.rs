use anyhow::{Result, bail};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render::{Render, render_month};
use crate::session::CalendarSession;

pub async fn run(
    mut session: CalendarSession,
    id: &str,
    date: Option<NaiveDate>,
    title: Option<&str>,
) -> Result<()> {
    if date.is_none() && title.is_none() {
        bail!("Nothing to change: pass --title and/or --date");
    }

    super::load(&mut session).await;

    if let Some(event) = session.edit(id, date, title).await {
        println!("{} {}", "Updated".yellow(), event.render());
        println!();
        println!("{}", render_month(session.state()));
    }

    Ok(())
}
