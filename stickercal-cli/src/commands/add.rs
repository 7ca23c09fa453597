use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render::{Render, render_month};
use crate::session::CalendarSession;

pub async fn run(mut session: CalendarSession, date: NaiveDate, title: &str) -> Result<()> {
    super::load(&mut session).await;
    session.state_mut().select_date(date);

    // Failures are logged by the session; the view is shown either way.
    if let Some(event) = session.add(date, title).await {
        println!("{} {}", "Added".green(), event.render());
        println!();
    }

    println!("{}", render_month(session.state()));
    Ok(())
}
