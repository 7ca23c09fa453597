use anyhow::Result;
use chrono::NaiveDate;

use crate::render::render_day;
use crate::session::CalendarSession;

pub async fn run(mut session: CalendarSession, date: NaiveDate) -> Result<()> {
    super::load(&mut session).await;
    session.state_mut().select_date(date);

    let events = session.state().events_on(date);
    println!("{}", render_day(date, &events));
    Ok(())
}
