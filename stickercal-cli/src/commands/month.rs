use anyhow::Result;

use crate::render::render_month;
use crate::session::CalendarSession;

pub enum Step {
    Stay,
    Next,
    Prev,
}

pub async fn run(mut session: CalendarSession, step: Step) -> Result<()> {
    super::load(&mut session).await;

    let state = session.state_mut();
    match step {
        Step::Stay => {}
        Step::Next => state.next_month(),
        Step::Prev => state.prev_month(),
    }

    println!("{}", render_month(session.state()));
    Ok(())
}
