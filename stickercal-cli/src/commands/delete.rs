use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::session::CalendarSession;

pub async fn run(mut session: CalendarSession, id: &str) -> Result<()> {
    super::load(&mut session).await;

    let known = session.state().events().iter().find(|e| e.id == id).cloned();

    if session.delete(id).await {
        match known {
            Some(event) => println!("{} {}", "Deleted".red(), event.render()),
            None => println!("{} {}", "Deleted".red(), id.dimmed()),
        }
    }

    Ok(())
}
