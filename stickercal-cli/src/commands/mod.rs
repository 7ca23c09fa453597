pub mod add;
pub mod day;
pub mod delete;
pub mod edit;
pub mod month;

use crate::session::CalendarSession;
use crate::utils::tui::create_spinner;

/// Load the collection behind a spinner.
async fn load(session: &mut CalendarSession) {
    let spinner = create_spinner("Loading...");
    session.load().await;
    spinner.finish_and_clear();
}
