//! TUI rendering for stickers and calendar views.
//!
//! Extension traits that add colored terminal rendering to stickercal-core
//! types using owo_colors.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use stickercal_core::Event;
use stickercal_core::calendar::{CalendarState, DayStickers};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Parse "#RRGGBB".
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

impl Render for Event {
    fn render(&self) -> String {
        let label = format!(" {} ", self.title);
        match self.color.as_deref().and_then(parse_hex) {
            Some((r, g, b)) => label.black().on_truecolor(r, g, b).to_string(),
            None => label.reversed().to_string(),
        }
    }
}

fn format_day(date: NaiveDate) -> String {
    date.format("%a %b %-d").to_string()
}

impl Render for DayStickers<'_> {
    fn render(&self) -> String {
        let mut parts: Vec<String> = self.visible.iter().map(|e| e.render()).collect();

        if self.hidden_count() > 0 {
            parts.push(format!("+{} more", self.hidden_count()).dimmed().to_string());
        }

        format!("{:>10}  {}", format_day(self.date), parts.join(" "))
    }
}

/// The displayed month: title, then one line per day that has stickers.
pub fn render_month(state: &CalendarState) -> String {
    let mut lines = vec![state.month_title().bold().to_string()];

    let days = state.month_stickers();
    if days.is_empty() {
        lines.push("No stickers this month".dimmed().to_string());
    }

    for day in days {
        let line = day.render();
        if state.selected_date() == Some(day.date) {
            lines.push(format!("{} {}", ">".bold(), line));
        } else {
            lines.push(format!("  {}", line));
        }
    }

    lines.join("\n")
}

/// Every sticker on one day, with ids (the overflow list).
pub fn render_day(date: NaiveDate, events: &[&Event]) -> String {
    let mut lines = vec![format_day(date).bold().to_string()];

    if events.is_empty() {
        lines.push("No stickers".dimmed().to_string());
    }

    for event in events {
        lines.push(format!("  {}  {}", event.render(), event.id.dimmed()));
    }

    lines.join("\n")
}
