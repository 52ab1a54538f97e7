use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::store::TimelineStore;
use crate::libs::timeline::Timeline;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;

// Shows the next upcoming break within the today/tomorrow horizon.
pub fn cmd() -> Result<()> {
    let timeline = Timeline::new(TimelineStore::new()?);
    let now = Local::now().naive_local();

    match timeline.next_break(now) {
        Some((_slot, occurrence)) => {
            msg_print!(Message::NextBreakAt {
                occurrence: occurrence.format("%Y-%m-%d %H:%M").to_string(),
                time_until: format_duration(&(occurrence - now)),
            });
        }
        None => {
            msg_info!(Message::NoUpcomingBreaks);
        }
    }
    Ok(())
}
