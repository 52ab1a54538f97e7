use crate::libs::messages::Message;
use crate::libs::store::TimelineStore;
use crate::libs::timeline::Timeline;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;

// Lists all break slots in start-time order.
pub fn cmd() -> Result<()> {
    let timeline = Timeline::new(TimelineStore::new()?);
    let slots = timeline.slots();

    if slots.is_empty() {
        msg_info!(Message::NoSlotsDefined);
        return Ok(());
    }

    View::slots(&slots)?;
    Ok(())
}
