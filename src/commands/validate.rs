use crate::libs::messages::Message;
use crate::libs::store::TimelineStore;
use crate::libs::timeline::Timeline;
use crate::libs::view::View;
use crate::{msg_success, msg_warning};
use anyhow::Result;

// Runs the advisory validation pass and prints any issues found.
pub fn cmd() -> Result<()> {
    let timeline = Timeline::new(TimelineStore::new()?);
    let issues = timeline.validate();

    if issues.is_empty() {
        msg_success!(Message::TimelineValid);
        return Ok(());
    }

    msg_warning!(Message::ValidationIssuesFound(issues.len()));
    View::issues(&issues)?;
    Ok(())
}
