use crate::libs::messages::Message;
use crate::libs::store::TimelineStore;
use crate::libs::timeline::Timeline;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(help = "Id of the break slot to delete")]
    id: String,
}

// Deletes a break slot; missing ids are reported but not treated as errors.
pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut timeline = Timeline::new(TimelineStore::new()?);

    if timeline.delete(&args.id) {
        msg_success!(Message::SlotDeleted(args.id));
    } else {
        msg_warning!(Message::SlotNotFound(args.id));
    }
    Ok(())
}
