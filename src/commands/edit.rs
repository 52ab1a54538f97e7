//! Edits an existing break slot field-by-field.
//!
//! Only the flags given on the command line change; everything else keeps
//! its value. Changing the start time regenerates the slot id, so the
//! command prints the updated slot afterwards.

use crate::libs::messages::Message;
use crate::libs::slot::RepeatPattern;
use crate::libs::store::TimelineStore;
use crate::libs::timeline::{SlotPatch, Timeline};
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::NaiveTime;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(help = "Id of the break slot to edit")]
    id: String,
    #[arg(long, short, help = "New start time (HH:MM, 24-hour)")]
    time: Option<String>,
    #[arg(long, short, help = "New duration in minutes")]
    duration: Option<i64>,
    #[arg(long, short, help = "New reminder message")]
    message: Option<String>,
    #[arg(long, short, value_enum, help = "New repeat pattern")]
    pattern: Option<RepeatPattern>,
    #[arg(long, conflicts_with = "disable", help = "Enable the slot")]
    enable: bool,
    #[arg(long, help = "Disable the slot")]
    disable: bool,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let start_time = args.time.as_deref().map(parse_time).transpose()?;
    if let Some(duration) = args.duration {
        if duration > 120 {
            msg_bail_anyhow!(Message::SlotDurationTooLong(duration));
        }
    }
    let enabled = match (args.enable, args.disable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };

    let patch = SlotPatch {
        start_time,
        duration_minutes: args.duration,
        message: args.message,
        repeat_pattern: args.pattern,
        enabled,
    };

    let mut timeline = Timeline::new(TimelineStore::new()?);
    let slot = timeline.edit(&args.id, patch)?;

    msg_success!(Message::SlotUpdated(slot.start_time.format("%H:%M").to_string()));
    Ok(())
}

// Parses a "HH:MM" wall-clock time.
fn parse_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| msg_error_anyhow!(Message::InvalidTimeFormat(raw.to_string())))
}
