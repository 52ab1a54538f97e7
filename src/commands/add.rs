//! Adds a break slot to the timeline.
//!
//! Duration and message fall back to the configured break defaults when not
//! given on the command line. Overlap with an enabled slot aborts the add,
//! and so does a duration over 120 minutes; the engine itself only flags
//! long durations in `validate`, the hard cap lives at this entry point.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::slot::RepeatPattern;
use crate::libs::store::TimelineStore;
use crate::libs::timeline::Timeline;
use crate::{msg_bail_anyhow, msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::NaiveTime;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(help = "Start time of the break (HH:MM, 24-hour)")]
    time: String,
    #[arg(long, short, help = "Duration in minutes (defaults to the configured break duration)")]
    duration: Option<i64>,
    #[arg(long, short, help = "Reminder message (empty uses a generated default)")]
    message: Option<String>,
    #[arg(long, short, value_enum, default_value_t = RepeatPattern::Daily, help = "Repeat pattern")]
    pattern: RepeatPattern,
    #[arg(long, help = "Create the slot disabled")]
    disabled: bool,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let start_time = parse_time(&args.time)?;
    let defaults = Config::read()?.breaks.unwrap_or_default();
    let duration = args.duration.unwrap_or(defaults.break_duration);
    let message = args.message.unwrap_or(defaults.break_message);

    if duration > 120 {
        msg_bail_anyhow!(Message::SlotDurationTooLong(duration));
    }

    let mut timeline = Timeline::new(TimelineStore::new()?);
    let slot = timeline.add(start_time, duration, &message, args.pattern, !args.disabled)?;

    msg_success!(Message::SlotAdded(slot.start_time.format("%H:%M").to_string()));
    Ok(())
}

// Parses a "HH:MM" wall-clock time.
fn parse_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| msg_error_anyhow!(Message::InvalidTimeFormat(raw.to_string())))
}
