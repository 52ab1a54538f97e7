//! Break notices and the sink they are dispatched to.
//!
//! Every break that reaches the user travels as a [`BreakNotice`], whether
//! it came from the timeline, was started manually, or fell back to the
//! configured defaults. The variant type replaces the assortment of ad hoc
//! placeholder objects the notification path used to receive and gives the
//! sink a single uniform surface.
//!
//! The engine never calls a sink itself; the watcher in
//! [`scheduler`](crate::libs::scheduler) does, through the [`NotificationSink`]
//! trait. The default [`ConsoleSink`] prints to the terminal; window popups
//! and audio belong to sink implementations outside this crate.

use crate::libs::messages::Message;
use crate::libs::slot::BreakSlot;
use crate::msg_print;
use anyhow::Result;
use chrono::NaiveDateTime;

/// A break about to be surfaced to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BreakNotice {
    /// A timeline slot reached its occurrence instant.
    Scheduled { slot: BreakSlot, occurrence: NaiveDateTime },
    /// A break the user started by hand.
    Manual { duration_minutes: i64, message: String },
    /// A break built from the configured fallback defaults.
    Default { duration_minutes: i64, message: String },
}

impl BreakNotice {
    /// Break length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        match self {
            BreakNotice::Scheduled { slot, .. } => slot.duration_minutes,
            BreakNotice::Manual { duration_minutes, .. } | BreakNotice::Default { duration_minutes, .. } => *duration_minutes,
        }
    }

    /// Reminder text; an empty message yields the generated default.
    pub fn message(&self) -> String {
        let raw = match self {
            BreakNotice::Scheduled { slot, .. } => slot.message.as_str(),
            BreakNotice::Manual { message, .. } | BreakNotice::Default { message, .. } => message.as_str(),
        };
        if raw.is_empty() {
            format!("Time for your {}-minute break!", self.duration_minutes())
        } else {
            raw.to_string()
        }
    }
}

/// Consumer of due breaks.
///
/// Implementations decide how a break is presented: terminal output, window
/// popup, sound, OS notification. The watcher hands over a notice exactly
/// once per occurrence.
pub trait NotificationSink {
    fn notify(&self, notice: &BreakNotice) -> Result<()>;
}

/// Terminal notification sink.
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, notice: &BreakNotice) -> Result<()> {
        msg_print!(
            Message::BreakDue {
                message: notice.message(),
                duration: notice.duration_minutes(),
            },
            true
        );
        Ok(())
    }
}
