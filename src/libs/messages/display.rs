//! Display implementation for break-assistant application messages.
//!
//! All user-facing text is defined in one place so wording stays consistent
//! across commands and the watcher, and so parameter interpolation stays
//! type-safe. The `msg_*` macros route these strings to the terminal or to
//! the tracing system depending on debug mode.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let message = match self {
            // === SLOT MESSAGES ===
            Message::SlotAdded(start) => format!("Break slot added at {}", start),
            Message::SlotUpdated(start) => format!("Break slot updated: {}", start),
            Message::SlotDeleted(id) => format!("Break slot {} deleted", id),
            Message::SlotNotFound(id) => format!("Break slot with id {} not found", id),
            Message::SlotDurationTooLong(minutes) => {
                format!("Duration of {} minutes exceeds the 120 minute limit", minutes)
            }
            Message::NoSlotsDefined => "No break slots defined yet. Add one with 'break-assistant add'".to_string(),

            // === TIMELINE MESSAGES ===
            Message::TimelineLoadFailed(e) => format!("Error loading timeline, starting empty: {}", e),
            Message::TimelineSaveFailed(e) => format!("Error saving timeline, keeping in-memory state: {}", e),
            Message::TimelineValid => "Timeline is valid".to_string(),
            Message::ValidationIssuesFound(count) => format!("Found {} timeline issue(s)", count),

            // === NEXT BREAK MESSAGES ===
            Message::NextBreakAt { occurrence, time_until } => {
                format!("Next break at {} (in {})", occurrence, time_until)
            }
            Message::NoUpcomingBreaks => "No upcoming breaks within today or tomorrow".to_string(),
            Message::BreakDue { message, duration } => format!("🔔 {} ({} min)", message, duration),

            // === WATCHER MESSAGES ===
            Message::WatcherStarted(interval) => format!("Watching for due breaks (polling every {} ms)", interval),
            Message::WatcherStopped => "Break watcher stopped".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for Ctrl-C: {}", e),
            Message::InvalidPollInterval => "Poll interval must be greater than zero".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleBreaks => "Break defaults configuration".to_string(),
            Message::ConfigModuleNotifier => "Notifier configuration".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptBreakDuration => "Default break duration (minutes)".to_string(),
            Message::PromptBreakMessage => "Default break message (empty for generated text)".to_string(),
            Message::PromptPollInterval => "Poll interval (milliseconds)".to_string(),
            Message::PromptSoundEnabled => "Play a sound with notifications?".to_string(),

            // === GENERAL MESSAGES ===
            Message::InvalidTimeFormat(raw) => format!("Invalid time '{}', expected HH:MM", raw),
        };
        write!(f, "{}", message)
    }
}
