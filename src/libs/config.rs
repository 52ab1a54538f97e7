//! Configuration management for the break-assistant application.
//!
//! Settings live in a JSON file in the platform application data directory
//! and are organized as optional modules: defaults for breaks that
//! under-specify their duration or message, and tuning for the notification
//! watcher. Unconfigured modules are omitted from the file entirely, and a
//! missing file means "run with defaults" rather than an error.
//!
//! An interactive setup wizard (`break-assistant init`) lets users pick the
//! modules they care about and fill in values with sensible defaults
//! pre-filled.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use break_assistant::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load existing configuration or fall back to defaults
//! let config = Config::read()?;
//! let defaults = config.breaks.unwrap_or_default();
//! println!("Fallback break duration: {} min", defaults.break_duration);
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Fallback values applied when a break slot under-specifies itself.
///
/// A slot with an empty message gets a generated default built from these
/// values, and manual breaks started without an explicit duration use
/// `break_duration`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BreaksConfig {
    /// Default break length in minutes.
    pub break_duration: i64,

    /// Default reminder text. Empty means "generate from the duration".
    pub break_message: String,
}

/// Tuning for the background notification watcher.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NotifierConfig {
    /// Poll interval in milliseconds between next-break checks.
    ///
    /// The watcher wakes up on this interval, asks the timeline for the next
    /// occurrence and fires a notification once wall-clock time passes it.
    /// One-second granularity is the design floor, so values below 1000 only
    /// buy latency, not precision.
    pub poll_interval: u64,

    /// Whether the notification sink should also play a sound.
    ///
    /// Audio playback is delegated to the sink implementation; the engine
    /// and watcher only carry the flag.
    pub sound_enabled: bool,
}

impl Default for BreaksConfig {
    fn default() -> Self {
        BreaksConfig {
            break_duration: 5,
            break_message: String::new(),
        }
    }
}

impl Default for NotifierConfig {
    /// One-second polling with sound on, matching the desktop application's
    /// historical behavior.
    fn default() -> Self {
        NotifierConfig {
            poll_interval: 1000,
            sound_enabled: true,
        }
    }
}

/// Root configuration object.
///
/// Every module is optional so users configure only what they need and the
/// stored JSON stays minimal (`skip_serializing_if` drops absent modules).
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Fallback duration/message defaults for break slots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breaks: Option<BreaksConfig>,

    /// Notification watcher settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifier: Option<NotifierConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents the available modules, pre-fills current values as defaults
    /// and returns the updated configuration for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = ["Breaks", "Notifier"];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match modules[selection] {
                "Breaks" => {
                    let default = config.breaks.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleBreaks);
                    config.breaks = Some(BreaksConfig {
                        break_duration: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBreakDuration.to_string())
                            .default(default.break_duration)
                            .interact_text()?,
                        break_message: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBreakMessage.to_string())
                            .default(default.break_message)
                            .allow_empty(true)
                            .interact_text()?,
                    });
                }
                "Notifier" => {
                    let default = config.notifier.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleNotifier);
                    config.notifier = Some(NotifierConfig {
                        poll_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPollInterval.to_string())
                            .default(default.poll_interval)
                            .interact_text()?,
                        sound_enabled: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptSoundEnabled.to_string())
                            .default(default.sound_enabled)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
