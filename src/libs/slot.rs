//! Break slot data model and per-slot occurrence math.
//!
//! A [`BreakSlot`] is one recurring or one-off break definition: a wall-clock
//! start time, a duration in minutes, an optional custom message, a repeat
//! pattern and an enabled flag. The slot carries its own occurrence logic
//! (is it active on a given date, when does it next fire) so the timeline
//! engine can stay a thin aggregation layer over pure `(slot, now)` queries.
//!
//! ## Identity
//!
//! Slot ids are derived from `(start_time, duration, repeat_pattern)` in the
//! form `"HHMM_duration_pattern"`. Two slots with identical values share an
//! id; this logical identity is kept for compatibility with stored timelines.
//! The id is regenerated when the start time changes.
//!
//! ## Serialization
//!
//! Slots serialize to the fixed record shape used by the timeline file:
//! `start_time` as zero-padded `"HH:MM"`, `repeat_pattern` as a lowercase
//! string. Loading is lenient: an unparseable duration falls back to 5
//! minutes and a missing `enabled` flag defaults to true, so one bad field
//! never discards a whole stored timeline.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Fallback duration in minutes for malformed stored records.
pub const DEFAULT_DURATION: i64 = 5;

/// Classification of which calendar days a slot is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RepeatPattern {
    /// Every day of the week.
    Daily,
    /// Monday through Friday.
    Weekdays,
    /// Saturday and Sunday.
    Weekends,
    /// A one-off break. The original application never stored the target
    /// date, so `once` behaves like `daily` for day matching.
    Once,
}

impl RepeatPattern {
    /// Returns true if the pattern is active on the given calendar date.
    pub fn matches_date(&self, date: NaiveDate) -> bool {
        match self {
            RepeatPattern::Daily | RepeatPattern::Once => true,
            RepeatPattern::Weekdays => date.weekday().num_days_from_monday() < 5,
            RepeatPattern::Weekends => date.weekday().num_days_from_monday() >= 5,
        }
    }
}

impl Display for RepeatPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            RepeatPattern::Daily => "daily",
            RepeatPattern::Weekdays => "weekdays",
            RepeatPattern::Weekends => "weekends",
            RepeatPattern::Once => "once",
        };
        write!(f, "{}", name)
    }
}

/// A single break slot in the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakSlot {
    /// Derived identifier, a function of (start_time, duration, repeat_pattern).
    pub id: String,

    /// Wall-clock start time of the break, no date component.
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,

    /// Break length in minutes. Stored records with an unparseable value
    /// fall back to [`DEFAULT_DURATION`] on load.
    #[serde(rename = "duration", deserialize_with = "lenient_minutes")]
    pub duration_minutes: i64,

    /// Custom reminder text. Empty means "use the generated default".
    #[serde(default)]
    pub message: String,

    /// Which days the slot fires on.
    #[serde(default = "default_pattern")]
    pub repeat_pattern: RepeatPattern,

    /// Disabled slots are excluded from all active/next-occurrence queries
    /// and never participate in overlap checks.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_pattern() -> RepeatPattern {
    RepeatPattern::Daily
}

fn default_enabled() -> bool {
    true
}

impl BreakSlot {
    /// Creates a new slot and derives its id from the identifying fields.
    pub fn new(start_time: NaiveTime, duration_minutes: i64, message: &str, repeat_pattern: RepeatPattern, enabled: bool) -> Self {
        let mut slot = Self {
            id: String::new(),
            start_time,
            duration_minutes,
            message: message.to_string(),
            repeat_pattern,
            enabled,
        };
        slot.id = slot.generate_id();
        slot
    }

    /// Derives the slot id: `"HHMM_duration_pattern"`. Two slots with
    /// identical identifying values collide on purpose.
    pub fn generate_id(&self) -> String {
        use chrono::Timelike;
        format!(
            "{:02}{:02}_{}_{}",
            self.start_time.hour(),
            self.start_time.minute(),
            self.duration_minutes,
            self.repeat_pattern
        )
    }

    /// End of the break on the same notional day's clock. The addition wraps
    /// past midnight without a day carry: a 23:50 + 30min break "ends" at
    /// 00:20, which is how overlap ranges were compared in the original
    /// timeline format.
    pub fn end_time(&self) -> NaiveTime {
        let (end, _wrapped) = self.start_time.overflowing_add_signed(Duration::minutes(self.duration_minutes));
        end
    }

    /// Returns true if the slot is enabled and its pattern matches the date.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.enabled && self.repeat_pattern.matches_date(date)
    }

    /// Next occurrence today: today's date combined with the start time,
    /// only if that instant is still strictly ahead of `now`.
    pub fn next_occurrence(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        if !self.is_active_on(now.date()) {
            return None;
        }
        let occurrence = now.date().and_time(self.start_time);
        if occurrence > now {
            Some(occurrence)
        } else {
            None
        }
    }

    /// Next occurrence tomorrow, if the pattern is active on tomorrow's
    /// weekday. Together with [`next_occurrence`](Self::next_occurrence) this
    /// spans the engine's whole two-day lookahead horizon.
    pub fn next_occurrence_tomorrow(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let tomorrow = now.date().succ_opt()?;
        if self.enabled && self.repeat_pattern.matches_date(tomorrow) {
            Some(tomorrow.and_time(self.start_time))
        } else {
            None
        }
    }
}

/// Serde helpers for the `"HH:MM"` wire format of slot start times.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Accepts an integer, a numeric string, or garbage; garbage becomes the
/// default duration so a single bad record does not fail the whole load.
fn lenient_minutes<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let minutes = match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(minutes.unwrap_or(DEFAULT_DURATION))
}
