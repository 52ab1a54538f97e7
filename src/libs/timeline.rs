//! Break timeline engine: the mutable collection of break slots.
//!
//! The timeline owns its slots, keeps them sorted by start time, gates every
//! add/edit behind an overlap check, and answers the one question the rest
//! of the application cares about: given "now", which break fires next?
//!
//! ## Design
//!
//! - **Synchronous, thread-free**: every operation is a plain method call
//!   over in-memory data. The watch loop lives in [`scheduler`](crate::libs::scheduler)
//!   and treats the timeline as a pure query/mutation surface.
//! - **Write-through persistence**: each mutation saves the whole timeline
//!   immediately. A failed save is logged and swallowed so the application
//!   keeps working from memory; a failed load starts from an empty timeline.
//! - **Two-day horizon**: `next_break` looks at today and tomorrow only. A
//!   weekdays slot queried on a Friday evening after its start time yields
//!   nothing, not the following Monday. That limitation is intentional and
//!   covered by tests.
//!
//! ## Overlap rule
//!
//! Two slots overlap when their `[start, start + duration)` minute ranges
//! intersect. The check is pattern-agnostic: a weekdays slot and a weekends
//! slot at the same time still conflict. Disabled slots neither block nor get
//! checked. Range ends are computed on the same notional day's clock with no
//! midnight carry (see [`BreakSlot::end_time`]).

use crate::libs::messages::Message;
use crate::libs::slot::{BreakSlot, RepeatPattern};
use crate::libs::store::TimelineStore;
use crate::msg_debug;
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Recoverable engine errors, surfaced to the caller for display.
///
/// Persistence problems are deliberately absent: load and save failures are
/// handled inside the engine and never propagate.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// The candidate slot's time range intersects an enabled slot.
    #[error("Break slot at {start} overlaps with existing slots")]
    Overlap { start: String },

    /// No slot with the requested id exists.
    #[error("Break slot with id {0} not found")]
    SlotNotFound(String),
}

/// Top-level record container of the timeline file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TimelineFile {
    break_slots: Vec<BreakSlot>,
}

/// Partial update for [`Timeline::edit`]; `None` fields keep their value.
#[derive(Debug, Default, Clone)]
pub struct SlotPatch {
    pub start_time: Option<NaiveTime>,
    pub duration_minutes: Option<i64>,
    pub message: Option<String>,
    pub repeat_pattern: Option<RepeatPattern>,
    pub enabled: Option<bool>,
}

/// The ordered collection of break slots for one profile.
pub struct Timeline {
    slots: Vec<BreakSlot>,
    store: TimelineStore,
}

impl Timeline {
    /// Loads the timeline from the given store.
    ///
    /// A missing file yields an empty timeline. An unreadable or unparseable
    /// file also yields an empty timeline; the failure is logged and the
    /// in-memory state starts clean rather than aborting startup.
    pub fn new(store: TimelineStore) -> Self {
        let slots = Self::load_slots(&store);
        let mut timeline = Self { slots, store };
        timeline.sort_slots();
        timeline
    }

    /// Re-reads the timeline from its store, replacing the in-memory slots.
    ///
    /// Lets long-running callers such as the watch loop pick up slots added
    /// or changed by another process. Same recovery policy as [`new`](Self::new).
    pub fn reload(&mut self) {
        self.slots = Self::load_slots(&self.store);
        self.sort_slots();
    }

    fn load_slots(store: &TimelineStore) -> Vec<BreakSlot> {
        match store.read() {
            Ok(Some(raw)) => match serde_json::from_str::<TimelineFile>(&raw) {
                Ok(file) => {
                    msg_debug!(format!("Loaded {} break slots from timeline", file.break_slots.len()));
                    file.break_slots
                }
                Err(e) => {
                    warn!("{}", Message::TimelineLoadFailed(e.to_string()));
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("{}", Message::TimelineLoadFailed(e.to_string()));
                Vec::new()
            }
        }
    }

    /// Adds a new break slot.
    ///
    /// Rejects the candidate with [`TimelineError::Overlap`] if its time
    /// range intersects any enabled slot; otherwise inserts, re-sorts and
    /// saves. Returns a clone of the stored slot.
    pub fn add(
        &mut self,
        start_time: NaiveTime,
        duration_minutes: i64,
        message: &str,
        repeat_pattern: RepeatPattern,
        enabled: bool,
    ) -> Result<BreakSlot, TimelineError> {
        let slot = BreakSlot::new(start_time, duration_minutes, message, repeat_pattern, enabled);

        if self.has_overlap(&slot, None) {
            return Err(TimelineError::Overlap {
                start: start_time.format("%H:%M").to_string(),
            });
        }

        self.slots.push(slot.clone());
        self.sort_slots();
        self.save();
        Ok(slot)
    }

    /// Edits an existing slot field-by-field.
    ///
    /// Builds the hypothetical merged slot first and re-runs the overlap
    /// check against everything except the slot being edited; only then are
    /// the changes applied. The id is regenerated only when the start time
    /// changed, matching the stored-id semantics of the timeline format.
    pub fn edit(&mut self, slot_id: &str, patch: SlotPatch) -> Result<BreakSlot, TimelineError> {
        let index = self
            .slots
            .iter()
            .position(|s| s.id == slot_id)
            .ok_or_else(|| TimelineError::SlotNotFound(slot_id.to_string()))?;

        let current = &self.slots[index];
        let merged = BreakSlot::new(
            patch.start_time.unwrap_or(current.start_time),
            patch.duration_minutes.unwrap_or(current.duration_minutes),
            patch.message.as_deref().unwrap_or(&current.message),
            patch.repeat_pattern.unwrap_or(current.repeat_pattern),
            patch.enabled.unwrap_or(current.enabled),
        );

        if self.has_overlap(&merged, Some(slot_id)) {
            return Err(TimelineError::Overlap {
                start: merged.start_time.format("%H:%M").to_string(),
            });
        }

        let slot = &mut self.slots[index];
        let start_changed = patch.start_time.is_some_and(|t| t != slot.start_time);
        if let Some(start_time) = patch.start_time {
            slot.start_time = start_time;
        }
        if let Some(duration) = patch.duration_minutes {
            slot.duration_minutes = duration;
        }
        if let Some(message) = patch.message {
            slot.message = message;
        }
        if let Some(pattern) = patch.repeat_pattern {
            slot.repeat_pattern = pattern;
        }
        if let Some(enabled) = patch.enabled {
            slot.enabled = enabled;
        }
        if start_changed {
            slot.id = slot.generate_id();
        }
        let updated = slot.clone();

        self.sort_slots();
        self.save();
        Ok(updated)
    }

    /// Removes a slot by id. Idempotent: returns whether a removal occurred,
    /// never an error. Saves only when something changed.
    pub fn delete(&mut self, slot_id: &str) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.id != slot_id);
        let removed = self.slots.len() < before;
        if removed {
            self.save();
        }
        removed
    }

    /// Looks up a slot by id.
    pub fn get(&self, slot_id: &str) -> Option<BreakSlot> {
        self.slots.iter().find(|s| s.id == slot_id).cloned()
    }

    /// Snapshot of all slots, sorted by start time.
    pub fn slots(&self) -> Vec<BreakSlot> {
        self.slots.clone()
    }

    /// Slots that are enabled and whose pattern matches `now`'s weekday.
    pub fn active_slots(&self, now: NaiveDateTime) -> Vec<BreakSlot> {
        self.slots.iter().filter(|s| s.is_active_on(now.date())).cloned().collect()
    }

    /// The next break and its occurrence instant, or `None`.
    ///
    /// For every slot active today the engine asks for an occurrence today
    /// (strictly after `now`), falling back to tomorrow if the pattern is
    /// active then. The earliest candidate wins; ties go to the first slot
    /// evaluated. Slots whose pattern is inactive today, or whose only
    /// future occurrence is beyond tomorrow, are not found: the lookahead
    /// horizon is today and tomorrow only.
    pub fn next_break(&self, now: NaiveDateTime) -> Option<(BreakSlot, NaiveDateTime)> {
        let mut next: Option<(BreakSlot, NaiveDateTime)> = None;

        for slot in self.slots.iter().filter(|s| s.is_active_on(now.date())) {
            let occurrence = slot.next_occurrence(now).or_else(|| slot.next_occurrence_tomorrow(now));
            if let Some(occurrence) = occurrence {
                if next.as_ref().is_none_or(|(_, best)| occurrence < *best) {
                    next = Some((slot.clone(), occurrence));
                }
            }
        }

        next
    }

    /// Advisory validation pass for a UI panel; never mutates or rejects.
    ///
    /// Reports overlapping enabled slots, non-positive durations, and
    /// durations over 120 minutes. Unknown repeat patterns cannot occur here:
    /// the pattern is a closed enum and unrecognized stored values fail the
    /// record parse instead.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for slot in &self.slots {
            if slot.enabled && self.has_overlap(slot, Some(&slot.id)) {
                issues.push(format!(
                    "Break slot at {} overlaps with another slot",
                    slot.start_time.format("%H:%M")
                ));
            }
        }

        for slot in &self.slots {
            if slot.duration_minutes <= 0 {
                issues.push(format!(
                    "Break slot at {} has invalid duration: {}",
                    slot.start_time.format("%H:%M"),
                    slot.duration_minutes
                ));
            } else if slot.duration_minutes > 120 {
                issues.push(format!(
                    "Break slot at {} has duration too long: {} minutes",
                    slot.start_time.format("%H:%M"),
                    slot.duration_minutes
                ));
            }
        }

        issues
    }

    /// True when `candidate`'s `[start, end)` range intersects any enabled
    /// slot other than `exclude_id`. Pattern-agnostic by design: slots that
    /// never co-occur on the same calendar day still conflict.
    fn has_overlap(&self, candidate: &BreakSlot, exclude_id: Option<&str>) -> bool {
        let new_start = candidate.start_time;
        let new_end = candidate.end_time();

        self.slots.iter().any(|slot| {
            if exclude_id == Some(slot.id.as_str()) {
                return false;
            }
            if !slot.enabled {
                return false;
            }
            new_start < slot.end_time() && new_end > slot.start_time
        })
    }

    fn sort_slots(&mut self) {
        self.slots.sort_by_key(|s| s.start_time);
    }

    /// Write-through save. Failures are logged and swallowed: the in-memory
    /// state stays authoritative and the application remains usable.
    fn save(&self) {
        let file = TimelineFile { break_slots: self.slots.clone() };
        let raw = match serde_json::to_string_pretty(&file) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("{}", Message::TimelineSaveFailed(e.to_string()));
                return;
            }
        };
        if let Err(e) = self.store.write(&raw) {
            warn!("{}", Message::TimelineSaveFailed(e.to_string()));
        }
    }
}
