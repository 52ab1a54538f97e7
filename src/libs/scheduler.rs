//! Cooperative polling loop that turns the timeline into notifications.
//!
//! The scheduler owns a [`Timeline`] and a [`NotificationSink`] and wakes up
//! on a fixed interval. Each tick it asks the engine for the next break as
//! seen from the previous tick's instant and dispatches a
//! [`BreakNotice::Scheduled`] for every occurrence that fell due in between.
//! Querying from the previous tick matters twice over: the engine only ever
//! reports strictly-future occurrences, so the instant itself has to be
//! observed here, and a tick that jumps a day boundary (suspend/resume)
//! re-queries from the start of the new day so a slot that became active at
//! the rollover is still seen. Occurrences already dispatched can never
//! repeat because the query window always starts at or after them.
//!
//! All timing lives in this module; the engine stays a synchronous query
//! surface with no timers or threads of its own. The `tick` step is a plain
//! function of `now` so tests can drive it with fabricated clocks instead of
//! sleeping.

use crate::libs::notification::{BreakNotice, NotificationSink};
use crate::libs::slot::BreakSlot;
use crate::libs::timeline::Timeline;
use anyhow::Result;
use chrono::{Local, NaiveDateTime, NaiveTime};
use tokio::time::{self, Duration};
use tracing::warn;

/// Interval-driven break watcher.
pub struct Scheduler<S: NotificationSink> {
    timeline: Timeline,
    sink: S,
    poll_interval: u64,
    last_tick: Option<NaiveDateTime>,
    upcoming: Option<(BreakSlot, NaiveDateTime)>,
}

impl<S: NotificationSink> Scheduler<S> {
    pub fn new(timeline: Timeline, sink: S, poll_interval: u64) -> Self {
        Self {
            timeline,
            sink,
            poll_interval,
            last_tick: None,
            upcoming: None,
        }
    }

    /// Runs the polling loop until the task is cancelled.
    ///
    /// The timeline is re-read from its store on every poll, so slots added
    /// or changed from another process show up without a restart.
    pub async fn run(&mut self) -> Result<()> {
        let mut interval = time::interval(Duration::from_millis(self.poll_interval));
        loop {
            interval.tick().await;
            self.timeline.reload();
            self.tick(Local::now().naive_local());
        }
    }

    /// One poll step: dispatches every occurrence that fell due since the
    /// previous tick. Returns whether anything was dispatched, which is what
    /// the tests assert on.
    pub fn tick(&mut self, now: NaiveDateTime) -> bool {
        // The query window opens at the previous tick, or at midnight when
        // the tick crossed into a new day; the engine's active-today filter
        // would otherwise hide slots that only became active at the rollover.
        let mut from = match self.last_tick {
            Some(prev) if prev.date() == now.date() => prev,
            Some(_) => now.date().and_time(NaiveTime::MIN),
            None => now,
        };
        self.last_tick = Some(now);

        let mut dispatched = false;
        loop {
            match self.timeline.next_break(from) {
                Some((slot, occurrence)) if occurrence <= now => {
                    let notice = BreakNotice::Scheduled { slot, occurrence };
                    if let Err(e) = self.sink.notify(&notice) {
                        warn!("notification sink failed: {e}");
                    }
                    dispatched = true;
                    // Advance past the fired occurrence so the drain makes
                    // progress and the same instant cannot fire again
                    from = occurrence;
                }
                other => {
                    self.upcoming = other;
                    break;
                }
            }
        }
        dispatched
    }

    /// The upcoming break as of the last tick, if any.
    pub fn pending(&self) -> Option<&(BreakSlot, NaiveDateTime)> {
        self.upcoming.as_ref()
    }

    /// Access to the owned timeline, for callers that combine watching with
    /// occasional queries.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}
