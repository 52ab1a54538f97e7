//! Watches the timeline and notifies when a break is due.
//!
//! Runs the polling scheduler in the foreground until Ctrl-C. The poll
//! interval comes from the notifier configuration; notifications go to the
//! console sink. The timeline is re-read on every poll, so slots edited
//! from another terminal apply without restarting the watcher.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::notification::ConsoleSink;
use crate::libs::scheduler::Scheduler;
use crate::libs::store::TimelineStore;
use crate::libs::timeline::Timeline;
use crate::{msg_bail_anyhow, msg_error, msg_info};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let notifier = Config::read()?.notifier.unwrap_or_default();
    if notifier.poll_interval == 0 {
        msg_bail_anyhow!(Message::InvalidPollInterval);
    }

    let timeline = Timeline::new(TimelineStore::new()?);
    let mut scheduler = Scheduler::new(timeline, ConsoleSink, notifier.poll_interval);

    msg_info!(Message::WatcherStarted(notifier.poll_interval));

    tokio::select! {
        result = scheduler.run() => result?,
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
            }
            msg_info!(Message::WatcherStopped);
        }
    }

    Ok(())
}
