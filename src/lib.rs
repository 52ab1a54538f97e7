//! # Break Assistant
//!
//! A command-line utility for managing a timeline of recurring break slots
//! and getting notified when it is time to step away from the keyboard.
//!
//! ## Features
//!
//! - **Break Timeline**: Create, edit and delete recurring break slots with
//!   overlap protection
//! - **Repeat Patterns**: Daily, weekdays-only, weekends-only or one-off
//!   breaks
//! - **Next-Break Queries**: Compute the next occurrence within a
//!   today/tomorrow horizon
//! - **Break Watcher**: Background polling loop that fires notifications
//!   when a break is due
//! - **Timeline Validation**: Advisory checks for overlaps and suspicious
//!   durations
//!
//! ## Usage
//!
//! ```rust,no_run
//! use break_assistant::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
