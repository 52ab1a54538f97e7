//! Core library modules for the break-assistant application.
//!
//! The timeline engine and its data model live here, together with the
//! infrastructure the commands share: configuration, persistence paths,
//! message display, the notification surface and the polling scheduler.

pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod notification;
pub mod scheduler;
pub mod slot;
pub mod store;
pub mod timeline;
pub mod view;
