//! Household task and reward tracker.
//!
//! Tasks and wishes are kept in flat text files, achievements in a
//! comma-separated file, and a command log drives every change.

pub mod child;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod reminders;
pub mod store;
pub mod types;
