//! Shared building blocks for the cadence workspace: errors, calendar options,
//! calendar unit constants and configuration loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod options;
