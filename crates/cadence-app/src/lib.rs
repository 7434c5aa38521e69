//! The `cadence` command-line tool: prints the next occurrences of a schedule
//! or checks whether an instant is on it.

pub mod cli;
pub mod commands;
pub mod logging;
