//! Integration tests for the cadence workspace.

mod commands;
mod helpers;
mod properties;
mod rrule_cross_check;
mod schedules;
