//! Cadence integration test support.
//!
//! Re-exports the workspace crates so integration tests can use a single
//! `cadence_test::` path for the engine, the shared core and the command
//! layer of the binary.

pub use cadence_app::commands as app;
pub use cadence_core::{config, constants, options};
pub use cadence_rule::*;
