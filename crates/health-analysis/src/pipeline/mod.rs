//! Pipeline module.
//!
//! Wires the stages together: load, compute statistics and abnormal counts,
//! render, write.

mod runner;

pub use runner::{Analysis, Pipeline, RunOutcome};
