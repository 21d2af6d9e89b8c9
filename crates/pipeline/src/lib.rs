//! The reconciliation engine: orchestrates parser, validator, and
//! record store for one import run.

pub mod engine;

pub use engine::{run_import, ImportError};
