//! Pure domain logic for the graduation-status CSV import pipeline.
//!
//! This crate has no I/O of its own. It provides:
//!
//! - CSV row parsing ([`csv`])
//! - Row validation into update intents ([`validate`])
//! - The pending-batch builder ([`batch`])
//! - Collaborator traits for the record store and the input artifact
//!   ([`store`])
//! - Per-run outcome and diagnostic types ([`outcome`])

pub mod batch;
pub mod csv;
pub mod outcome;
pub mod status;
pub mod store;
pub mod types;
pub mod validate;
