//! Invocation plumbing for the import pipeline: a filesystem artifact
//! source and the CLI entry point's helpers.

pub mod artifact;

pub use artifact::FileArtifact;
