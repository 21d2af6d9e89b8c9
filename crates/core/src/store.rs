//! Collaborator traits consumed by the reconciliation engine.
//!
//! The engine treats the record store as the sole source of truth for
//! registrations and the artifact source as the owner of the uploaded
//! CSV. Both are async boundaries implemented elsewhere (Postgres and
//! the filesystem in production, in-memory fakes in tests).

use async_trait::async_trait;

use crate::batch::{PendingBatch, RecordRef};

/// Error from the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A lookup failed. Per-row recoverable: the engine records a
    /// diagnostic for the row and keeps going.
    #[error("record store query failed: {0}")]
    Query(String),

    /// The batch commit failed. Fatal for the whole run; no staged
    /// update has been applied.
    #[error("batch commit failed: {0}")]
    Commit(String),
}

/// Error from the artifact source.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact: {0}")]
    Read(String),

    #[error("failed to release artifact: {0}")]
    Release(String),
}

/// Store of existing registrations, addressable by NRP.
///
/// The store is expected to hold at most one registration per NRP;
/// when it does not, `find_by_key` returns an arbitrary single match.
/// `commit` must be atomic: either every staged update is applied or
/// none are. Committing an empty batch is a no-op.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Exact-match, case-sensitive lookup. `Ok(None)` means no
    /// registration carries this NRP.
    async fn find_by_key(&self, nrp: &str) -> Result<Option<RecordRef>, StoreError>;

    /// Apply the whole batch as one atomic operation. Returns the
    /// number of registrations updated.
    async fn commit(&self, batch: PendingBatch) -> Result<usize, StoreError>;
}

/// Source of the uploaded CSV artifact.
#[async_trait]
pub trait ArtifactSource: Send + Sync {
    /// Read the full artifact contents.
    async fn read(&self) -> Result<Vec<u8>, ArtifactError>;

    /// Delete the artifact. Idempotent: releasing an already-released
    /// artifact succeeds.
    async fn release(&self) -> Result<(), ArtifactError>;
}
