//! Postgres implementation of the engine's record store boundary.

use async_trait::async_trait;
use sqlx::PgPool;

use gradimport_core::batch::{PendingBatch, RecordRef};
use gradimport_core::store::{RecordStore, StoreError};

use crate::repositories::RegistrationRepo;

/// [`RecordStore`] backed by the `registrations` table.
///
/// The batch commit maps to a single transaction, so the atomicity
/// guarantee is Postgres's own.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn find_by_key(&self, nrp: &str) -> Result<Option<RecordRef>, StoreError> {
        let registration = RegistrationRepo::find_by_nrp(&self.pool, nrp)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(registration.map(|r| RecordRef { id: r.id }))
    }

    async fn commit(&self, batch: PendingBatch) -> Result<usize, StoreError> {
        if batch.is_empty() {
            return Ok(0);
        }
        let staged = batch.len();
        let applied = RegistrationRepo::apply_batch(&self.pool, batch.into_updates())
            .await
            .map_err(|e| StoreError::Commit(e.to_string()))?;
        if applied != staged {
            // A staged row vanished between lookup and commit; the
            // transaction still applied, so report rather than fail.
            tracing::warn!(staged, applied, "batch commit updated fewer rows than staged");
        }
        Ok(applied)
    }
}
