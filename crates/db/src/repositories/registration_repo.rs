//! Repository for the `registrations` table.

use sqlx::PgPool;

use gradimport_core::batch::StagedUpdate;

use crate::models::registration::Registration;

/// Column list for registrations queries.
const COLUMNS: &str = "id, nrp, name, graduation_status, created_at, updated_at";

/// Provides lookup and batch-update operations for registrations.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Find a registration by its registration number.
    ///
    /// `nrp` carries a unique index, so at most one row matches; the
    /// `ORDER BY id LIMIT 1` keeps the result deterministic if the
    /// data ever violates that expectation.
    pub async fn find_by_nrp(pool: &PgPool, nrp: &str) -> Result<Option<Registration>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM registrations WHERE nrp = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Registration>(&query)
            .bind(nrp)
            .fetch_optional(pool)
            .await
    }

    /// Apply a batch of staged updates within one transaction.
    ///
    /// Either every update lands or, on error, the transaction rolls
    /// back and none do. Returns the number of rows updated.
    pub async fn apply_batch(
        pool: &PgPool,
        updates: Vec<StagedUpdate>,
    ) -> Result<usize, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut applied = 0usize;

        for update in &updates {
            let result = sqlx::query(
                "UPDATE registrations \
                 SET graduation_status = $2, name = $3, updated_at = NOW() \
                 WHERE id = $1",
            )
            .bind(update.record.id)
            .bind(update.status.as_str())
            .bind(&update.name)
            .execute(&mut *tx)
            .await?;
            applied += result.rows_affected() as usize;
        }

        tx.commit().await?;
        Ok(applied)
    }
}
