//! Registration model.

use gradimport_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `registrations` table.
///
/// `graduation_status` holds one of the literals from
/// [`gradimport_core::status::GraduationStatus::ALL`].
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Registration {
    pub id: DbId,
    /// Unique 10-digit registration number.
    pub nrp: String,
    pub name: String,
    pub graduation_status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
