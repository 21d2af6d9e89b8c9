//! The pending batch of staged registration updates.
//!
//! The batch is an explicit value threaded through the engine's row
//! loop and consumed exactly once by the store's `commit`. Staging
//! never touches the store.

use serde::Serialize;

use crate::status::GraduationStatus;
use crate::types::DbId;

/// Opaque handle to an existing registration in the record store.
///
/// The engine never creates or deletes records; it only references
/// them by this handle when staging field updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordRef {
    pub id: DbId,
}

/// One staged field update: overwrite `status` and `name` on the
/// referenced registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedUpdate {
    pub record: RecordRef,
    pub nrp: String,
    pub status: GraduationStatus,
    pub name: String,
}

/// An ordered set of staged updates, committed as one atomic group.
///
/// Staging the same NRP twice replaces the earlier entry in place:
/// the last occurrence in the input wins and a key is never committed
/// twice within one run.
#[derive(Debug, Default)]
pub struct PendingBatch {
    updates: Vec<StagedUpdate>,
}

impl PendingBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an update. Returns `true` if an earlier entry for the
    /// same NRP was replaced.
    pub fn stage(
        &mut self,
        record: RecordRef,
        nrp: &str,
        status: GraduationStatus,
        name: &str,
    ) -> bool {
        let update = StagedUpdate {
            record,
            nrp: nrp.to_string(),
            status,
            name: name.to_string(),
        };
        match self.updates.iter_mut().find(|u| u.nrp == nrp) {
            Some(existing) => {
                *existing = update;
                true
            }
            None => {
                self.updates.push(update);
                false
            }
        }
    }

    /// Number of distinct registrations staged.
    pub fn len(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn updates(&self) -> &[StagedUpdate] {
        &self.updates
    }

    pub fn into_updates(self) -> Vec<StagedUpdate> {
        self.updates
    }
}
