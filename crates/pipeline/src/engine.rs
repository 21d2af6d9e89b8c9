//! One import run: parse, validate, resolve, stage, commit, release.
//!
//! Rows are processed strictly in input order and every row-level
//! problem is recovered locally; only an unreadable artifact or a
//! failed batch commit aborts the run. The store is written exactly
//! once, at the commit point, so cancelling the run anywhere before
//! that leaves both the store and the artifact untouched.

use gradimport_core::batch::PendingBatch;
use gradimport_core::csv::{ParseError, RowReader};
use gradimport_core::outcome::{ImportOutcome, ImportReport, RowDiagnostic, RowOutcome};
use gradimport_core::store::{ArtifactError, ArtifactSource, RecordStore, StoreError};
use gradimport_core::validate::validate_row;

/// Fatal, run-level errors.
///
/// Row-level problems never surface here; they end up as diagnostics
/// in the [`ImportReport`].
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The artifact could not be read. Nothing was done; the artifact
    /// is retained.
    #[error("failed to read import artifact: {0}")]
    Artifact(#[from] ArtifactError),

    /// The artifact is not parseable as delimited text. No store
    /// interaction was attempted; the artifact is retained.
    #[error("could not parse import artifact: {0}")]
    Parse(#[from] ParseError),

    /// The batch commit failed. No staged update was applied and the
    /// artifact is retained for inspection.
    #[error(transparent)]
    Commit(StoreError),
}

/// Run one reconciliation pass of `artifact` against `store`.
///
/// Returns [`ImportOutcome::EmptyInput`] for a header-only or
/// zero-byte artifact. Otherwise every data row produces exactly one
/// diagnostic, in input order, and the staged updates are committed as
/// a single atomic batch before the artifact is released.
pub async fn run_import<A, S>(artifact: &A, store: &S) -> Result<ImportOutcome, ImportError>
where
    A: ArtifactSource + ?Sized,
    S: RecordStore + ?Sized,
{
    let data = artifact.read().await?;
    let reader = RowReader::new(&data)?;

    let mut batch = PendingBatch::new();
    let mut rows: Vec<RowDiagnostic> = Vec::new();
    let mut failed = 0usize;

    for (index, raw) in reader.enumerate() {
        let row = index + 1;
        let outcome = match validate_row(&raw) {
            Err(reason) => {
                tracing::warn!(row, %reason, "Row rejected");
                RowOutcome::Rejected { reason }
            }
            Ok(intent) => match store.find_by_key(&intent.nrp).await {
                Ok(Some(record)) => {
                    let replaced = batch.stage(record, &intent.nrp, intent.status, &intent.name);
                    if replaced {
                        tracing::warn!(
                            row,
                            nrp = %intent.nrp,
                            "Duplicate NRP in file; keeping the later row"
                        );
                    }
                    RowOutcome::Updated { nrp: intent.nrp }
                }
                Ok(None) => {
                    tracing::warn!(row, nrp = %intent.nrp, "NRP not found; row skipped");
                    RowOutcome::KeyNotFound { nrp: intent.nrp }
                }
                Err(err) => {
                    tracing::warn!(row, nrp = %intent.nrp, error = %err, "Lookup failed; row skipped");
                    RowOutcome::StoreRead {
                        nrp: intent.nrp,
                        message: err.to_string(),
                    }
                }
            },
        };

        if outcome.is_failure() {
            failed += 1;
        }
        rows.push(RowDiagnostic { row, outcome });
    }

    if rows.is_empty() {
        tracing::info!("Artifact held no data rows; releasing without store interaction");
        release_artifact(artifact).await;
        return Ok(ImportOutcome::EmptyInput);
    }

    // Single commit point. On failure the artifact is deliberately
    // retained so the upload can be inspected and retried.
    let updated = batch.len();
    store.commit(batch).await.map_err(ImportError::Commit)?;

    tracing::info!(updated, failed, total_rows = rows.len(), "Import finished");
    release_artifact(artifact).await;

    Ok(ImportOutcome::Completed(ImportReport {
        updated,
        failed,
        rows,
    }))
}

/// Release the artifact, logging rather than failing: by the time we
/// release, the store is already consistent.
async fn release_artifact<A: ArtifactSource + ?Sized>(artifact: &A) {
    if let Err(err) = artifact.release().await {
        tracing::warn!(error = %err, "Failed to release import artifact");
    } else {
        tracing::info!("Import artifact released");
    }
}
