//! Per-run outcome and per-row diagnostic types.

use serde::Serialize;

use crate::validate::RejectionReason;

/// What happened to a single input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RowOutcome {
    /// The row was staged into the batch and committed.
    Updated { nrp: String },

    /// The row failed validation.
    Rejected {
        #[serde(flatten)]
        reason: RejectionReason,
    },

    /// The row validated but no registration carries its NRP.
    KeyNotFound { nrp: String },

    /// The lookup for this row failed; later rows were still
    /// processed.
    StoreRead { nrp: String, message: String },
}

impl RowOutcome {
    /// `true` for every variant that counts toward the `failed` total.
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Updated { .. })
    }
}

/// Diagnostic for one input row. `row` is the 1-based position of the
/// data row in the file (the header is row 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDiagnostic {
    pub row: usize,
    #[serde(flatten)]
    pub outcome: RowOutcome,
}

/// Counts and ordered per-row diagnostics for one completed run.
///
/// `rows` is in input order regardless of where each row failed;
/// operators read the log top-to-bottom against the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Distinct registrations updated by the committed batch.
    pub updated: usize,
    /// Rows that did not contribute an update.
    pub failed: usize,
    pub rows: Vec<RowDiagnostic>,
}

/// Result of one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ImportOutcome {
    /// The batch was committed and the artifact released.
    Completed(ImportReport),

    /// The artifact held no data rows. It was released without any
    /// store interaction; this is "nothing to do", not a failure.
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updated_is_not_a_failure() {
        let outcome = RowOutcome::Updated {
            nrp: "1234567890".into(),
        };
        assert!(!outcome.is_failure());
    }

    #[test]
    fn non_updated_outcomes_are_failures() {
        let not_found = RowOutcome::KeyNotFound {
            nrp: "1234567890".into(),
        };
        let read = RowOutcome::StoreRead {
            nrp: "1234567890".into(),
            message: "timeout".into(),
        };
        assert!(not_found.is_failure());
        assert!(read.is_failure());
    }

    #[test]
    fn report_serializes_flat_diagnostics() {
        let report = ImportReport {
            updated: 1,
            failed: 0,
            rows: vec![RowDiagnostic {
                row: 1,
                outcome: RowOutcome::Updated {
                    nrp: "1234567890".into(),
                },
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["updated"], 1);
        assert_eq!(json["rows"][0]["row"], 1);
        assert_eq!(json["rows"][0]["outcome"], "updated");
    }
}
