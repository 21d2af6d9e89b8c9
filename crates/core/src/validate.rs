//! Row validation: raw CSV rows become update intents or rejections.
//!
//! `validate_row` is a pure function — no store access, no I/O — so it
//! is unit-testable on its own. At most one rejection is reported per
//! row; validation stops at the first failing check.

use serde::Serialize;

use crate::csv::RawRow;
use crate::status::GraduationStatus;

/// CSV column carrying the registrant's display name.
pub const COL_NAME: &str = "Nama";

/// CSV column carrying the registration number.
pub const COL_NRP: &str = "NRP";

/// CSV column carrying the graduation status literal.
pub const COL_STATUS: &str = "Status";

/// Required length of a registration number.
pub const NRP_LENGTH: usize = 10;

/// A validated, normalized instruction to update one registration.
///
/// Only constructed after all three fields pass validation; all values
/// are already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateIntent {
    /// Registration number, exactly 10 ASCII digits.
    pub nrp: String,
    /// New graduation status.
    pub status: GraduationStatus,
    /// New display name, non-empty.
    pub name: String,
}

/// Why a row did not yield an [`UpdateIntent`].
///
/// Carries the offending raw (trimmed) values for diagnostics. A
/// rejection never aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectionReason {
    #[error("row is incomplete (Nama: {name:?}, NRP: {nrp:?}, Status: {status:?})")]
    MissingField {
        name: String,
        nrp: String,
        status: String,
    },

    #[error("NRP {nrp:?} is not a 10-digit number")]
    InvalidKeyFormat { nrp: String },

    #[error("unrecognised status {status:?} for NRP {nrp}")]
    InvalidStatusValue { nrp: String, status: String },
}

/// Validate one raw row.
///
/// A column that is missing from the row entirely is treated the same
/// as one that is present but blank: both reject as `MissingField`,
/// with the raw value reported as the empty string.
pub fn validate_row(row: &RawRow) -> Result<UpdateIntent, RejectionReason> {
    let name = row.get(COL_NAME).unwrap_or("").trim();
    let nrp = row.get(COL_NRP).unwrap_or("").trim();
    let status = row.get(COL_STATUS).unwrap_or("").trim();

    if name.is_empty() || nrp.is_empty() || status.is_empty() {
        return Err(RejectionReason::MissingField {
            name: name.to_string(),
            nrp: nrp.to_string(),
            status: status.to_string(),
        });
    }

    if nrp.len() != NRP_LENGTH || !nrp.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RejectionReason::InvalidKeyFormat {
            nrp: nrp.to_string(),
        });
    }

    let Some(status) = GraduationStatus::from_str(status) else {
        return Err(RejectionReason::InvalidStatusValue {
            nrp: nrp.to_string(),
            status: status.to_string(),
        });
    };

    Ok(UpdateIntent {
        nrp: nrp.to_string(),
        status,
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn row(name: &str, nrp: &str, status: &str) -> RawRow {
        RawRow::from_pairs(&[(COL_NAME, name), (COL_NRP, nrp), (COL_STATUS, status)])
    }

    #[test]
    fn valid_row_yields_trimmed_intent() {
        let intent = validate_row(&row("  Ada Lovelace ", " 1234567890", "Lulus ")).unwrap();
        assert_eq!(intent.name, "Ada Lovelace");
        assert_eq!(intent.nrp, "1234567890");
        assert_eq!(intent.status, GraduationStatus::Passed);
    }

    #[test]
    fn each_recognised_status_is_accepted() {
        for (literal, expected) in [
            ("Lulus", GraduationStatus::Passed),
            ("Tidak Lulus", GraduationStatus::NotPassed),
            ("Menunggu", GraduationStatus::Pending),
        ] {
            let intent = validate_row(&row("Ada", "1234567890", literal)).unwrap();
            assert_eq!(intent.status, expected);
        }
    }

    #[test]
    fn empty_name_is_missing_field() {
        assert_matches!(
            validate_row(&row("", "1234567890", "Lulus")),
            Err(RejectionReason::MissingField { .. })
        );
    }

    #[test]
    fn whitespace_only_name_is_missing_field() {
        assert_matches!(
            validate_row(&row("   ", "1234567890", "Lulus")),
            Err(RejectionReason::MissingField { .. })
        );
    }

    #[test]
    fn empty_nrp_is_missing_field_not_key_format() {
        assert_matches!(
            validate_row(&row("Ada", "", "Lulus")),
            Err(RejectionReason::MissingField { .. })
        );
    }

    #[test]
    fn empty_status_is_missing_field_not_status_value() {
        assert_matches!(
            validate_row(&row("Ada", "1234567890", "")),
            Err(RejectionReason::MissingField { .. })
        );
    }

    #[test]
    fn absent_column_is_missing_field() {
        let row = RawRow::from_pairs(&[(COL_NAME, "Ada"), (COL_NRP, "1234567890")]);
        assert_matches!(
            validate_row(&row),
            Err(RejectionReason::MissingField { status, .. }) if status.is_empty()
        );
    }

    #[test]
    fn missing_field_carries_raw_values() {
        assert_matches!(
            validate_row(&row("", "9999999999", "Lulus")),
            Err(RejectionReason::MissingField { name, nrp, status }) => {
                assert_eq!(name, "");
                assert_eq!(nrp, "9999999999");
                assert_eq!(status, "Lulus");
            }
        );
    }

    #[test]
    fn ten_digit_nrp_accepted() {
        assert!(validate_row(&row("Ada", "0123456789", "Lulus")).is_ok());
    }

    #[test]
    fn short_nrp_rejected() {
        assert_matches!(
            validate_row(&row("Ada", "12345", "Lulus")),
            Err(RejectionReason::InvalidKeyFormat { nrp }) if nrp == "12345"
        );
    }

    #[test]
    fn long_nrp_rejected() {
        assert_matches!(
            validate_row(&row("Ada", "12345678901", "Lulus")),
            Err(RejectionReason::InvalidKeyFormat { .. })
        );
    }

    #[test]
    fn non_digit_nrp_rejected() {
        assert_matches!(
            validate_row(&row("Ada", "12345abcde", "Lulus")),
            Err(RejectionReason::InvalidKeyFormat { .. })
        );
    }

    #[test]
    fn unknown_status_rejected() {
        assert_matches!(
            validate_row(&row("Ada", "1234567890", "Graduated")),
            Err(RejectionReason::InvalidStatusValue { nrp, status }) => {
                assert_eq!(nrp, "1234567890");
                assert_eq!(status, "Graduated");
            }
        );
    }

    #[test]
    fn uppercase_status_rejected() {
        assert_matches!(
            validate_row(&row("Ada", "1234567890", "LULUS")),
            Err(RejectionReason::InvalidStatusValue { .. })
        );
    }

    #[test]
    fn validation_is_deterministic() {
        let r = row("Ada", "1234567890", "Menunggu");
        assert_eq!(validate_row(&r), validate_row(&r));
    }

    #[test]
    fn rejection_serializes_with_reason_tag() {
        let rejection = validate_row(&row("Ada", "12345", "Lulus")).unwrap_err();
        let json = serde_json::to_value(&rejection).unwrap();
        assert_eq!(json["reason"], "invalid_key_format");
        assert_eq!(json["nrp"], "12345");
    }
}
