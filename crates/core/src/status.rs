//! Graduation status values accepted by the importer.

use serde::{Deserialize, Serialize};

/// Graduation status of a registration.
///
/// The string forms are the exact literals used in the upload CSV and
/// stored in the database; matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraduationStatus {
    Passed,
    NotPassed,
    Pending,
}

impl GraduationStatus {
    /// Return the status literal as it appears in the CSV and database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "Lulus",
            Self::NotPassed => "Tidak Lulus",
            Self::Pending => "Menunggu",
        }
    }

    /// Parse a status literal. Returns `None` for unknown values.
    ///
    /// Matching is exact: `"LULUS"` is not a valid status.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Lulus" => Some(Self::Passed),
            "Tidak Lulus" => Some(Self::NotPassed),
            "Menunggu" => Some(Self::Pending),
            _ => None,
        }
    }

    /// All accepted status literals.
    pub const ALL: &'static [&'static str] = &["Lulus", "Tidak Lulus", "Menunggu"];
}

impl std::fmt::Display for GraduationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
