use serde::{Deserialize, Serialize};

/// Success code signalling that the spreadsheet is ready for download.
pub const SUCCESS_FILE_READY: i64 = 1;

/// Failure codes the search backend reports through the page address.
///
/// The backend only ever emits codes 1 through 9; everything else is kept
/// as `Unknown` so future codes flow through without being misreported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCode {
    QualificationRequired,
    FileNameRequired,
    InvalidMinMatches,
    InvalidMaxMatches,
    MinExceedsMax,
    NoAthletesFound,
    ServerError,
    FileNotFound,
    DataLoadError,
    Unknown(i64),
}

impl FailureCode {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::QualificationRequired,
            2 => Self::FileNameRequired,
            3 => Self::InvalidMinMatches,
            4 => Self::InvalidMaxMatches,
            5 => Self::MinExceedsMax,
            6 => Self::NoAthletesFound,
            7 => Self::ServerError,
            8 => Self::FileNotFound,
            9 => Self::DataLoadError,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::QualificationRequired => 1,
            Self::FileNameRequired => 2,
            Self::InvalidMinMatches => 3,
            Self::InvalidMaxMatches => 4,
            Self::MinExceedsMax => 5,
            Self::NoAthletesFound => 6,
            Self::ServerError => 7,
            Self::FileNotFound => 8,
            Self::DataLoadError => 9,
            Self::Unknown(code) => *code,
        }
    }

    /// Fixed user-facing message, or `None` for codes the form ignores.
    pub fn message(&self) -> Option<&'static str> {
        Some(match self {
            Self::QualificationRequired => "Qualification is required",
            Self::FileNameRequired => "File name is required",
            Self::InvalidMinMatches => "Invalid minimum match count",
            Self::InvalidMaxMatches => "Invalid maximum match count",
            Self::MinExceedsMax => "Minimum cannot exceed maximum",
            Self::NoAthletesFound => "No athletes found",
            Self::ServerError => "Server error",
            Self::FileNotFound => "File not found",
            Self::DataLoadError => "Error loading data",
            Self::Unknown(_) => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_codes_round_trip() {
        for code in 1..=9 {
            let parsed = FailureCode::from_code(code);
            assert_eq!(parsed.code(), code);
            assert!(parsed.message().is_some(), "code {code} must have a message");
        }
    }

    #[test]
    fn unrecognized_codes_carry_no_message() {
        for code in [0, -1, 10, 999] {
            let parsed = FailureCode::from_code(code);
            assert_eq!(parsed, FailureCode::Unknown(code));
            assert_eq!(parsed.message(), None);
        }
    }
}
