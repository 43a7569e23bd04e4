//! Error types for the sales aggregation pipeline.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, SalesError>;

/// Coarse failure categories, one per user-visible failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ArgumentError,
    NotFound,
    InvalidFormat,
    UnknownBranchCode,
    UnknownCommodityCode,
    NonConsecutive,
    OverflowError,
    InternalError,
}

/// Errors that can end a run. Every one of them is terminal.
#[derive(Error, Debug)]
pub enum SalesError {
    /// Wrong number of command line arguments
    #[error("An unexpected error occurred: expected exactly one directory argument")]
    InvalidArguments,

    /// A required definition file is missing
    #[error("The {label} does not exist")]
    DefinitionNotFound { label: String },

    /// A definition line has the wrong field count or a malformed code
    #[error("The {label} has an invalid format")]
    InvalidDefinition { label: String },

    /// A sales record file has the wrong number of lines
    #[error("{file} has an invalid format")]
    InvalidRecordFormat { file: String },

    /// A sales record references a branch missing from the definitions
    #[error("{file} has an invalid branch code")]
    UnknownBranchCode { file: String },

    /// A sales record references a commodity missing from the definitions
    #[error("{file} has an invalid commodity code")]
    UnknownCommodityCode { file: String },

    /// Sales record file names skip a number
    #[error("Sales file names are not consecutive")]
    NonConsecutive,

    /// A running total would reach the 10-digit ceiling
    #[error("Total amount exceeded 10 digits")]
    Overflow,

    /// The amount line is not a plain digit string
    #[error("An unexpected error occurred")]
    InvalidAmount,

    /// Failed to list, read, write or close a file
    #[error("An unexpected error occurred: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing error
    #[error("An unexpected error occurred: {0}")]
    Csv(#[from] csv::Error),

    /// A configured code pattern does not compile
    #[error("An unexpected error occurred: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl SalesError {
    /// Returns the failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SalesError::InvalidArguments => ErrorKind::ArgumentError,
            SalesError::DefinitionNotFound { .. } => ErrorKind::NotFound,
            SalesError::InvalidDefinition { .. } | SalesError::InvalidRecordFormat { .. } => {
                ErrorKind::InvalidFormat
            }
            SalesError::UnknownBranchCode { .. } => ErrorKind::UnknownBranchCode,
            SalesError::UnknownCommodityCode { .. } => ErrorKind::UnknownCommodityCode,
            SalesError::NonConsecutive => ErrorKind::NonConsecutive,
            SalesError::Overflow => ErrorKind::OverflowError,
            SalesError::InvalidAmount
            | SalesError::Io(_)
            | SalesError::Csv(_)
            | SalesError::InvalidPattern(_) => ErrorKind::InternalError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_specific_messages_name_the_file() {
        let err = SalesError::UnknownBranchCode {
            file: "00000003.rcd".to_string(),
        };
        assert_eq!(err.to_string(), "00000003.rcd has an invalid branch code");
        assert_eq!(err.kind(), ErrorKind::UnknownBranchCode);
    }

    #[test]
    fn test_internal_errors_share_a_kind() {
        let io = SalesError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(io.kind(), ErrorKind::InternalError);
        assert_eq!(SalesError::InvalidAmount.kind(), ErrorKind::InternalError);
        assert!(io.to_string().starts_with("An unexpected error occurred"));
    }

    #[test]
    fn test_definition_errors_name_the_label() {
        let err = SalesError::DefinitionNotFound {
            label: "branch definition file".to_string(),
        };
        assert_eq!(err.to_string(), "The branch definition file does not exist");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
