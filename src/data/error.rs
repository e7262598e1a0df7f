use serde::Serialize;
use thiserror::Error;

/// The upload could not be read as CSV.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed CSV file: {0}")]
    MalformedFormat(String),
}

/// The table parsed, but its Grade column cannot be analysed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the file has no column named \"Grade\"")]
    MissingColumn,
    #[error("the Grade column contains a non-numeric value {value:?} (row {row})")]
    NonNumericGrade { row: usize, value: String },
    #[error("the Grade column has no rows")]
    EmptyDataset,
}

/// Any failure of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Flat classification of [`AnalysisError`] used to pick the UI message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MalformedFormat,
    MissingColumn,
    NonNumericGrade,
    EmptyDataset,
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::Parse(ParseError::MalformedFormat(_)) => ErrorKind::MalformedFormat,
            AnalysisError::Validation(ValidationError::MissingColumn) => ErrorKind::MissingColumn,
            AnalysisError::Validation(ValidationError::NonNumericGrade { .. }) => {
                ErrorKind::NonNumericGrade
            }
            AnalysisError::Validation(ValidationError::EmptyDataset) => ErrorKind::EmptyDataset,
        }
    }
}

impl ErrorKind {
    /// Short headline shown above the detailed error text.
    pub fn headline(self) -> &'static str {
        match self {
            ErrorKind::MalformedFormat => "The file is not valid CSV.",
            ErrorKind::MissingColumn => "The file has no \"Grade\" column.",
            ErrorKind::NonNumericGrade => "The \"Grade\" column contains non-numeric values.",
            ErrorKind::EmptyDataset => "The file contains no grade rows.",
        }
    }
}
