use super::error::AnalysisError;
use super::loader::parse;
use super::model::{RawInput, Table};
use super::stats::{Statistics, compute_statistics};
use super::validate::validate_grade_column;

/// Outcome of analysing one upload.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    /// `table` has its Grade column typed as numbers.
    Success { table: Table, stats: Statistics },
    Failure(AnalysisError),
}

impl AnalysisResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResult::Success { .. })
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match self {
            AnalysisResult::Failure(err) => Some(err),
            AnalysisResult::Success { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<(Table, Statistics), AnalysisError> {
        match self {
            AnalysisResult::Success { table, stats } => Ok((table, stats)),
            AnalysisResult::Failure(err) => Err(err),
        }
    }
}

/// Parse, validate and summarise one upload.
///
/// Stops at the first failing stage; no statistics are produced for an
/// invalid file.
pub fn analyze(raw: &RawInput) -> AnalysisResult {
    match run(raw) {
        Ok((table, stats)) => {
            log::info!(
                "analysed {}: {} rows, mean grade {:.2}",
                raw.name.as_deref().unwrap_or("upload"),
                stats.count,
                stats.mean
            );
            AnalysisResult::Success { table, stats }
        }
        Err(err) => {
            log::warn!(
                "analysis of {} failed: {err}",
                raw.name.as_deref().unwrap_or("upload")
            );
            AnalysisResult::Failure(err)
        }
    }
}

fn run(raw: &RawInput) -> Result<(Table, Statistics), AnalysisError> {
    let table = parse(raw)?;
    let table = validate_grade_column(&table)?;
    let stats = compute_statistics(&table)?;
    Ok((table, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::ErrorKind;

    #[test]
    fn success_carries_typed_table() {
        let result = analyze(&RawInput::csv("Name,Grade,Class\nAlice,90,A\nBob,80,B\n"));
        let (table, stats) = result.into_result().unwrap();
        assert_eq!(table.grades(), Some(&[90.0, 80.0][..]));
        assert_eq!(table.columns().len(), 3);
        assert_eq!(stats.count, 2);
    }

    #[test]
    fn first_failure_wins() {
        // ragged and missing Grade: the parse error is reported
        let result = analyze(&RawInput::csv("Name,Score\nAlice\n"));
        assert_eq!(result.error().map(|e| e.kind()), Some(ErrorKind::MalformedFormat));
        assert!(!result.is_success());
    }
}
