/// Data layer: core types, CSV ingestion, validation and statistics.
///
/// Architecture:
/// ```text
///   uploaded .csv bytes (RawInput)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Table (inferred cells)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ validate  │  Grade column → f64, new Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  count / min / max / mean / stddev
///   └──────────┘
///        │
///        ▼
///   AnalysisResult  (pipeline::analyze)   ──►  chart: histogram bins, box summary
/// ```

pub mod chart;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod stats;
pub mod validate;

pub use error::{AnalysisError, ErrorKind, ParseError, ValidationError};
pub use model::{CellValue, Column, ColumnData, GRADE_COLUMN, InputFormat, RawInput, Table};
pub use pipeline::{AnalysisResult, analyze};
pub use stats::{Statistics, compute_statistics};
pub use validate::validate_grade_column;
