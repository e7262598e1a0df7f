use super::error::ValidationError;
use super::model::{CellValue, ColumnData, GRADE_COLUMN, Table, parse_number};

/// Check that `table` has a fully numeric Grade column.
///
/// Returns a new table with the Grade column typed as `f64`; all other
/// columns are carried over unchanged. `table` itself is not modified.
pub fn validate_grade_column(table: &Table) -> Result<Table, ValidationError> {
    let values = grade_values(table)?;
    table
        .with_column_data(GRADE_COLUMN, ColumnData::Numeric(values))
        .ok_or(ValidationError::MissingColumn)
}

/// Numeric Grade values of `table`, converting raw cells if needed.
pub(crate) fn grade_values(table: &Table) -> Result<Vec<f64>, ValidationError> {
    let column = table
        .column(GRADE_COLUMN)
        .ok_or(ValidationError::MissingColumn)?;

    match &column.data {
        ColumnData::Numeric(values) => Ok(values.clone()),
        ColumnData::Cells(cells) => cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                cell_to_f64(cell).ok_or_else(|| ValidationError::NonNumericGrade {
                    row: i + 1,
                    value: cell.to_string(),
                })
            })
            .collect(),
    }
}

fn cell_to_f64(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Integer(i) => Some(*i as f64),
        CellValue::Float(f) => Some(*f),
        CellValue::String(s) => parse_number(s),
        CellValue::Missing => None,
    }
}
