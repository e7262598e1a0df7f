use std::fmt;

/// Name of the column the analysis runs on.
pub const GRADE_COLUMN: &str = "Grade";

// ---------------------------------------------------------------------------
// RawInput – an uploaded file, fully read into memory
// ---------------------------------------------------------------------------

/// Declared format of an upload. CSV is the only accepted format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
}

/// The bytes of one uploaded file plus its format hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    pub bytes: Vec<u8>,
    pub format: InputFormat,
    /// File name shown in the UI, if the upload came from disk.
    pub name: Option<String>,
}

impl RawInput {
    pub fn csv(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            format: InputFormat::Csv,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

// ---------------------------------------------------------------------------
// CellValue – a single cell of the uploaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, inferred from the CSV text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Missing,
}

impl CellValue {
    /// Infer the cell type from its raw CSV text.
    ///
    /// Empty (or all-whitespace) text is `Missing`. Words such as `inf` or
    /// `nan` stay strings: only plain numeric literals become numbers.
    pub fn infer(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return CellValue::Missing;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Some(f) = parse_number(trimmed) {
            return CellValue::Float(f);
        }
        CellValue::String(text.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Missing => write!(f, ""),
        }
    }
}

/// Parse a numeric literal: optional sign, digits with an optional decimal
/// point, optional exponent. Surrounding whitespace is ignored.
///
/// Unlike `str::parse::<f64>`, this rejects `inf`, `infinity` and `nan`, and
/// literals too large for an `f64` (e.g. `1e400`).
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim();
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return None;
        }
    }
    if i != bytes.len() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// Column / Table
// ---------------------------------------------------------------------------

/// Storage of one column: raw inferred cells, or numbers after validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Cells(Vec<CellValue>),
    Numeric(Vec<f64>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Cells(cells) => cells.len(),
            ColumnData::Numeric(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at `row` rendered for display. Validated numbers are shown as-is.
    pub fn display(&self, row: usize) -> Option<String> {
        match self {
            ColumnData::Cells(cells) => cells.get(row).map(|c| c.to_string()),
            ColumnData::Numeric(values) => values.get(row).map(|v| v.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An ordered set of equally long, uniquely named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Build a table from header names and row-major cells.
    ///
    /// Every row must have one cell per header; callers guarantee this.
    /// Duplicate header names get a `.1`, `.2`, … suffix.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let n_rows = rows.len();
        let names = dedupe_names(headers);
        let mut columns: Vec<Vec<CellValue>> = names
            .iter()
            .map(|_| Vec::with_capacity(n_rows))
            .collect();

        for row in rows {
            for (col, cell) in columns.iter_mut().zip(row) {
                col.push(cell);
            }
        }

        let columns = names
            .into_iter()
            .zip(columns)
            .map(|(name, cells)| Column {
                name,
                data: ColumnData::Cells(cells),
            })
            .collect();

        Table { columns, n_rows }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of rows (every column has this length).
    pub fn len(&self) -> usize {
        self.n_rows
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// The validated grade values, if the Grade column has been typed.
    pub fn grades(&self) -> Option<&[f64]> {
        match &self.column(GRADE_COLUMN)?.data {
            ColumnData::Numeric(values) => Some(values),
            ColumnData::Cells(_) => None,
        }
    }

    /// Copy of this table with column `name` replaced by `data`.
    ///
    /// Returns `None` if the column does not exist or `data` has the wrong length.
    pub fn with_column_data(&self, name: &str, data: ColumnData) -> Option<Table> {
        if data.len() != self.n_rows {
            return None;
        }
        let idx = self.columns.iter().position(|c| c.name == name)?;
        let mut columns = self.columns.clone();
        columns[idx].data = data;
        Some(Table {
            columns,
            n_rows: self.n_rows,
        })
    }
}

/// Make header names unique: later duplicates of `X` become `X.1`, `X.2`, …
fn dedupe_names(headers: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(headers.len());
    for name in headers {
        if !out.contains(&name) {
            out.push(name);
            continue;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{name}.{n}");
            if !out.contains(&candidate) {
                out.push(candidate);
                break;
            }
            n += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_cell_types() {
        assert_eq!(CellValue::infer(""), CellValue::Missing);
        assert_eq!(CellValue::infer("  "), CellValue::Missing);
        assert_eq!(CellValue::infer("42"), CellValue::Integer(42));
        assert_eq!(CellValue::infer("-3.5"), CellValue::Float(-3.5));
        assert_eq!(CellValue::infer("Alice"), CellValue::String("Alice".into()));
        assert_eq!(CellValue::infer("nan"), CellValue::String("nan".into()));
        assert_eq!(CellValue::infer("1e400"), CellValue::String("1e400".into()));
    }

    #[test]
    fn parse_number_accepts_literals() {
        assert_eq!(parse_number("90"), Some(90.0));
        assert_eq!(parse_number(" +7.25 "), Some(7.25));
        assert_eq!(parse_number("-1e3"), Some(-1000.0));
        assert_eq!(parse_number("2.5E-1"), Some(0.25));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
    }

    #[test]
    fn parse_number_rejects_non_literals() {
        for text in ["", "ninety", "inf", "-infinity", "NaN", "1e", "e5", ".", "+", "1.2.3", "9 0", "0x10", "1e400", "-1e999"] {
            assert_eq!(parse_number(text), None, "{text:?} should be rejected");
        }
    }

    #[test]
    fn duplicate_headers_are_suffixed() {
        let names = dedupe_names(vec!["Grade".into(), "Grade".into(), "Name".into(), "Grade".into()]);
        assert_eq!(names, vec!["Grade", "Grade.1", "Name", "Grade.2"]);
    }

    #[test]
    fn from_rows_is_column_major() {
        let table = Table::from_rows(
            vec!["Name".into(), "Grade".into()],
            vec![
                vec![CellValue::infer("Alice"), CellValue::infer("90")],
                vec![CellValue::infer("Bob"), CellValue::infer("80")],
            ],
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["Name", "Grade"]);
        let grade = table.column("Grade").unwrap();
        assert_eq!(
            grade.data,
            ColumnData::Cells(vec![CellValue::Integer(90), CellValue::Integer(80)])
        );
        assert!(table.grades().is_none());
    }

    #[test]
    fn with_column_data_checks_length() {
        let table = Table::from_rows(vec!["Grade".into()], vec![vec![CellValue::Integer(1)]]);
        assert!(table.with_column_data("Grade", ColumnData::Numeric(vec![])).is_none());
        assert!(table.with_column_data("Other", ColumnData::Numeric(vec![1.0])).is_none());
        let typed = table
            .with_column_data("Grade", ColumnData::Numeric(vec![1.0]))
            .unwrap();
        assert_eq!(typed.grades(), Some(&[1.0][..]));
        // the source table is left untouched
        assert!(table.grades().is_none());
    }
}
