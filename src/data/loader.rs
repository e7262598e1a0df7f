use std::path::Path;

use anyhow::{Context, Result, bail};

use super::error::ParseError;
use super::model::{CellValue, InputFormat, RawInput, Table};

// ---------------------------------------------------------------------------
// Reading an upload from disk
// ---------------------------------------------------------------------------

/// Read a user-selected file into memory. Only `.csv` files are accepted.
pub fn load_upload(path: &Path) -> Result<RawInput> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if ext != "csv" {
        bail!("Unsupported file extension: .{ext} (expected .csv)");
    }

    let bytes = std::fs::read(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let mut raw = RawInput::csv(bytes);
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        raw = raw.with_name(name);
    }
    Ok(raw)
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// Parse an upload into a [`Table`].
///
/// CSV layout: comma separated, first row is the header, standard quoting
/// (`""` inside a quoted field is a literal quote). Blank lines are skipped.
/// The input is rejected when quotes are unbalanced, rows are ragged, the
/// text is not UTF-8, or there is no header row.
pub fn parse(raw: &RawInput) -> Result<Table, ParseError> {
    match raw.format {
        InputFormat::Csv => parse_csv(&raw.bytes),
    }
}

fn parse_csv(bytes: &[u8]) -> Result<Table, ParseError> {
    // The csv reader closes an unterminated quoted field at EOF instead of
    // failing, so that case is checked up front.
    if has_unterminated_quote(bytes) {
        return Err(malformed("unbalanced quotes: a quoted field is never closed"));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| malformed(format!("reading header row: {e}")))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Err(malformed("missing header row"));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| malformed(describe_csv_error(&e)))?;
        rows.push(record.iter().map(CellValue::infer).collect::<Vec<_>>());
    }

    log::debug!("parsed CSV: {} columns, {} rows", headers.len(), rows.len());
    Ok(Table::from_rows(headers, rows))
}

/// True when a field opens with `"` and the input ends before the closing
/// quote. Quotes in the middle of an unquoted field are literal text.
fn has_unterminated_quote(bytes: &[u8]) -> bool {
    #[derive(PartialEq)]
    enum State {
        FieldStart,
        Unquoted,
        Quoted,
        QuoteInQuoted,
    }

    let mut state = State::FieldStart;
    for &b in bytes {
        state = match (state, b) {
            (State::Quoted, b'"') => State::QuoteInQuoted,
            (State::Quoted, _) => State::Quoted,
            // `""` is an escaped quote
            (State::QuoteInQuoted, b'"') => State::Quoted,
            (_, b',' | b'\n' | b'\r') => State::FieldStart,
            (State::FieldStart, b'"') => State::Quoted,
            _ => State::Unquoted,
        };
    }
    state == State::Quoted
}

fn describe_csv_error(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => {
            let line = pos.as_ref().map(|p| p.line()).unwrap_or_default();
            format!("line {line} has {len} fields but the header has {expected_len}")
        }
        csv::ErrorKind::Utf8 { .. } => "file is not valid UTF-8 text".to_string(),
        _ => err.to_string(),
    }
}

fn malformed(reason: impl Into<String>) -> ParseError {
    ParseError::MalformedFormat(reason.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ColumnData;

    fn parse_str(text: &str) -> Result<Table, ParseError> {
        parse(&RawInput::csv(text))
    }

    #[test]
    fn parses_header_and_rows() {
        let table = parse_str("Name,Grade\nAlice,90\nBob,80.5\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["Name", "Grade"]);
        assert_eq!(
            table.column("Grade").unwrap().data,
            ColumnData::Cells(vec![CellValue::Integer(90), CellValue::Float(80.5)])
        );
    }

    #[test]
    fn handles_quoting_and_crlf() {
        let table = parse_str("Name,Grade\r\n\"Smith, \"\"Jo\"\"\",75\r\n").unwrap();
        assert_eq!(
            table.column("Name").unwrap().data,
            ColumnData::Cells(vec![CellValue::String("Smith, \"Jo\"".into())])
        );
    }

    #[test]
    fn empty_cells_are_missing() {
        let table = parse_str("Name,Grade\nAlice,\n").unwrap();
        assert_eq!(
            table.column("Grade").unwrap().data,
            ColumnData::Cells(vec![CellValue::Missing])
        );
    }

    #[test]
    fn header_only_gives_empty_table() {
        let table = parse_str("Name,Grade\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 2);
    }

    #[test]
    fn rejects_unterminated_quote() {
        assert!(matches!(
            parse_str("Name,Grade\n\"unterminated"),
            Err(ParseError::MalformedFormat(_))
        ));
        assert!(matches!(
            parse_str("Name,Grade\nAlice,\"90\n"),
            Err(ParseError::MalformedFormat(_))
        ));
    }

    #[test]
    fn literal_quote_inside_unquoted_field() {
        let table = parse_str("Name,Grade\nO\"Brien,90\n").unwrap();
        assert_eq!(
            table.column("Name").unwrap().data,
            ColumnData::Cells(vec![CellValue::String("O\"Brien".into())])
        );
    }

    #[test]
    fn unterminated_quote_detection() {
        assert!(has_unterminated_quote(b"a,\"open"));
        assert!(has_unterminated_quote(b"a,\"x\"\"y\n"));
        assert!(!has_unterminated_quote(b"a,\"x\"\"y\"\n"));
        assert!(!has_unterminated_quote(b"a,\"x\ny\",b\n"));
        assert!(!has_unterminated_quote(b"O\"Brien,90\n"));
        assert!(!has_unterminated_quote(b"\"\""));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_str("Name,Grade\nAlice,90,extra\n").unwrap_err();
        let ParseError::MalformedFormat(reason) = err;
        assert!(reason.contains("3 fields"), "{reason}");
    }

    #[test]
    fn rejects_empty_and_binary_input() {
        assert!(parse_str("").is_err());
        assert!(parse(&RawInput::csv(vec![b'G', 0xff, 0xfe, b'\n', b'1'])).is_err());
    }

    #[test]
    fn load_upload_rejects_other_extensions() {
        let err = load_upload(Path::new("grades.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }
}
