//! Comma-separated rows, read and written through the `csv` crate.
//!
//! Cells are separated by commas and rows by LF or CRLF. A cell wrapped in
//! double quotes may contain commas, quotes (doubled) and line breaks.

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};

use crate::error::{ContactsError, Result};

/// A parsed row with the 1-based line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub line: usize,
    pub cells: Vec<String>,
}

/// Splits `input` into rows of cells. Blank lines produce no row.
///
/// The reader accepts an unterminated quoted cell by running it to the end of
/// the input, so an odd number of quote characters is reported here as a
/// table-level error instead.
pub fn parse_rows(input: &str) -> Result<Vec<CsvRow>> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_bytes());

    let mut rows = Vec::new();
    let mut last_line = 1usize;
    for record in reader.records() {
        let record = record.map_err(|error| ContactsError::Codec(error.to_string()))?;
        if let Some(position) = record.position() {
            last_line = position.line() as usize;
        }
        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }
        rows.push(CsvRow {
            line: last_line,
            cells: record.iter().map(str::to_string).collect(),
        });
    }

    if input.matches('"').count() % 2 == 1 {
        return Err(ContactsError::Codec(format!(
            "missing closing quote in the row starting on line {last_line}"
        )));
    }

    Ok(rows)
}

/// Formats rows, quoting only the cells that need it. Every row ends with LF.
pub fn write_rows<I, R, S>(rows: I) -> Result<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());
    for row in rows {
        writer
            .write_record(row)
            .map_err(|error| ContactsError::Codec(error.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| ContactsError::Codec(error.error().to_string()))?;
    String::from_utf8(bytes).map_err(|error| ContactsError::Codec(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(rows: &[CsvRow]) -> Vec<Vec<&str>> {
        rows.iter()
            .map(|row| row.cells.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn splits_plain_rows() {
        let rows = parse_rows("a,b,c\r\nd,,f\n").expect("parse");
        assert_eq!(cells(&rows), vec![vec!["a", "b", "c"], vec!["d", "", "f"]]);
        assert_eq!(rows[1].line, 2);
    }

    #[test]
    fn keeps_trailing_empty_cells() {
        let rows = parse_rows("Alice,1,,,").expect("parse");
        assert_eq!(cells(&rows), vec![vec!["Alice", "1", "", "", ""]]);
    }

    #[test]
    fn quoted_cells_hold_delimiters() {
        let rows = parse_rows("\"Blk 30, #06-40\",\"say \"\"hi\"\"\",\"two\nlines\"\nnext").expect("parse");
        assert_eq!(
            cells(&rows),
            vec![
                vec!["Blk 30, #06-40", "say \"hi\"", "two\nlines"],
                vec!["next"]
            ]
        );
        assert_eq!(rows[0].line, 1);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let rows = parse_rows("\u{feff}a\n\n  \nb\n").expect("parse");
        assert_eq!(cells(&rows), vec![vec!["a"], vec!["b"]]);
        assert_eq!(rows[1].line, 4);
    }

    #[test]
    fn unterminated_quote_fails() {
        match parse_rows("a,\"open\nrest") {
            Err(ContactsError::Codec(message)) => assert!(message.contains("line 1"), "{message}"),
            other => panic!("expected codec error, got {other:?}"),
        }
    }

    #[test]
    fn writer_quotes_only_when_needed() {
        let text = write_rows([["plain", "a,b", "q\"x", ""]]).expect("write");
        assert_eq!(text, "plain,\"a,b\",\"q\"\"x\",\n");

        let text = write_rows([["a,b", "q\"x", "line\nbreak", "cr\r\nlf"]]).expect("write");
        let parsed = parse_rows(&text).expect("parse");
        assert_eq!(
            cells(&parsed),
            vec![vec!["a,b", "q\"x", "line\nbreak", "cr\r\nlf"]]
        );
    }
}
