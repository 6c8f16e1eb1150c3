//! Delimited point record format
//!
//! One point per line, exactly three floating point fields (x, y, z):
//!
//! ```text
//! 1.0; 2.5; -3.0
//! 4.0; 0.0; 1.25
//! ```
//!
//! Blank lines are skipped and whitespace around fields is ignored. Any other
//! malformed line is an error carrying its 1-based line number.

use cloudspin_core::{Error, Point3d, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines, Write};
use std::path::Path;
use std::str::FromStr;

/// Number of fields in every record
pub const FIELDS_PER_RECORD: usize = 3;

/// Supported field delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Semicolon,
    Comma,
    Space,
    Tab,
}

impl Delimiter {
    /// Get the character representation of the delimiter
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Semicolon => ';',
            Delimiter::Comma => ',',
            Delimiter::Space => ' ',
            Delimiter::Tab => '\t',
        }
    }

    /// Split a line into trimmed fields
    fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            // Runs of spaces separate a single pair of fields
            Delimiter::Space => line.split_whitespace().collect(),
            _ => line.split(self.as_char()).map(str::trim).collect(),
        }
    }
}

impl FromStr for Delimiter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            ";" | "semicolon" => Ok(Delimiter::Semicolon),
            "," | "comma" => Ok(Delimiter::Comma),
            " " | "space" => Ok(Delimiter::Space),
            "\t" | "tab" => Ok(Delimiter::Tab),
            other => Err(Error::InvalidData(format!("unknown delimiter '{}'", other))),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Delimiter::Semicolon => "semicolon",
            Delimiter::Comma => "comma",
            Delimiter::Space => "space",
            Delimiter::Tab => "tab",
        };
        f.write_str(name)
    }
}

/// Layout of a record file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordFormat {
    pub delimiter: Delimiter,
}

impl RecordFormat {
    pub fn new(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }

    /// Parse one non-blank line into a position
    pub fn parse_line(&self, line: &str, line_number: usize) -> Result<Point3d> {
        let fields = self.delimiter.split(line);
        if fields.len() != FIELDS_PER_RECORD {
            return Err(Error::parse(
                line_number,
                format!(
                    "expected {} fields separated by '{}', found {}",
                    FIELDS_PER_RECORD,
                    self.delimiter.as_char(),
                    fields.len()
                ),
            ));
        }

        let mut coords = [0.0f64; FIELDS_PER_RECORD];
        for (i, (field, name)) in fields.iter().zip(["x", "y", "z"]).enumerate() {
            let value = field.parse::<f64>().map_err(|_| {
                Error::parse(line_number, format!("invalid {} coordinate '{}'", name, field))
            })?;
            if !value.is_finite() {
                return Err(Error::parse(
                    line_number,
                    format!("non-finite {} coordinate '{}'", name, field),
                ));
            }
            coords[i] = value;
        }

        Ok(Point3d::new(coords[0], coords[1], coords[2]))
    }

    /// Format a position as one record line, without the line terminator
    pub fn format_point(&self, point: &Point3d) -> String {
        let separator = match self.delimiter {
            Delimiter::Semicolon | Delimiter::Comma => format!("{} ", self.delimiter.as_char()),
            _ => self.delimiter.as_char().to_string(),
        };
        [point.x, point.y, point.z]
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

/// Streaming record reader yielding one position per non-blank line
pub struct RecordReader<R> {
    lines: Lines<R>,
    format: RecordFormat,
    line_number: usize,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R, format: RecordFormat) -> Self {
        Self {
            lines: reader.lines(),
            format,
            line_number: 0,
        }
    }

    /// Read every record, failing on the first malformed line
    pub fn read_all(self) -> Result<Vec<Point3d>> {
        self.collect()
    }
}

impl RecordReader<BufReader<File>> {
    /// Open a record file for streaming
    pub fn open<P: AsRef<Path>>(path: P, format: RecordFormat) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), format))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Point3d>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_number += 1;
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    return Some(Err(Error::parse(self.line_number, "invalid UTF-8")));
                }
                Err(e) => return Some(Err(e.into())),
            };

            if line.trim().is_empty() {
                continue;
            }
            return Some(self.format.parse_line(&line, self.line_number));
        }
    }
}

/// Parse records from an in-memory string
pub fn parse_str(input: &str, format: RecordFormat) -> Result<Vec<Point3d>> {
    RecordReader::new(input.as_bytes(), format).read_all()
}

/// Record writer
pub struct RecordWriter;

impl RecordWriter {
    /// Write positions as records, one per line
    pub fn write_points<'a, W, I>(writer: &mut W, points: I, format: RecordFormat) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = &'a Point3d>,
    {
        for point in points {
            writeln!(writer, "{}", format.format_point(point))?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_semicolon_records() {
        let points = parse_str("1.0; 2.0; 3.0\n4;5;6\n", RecordFormat::default()).unwrap();
        assert_eq!(points, vec![Point3d::new(1.0, 2.0, 3.0), Point3d::new(4.0, 5.0, 6.0)]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = "\n1;2;3\n   \n\r\n-1.5;0;2e3\n\n";
        let points = parse_str(input, RecordFormat::default()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], Point3d::new(-1.5, 0.0, 2000.0));
    }

    #[test]
    fn test_crlf_line_endings() {
        let points = parse_str("1;2;3\r\n4;5;6\r\n", RecordFormat::default()).unwrap();
        assert_eq!(points[1], Point3d::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_str("1;2;3\n1;2\n", RecordFormat::default()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));

        let err = parse_str("1;2;3;4\n", RecordFormat::default()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_non_numeric_field() {
        let err = parse_str("1;2;3\n\n1;two;3\n", RecordFormat::default()).unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("invalid y coordinate"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_field() {
        let err = parse_str("1;inf;3\n", RecordFormat::default()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
        assert!(parse_str("NaN;0;0\n", RecordFormat::default()).is_err());
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let reader = RecordReader::new(Cursor::new(b"1;2;3\n\xff;2;3\n".to_vec()), RecordFormat::default());
        match reader.read_all().unwrap_err() {
            Error::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("UTF-8"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_other_delimiters() {
        let space = RecordFormat::new(Delimiter::Space);
        assert_eq!(
            parse_str("1  2 3\n", space).unwrap(),
            vec![Point3d::new(1.0, 2.0, 3.0)]
        );

        let comma = RecordFormat::new(Delimiter::Comma);
        assert_eq!(
            parse_str("1, 2, 3\n", comma).unwrap(),
            vec![Point3d::new(1.0, 2.0, 3.0)]
        );

        // A semicolon file read as comma-delimited has a single field per line
        assert!(parse_str("1;2;3\n", comma).is_err());
    }

    #[test]
    fn test_streaming_reader_stops_at_error() {
        let reader = RecordReader::new(Cursor::new("1;2;3\nbad\n4;5;6\n"), RecordFormat::default());
        let results: Vec<_> = reader.collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_delimiter_from_str() {
        assert_eq!("semicolon".parse::<Delimiter>().unwrap(), Delimiter::Semicolon);
        assert_eq!(",".parse::<Delimiter>().unwrap(), Delimiter::Comma);
        assert_eq!("tab".parse::<Delimiter>().unwrap(), Delimiter::Tab);
        assert!("pipe".parse::<Delimiter>().is_err());
    }

    #[test]
    fn test_writer_output_reads_back() {
        let points = vec![Point3d::new(1.0, 2.5, -3.0), Point3d::new(0.125, 0.0, 7.0)];
        let mut buffer = Vec::new();
        RecordWriter::write_points(&mut buffer, &points, RecordFormat::default()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "1; 2.5; -3\n0.125; 0; 7\n");
        assert_eq!(parse_str(&text, RecordFormat::default()).unwrap(), points);
    }
}
