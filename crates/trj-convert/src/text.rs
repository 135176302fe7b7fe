//! Whitespace-separated simulator text, read through `csv`.

use std::io::Read;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::{ConvertError, ConvertResult};

/// One non-blank input line split on runs of spaces.
#[derive(Clone, Debug)]
pub(crate) struct Line {
    /// 1-based line number in the input.
    pub number: u64,
    pub fields: Vec<String>,
}

impl Line {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Parse column `col`, naming `format` and the line on failure.
    pub fn parse<T: FromStr>(&self, col: usize, format: &'static str) -> ConvertResult<T> {
        let raw = self.fields.get(col).ok_or_else(|| ConvertError::Format {
            format,
            line:   self.number,
            reason: format!("expected at least {} columns, found {}", col + 1, self.len()),
        })?;
        raw.parse().map_err(|_| ConvertError::Format {
            format,
            line:   self.number,
            reason: format!("column {}: cannot parse {raw:?}", col + 1),
        })
    }

    /// Every column as `f64`.
    pub fn numbers(&self, format: &'static str) -> ConvertResult<Vec<f64>> {
        (0..self.len()).map(|col| self.parse(col, format)).collect()
    }
}

/// Read every non-blank line of `reader`.
///
/// Columns are separated by one or more spaces; no quoting is recognized.
pub(crate) fn read_lines<R: Read>(reader: R) -> ConvertResult<Vec<Line>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut lines = Vec::new();
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        let fields: Vec<String> = record
            .iter()
            .filter(|f| !f.is_empty())
            .map(str::to_owned)
            .collect();
        if fields.is_empty() {
            continue;
        }
        let number = record.position().map_or(0, |p| p.line());
        lines.push(Line { number, fields });
    }
    Ok(lines)
}
