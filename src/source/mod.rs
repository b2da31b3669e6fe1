// src/source/mod.rs
pub mod row;

pub use row::Row;

use crate::error::InputError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

/// CSV dialect and emptiness policy for loading rows.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    pub delimiter: u8,
    /// Trim whitespace around headers and fields.
    pub trim: bool,
    /// Accept a header record with no data rows (yields zero rows instead of `InputError::Empty`).
    pub allow_empty: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
            allow_empty: false,
        }
    }
}

impl SourceOptions {
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(true)
            .delimiter(self.delimiter)
            // short records are padded below, long ones rejected
            .flexible(true)
            .trim(if self.trim { Trim::All } else { Trim::None });
        builder
    }
}

/// Where the rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Stdin,
}

impl Source {
    /// Resolve the CLI input argument. `-` means stdin; no argument means stdin
    /// only when something is piped in.
    pub fn resolve(arg: Option<PathBuf>, stdin_is_terminal: bool) -> Result<Self, InputError> {
        match arg {
            Some(p) if p.as_os_str() == "-" => Ok(Source::Stdin),
            Some(p) => Ok(Source::Path(p)),
            None if !stdin_is_terminal => Ok(Source::Stdin),
            None => Err(InputError::Missing),
        }
    }

    pub fn name(&self) -> String {
        match self {
            Source::Path(p) => p.display().to_string(),
            Source::Stdin => "<stdin>".to_string(),
        }
    }

    pub fn read(&self, opts: &SourceOptions) -> Result<Vec<Row>, InputError> {
        self.read_with_stdin(io::stdin().lock(), opts)
    }

    /// Like `read`, with `stdin` standing in for the process's standard input.
    pub fn read_with_stdin<R: Read>(
        &self,
        stdin: R,
        opts: &SourceOptions,
    ) -> Result<Vec<Row>, InputError> {
        match self {
            Source::Path(p) => read_rows_from_path(p, opts),
            Source::Stdin => read_rows(stdin, &self.name(), opts),
        }
    }
}

/// Open `path` and load every data row.
pub fn read_rows_from_path<P: AsRef<Path>>(
    path: P,
    opts: &SourceOptions,
) -> Result<Vec<Row>, InputError> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|e| InputError::Unreadable {
        source_name: source_name.clone(),
        source: csv::Error::from(e),
    })?;
    read_rows(file, &source_name, opts)
}

/// Load every data row from `reader`. The first record is the header.
///
/// - no header record at all → `InputError::Empty`
/// - header but no data rows → `InputError::Empty` unless `allow_empty`
/// - a record shorter than the header gets empty cells for the missing columns
/// - a record longer than the header → `InputError::Malformed`
#[tracing::instrument(level = "info", skip(reader, opts), fields(source_name = %source_name))]
pub fn read_rows<R: Read>(
    reader: R,
    source_name: &str,
    opts: &SourceOptions,
) -> Result<Vec<Row>, InputError> {
    let unreadable = |e: csv::Error| InputError::Unreadable {
        source_name: source_name.to_string(),
        source: e,
    };

    let mut rdr = opts.reader_builder().from_reader(reader);
    let headers: StringRecord = rdr.headers().map_err(unreadable)?.clone();
    if headers.is_empty() {
        return Err(InputError::Empty {
            source_name: source_name.to_string(),
        });
    }
    debug!(columns = headers.len(), "read header record");

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.map_err(unreadable)?;
        if record.len() > headers.len() {
            return Err(InputError::Malformed {
                source_name: source_name.to_string(),
                record: idx,
                expected: headers.len(),
                found: record.len(),
            });
        }
        if record.len() < headers.len() {
            warn!(
                record = idx,
                found = record.len(),
                expected = headers.len(),
                "short record, padding missing cells"
            );
        }
        rows.push(to_row(&headers, &record));
    }

    if rows.is_empty() && !opts.allow_empty {
        return Err(InputError::Empty {
            source_name: source_name.to_string(),
        });
    }
    debug!(rows = rows.len(), "loaded rows");
    Ok(rows)
}

fn to_row(headers: &StringRecord, record: &StringRecord) -> Row {
    let mut row = Row::with_capacity(headers.len());
    for (i, column) in headers.iter().enumerate() {
        row.push(column, record.get(i).unwrap_or(""));
    }
    row
}
