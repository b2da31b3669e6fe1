// src/convert.rs

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::{debug, info, instrument};

use crate::{
    document::{write_document, ParameterDocument},
    error::{ConvertError, InputError, Result, WriteError},
    source::{Row, Source, SourceOptions},
};

pub const DEFAULT_PREFIX: &str = "item-";

/// File names written by one run, in row order.
pub type OutputManifest = Vec<String>;

/// Where and how documents are written.
#[derive(Debug, Clone)]
pub struct ConverterOptions {
    /// Prepended to the row counter; used as-is.
    pub prefix: String,
    pub out_dir: PathBuf,
    pub pretty: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            out_dir: PathBuf::from("."),
            pretty: false,
        }
    }
}

impl ConverterOptions {
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Turns rows into parameter documents, one file per row.
pub struct Converter {
    opts: ConverterOptions,
}

impl Converter {
    pub fn new(opts: ConverterOptions) -> Self {
        Self { opts }
    }

    /// Write one document per row in iteration order and return the manifest.
    /// Stops at the first failing row; earlier files stay on disk.
    #[instrument(level = "info", skip(self, rows), fields(prefix = %self.opts.prefix, out_dir = %self.opts.out_dir.display()))]
    pub fn convert<'a, I>(&self, rows: I) -> std::result::Result<OutputManifest, WriteError>
    where
        I: IntoIterator<Item = &'a Row>,
    {
        let start = Instant::now();

        let mut manifest = OutputManifest::new();
        for (index, row) in rows.into_iter().enumerate() {
            if index == 0 {
                ensure_dir(&self.opts.out_dir, index)?;
            }
            let doc = ParameterDocument::from_row(row);
            let name = write_document(
                &self.opts.out_dir,
                &self.opts.prefix,
                index,
                &doc,
                self.opts.pretty,
            )?;
            debug!(file = %name, parameters = doc.parameters.len(), "wrote document");
            manifest.push(name);
        }

        info!(
            files = manifest.len(),
            elapsed = ?start.elapsed(),
            "conversion finished"
        );
        Ok(manifest)
    }

    /// Load `source` and convert every row. Nothing is written when loading fails.
    pub fn convert_source(
        &self,
        source: &Source,
        source_opts: &SourceOptions,
    ) -> Result<OutputManifest> {
        let rows = source.read(source_opts)?;
        info!(source = %source.name(), rows = rows.len(), "loaded source");
        Ok(self.convert(&rows)?)
    }
}

/// Convert already-loaded rows into the current directory. `None` uses `item-`.
///
/// Absent rows are an input error; an explicitly empty slice yields an empty manifest.
pub fn convert(rows: Option<&[Row]>, prefix: Option<&str>) -> Result<OutputManifest> {
    let rows = rows.ok_or(InputError::Missing)?;
    let opts = ConverterOptions::default().prefix(prefix.unwrap_or(DEFAULT_PREFIX));
    Converter::new(opts).convert(rows).map_err(ConvertError::from)
}

// Only called before the first write, so a run with no rows touches nothing.
fn ensure_dir(dir: &Path, index: usize) -> std::result::Result<(), WriteError> {
    fs::create_dir_all(dir).map_err(|source| WriteError::Io {
        index,
        path: dir.to_path_buf(),
        source,
    })
}
