// src/error.rs

use std::{io, path::PathBuf};
use thiserror::Error;

/// The tabular source could not produce rows.
#[derive(Error, Debug)]
pub enum InputError {
    /// No path was given and nothing was piped in.
    #[error("no input: pass a CSV path or pipe CSV on stdin")]
    Missing,

    #[error("cannot read {source_name}: {source}")]
    Unreadable {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// No header record, or headers but no data rows when those are not allowed.
    #[error("{source_name} contains no rows")]
    Empty { source_name: String },

    #[error("{source_name}: record {record} has {found} fields but only {expected} headers")]
    Malformed {
        source_name: String,
        record: usize,
        expected: usize,
        found: usize,
    },
}

/// Output for one row could not be produced. `index` is the 0-based row counter.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("could not serialize output {index}: {source}")]
    Serialize {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write output {index} to {}: {source}", .path.display())]
    Io {
        index: usize,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    pub fn index(&self) -> usize {
        match self {
            WriteError::Serialize { index, .. } | WriteError::Io { index, .. } => *index,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
