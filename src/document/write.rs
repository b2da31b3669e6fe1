use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};

use super::ParameterDocument;
use crate::error::WriteError;

/// `<prefix><index>.json`, no padding.
pub fn output_name(prefix: &str, index: usize) -> String {
    format!("{}{}.json", prefix, index)
}

/// Serialize `doc` and write it to `dir/<prefix><index>.json`, replacing any
/// existing file. Returns the bare file name.
///
/// - `index`: row counter, used for the name and in error reports
/// - `pretty`: indented output with a trailing newline
pub fn write_document(
    dir: &Path,
    prefix: &str,
    index: usize,
    doc: &ParameterDocument,
    pretty: bool,
) -> Result<String, WriteError> {
    let mut text = doc
        .to_json(pretty)
        .map_err(|source| WriteError::Serialize { index, source })?;
    if pretty {
        text.push('\n');
    }

    let file_name = output_name(prefix, index);
    let path: PathBuf = dir.join(&file_name);
    write_all(&path, text.as_bytes()).map_err(|source| WriteError::Io {
        index,
        path: path.clone(),
        source,
    })?;
    Ok(file_name)
}

fn write_all(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(bytes)?;
    f.flush()
}
