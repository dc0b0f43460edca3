use std::borrow::Cow;
use std::io::{self, ErrorKind};
use std::ops::Deref;
use std::path::{Path, PathBuf};

use crate::domain::entities::log_record::ParsedLogs;
use crate::domain::logs::parse_lines;
use crate::domain::ports::log_source::{LogSource, SourceError};

/// Reads a text file of `[ts] [level] station - message` lines.
///
/// Lines are decoded one by one; invalid UTF-8 inside a line is replaced
/// with U+FFFD and never affects its neighbours.
pub struct LineFileSource {
    path: PathBuf,
}

impl LineFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn source_error(path: &Path, e: &io::Error) -> SourceError {
    match e.kind() {
        ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        _ => SourceError::ReadFailed(format!("{}: {e}", path.display())),
    }
}

/// Reads a whole UTF-8 file, mapping a missing file to `SourceError::NotFound`.
pub(super) fn read_file(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|e| source_error(path, &e))
}

/// Splits raw bytes on `\n` and decodes each line on its own.
fn decode_lines(bytes: &[u8]) -> Vec<Cow<'_, str>> {
    bytes
        .split(|b| *b == b'\n')
        .map(String::from_utf8_lossy)
        .collect()
}

impl LogSource for LineFileSource {
    fn read(&self) -> Result<ParsedLogs, SourceError> {
        let bytes = std::fs::read(&self.path).map_err(|e| source_error(&self.path, &e))?;
        let lines = decode_lines(&bytes);
        Ok(parse_lines(lines.iter().map(Deref::deref)))
    }

    fn describe(&self) -> String {
        format!("log file {}", self.path.display())
    }
}
