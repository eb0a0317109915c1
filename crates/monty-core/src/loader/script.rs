//! Script Loader
//!
//! Supplies script lines to the interpreter.
//! This layer performs no tokenizing or validation.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{MontyError, MontyResult};

/// Source of script lines.
pub trait LineSource {
    /// Next line including its terminator, or `None` at end of input
    fn next_line(&mut self) -> MontyResult<Option<String>>;
}

/// Line source over any buffered reader
#[derive(Debug)]
pub struct ScriptReader<R> {
    reader: R,
}

impl ScriptReader<BufReader<File>> {
    /// Open a script file.
    ///
    /// Failure to open, or a path that is not a regular file, is reported as
    /// `MontyError::FileOpen`, distinct from any read error later on.
    pub fn open(path: impl AsRef<Path>) -> MontyResult<Self> {
        let path = path.as_ref();
        let open_failed = |err: io::Error| {
            debug!(path = %path.display(), error = %err, "open failed");
            MontyError::FileOpen {
                path: path.display().to_string(),
            }
        };
        let file = File::open(path).map_err(open_failed)?;
        let metadata = file.metadata().map_err(open_failed)?;
        if !metadata.is_file() {
            return Err(open_failed(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        debug!(path = %path.display(), "opened script");
        Ok(ScriptReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ScriptReader<R> {
    pub fn new(reader: R) -> Self {
        ScriptReader { reader }
    }
}

impl<R: BufRead> LineSource for ScriptReader<R> {
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather
    /// than rejected.
    fn next_line(&mut self) -> MontyResult<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
