//! Byte-stream sources for ingestion.
//!
//! [`crate::Areas::populate`] consumes any [`std::io::Read`]; this module
//! provides the file-backed source the batch loader uses. The stream is
//! closed when the returned reader is dropped.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{DataError, DataResult};

/// Something that can be opened as a byte stream.
pub trait InputSource {
    /// A human-readable identifier for the source (e.g. its path).
    fn source(&self) -> String;

    /// Open the source for reading.
    fn open(&self) -> DataResult<Box<dyn Read>>;
}

/// A file-backed input source.
#[derive(Debug, Clone)]
pub struct InputFile {
    path: PathBuf,
}

impl InputFile {
    /// Create a source for the file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InputSource for InputFile {
    fn source(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> DataResult<Box<dyn Read>> {
        let file = File::open(&self.path).map_err(|e| {
            DataError::Source(format!("failed to open file {}: {e}", self.path.display()))
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::{InputFile, InputSource};
    use crate::error::DataError;

    #[test]
    fn opening_a_missing_file_is_a_source_error() {
        let file = InputFile::new("definitely/not/here.csv");
        let err = file.open().err().unwrap();
        assert!(matches!(err, DataError::Source(_)));
        assert!(err.to_string().contains("not/here.csv"));
    }
}
