//! Input file reading
//!
//! Files are read whole. Invalid UTF-8 is converted lossily; the tokenizer
//! only recognises ASCII letters, so replaced bytes act as word boundaries.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

use crate::core::error::{Result, WordcountError};

/// Contents of one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub text: String,
    /// Whether invalid UTF-8 had to be replaced
    pub lossy_conversion: bool,
}

impl FileContent {
    /// Number of lines, counting a final line without a newline
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}

/// Read the full contents of `path`.
///
/// The handle is closed before this returns, on success and on error.
pub fn read_input(path: &Path) -> Result<FileContent> {
    let access = |source| WordcountError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(access)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(access)?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(FileContent {
            text,
            lossy_conversion: false,
        }),
        Err(err) => {
            warn!(path = %path.display(), "input is not valid UTF-8, using lossy conversion");
            Ok(FileContent {
                text: String::from_utf8_lossy(err.as_bytes()).into_owned(),
                lossy_conversion: true,
            })
        }
    }
}
