//! Output file writing

use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::core::error::{Result, WordcountError};

/// Write `bytes` to `path`, creating or truncating it.
///
/// With `atomic` set the bytes go to a temporary file in the same directory
/// first and are renamed over `path`, so readers never see a partial file.
/// Otherwise a failed write may leave a partial file behind.
pub fn write_output(path: &Path, bytes: &[u8], atomic: bool) -> Result<()> {
    let write_err = |source| WordcountError::Write {
        path: path.to_path_buf(),
        source,
    };

    if atomic {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(bytes).map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
    } else {
        let mut file = File::create(path).map_err(write_err)?;
        file.write_all(bytes).map_err(write_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a_counts.json");

        write_output(&path, b"{}", false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a_counts.json");
        std::fs::write(&path, "a much longer previous content").unwrap();

        write_output(&path, b"{}", false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_atomic_write_replaces_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a_counts.json");
        std::fs::write(&path, "old").unwrap();

        write_output(&path, b"{\"a\":1}", true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"a\":1}");

        // No temporary files left behind
        let entries: Vec<_> = std::fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("no_such_dir").join("a_counts.json");

        for atomic in [false, true] {
            let err = write_output(&path, b"{}", atomic).unwrap_err();
            assert!(matches!(err, WordcountError::Write { .. }));
        }
    }
}
