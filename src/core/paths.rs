//! Path utilities
//!
//! Input path resolution and output file naming.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to the input stem when no explicit output name is given
pub const OUTPUT_SUFFIX: &str = "_counts.json";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Path as shown to the user: relative to `cwd` when possible
pub fn display_path(path: &Path, cwd: Option<&Path>) -> String {
    cwd.and_then(|cwd| make_relative(path, cwd))
        .filter(|rel| !rel.is_empty())
        .unwrap_or_else(|| normalize_path(path))
}

/// File name without directories and without its last extension.
///
/// `notes/chapter.one.txt` gives `chapter.one`; a name with no '.' is
/// returned whole and `.hidden` gives an empty stem. The name is kept as
/// raw OS bytes, so non-UTF-8 names survive unchanged.
pub fn raw_filename(path: &Path) -> OsString {
    let Some(name) = path.file_name() else {
        return OsString::new();
    };
    match path.file_stem() {
        // file_stem keeps a lone leading dot; here it still starts the extension
        Some(stem) if stem == name && name.as_encoded_bytes().first() == Some(&b'.') => {
            OsString::new()
        }
        Some(stem) => stem.to_os_string(),
        None => OsString::new(),
    }
}

/// Default output file name for an input path
pub fn counts_filename(input: &Path) -> OsString {
    let mut name = raw_filename(input);
    name.push(OUTPUT_SUFFIX);
    name
}

/// Output location for `input`: the explicit name if given, otherwise
/// `<stem>_counts.json`, joined with the output directory.
pub fn resolve_output_path(input: &Path, output_name: Option<&str>, output_dir: &Path) -> PathBuf {
    match output_name {
        Some(name) => output_dir.join(name),
        None => output_dir.join(counts_filename(input)),
    }
}

/// Absolute form of `path` without touching the filesystem
pub fn absolute_input(path: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(path)
}
