//! On-disk layout of exported groups: one `{name}.json` document per group.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Characters that cannot appear in a file name on at least one common platform.
const RESERVED_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Written by PowerShell and Notepad at the start of UTF-8 files.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Derives the export file name for a group.
///
/// Names made of ordinary characters map to exactly `{name}.json`; reserved
/// and control characters are replaced with `_` so the file always lands
/// directly inside the export directory.
pub fn file_name_for(group_name: &str) -> String {
    let stem: String = group_name
        .chars()
        .map(|c| {
            if RESERVED_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let stem = if matches!(stem.as_str(), "" | "." | "..") {
        stem.replace('.', "_") + "_"
    } else {
        stem
    };

    format!("{}.json", stem)
}

/// Path of the export file for `group_name` inside `dir`.
pub fn export_path(dir: &Path, group_name: &str) -> PathBuf {
    dir.join(file_name_for(group_name))
}

/// Writes one exported document, replacing any existing file.
pub fn write_document(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document.as_bytes()).map_err(|e| Error::io(path, e))
}

/// Reads one group document as UTF-8 text, dropping a leading byte-order mark.
pub fn read_document(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    if content.starts_with(BYTE_ORDER_MARK) {
        Ok(content[BYTE_ORDER_MARK.len_utf8()..].to_string())
    } else {
        Ok(content)
    }
}

/// Creates the export directory if it does not already exist.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}
