use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::ImportError;
use crate::report::Validation;

/// Timestamp layout of backup file names.
pub const BACKUP_STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Load the dataset as text, without a leading BOM and with `\n` line endings.
pub fn load(path: &Path) -> Result<String, ImportError> {
    let raw = fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_newlines(raw.strip_prefix('\u{FEFF}').unwrap_or(&raw)))
}

fn normalize_newlines(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

/// `<path>.<YYYYMMDD-HHMMSS>.bak`
pub fn backup_path(path: &Path, at: &DateTime<Local>) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{}.bak", at.format(BACKUP_STAMP_FORMAT)));
    PathBuf::from(name)
}

/// Copy the dataset next to itself under a timestamped name.
pub fn backup(path: &Path) -> Result<PathBuf, ImportError> {
    let target = backup_path(path, &Local::now());
    fs::copy(path, &target).map_err(|source| ImportError::Write {
        path: target.clone(),
        source,
    })?;
    Ok(target)
}

pub fn write(path: &Path, text: &str) -> Result<(), ImportError> {
    fs::write(path, text).map_err(|source| ImportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Check that `text` is a single well-formed JSON value.
pub fn validate(text: &str) -> Validation {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(_) => Validation::Ok,
        Err(e) => Validation::Invalid(e.to_string()),
    }
}
