use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ImportError;

/// `MMSSS.html`: two-digit mandala, three-digit sukta.
static SOURCE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})(\d{3})\.html$").unwrap());

/// One curated translation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HymnSource {
    pub sukta: u32,
    pub path: PathBuf,
}

/// Sukta number encoded in a source file name, if the name belongs to `mandala`.
///
/// `sukta_from_file_name("01007.html", 1) == Some(7)`
pub fn sukta_from_file_name(name: &str, mandala: u32) -> Option<u32> {
    let caps = SOURCE_NAME_RE.captures(name)?;
    if caps[1].parse::<u32>().ok()? != mandala {
        return None;
    }
    caps[2].parse().ok()
}

/// List the source pages of `mandala` in `dir`, sorted by file name.
///
/// Only regular files named like `01007.html` are returned; nothing is read.
pub fn discover(dir: &Path, mandala: u32) -> Result<Vec<HymnSource>, ImportError> {
    let read_err = |source| ImportError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut named = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        let Some(sukta) = sukta_from_file_name(&name, mandala) else {
            continue;
        };
        if !entry.path().is_file() {
            continue;
        }
        named.push((name, HymnSource {
            sukta,
            path: entry.path(),
        }));
    }
    named.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(named.into_iter().map(|(_, source)| source).collect())
}

/// Read a source page as UTF-8 text.
pub fn read_source(source: &HymnSource) -> Result<String, ImportError> {
    fs::read_to_string(&source.path).map_err(|e| ImportError::Read {
        path: source.path.clone(),
        source: e,
    })
}
