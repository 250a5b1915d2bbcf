//! Imports curated hymn translations into the Rigveda mandala dataset.
//!
//! Each curated page (`hymns/01007.html` for mandala 1, sukta 7) carries its
//! translation inside a `<div class="box hymn">`. `sukta_import` pulls that
//! text out, normalizes it, and writes it into the `"translation"` field of
//! the matching record of the JSON dataset. The dataset is patched as text,
//! so everything outside the touched records keeps its exact formatting.
//!
//! # Quick start
//!
//! ```no_run
//! use sukta_import::{run, Config};
//!
//! let report = run(&Config::from_root("/srv/rigveda")).unwrap();
//! println!("{}", report.to_json().unwrap());
//! ```
//!
//! The pieces are usable on their own:
//!
//! ```rust
//! let html = r#"<div class="box hymn"><p>Line one.</p><p>Line two.</p></div>"#;
//! let text = sukta_import::extract_translation(html);
//! assert_eq!(text, "Line one.\nLine two.");
//!
//! let blob = r#"[{"mandala": 1, "sukta": 7}]"#;
//! let (patched, matched) = sukta_import::patch_translation(blob, 1, 7, &text);
//! assert!(matched);
//! assert_eq!(patched, r#"[{"mandala": 1, "sukta": 7, "translation": "Line one.\nLine two."}]"#);
//! ```

pub mod document;
mod error;
mod extract;
mod locate;
mod normalize;
mod patch;
mod report;
pub mod source;

pub use error::ImportError;
pub use extract::extract_translation;
pub use locate::find_record;
pub use normalize::normalize_text;
pub use patch::{patch_translation, TRANSLATION_FIELD};
pub use report::{Report, Validation};

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

/// Where the import reads from and writes to.
///
/// Defaults resolve below the crate's own directory: `hymns/` for the
/// curated pages and `data/rigveda_mandala_1.json` for the dataset.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    pub hymns_dir: PathBuf,
    pub data_file: PathBuf,
    pub mandala: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_root(env!("CARGO_MANIFEST_DIR"))
    }
}

impl Config {
    /// Standard layout below `root`.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            hymns_dir: root.join("hymns"),
            data_file: root.join("data").join("rigveda_mandala_1.json"),
            mandala: 1,
        }
    }
    pub fn with_hymns_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.hymns_dir = dir.into();
        self
    }
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }
    pub fn with_mandala(mut self, mandala: u32) -> Self {
        self.mandala = mandala;
        self
    }
}

/// Run one import pass.
///
/// Backs the dataset up, patches every sukta whose page yields text, writes
/// the dataset back if anything changed, and checks that the result still
/// parses as JSON. A missing hymns directory aborts before anything is
/// touched. Invalid JSON after patching is reported, not returned as an error.
pub fn run(config: &Config) -> Result<Report, ImportError> {
    if !config.hymns_dir.is_dir() {
        return Err(ImportError::MissingHymnsDir(config.hymns_dir.clone()));
    }

    let mut blob = document::load(&config.data_file)?;
    let backup = document::backup(&config.data_file)?;
    debug!(backup = %backup.display(), "dataset backed up");

    let sources = source::discover(&config.hymns_dir, config.mandala)?;
    info!(count = sources.len(), dir = %config.hymns_dir.display(), "found hymn pages");

    let mut updated = Vec::new();
    for src in &sources {
        let html = source::read_source(src)?;
        let translation = extract_translation(&html);
        if translation.is_empty() {
            debug!(sukta = src.sukta, path = %src.path.display(), "no hymn text, skipping");
            continue;
        }

        let (patched, matched) = patch_translation(&blob, config.mandala, src.sukta, &translation);
        if matched && patched != blob {
            info!(sukta = src.sukta, "translation updated");
            blob = patched;
            updated.push(src.sukta);
        } else if matched {
            debug!(sukta = src.sukta, "translation already up to date");
        } else {
            debug!(sukta = src.sukta, mandala = config.mandala, "no matching record");
        }
    }

    if !updated.is_empty() {
        document::write(&config.data_file, &blob)?;
    }

    let validation = document::validate(&blob);
    if let Validation::Invalid(msg) = &validation {
        warn!(error = %msg, "dataset is not valid JSON after import");
    }
    info!(updated = updated.len(), "import finished");

    Ok(Report::new(backup, updated, validation))
}
