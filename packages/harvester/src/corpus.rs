//! Combining per-document extracted text into one framed buffer.
//!
//! Each document is wrapped in start/end marker lines naming its file. The
//! markers are ordinary text to the segmenter and may end up inside a level
//! description when they fall within a span.

use std::fs;
use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

use crate::config::{file_end_marker, file_start_marker};
use crate::error::{HarvesterError, Result};

/// A combined corpus and the files that went into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedCorpus {
    /// Concatenated, framed text.
    pub text: String,

    /// File names included, in order.
    pub files: Vec<String>,

    /// Files that could not be read, with the reason.
    pub skipped: Vec<(String, String)>,
}

/// Frame one document's text with its start/end markers.
///
/// Text is NFC-normalized so composed and decomposed glyphs compare equal.
pub fn frame_document(file_name: &str, text: &str) -> String {
    let normalized: String = text.nfc().collect();
    format!(
        "\n\n{}\n\n{normalized}\n\n{}\n\n",
        file_start_marker(file_name),
        file_end_marker(file_name)
    )
}

/// Combine every file with `extension` in `dir`, sorted by file name.
///
/// Unreadable files are logged and skipped; the rest are still combined.
pub fn combine_directory(dir: &Path, extension: &str) -> Result<CombinedCorpus> {
    if !dir.is_dir() {
        return Err(HarvesterError::NotADirectory(dir.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == extension))
        .collect();
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::info!(dir = %dir.display(), files = paths.len(), "Combining extracted text");

    let mut corpus = CombinedCorpus::default();
    for path in paths {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!(file = %file_name, bytes = text.len(), "Adding document");
                corpus.text.push_str(&frame_document(&file_name, &text));
                corpus.files.push(file_name);
            }
            Err(e) => {
                tracing::warn!(file = %file_name, error = %e, "Skipping unreadable document");
                corpus.skipped.push((file_name, e.to_string()));
            }
        }
    }

    Ok(corpus)
}

/// Write a combined corpus, creating parent directories as needed.
pub fn save_corpus(corpus: &CombinedCorpus, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &corpus.text)?;
    Ok(())
}
