// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source-document loading from the configured docs folder.
//!
//! Walks the folder recursively and reads every plain-text document
//! (`.txt`, `.md`, `.markdown`). Unreadable files are skipped with a
//! warning rather than failing the whole ingestion.

use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Extensions treated as ingestible source documents.
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];

/// A source document read from the docs folder.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Path relative to the process working directory.
    pub path: String,
    /// Full document text.
    pub content: String,
}

/// Load all ingestible documents under `dir`.
///
/// Returns an empty list when the folder does not exist; the caller
/// decides whether an empty index is acceptable.
pub fn load_documents(dir: &Path) -> Vec<SourceDocument> {
    if !dir.exists() {
        warn!(dir = %dir.display(), "docs folder does not exist, index will be empty");
        return Vec::new();
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let is_text = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if !is_text {
            continue;
        }

        match std::fs::read_to_string(path) {
            Ok(content) if !content.trim().is_empty() => {
                debug!(path = %path.display(), bytes = content.len(), "loaded document");
                documents.push(SourceDocument {
                    path: path.display().to_string(),
                    content,
                });
            }
            Ok(_) => {
                debug!(path = %path.display(), "skipping empty document");
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read document, skipping");
            }
        }
    }

    documents
}
