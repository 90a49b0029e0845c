//! Writing per-source JSON documents and detecting earlier output.

use game_records::{RecordKind, SourceKey};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::PatcherError;
use crate::package::OutputEntry;
use crate::pipeline::SourcePatch;

/// Writes string-override documents under the distributor's root folder.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
    prefix: String,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Folder holding every document generated for `source`.
    pub fn source_dir(&self, source: &SourceKey) -> PathBuf {
        self.root.join(source.file_name())
    }

    /// Path of the document for one record kind of `source`.
    pub fn document_path(&self, source: &SourceKey, kind: RecordKind) -> PathBuf {
        let suffix = match kind {
            RecordKind::Flora => "FLOR",
            RecordKind::Activator => "ACTI",
        };
        let file_name = format!(
            "{}{}{}.json",
            self.prefix,
            source.name().to_lowercase(),
            suffix
        );
        self.source_dir(source).join(file_name)
    }

    /// Check whether `source` already has generated flora or activator
    /// documents.
    pub fn has_existing_output(&self, source: &SourceKey) -> bool {
        let Ok(entries) = std::fs::read_dir(self.source_dir(source)) else {
            return false;
        };

        entries.filter_map(Result::ok).any(|entry| {
            let name = entry.file_name().to_string_lossy().to_lowercase();
            entry.path().is_file() && (name.contains("acti") || name.contains("flor"))
        })
    }

    /// Write the non-empty lists of a patch. Returns the paths written.
    pub fn write(&self, patch: &SourcePatch) -> Result<Vec<PathBuf>, PatcherError> {
        let mut written = Vec::new();
        if patch.is_empty() {
            return Ok(written);
        }

        let dir = self.source_dir(&patch.source);
        std::fs::create_dir_all(&dir).map_err(PatcherError::at_path(&dir))?;

        for (kind, entries) in [
            (RecordKind::Flora, &patch.flora),
            (RecordKind::Activator, &patch.activators),
        ] {
            if entries.is_empty() {
                continue;
            }
            let path = self.document_path(&patch.source, kind);
            write_document(&path, entries)?;
            debug!(path = %path.display(), entries = entries.len(), "wrote document");
            written.push(path);
        }

        info!(source = %patch.source, files = written.len(), "patched source");
        Ok(written)
    }
}

/// Serialize entries as an indented JSON array.
pub fn render_document(entries: &[OutputEntry]) -> Result<String, PatcherError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

fn write_document(path: &Path, entries: &[OutputEntry]) -> Result<(), PatcherError> {
    let json = render_document(entries)?;
    std::fs::write(path, json).map_err(PatcherError::at_path(path))
}
