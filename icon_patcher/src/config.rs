//! Patcher configuration, loaded from TOML.

use game_records::{Catalog, SourceKey};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::error::PatcherError;
use crate::filter::{official_sources, read_listing, SourceFilter};

/// Configuration for a patch run.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatcherConfig {
    /// Root of the string distributor's per-plugin output folders.
    pub output_root: PathBuf,

    /// Previously generated document to mine the ambient color from,
    /// relative to `output_root`.
    pub ambient_source: PathBuf,

    /// Explicit ambient color; skips mining when set.
    pub ambient_color: Option<Color>,

    /// Prefix of generated file names.
    pub file_prefix: String,

    /// Skip sources whose output folder already holds generated files.
    pub skip_existing: bool,

    /// Sources never patched.
    pub excluded_sources: Vec<SourceKey>,

    /// Curated add-on listing, one plugin file name per line.
    pub creation_club_listing: Option<PathBuf>,

    /// Case-insensitive substrings of source names to skip.
    pub denylist_substrings: Vec<String>,

    /// Case-insensitive source names (without extension) to skip.
    pub denylist_names: Vec<String>,

    /// Harvest sound and keyword identities.
    pub catalog: Catalog,
}

impl Default for PatcherConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("SKSE/Plugins/DynamicStringDistributor"),
            ambient_source: PathBuf::from("skyrim.esm/skymojiactivators10.json"),
            ambient_color: None,
            file_prefix: "skymoji_".to_string(),
            skip_existing: true,
            excluded_sources: official_sources(),
            creation_club_listing: None,
            denylist_substrings: vec!["skymoji".to_string()],
            denylist_names: vec![
                "3DNPC".to_string(),
                "3DNPC0".to_string(),
                "3DNPC1".to_string(),
            ],
            catalog: Catalog::default(),
        }
    }
}

impl PatcherConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, PatcherError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, PatcherError> {
        let text = std::fs::read_to_string(path).map_err(PatcherError::at_path(path))?;
        Self::from_toml(&text)
    }

    /// Full path of the document mined for the ambient color.
    pub fn ambient_source_path(&self) -> PathBuf {
        self.output_root.join(&self.ambient_source)
    }

    /// Build the source filter, reading the add-on listing if configured.
    pub fn source_filter(&self) -> SourceFilter {
        let curated = self
            .creation_club_listing
            .as_deref()
            .map(read_listing)
            .unwrap_or_default();

        SourceFilter::new()
            .exclude(self.excluded_sources.iter().cloned())
            .exclude(curated)
            .deny_substrings(self.denylist_substrings.iter().cloned())
            .deny_names(self.denylist_names.iter().cloned())
    }
}
