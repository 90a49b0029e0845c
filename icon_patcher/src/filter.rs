//! Source eligibility: which plugins get classified at all.

use game_records::{SourceKey, SourcePlugin};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

use crate::text::{contains_any, equals_any};

/// Official masters that are never patched.
pub const OFFICIAL_SOURCES: [&str; 5] = [
    "Skyrim.esm",
    "Update.esm",
    "Dawnguard.esm",
    "Dragonborn.esm",
    "HearthFires.esm",
];

/// Decides whether a source file is eligible for classification.
#[derive(Debug, Clone, Default)]
pub struct SourceFilter {
    excluded: HashSet<SourceKey>,
    denied_substrings: Vec<String>,
    denied_names: Vec<String>,
    only: Option<SourceKey>,
}

impl SourceFilter {
    /// Create a filter with nothing excluded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude specific source files.
    pub fn exclude(mut self, sources: impl IntoIterator<Item = SourceKey>) -> Self {
        self.excluded.extend(sources);
        self
    }

    /// Exclude sources whose name contains any of these substrings.
    pub fn deny_substrings(mut self, substrings: impl IntoIterator<Item = String>) -> Self {
        self.denied_substrings.extend(substrings);
        self
    }

    /// Exclude sources whose name (without extension) equals any of these.
    pub fn deny_names(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.denied_names.extend(names);
        self
    }

    /// Restrict the run to a single source file.
    pub fn only(mut self, source: SourceKey) -> Self {
        self.only = Some(source);
        self
    }

    /// Check whether a source is excluded or denylisted, ignoring its contents.
    pub fn is_excluded(&self, source: &SourceKey) -> bool {
        let name = Some(source.name());
        let substrings: Vec<&str> = self.denied_substrings.iter().map(String::as_str).collect();
        let names: Vec<&str> = self.denied_names.iter().map(String::as_str).collect();

        self.excluded.contains(source)
            || contains_any(name, &substrings)
            || equals_any(name, &names)
    }

    /// A plugin is eligible when it is selected, not excluded, not already
    /// processed, and defines at least one flora or activator record.
    pub fn is_eligible(
        &self,
        plugin: &SourcePlugin,
        already_processed: impl Fn(&SourceKey) -> bool,
    ) -> bool {
        if self.only.as_ref().is_some_and(|only| only != &plugin.key) {
            debug!(source = %plugin.key, "source not selected");
            return false;
        }
        if self.is_excluded(&plugin.key) {
            debug!(source = %plugin.key, "source excluded");
            return false;
        }
        if !plugin.has_classifiable_records() {
            return false;
        }
        if already_processed(&plugin.key) {
            debug!(source = %plugin.key, "output already present, skipping");
            return false;
        }
        true
    }
}

/// Official master keys.
pub fn official_sources() -> Vec<SourceKey> {
    OFFICIAL_SOURCES
        .iter()
        .filter_map(|name| SourceKey::parse(*name).ok())
        .collect()
}

/// Parse a curated add-on listing: one plugin file name per line.
pub fn parse_listing(contents: &str) -> HashSet<SourceKey> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| SourceKey::parse(line).ok())
        .collect()
}

/// Read a curated add-on listing. A missing or unreadable file yields an
/// empty set.
pub fn read_listing(path: &Path) -> HashSet<SourceKey> {
    if !path.is_file() {
        debug!(path = %path.display(), "no add-on listing found");
        return HashSet::new();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => parse_listing(&contents),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not read add-on listing");
            HashSet::new()
        }
    }
}
