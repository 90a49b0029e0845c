//! Load order management - the ordered set of source files and the records
//! each one defines or overrides.

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::RecordError;
use crate::records::{Record, RecordKind, RecordRef, SourceKey};

/// Resolves a record reference across the sources that touch it.
pub trait RecordResolver {
    /// The most-overridden ancestor of `reference` visible to `current`:
    /// the last definition among sources loaded before `current`.
    fn resolve_baseline(&self, reference: &RecordRef, current: &SourceKey) -> Option<&Record>;
}

fn enabled_by_default() -> bool {
    true
}

/// One source file in the load order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcePlugin {
    pub key: SourceKey,

    #[serde(default = "enabled_by_default")]
    pub enabled: bool,

    /// Flora and activator records this source defines or overrides.
    #[serde(default)]
    pub records: Vec<Record>,
}

impl SourcePlugin {
    /// Create an enabled plugin with no records.
    pub fn new(key: SourceKey) -> Self {
        Self {
            key,
            enabled: true,
            records: Vec::new(),
        }
    }

    /// Add a record to this plugin.
    pub fn with_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    /// Mark this plugin as disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Records of one kind, in definition order.
    pub fn records_of(&self, kind: RecordKind) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| r.kind == kind)
    }

    /// Check if this plugin defines at least one flora or activator record.
    pub fn has_classifiable_records(&self) -> bool {
        !self.records.is_empty()
    }
}

/// The full, ordered list of source files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoadOrder {
    plugins: Vec<SourcePlugin>,
}

impl LoadOrder {
    /// Create an empty load order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a load order from a JSON record dump.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a load order from any JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, RecordError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Append a plugin at the end of the load order.
    pub fn add_plugin(&mut self, plugin: SourcePlugin) -> &mut Self {
        self.plugins.push(plugin);
        self
    }

    /// Builder-style variant of [`LoadOrder::add_plugin`].
    pub fn with_plugin(mut self, plugin: SourcePlugin) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Enabled plugins in load order.
    pub fn enabled(&self) -> impl Iterator<Item = &SourcePlugin> {
        self.plugins.iter().filter(|p| p.enabled)
    }

    /// Get an enabled plugin by key.
    pub fn get(&self, key: &SourceKey) -> Option<&SourcePlugin> {
        self.enabled().find(|p| &p.key == key)
    }

    /// Number of plugins in the load order.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl RecordResolver for LoadOrder {
    fn resolve_baseline(&self, reference: &RecordRef, current: &SourceKey) -> Option<&Record> {
        self.enabled()
            .take_while(|plugin| &plugin.key != current)
            .flat_map(|plugin| plugin.records.iter())
            .filter(|record| &record.reference == reference)
            .last()
    }
}
