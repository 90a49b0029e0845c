//! Flora and activator record definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{RecordKind, RecordRef};

/// A fully merged flora or activator record as seen from one source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identity of the record; its source is the file that first defined it.
    pub reference: RecordRef,

    pub kind: RecordKind,

    #[serde(default)]
    pub display_name: Option<String>,

    /// Verb shown to the player ("Open", "Harvest"). `None` inherits the
    /// default verb for the kind; `Some("")` is a distinct value.
    #[serde(default)]
    pub verb_override: Option<String>,

    /// Flora only.
    #[serde(default)]
    pub harvest_sound: Option<RecordRef>,

    /// Activator only.
    #[serde(default)]
    pub keywords: BTreeSet<RecordRef>,

    #[serde(default)]
    pub editor_id: Option<String>,
}

impl Record {
    /// Create a bare record.
    pub fn new(kind: RecordKind, reference: RecordRef) -> Self {
        Self {
            reference,
            kind,
            display_name: None,
            verb_override: None,
            harvest_sound: None,
            keywords: BTreeSet::new(),
            editor_id: None,
        }
    }

    /// Create a flora record.
    pub fn flora(reference: RecordRef) -> Self {
        Self::new(RecordKind::Flora, reference)
    }

    /// Create an activator record.
    pub fn activator(reference: RecordRef) -> Self {
        Self::new(RecordKind::Activator, reference)
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set the interaction verb override.
    pub fn with_verb(mut self, verb: impl Into<String>) -> Self {
        self.verb_override = Some(verb.into());
        self
    }

    /// Set the harvest sound.
    pub fn with_harvest_sound(mut self, sound: RecordRef) -> Self {
        self.harvest_sound = Some(sound);
        self
    }

    /// Add a keyword.
    pub fn with_keyword(mut self, keyword: RecordRef) -> Self {
        self.keywords.insert(keyword);
        self
    }

    /// Set the editor id.
    pub fn with_editor_id(mut self, editor_id: impl Into<String>) -> Self {
        self.editor_id = Some(editor_id.into());
        self
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn verb_override(&self) -> Option<&str> {
        self.verb_override.as_deref()
    }

    pub fn editor_id(&self) -> Option<&str> {
        self.editor_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(raw: &str) -> RecordRef {
        raw.parse().unwrap()
    }

    #[test]
    fn test_new_record_defaults() {
        let record = Record::flora(reference("000123:Test.esp"));

        assert_eq!(record.kind, RecordKind::Flora);
        assert_eq!(record.reference.source.file_name(), "Test.esp");
        assert!(record.display_name().is_none());
        assert!(record.verb_override().is_none());
        assert!(record.keywords.is_empty());
    }

    #[test]
    fn test_record_builder() {
        let lever = reference("10D9EF:Skyrim.esm");
        let record = Record::activator(reference("000456:Skyrim.esm"))
            .with_name("Old Lever")
            .with_verb("Pull")
            .with_keyword(lever.clone())
            .with_editor_id("DweLever01");

        assert_eq!(record.reference.source.file_name(), "Skyrim.esm");
        assert_eq!(record.display_name(), Some("Old Lever"));
        assert_eq!(record.verb_override(), Some("Pull"));
        assert!(record.keywords.contains(&lever));
        assert_eq!(record.editor_id(), Some("DweLever01"));
    }

    #[test]
    fn test_record_deserialize_with_missing_optionals() {
        let json = r#"{
            "reference": "000789:Test.esp",
            "kind": "Activator"
        }"#;

        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, RecordKind::Activator);
        assert!(record.verb_override.is_none());
        assert!(record.harvest_sound.is_none());
    }
}
