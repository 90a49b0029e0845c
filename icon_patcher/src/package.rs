//! Output entries: the key and markup strings handed to the string
//! distributor.

use game_records::{RecordKind, RecordRef, SourceKey};
use serde::{Deserialize, Serialize};

use crate::classifier::Glyph;
use crate::color::Color;
use crate::error::PatcherError;

/// Font face holding the interaction icons.
pub const ICON_FONT_FACE: &str = "$Iconographia";

/// Which record field an entry overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    #[serde(rename = "FLOR RNAM")]
    FloraVerb,
    #[serde(rename = "ACTI RNAM")]
    ActivatorVerb,
}

impl From<RecordKind> for EntryType {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Flora => EntryType::FloraVerb,
            RecordKind::Activator => EntryType::ActivatorVerb,
        }
    }
}

/// One emitted string override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEntry {
    pub form_id: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub string: String,
}

impl OutputEntry {
    /// Build the entry for a classified record.
    pub fn new(reference: &RecordRef, kind: RecordKind, glyph: Glyph, color: Option<&Color>) -> Self {
        Self {
            form_id: package_key(reference),
            entry_type: kind.into(),
            string: package_icon(glyph, color),
        }
    }
}

/// Format a reference as `<lowercase-hex-local-id>|<source-file>`.
pub fn package_key(reference: &RecordRef) -> String {
    format!("{:06x}|{}", reference.id.local(), reference.source.file_name())
}

/// Parse a key produced by [`package_key`] back into a reference.
pub fn parse_key(key: &str) -> Result<RecordRef, PatcherError> {
    let invalid = || PatcherError::InvalidKey(key.to_string());

    let (id, source) = key.split_once('|').ok_or_else(invalid)?;
    if id.is_empty() || id.len() > 6 {
        return Err(invalid());
    }
    let id = u32::from_str_radix(id, 16).map_err(|_| invalid())?;
    let source = SourceKey::parse(source).map_err(|_| invalid())?;

    Ok(RecordRef::new(id, source))
}

/// Wrap a glyph in the icon font, and in a color tag when a color is given.
pub fn package_icon(glyph: Glyph, color: Option<&Color>) -> String {
    let icon = format!("<font face='{ICON_FONT_FACE}'> {glyph} </font>");
    match color {
        Some(color) => format!("<font color='{color}'>{icon}</font>"),
        None => icon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_key() {
        let reference = RecordRef::new(0x0001_A2B3, SourceKey::parse("Test.esp").unwrap());
        assert_eq!(package_key(&reference), "01a2b3|Test.esp");

        let indexed = RecordRef::new(0x0501_A2B3, SourceKey::parse("Test.esp").unwrap());
        assert_eq!(package_key(&indexed), "01a2b3|Test.esp");
    }

    #[test]
    fn test_key_round_trip() {
        let reference: RecordRef = "00ABCD:Some Mod.esm".parse().unwrap();
        let key = package_key(&reference);

        assert_eq!(parse_key(&key).unwrap(), reference);
    }

    #[test]
    fn test_parse_key_rejects_malformed() {
        assert!(parse_key("01a2b3").is_err());
        assert!(parse_key("|Test.esp").is_err());
        assert!(parse_key("xyz|Test.esp").is_err());
        assert!(parse_key("1234567|Test.esp").is_err());
        assert!(parse_key("01a2b3|Test").is_err());
    }

    #[test]
    fn test_package_icon_plain() {
        assert_eq!(
            package_icon(Glyph::SEARCH, None),
            "<font face='$Iconographia'> V </font>"
        );
    }

    #[test]
    fn test_package_icon_colored() {
        let color = Color::parse("123456").unwrap();
        assert_eq!(
            package_icon(Glyph::TAKE, Some(&color)),
            "<font color='#123456'><font face='$Iconographia'> S </font></font>"
        );
    }

    #[test]
    fn test_entry_serialization() {
        let reference = RecordRef::new(0x0001_A2B3, SourceKey::parse("Test.esp").unwrap());
        let entry = OutputEntry::new(&reference, RecordKind::Activator, Glyph::SEARCH, None);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["form_id"], "01a2b3|Test.esp");
        assert_eq!(json["type"], "ACTI RNAM");
        assert_eq!(json["string"], "<font face='$Iconographia'> V </font>");
    }
}
