//! Record identities and definitions.

mod record;

pub use record::*;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::RecordError;

/// Plugin file extensions accepted for a source key.
const SOURCE_EXTENSIONS: [&str; 3] = ["esm", "esp", "esl"];

/// Local numeric id of a record inside its defining source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(pub u32);

impl FormId {
    /// Mask selecting the local id bits; the top byte is the load-order index.
    pub const LOCAL_MASK: u32 = 0x00FF_FFFF;

    /// The 24-bit local id with any load-order index stripped.
    pub fn local(&self) -> u32 {
        self.0 & Self::LOCAL_MASK
    }
}

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06X}", self.local())
    }
}

/// Identifier of a source file, e.g. `Skyrim.esm` or `Test.esp`.
///
/// Comparison and hashing ignore ASCII case, the same way the game treats
/// plugin file names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SourceKey {
    file_name: String,
}

impl SourceKey {
    /// Parse a plugin file name.
    pub fn parse(file_name: impl Into<String>) -> Result<Self, RecordError> {
        let file_name = file_name.into();
        let valid = match file_name.rsplit_once('.') {
            Some((name, ext)) => {
                !name.trim().is_empty()
                    && SOURCE_EXTENSIONS
                        .iter()
                        .any(|known| known.eq_ignore_ascii_case(ext))
            }
            None => false,
        };

        if valid {
            Ok(Self { file_name })
        } else {
            Err(RecordError::InvalidSourceKey(file_name))
        }
    }

    /// Build a key from a file name known to be valid at compile time.
    pub(crate) fn from_static(file_name: &'static str) -> Self {
        Self {
            file_name: file_name.to_string(),
        }
    }

    /// Full file name including the extension.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File name without the extension.
    pub fn name(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(name, _)| name)
            .unwrap_or(&self.file_name)
    }

    fn folded(&self) -> String {
        self.file_name.to_ascii_lowercase()
    }
}

impl PartialEq for SourceKey {
    fn eq(&self, other: &Self) -> bool {
        self.file_name.eq_ignore_ascii_case(&other.file_name)
    }
}

impl Eq for SourceKey {}

impl Hash for SourceKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

impl PartialOrd for SourceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SourceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(&other.folded())
    }
}

impl TryFrom<String> for SourceKey {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SourceKey> for String {
    fn from(key: SourceKey) -> Self {
        key.file_name
    }
}

impl FromStr for SourceKey {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.file_name)
    }
}

/// Globally unique reference to a record: local id plus the source that
/// first defined it.
///
/// Written as `<hex-id>:<source-file>`, e.g. `01A2B3:Test.esp`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordRef {
    pub id: FormId,
    pub source: SourceKey,
}

impl RecordRef {
    /// Create a reference from a raw id and its defining source.
    pub fn new(id: u32, source: SourceKey) -> Self {
        Self {
            id: FormId(id),
            source,
        }
    }
}

impl FromStr for RecordRef {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RecordError::InvalidReference(s.to_string());

        let (id, source) = s.split_once(':').ok_or_else(invalid)?;
        let id = u32::from_str_radix(id.trim(), 16).map_err(|_| invalid())?;
        let source = SourceKey::parse(source.trim()).map_err(|_| invalid())?;

        Ok(Self::new(id, source))
    }
}

impl TryFrom<String> for RecordRef {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordRef> for String {
    fn from(reference: RecordRef) -> Self {
        reference.to_string()
    }
}

impl std::fmt::Display for RecordRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.id, self.source)
    }
}

/// The record kinds the patcher classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Flora,
    Activator,
}
