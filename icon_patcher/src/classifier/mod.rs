//! Icon classification for flora and activator records.
//!
//! Each record kind has its own ordered rule table:
//! - **flora**: harvest sound, name, and verb produce a single glyph
//! - **activator**: name, editor id, verb, and keywords produce a glyph with
//!   an optional rule color, or suppress the record entirely
//!
//! The [`Classifier`] ties both tables to a catalog and the run's ambient
//! color, which is resolved once before any record is classified.

mod activator;
mod flora;
mod rule;

pub use activator::*;
pub use flora::*;
pub use rule::*;

use game_records::{Catalog, Record, RecordKind};

use crate::color::{resolve_color, Color};

/// A single character selecting an icon from the `$Iconographia` font face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph(char);

impl Glyph {
    pub const MUSHROOM: Glyph = Glyph('A');
    pub const PRAY: Glyph = Glyph('C');
    pub const LEVER: Glyph = Glyph('D');
    pub const CHAIN: Glyph = Glyph('E');
    pub const PRESS: Glyph = Glyph('F');
    pub const MINE: Glyph = Glyph('G');
    pub const WRITE: Glyph = Glyph('H');
    pub const FISHING: Glyph = Glyph('I');
    pub const DRINK: Glyph = Glyph('J');
    pub const EAT: Glyph = Glyph('K');
    pub const FILL: Glyph = Glyph('L');
    pub const PLACE: Glyph = Glyph('N');
    pub const PICK_UP: Glyph = Glyph('O');
    pub const READ: Glyph = Glyph('P');
    pub const HARVEST: Glyph = Glyph('Q');
    pub const TAKE: Glyph = Glyph('S');
    pub const TALK: Glyph = Glyph('T');
    pub const SIT: Glyph = Glyph('U');
    pub const SEARCH: Glyph = Glyph('V');
    pub const INTERACT: Glyph = Glyph('W');
    pub const OPEN: Glyph = Glyph('X');
    pub const ACTIVATE: Glyph = Glyph('Y');
    pub const UNLOCK: Glyph = Glyph('Z');
    pub const SLEEP: Glyph = Glyph('a');
    pub const CLAM: Glyph = Glyph('b');
    pub const PICKPOCKET: Glyph = Glyph('b');
    pub const CLIMB: Glyph = Glyph('d');
    pub const SQUEEZE: Glyph = Glyph('e');
    pub const TORCH: Glyph = Glyph('i');
    pub const KEYHOLE: Glyph = Glyph('j');

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Outcome of classifying one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Emit an entry with this glyph and optional color.
    Icon { glyph: Glyph, color: Option<Color> },
    /// Do not emit an entry for this record.
    Suppressed,
}

impl Classification {
    /// An uncolored icon.
    pub const fn icon(glyph: Glyph) -> Self {
        Classification::Icon { glyph, color: None }
    }

    /// An icon with a rule-specific color.
    pub const fn colored(glyph: Glyph, color: Color) -> Self {
        Classification::Icon {
            glyph,
            color: Some(color),
        }
    }

    pub fn glyph(&self) -> Option<Glyph> {
        match self {
            Classification::Icon { glyph, .. } => Some(*glyph),
            Classification::Suppressed => None,
        }
    }

    pub fn color(&self) -> Option<&Color> {
        match self {
            Classification::Icon { color, .. } => color.as_ref(),
            Classification::Suppressed => None,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Classification::Suppressed)
    }

    /// Fill in the ambient color where no rule color applies.
    pub fn with_ambient(self, ambient: Option<&Color>) -> Self {
        match self {
            Classification::Icon { glyph, color } => Classification::Icon {
                glyph,
                color: resolve_color(color.as_ref(), ambient).cloned(),
            },
            Classification::Suppressed => Classification::Suppressed,
        }
    }
}

/// Classifies records against a catalog with a fixed ambient color.
#[derive(Debug, Clone)]
pub struct Classifier {
    catalog: Catalog,
    ambient: Option<Color>,
}

impl Classifier {
    /// Create a classifier; `ambient` must already be resolved.
    pub fn new(catalog: Catalog, ambient: Option<Color>) -> Self {
        Self { catalog, ambient }
    }

    /// Create a classifier with the default catalog and no ambient color.
    pub fn with_defaults() -> Self {
        Self::new(Catalog::default(), None)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ambient(&self) -> Option<&Color> {
        self.ambient.as_ref()
    }

    /// Classify a record and apply the ambient color.
    pub fn classify(&self, record: &Record) -> Classification {
        let outcome = match record.kind {
            RecordKind::Flora => Classification::icon(classify_flora(record, &self.catalog)),
            RecordKind::Activator => classify_activator(record, &self.catalog),
        };
        outcome.with_ambient(self.ambient())
    }
}
