//! Flora icon rules.

use game_records::{Catalog, HarvestSound, Record};
use tracing::trace;

use super::{Glyph, Rule, RuleSet};
use crate::text::{contains_any, contains_one, equals_any};

/// The attributes flora rules look at.
#[derive(Debug, Clone, Copy)]
pub struct FloraTraits<'a> {
    pub sound: Option<HarvestSound>,
    pub name: Option<&'a str>,
    pub verb: Option<&'a str>,
}

impl<'a> FloraTraits<'a> {
    /// Collect the traits of a record, resolving its harvest sound through the
    /// catalog.
    pub fn of(record: &'a Record, catalog: &Catalog) -> Self {
        Self {
            sound: record
                .harvest_sound
                .as_ref()
                .and_then(|sound| catalog.harvest_sound(sound)),
            name: record.display_name(),
            verb: record.verb_override(),
        }
    }
}

pub type FloraPredicate = fn(&FloraTraits<'_>) -> bool;

/// Flora rules in priority order.
pub static FLORA_RULES: RuleSet<FloraPredicate, Glyph> = RuleSet {
    rules: &[
        Rule {
            name: "mushroom",
            when: |f| {
                f.sound == Some(HarvestSound::MushroomUp)
                    || contains_any(f.name, &["spore", "cap", "crown", "shroom"])
            },
            then: Glyph::MUSHROOM,
        },
        Rule {
            name: "clam",
            when: |f| f.sound == Some(HarvestSound::ClamUp) || contains_one(f.name, "clam"),
            then: Glyph::CLAM,
        },
        Rule {
            name: "fill",
            when: |f| {
                f.sound == Some(HarvestSound::PotionFill)
                    || contains_one(f.verb, "fill bottles")
                    || contains_any(f.name, &["barrel", "cask"])
            },
            then: Glyph::FILL,
        },
        Rule {
            name: "coin pouch",
            when: |f| {
                f.sound.is_some_and(|sound| sound.is_coin_pouch())
                    || contains_one(f.name, "coin purse")
            },
            then: Glyph::TAKE,
        },
        Rule {
            name: "catch or scavenge",
            when: |f| equals_any(f.verb, &["catch", "scavenge"]),
            then: Glyph::TAKE,
        },
    ],
    fallback: Glyph::HARVEST,
};

/// Pick the glyph for a flora record. Flora rules never carry a color.
pub fn classify_flora(record: &Record, catalog: &Catalog) -> Glyph {
    let traits = FloraTraits::of(record, catalog);
    let (rule, glyph) = FLORA_RULES.evaluate(|when| when(&traits));
    trace!(reference = %record.reference, rule, %glyph, "classified flora");
    *glyph
}
