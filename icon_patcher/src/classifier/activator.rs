//! Activator icon rules.

use game_records::{Catalog, Record};
use tracing::trace;

use super::{Classification, Glyph, Rule, RuleSet};
use crate::color::Color;
use crate::text::{contains_any, contains_one, equals_any, equals_one};

/// Editor id marker of the Solstheim standing stones.
pub const STANDING_STONE_MARKER: &str = "dlc2standingstone";

/// Editor id marker of the civil war map and its flags.
pub const CIVIL_WAR_MAP_MARKER: &str = "cwmap";

/// The attributes activator rules look at.
#[derive(Debug, Clone, Copy)]
pub struct ActivatorTraits<'a> {
    pub name: Option<&'a str>,
    pub editor_id: Option<&'a str>,
    pub verb: Option<&'a str>,
    pub lever_keyword: bool,
}

impl<'a> ActivatorTraits<'a> {
    pub fn of(record: &'a Record, catalog: &Catalog) -> Self {
        Self {
            name: record.display_name(),
            editor_id: record.editor_id(),
            verb: record.verb_override(),
            lever_keyword: catalog.has_lever_keyword(&record.keywords),
        }
    }
}

pub type ActivatorPredicate = fn(&ActivatorTraits<'_>) -> bool;

/// Activator rules in priority order.
pub static ACTIVATOR_RULES: RuleSet<ActivatorPredicate, Classification> = RuleSet {
    rules: &[
        // Triggers and effect helpers without a verb are not player-facing.
        Rule {
            name: "trigger or effect",
            when: |a| a.verb.is_none() && contains_any(a.editor_id, &["trig", "fx"]),
            then: Classification::Suppressed,
        },
        Rule {
            name: "steal",
            when: |a| equals_one(a.verb, "steal"),
            then: Classification::colored(Glyph::TAKE, Color::RED),
        },
        Rule {
            name: "pickpocket",
            when: |a| equals_one(a.verb, "pickpocket"),
            then: Classification::colored(Glyph::PICKPOCKET, Color::RED),
        },
        Rule {
            name: "steal from",
            when: |a| equals_one(a.verb, "steal from"),
            then: Classification::colored(Glyph::SEARCH, Color::RED),
        },
        Rule {
            name: "close",
            when: |a| equals_one(a.verb, "close"),
            then: Classification::colored(Glyph::OPEN, Color::LIGHT_GRAY),
        },
        Rule {
            name: "chest",
            when: |a| {
                equals_one(a.name, "chest")
                    || equals_one(a.verb, "search")
                    || (contains_one(a.name, "chest") && equals_one(a.verb, "open"))
            },
            then: Classification::icon(Glyph::SEARCH),
        },
        Rule {
            name: "grab or touch",
            when: |a| equals_any(a.verb, &["grab", "touch"]),
            then: Classification::icon(Glyph::TAKE),
        },
        Rule {
            name: "lever",
            when: |a| {
                a.lever_keyword
                    || contains_one(a.name, "lever")
                    || contains_one(a.editor_id, "pullbar")
            },
            then: Classification::icon(Glyph::LEVER),
        },
        Rule {
            name: "chain",
            when: |a| contains_one(a.name, "chain"),
            then: Classification::icon(Glyph::CHAIN),
        },
        Rule {
            name: "mine",
            when: |a| equals_one(a.verb, "mine"),
            then: Classification::icon(Glyph::MINE),
        },
        Rule {
            name: "button",
            when: |a| {
                contains_one(a.name, "button")
                    || equals_any(a.verb, &["press", "examine", "push", "investigate"])
            },
            then: Classification::icon(Glyph::PRESS),
        },
        Rule {
            name: "ledger",
            when: |a| contains_one(a.name, "ledger") || equals_one(a.verb, "write"),
            then: Classification::icon(Glyph::WRITE),
        },
        Rule {
            name: "shrine",
            when: |a| {
                contains_any(a.name, &["shrine", "altar"])
                    || contains_one(a.editor_id, STANDING_STONE_MARKER)
                    || equals_any(a.verb, &["pray", "worship"])
            },
            then: Classification::icon(Glyph::PRAY),
        },
        Rule {
            name: "drink",
            when: |a| equals_one(a.verb, "drink"),
            then: Classification::icon(Glyph::DRINK),
        },
        Rule {
            name: "eat",
            when: |a| equals_one(a.verb, "eat"),
            then: Classification::icon(Glyph::EAT),
        },
        Rule {
            name: "drop",
            when: |a| equals_any(a.verb, &["drop", "place", "exchange"]),
            then: Classification::icon(Glyph::PLACE),
        },
        Rule {
            name: "pick up",
            when: |a| equals_one(a.verb, "pick up"),
            then: Classification::icon(Glyph::PICK_UP),
        },
        Rule {
            name: "read",
            when: |a| equals_one(a.verb, "read"),
            then: Classification::icon(Glyph::READ),
        },
        Rule {
            name: "harvest",
            when: |a| equals_one(a.verb, "harvest"),
            then: Classification::icon(Glyph::HARVEST),
        },
        Rule {
            name: "take or catch",
            when: |a| equals_any(a.verb, &["take", "catch"]),
            then: Classification::icon(Glyph::TAKE),
        },
        Rule {
            name: "talk",
            when: |a| equals_any(a.verb, &["talk", "speak"]),
            then: Classification::icon(Glyph::TALK),
        },
        Rule {
            name: "sit",
            when: |a| equals_one(a.verb, "sit"),
            then: Classification::icon(Glyph::SIT),
        },
        Rule {
            name: "open",
            when: |a| equals_one(a.verb, "open"),
            then: Classification::icon(Glyph::OPEN),
        },
        Rule {
            name: "activate",
            when: |a| equals_one(a.verb, "activate"),
            then: Classification::icon(Glyph::ACTIVATE),
        },
        Rule {
            name: "unlock",
            when: |a| equals_one(a.verb, "unlock"),
            then: Classification::icon(Glyph::UNLOCK),
        },
        Rule {
            name: "sleep",
            when: |a| {
                equals_one(a.verb, "sleep") || contains_any(a.name, &["bed", "hammock", "coffin"])
            },
            then: Classification::icon(Glyph::SLEEP),
        },
        Rule {
            name: "sconce",
            when: |a| contains_one(a.editor_id, "sconce"),
            then: Classification::icon(Glyph::TORCH),
        },
        Rule {
            name: "keyhole",
            when: |a| contains_one(a.name, "keyhole"),
            then: Classification::icon(Glyph::KEYHOLE),
        },
        Rule {
            name: "civil war map",
            when: |a| contains_one(a.editor_id, CIVIL_WAR_MAP_MARKER),
            then: Classification::icon(Glyph::PRESS),
        },
        Rule {
            name: "climb",
            when: |a| contains_one(a.editor_id, "ladder") || equals_any(a.verb, &["float", "climb"]),
            then: Classification::icon(Glyph::CLIMB),
        },
        Rule {
            name: "squeeze",
            when: |a| contains_one(a.editor_id, "squeeze"),
            then: Classification::icon(Glyph::SQUEEZE),
        },
        Rule {
            name: "fishing supplies",
            when: |a| contains_one(a.name, "fishing supplies"),
            then: Classification::icon(Glyph::FISHING),
        },
    ],
    fallback: Classification::icon(Glyph::INTERACT),
};

/// Classify an activator. The returned color is the rule color only; the
/// ambient default is applied by the caller.
pub fn classify_activator(record: &Record, catalog: &Catalog) -> Classification {
    let traits = ActivatorTraits::of(record, catalog);
    let (rule, outcome) = ACTIVATOR_RULES.evaluate(|when| when(&traits));
    trace!(reference = %record.reference, rule, ?outcome, "classified activator");
    outcome.clone()
}
