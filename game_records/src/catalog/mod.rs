//! Fixed identities the classifiers compare records against: harvest sounds
//! and the activator lever keyword.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::records::{RecordRef, SourceKey};

/// Harvest sound descriptors with a dedicated icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarvestSound {
    MushroomUp,
    ClamUp,
    /// Bottle filling, used by barrels and water sources.
    PotionFill,
    CoinPouchUp,
    CoinPouchDown,
}

impl HarvestSound {
    pub fn is_coin_pouch(&self) -> bool {
        matches!(self, HarvestSound::CoinPouchUp | HarvestSound::CoinPouchDown)
    }
}

/// Record identities of the harvest sounds and the lever keyword.
///
/// The default form ids are placeholders. They point at the base game master
/// but have not been checked against a game install, so set the real ids
/// under `[catalog]` in the configuration before relying on sound or keyword
/// rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// `ITMIngredientMushroomUp`
    pub mushroom_up: RecordRef,
    /// `ITMIngredientClamUp`
    pub clam_up: RecordRef,
    /// `ITMPotionUpSD`
    pub potion_fill: RecordRef,
    /// `ITMCoinPouchUp`
    pub coin_pouch_up: RecordRef,
    /// `ITMCoinPouchDown`
    pub coin_pouch_down: RecordRef,
    /// `ActivatorLever`
    pub lever_keyword: RecordRef,
}

impl Catalog {
    /// Base game master holding every default identity.
    pub const BASE_MASTER: &'static str = "Skyrim.esm";

    /// Map a harvest sound reference to its catalog entry.
    pub fn harvest_sound(&self, sound: &RecordRef) -> Option<HarvestSound> {
        [
            (&self.mushroom_up, HarvestSound::MushroomUp),
            (&self.clam_up, HarvestSound::ClamUp),
            (&self.potion_fill, HarvestSound::PotionFill),
            (&self.coin_pouch_up, HarvestSound::CoinPouchUp),
            (&self.coin_pouch_down, HarvestSound::CoinPouchDown),
        ]
        .into_iter()
        .find(|(known, _)| *known == sound)
        .map(|(_, kind)| kind)
    }

    /// Check whether a keyword set contains the lever keyword.
    pub fn has_lever_keyword(&self, keywords: &BTreeSet<RecordRef>) -> bool {
        keywords.contains(&self.lever_keyword)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let master = || SourceKey::from_static(Self::BASE_MASTER);

        Self {
            mushroom_up: RecordRef::new(0x0004_B24D, master()),
            clam_up: RecordRef::new(0x0010_D9E6, master()),
            potion_fill: RecordRef::new(0x0003_EDBD, master()),
            coin_pouch_up: RecordRef::new(0x000E_85D6, master()),
            coin_pouch_down: RecordRef::new(0x000E_85D5, master()),
            lever_keyword: RecordRef::new(0x0010_D9EF, master()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harvest_sound_lookup() {
        let catalog = Catalog::default();

        assert_eq!(
            catalog.harvest_sound(&catalog.mushroom_up),
            Some(HarvestSound::MushroomUp)
        );
        assert_eq!(
            catalog.harvest_sound(&catalog.coin_pouch_down),
            Some(HarvestSound::CoinPouchDown)
        );

        let unknown: RecordRef = "000001:Skyrim.esm".parse().unwrap();
        assert_eq!(catalog.harvest_sound(&unknown), None);
    }

    #[test]
    fn test_identity_includes_source() {
        let catalog = Catalog::default();
        let same_id_other_source = RecordRef::new(
            catalog.clam_up.id.0,
            SourceKey::parse("Other.esp").unwrap(),
        );

        assert_eq!(catalog.harvest_sound(&same_id_other_source), None);
    }

    #[test]
    fn test_coin_pouch() {
        assert!(HarvestSound::CoinPouchUp.is_coin_pouch());
        assert!(HarvestSound::CoinPouchDown.is_coin_pouch());
        assert!(!HarvestSound::ClamUp.is_coin_pouch());
    }

    #[test]
    fn test_lever_keyword() {
        let catalog = Catalog::default();
        let mut keywords = BTreeSet::new();
        assert!(!catalog.has_lever_keyword(&keywords));

        keywords.insert(catalog.lever_keyword.clone());
        assert!(catalog.has_lever_keyword(&keywords));
    }

    #[test]
    fn test_default_identities_are_distinct() {
        let catalog = Catalog::default();
        let all: BTreeSet<_> = [
            &catalog.mushroom_up,
            &catalog.clam_up,
            &catalog.potion_fill,
            &catalog.coin_pouch_up,
            &catalog.coin_pouch_down,
            &catalog.lever_keyword,
        ]
        .into_iter()
        .collect();

        assert_eq!(all.len(), 6);
        assert!(all
            .iter()
            .all(|reference| reference.source.file_name() == Catalog::BASE_MASTER));
    }

    #[test]
    fn test_partial_override_from_json() {
        let catalog: Catalog =
            serde_json::from_str(r#"{ "lever_keyword": "000ABC:Custom.esm" }"#).unwrap();

        assert_eq!(catalog.lever_keyword.to_string(), "000ABC:Custom.esm");
        assert_eq!(catalog.clam_up, Catalog::default().clam_up);
    }
}
