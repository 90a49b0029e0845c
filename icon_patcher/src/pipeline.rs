//! The patch pipeline: a single ordered pass over the eligible sources.
//!
//! For each source, every flora and activator record goes through:
//! 1. **Baseline diff**: skip unchanged inherited copies
//! 2. **Classification**: pick a glyph and color, or suppress
//! 3. **Packaging**: format the key and markup of the entry
//!
//! Entries accumulate per kind; sources with no entries produce no patch.

use game_records::{LoadOrder, Record, RecordKind, RecordResolver, SourceKey, SourcePlugin};
use tracing::{debug, info};

use crate::baseline::needs_classification_in;
use crate::classifier::{Classification, Classifier};
use crate::color::{mine_ambient_color, Color};
use crate::config::PatcherConfig;
use crate::filter::SourceFilter;
use crate::package::OutputEntry;

/// Entries produced for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePatch {
    pub source: SourceKey,
    pub flora: Vec<OutputEntry>,
    pub activators: Vec<OutputEntry>,
}

impl SourcePatch {
    pub fn new(source: SourceKey) -> Self {
        Self {
            source,
            flora: Vec::new(),
            activators: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.flora.is_empty() && self.activators.is_empty()
    }

    /// Total number of entries across both kinds.
    pub fn len(&self) -> usize {
        self.flora.len() + self.activators.len()
    }

    fn push(&mut self, kind: RecordKind, entry: OutputEntry) {
        match kind {
            RecordKind::Flora => self.flora.push(entry),
            RecordKind::Activator => self.activators.push(entry),
        }
    }
}

/// Resolve the ambient color for a run: an explicit configured color wins,
/// otherwise it is mined from the previously generated document.
pub fn resolve_ambient(config: &PatcherConfig) -> Option<Color> {
    match &config.ambient_color {
        Some(color) => Some(color.clone()),
        None => mine_ambient_color(&config.ambient_source_path()),
    }
}

/// Runs classification over a load order.
#[derive(Debug, Clone)]
pub struct Patcher {
    classifier: Classifier,
    filter: SourceFilter,
}

impl Patcher {
    /// Create a patcher from an already-resolved classifier and filter.
    pub fn new(classifier: Classifier, filter: SourceFilter) -> Self {
        Self { classifier, filter }
    }

    /// Build a patcher from configuration, resolving the ambient color first.
    pub fn from_config(config: &PatcherConfig) -> Self {
        let ambient = resolve_ambient(config);
        let classifier = Classifier::new(config.catalog.clone(), ambient);
        Self::new(classifier, config.source_filter())
    }

    /// Restrict this patcher to a single source.
    pub fn only(mut self, source: SourceKey) -> Self {
        self.filter = self.filter.only(source);
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn filter(&self) -> &SourceFilter {
        &self.filter
    }

    /// Classify one record as seen from `current`. Returns `None` when the
    /// record is unchanged from its baseline or suppressed.
    pub fn patch_record<R: RecordResolver + ?Sized>(
        &self,
        resolver: &R,
        current: &SourceKey,
        record: &Record,
    ) -> Option<OutputEntry> {
        if !needs_classification_in(resolver, record, current) {
            debug!(reference = %record.reference, source = %current, "unchanged from baseline");
            return None;
        }

        match self.classifier.classify(record) {
            Classification::Icon { glyph, color } => Some(OutputEntry::new(
                &record.reference,
                record.kind,
                glyph,
                color.as_ref(),
            )),
            Classification::Suppressed => {
                debug!(reference = %record.reference, "suppressed");
                None
            }
        }
    }

    /// Produce the entries of one source, flora first, in record order.
    pub fn patch_source<R: RecordResolver + ?Sized>(
        &self,
        resolver: &R,
        plugin: &SourcePlugin,
    ) -> SourcePatch {
        let mut patch = SourcePatch::new(plugin.key.clone());

        for kind in [RecordKind::Flora, RecordKind::Activator] {
            for record in plugin.records_of(kind) {
                if let Some(entry) = self.patch_record(resolver, &plugin.key, record) {
                    patch.push(kind, entry);
                }
            }
        }

        patch
    }

    /// Patch every eligible enabled source in load order, keeping only
    /// non-empty patches.
    pub fn run(
        &self,
        load_order: &LoadOrder,
        already_processed: impl Fn(&SourceKey) -> bool,
    ) -> Vec<SourcePatch> {
        let patches: Vec<SourcePatch> = load_order
            .enabled()
            .filter(|plugin| self.filter.is_eligible(plugin, &already_processed))
            .map(|plugin| self.patch_source(load_order, plugin))
            .filter(|patch| !patch.is_empty())
            .collect();

        info!(patched = patches.len(), "finished classifying sources");
        patches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_records::{Catalog, RecordRef};

    use crate::classifier::Glyph;
    use crate::filter::official_sources;

    fn key(name: &str) -> SourceKey {
        SourceKey::parse(name).unwrap()
    }

    fn reference(raw: &str) -> RecordRef {
        raw.parse().unwrap()
    }

    fn patcher(ambient: Option<Color>) -> Patcher {
        Patcher::new(
            Classifier::new(Catalog::default(), ambient),
            SourceFilter::new().exclude(official_sources()),
        )
    }

    fn sample_order() -> LoadOrder {
        let base_chest = Record::activator(reference("000ABC:Skyrim.esm")).with_name("Chest");

        LoadOrder::new()
            .with_plugin(SourcePlugin::new(key("Skyrim.esm")).with_record(base_chest.clone()))
            .with_plugin(
                SourcePlugin::new(key("Test.esp"))
                    .with_record(
                        Record::activator(reference("01A2B3:Test.esp")).with_name("Old Chest"),
                    )
                    .with_record(
                        Record::activator(reference("01A2B4:Test.esp")).with_editor_id("FXDust"),
                    )
                    .with_record(
                        Record::flora(reference("01A2B5:Test.esp")).with_name("Bleeding Crown"),
                    )
                    // Inherited, unchanged: skipped.
                    .with_record(base_chest.clone())
                    // Inherited, renamed: classified.
                    .with_record(base_chest.with_name("Strongbox").with_verb("Open")),
            )
    }

    #[test]
    fn test_patch_source() {
        let order = sample_order();
        let test = order.get(&key("Test.esp")).unwrap();
        let patch = patcher(None).patch_source(&order, test);

        assert_eq!(patch.flora.len(), 1);
        assert_eq!(patch.flora[0].form_id, "01a2b5|Test.esp");
        assert_eq!(
            patch.flora[0].string,
            "<font face='$Iconographia'> A </font>"
        );

        let keys: Vec<_> = patch.activators.iter().map(|e| e.form_id.as_str()).collect();
        assert_eq!(keys, vec!["01a2b3|Test.esp", "000abc|Skyrim.esm"]);
        assert_eq!(
            patch.activators[1].string,
            "<font face='$Iconographia'> X </font>"
        );
    }

    #[test]
    fn test_record_defined_in_current_source_always_classified() {
        let record = Record::activator(reference("01A2B3:Test.esp")).with_name("Chest");
        let order = LoadOrder::new()
            .with_plugin(SourcePlugin::new(key("Test.esp")).with_record(record.clone()))
            .with_plugin(SourcePlugin::new(key("Later.esp")).with_record(record.clone()));

        let entry = patcher(None).patch_record(&order, &key("Test.esp"), &record);
        assert_eq!(
            entry.unwrap().string,
            "<font face='$Iconographia'> V </font>"
        );

        assert!(patcher(None)
            .patch_record(&order, &key("Later.esp"), &record)
            .is_none());
    }

    #[test]
    fn test_unchanged_override_not_emitted() {
        let chest = Record::activator(reference("000ABC:Skyrim.esm")).with_name("Chest");
        let order = LoadOrder::new()
            .with_plugin(SourcePlugin::new(key("Skyrim.esm")).with_record(chest.clone()))
            .with_plugin(SourcePlugin::new(key("Test.esp")).with_record(chest));
        let test = order.get(&key("Test.esp")).unwrap();

        let patch = patcher(None).patch_source(&order, test);
        assert!(patch.is_empty());
        assert!(patcher(None).run(&order, |_| false).is_empty());
    }

    #[test]
    fn test_ambient_color_applied() {
        let order = LoadOrder::new().with_plugin(
            SourcePlugin::new(key("Coins.esp")).with_record(
                Record::flora(reference("000010:Coins.esp"))
                    .with_harvest_sound(Catalog::default().coin_pouch_up),
            ),
        );
        let coins = order.get(&key("Coins.esp")).unwrap();

        let patch = patcher(Color::parse("#123456").ok()).patch_source(&order, coins);
        assert_eq!(
            patch.flora[0].string,
            "<font color='#123456'><font face='$Iconographia'> S </font></font>"
        );
    }

    #[test]
    fn test_run_skips_ineligible_and_empty() {
        let order = sample_order().with_plugin(
            SourcePlugin::new(key("OnlyFx.esp")).with_record(
                Record::activator(reference("000001:OnlyFx.esp")).with_editor_id("fxSmoke"),
            ),
        );

        let patches = patcher(None).run(&order, |_| false);
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].source, key("Test.esp"));
        assert_eq!(patches[0].len(), 3);

        let none = patcher(None).run(&order, |source| source == &key("Test.esp"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_run_only_selected_source() {
        let order = sample_order().with_plugin(
            SourcePlugin::new(key("Other.esp")).with_record(
                Record::flora(reference("000001:Other.esp")).with_name("Nirnroot"),
            ),
        );

        assert_eq!(patcher(None).run(&order, |_| false).len(), 2);

        let patches = patcher(None).only(key("other.esp")).run(&order, |_| false);
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].source, key("Other.esp"));
    }

    #[test]
    fn test_run_is_deterministic() {
        let order = sample_order();
        let patcher = patcher(Color::parse("00ff00").ok());

        assert_eq!(patcher.run(&order, |_| false), patcher.run(&order, |_| false));
    }

    #[test]
    fn test_resolve_ambient_prefers_configured_color() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PatcherConfig {
            output_root: dir.path().to_path_buf(),
            ..PatcherConfig::default()
        };
        assert!(resolve_ambient(&config).is_none());

        let mined = config.ambient_source_path();
        std::fs::create_dir_all(mined.parent().unwrap()).unwrap();
        std::fs::write(
            &mined,
            r#"[{"form_id": "000001|Skyrim.esm", "type": "ACTI RNAM", "string": "<font color='#abcdef'>x</font>"}]"#,
        )
        .unwrap();
        assert_eq!(resolve_ambient(&config).unwrap().hex(), "abcdef");

        config.ambient_color = Color::parse("010203").ok();
        assert_eq!(resolve_ambient(&config).unwrap().hex(), "010203");
    }

    #[test]
    fn test_from_config_uses_mined_color() {
        let dir = tempfile::tempdir().unwrap();
        let config = PatcherConfig {
            output_root: dir.path().to_path_buf(),
            ambient_color: Color::parse("fedcba").ok(),
            ..PatcherConfig::default()
        };

        let patcher = Patcher::from_config(&config);
        assert_eq!(patcher.classifier().ambient().unwrap().hex(), "fedcba");

        let record = Record::activator(reference("000001:Test.esp")).with_verb("Harvest");
        let entry = patcher
            .patch_record(&LoadOrder::new(), &key("Test.esp"), &record)
            .unwrap();
        assert_eq!(
            entry.string,
            format!(
                "<font color='#fedcba'><font face='$Iconographia'> {} </font></font>",
                Glyph::HARVEST
            )
        );
    }
}
