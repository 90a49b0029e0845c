//! Override detection: decide whether a record needs classifying or is an
//! unchanged copy of its upstream baseline.

use game_records::{Record, RecordResolver, SourceKey};

/// Decide whether `record`, as scanned in `current`, must be classified.
///
/// Records whose reference belongs to `current` always are. Overrides of
/// records from other sources are skipped when both the verb override and display name equal the baseline's; the
/// comparison is strict, so `None` and `Some("")` differ. A missing baseline
/// counts as a change.
pub fn needs_classification(record: &Record, current: &SourceKey, baseline: Option<&Record>) -> bool {
    if is_defined_in(record, current) {
        return true;
    }

    match baseline {
        Some(baseline) => {
            record.verb_override != baseline.verb_override
                || record.display_name != baseline.display_name
        }
        None => true,
    }
}

fn is_defined_in(record: &Record, current: &SourceKey) -> bool {
    &record.reference.source == current
}

/// Resolve the baseline through `resolver` and apply [`needs_classification`].
pub fn needs_classification_in<R: RecordResolver + ?Sized>(
    resolver: &R,
    record: &Record,
    current: &SourceKey,
) -> bool {
    if is_defined_in(record, current) {
        return true;
    }
    let baseline = resolver.resolve_baseline(&record.reference, current);
    needs_classification(record, current, baseline)
}
