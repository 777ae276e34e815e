use serde::Serialize;
use std::collections::BTreeSet;

use super::index::DependencyIndex;

/// Distinct imports split by ownership. The two sets are disjoint and together
/// hold every distinct import of the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub first_party: BTreeSet<String>,
    pub third_party: BTreeSet<String>,
}

impl Classification {
    pub fn len(&self) -> usize {
        self.first_party.len() + self.third_party.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_party.is_empty() && self.third_party.is_empty()
    }
}

/// Pure, case-sensitive string-prefix test. No dotted-segment boundary is
/// enforced, so `ThroneGameEngine` counts as first-party for `ThroneGame`.
pub fn is_first_party(import: &str, project_prefix: &str) -> bool {
    import.starts_with(project_prefix)
}

pub fn classify(index: &DependencyIndex, project_prefix: &str) -> Classification {
    let mut classification = Classification::default();
    for import in index.all_imports() {
        let bucket = if is_first_party(import, project_prefix) {
            &mut classification.first_party
        } else {
            &mut classification.third_party
        };
        if !bucket.contains(import) {
            bucket.insert(import.to_string());
        }
    }
    classification
}
