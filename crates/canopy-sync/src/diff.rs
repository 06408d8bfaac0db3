use std::collections::BTreeMap;

use canopy_types::Hash;

/// One source tree entry that needs transferring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffEntry {
    /// Entry name in the source tree.
    pub name: String,
    /// Hash of the source child.
    pub source: Hash,
    /// Hash of the comparison child with the same name, if one exists.
    /// `None` means the entry is new relative to the comparison tree.
    pub destination: Option<Hash>,
}

/// Compute the name-level difference between a source tree and a comparison
/// tree.
///
/// Entries with the same name are paired so that structurally similar
/// subtrees get diffed against each other further down the recursion.
/// Unchanged entries (same name, same hash) produce nothing; entries
/// present only in the comparison tree are deletions from the source's
/// point of view and are ignored — sync never removes anything.
pub fn diff_trees(
    source: &BTreeMap<String, Hash>,
    comparison: &BTreeMap<String, Hash>,
) -> Vec<DiffEntry> {
    let mut diffs = Vec::new();
    for (name, source_hash) in source {
        match comparison.get(name) {
            None => diffs.push(DiffEntry {
                name: name.clone(),
                source: source_hash.clone(),
                destination: None,
            }),
            Some(dest_hash) if dest_hash != source_hash => diffs.push(DiffEntry {
                name: name.clone(),
                source: source_hash.clone(),
                destination: Some(dest_hash.clone()),
            }),
            Some(_) => {}
        }
    }
    diffs
}
