//! Structural updates: `merge`, `diff`, and `update` each materialize a
//! combined entry sequence once and re-invoke the bulk loader, rather than
//! mutating the existing tree in place (which this crate never does).

use crate::entry::Entry;
use crate::error::CapacityError;
use crate::tree::Tree;

/// Builds a new tree equal to `entries(tree) ++ insertions`.
///
/// The old tree is left untouched; its entry sequence is read once (no
/// per-insertion traversal) and combined with `insertions` before a single
/// STR bulk-load pass.
pub fn merge<T>(
    tree: &Tree<T>,
    insertions: Vec<Entry<T>>,
    capacity: usize,
) -> Result<Tree<T>, CapacityError>
where
    T: Clone,
{
    let mut entries = tree.entries_cloned();
    tracing::debug!(
        old_len = entries.len(),
        inserted = insertions.len(),
        "merging entries into a new tree"
    );
    entries.extend(insertions);
    Tree::build(entries, capacity)
}

/// Builds a new tree equal to `entries(tree) \ removals` under multiset
/// difference: each removal instance cancels at most one structurally equal
/// entry. Removals with no match are silently ignored.
pub fn diff<T>(
    tree: &Tree<T>,
    removals: Vec<Entry<T>>,
    capacity: usize,
) -> Result<Tree<T>, CapacityError>
where
    T: Clone + PartialEq,
{
    let mut entries = tree.entries_cloned();
    let removed = subtract_multiset(&mut entries, removals);
    tracing::debug!(
        old_len = entries.len() + removed,
        removed,
        "diffing entries into a new tree"
    );
    Tree::build(entries, capacity)
}

/// Single-pass combination equal to `merge(diff(tree, removals), insertions)`,
/// implemented over one materialized entry vector so only one STR bulk-load
/// pass runs.
pub fn update<T>(
    tree: &Tree<T>,
    removals: Vec<Entry<T>>,
    insertions: Vec<Entry<T>>,
    capacity: usize,
) -> Result<Tree<T>, CapacityError>
where
    T: Clone + PartialEq,
{
    let mut entries = tree.entries_cloned();
    let removed = subtract_multiset(&mut entries, removals);
    let inserted = insertions.len();
    tracing::debug!(removed, inserted, "updating entries into a new tree");
    entries.extend(insertions);
    Tree::build(entries, capacity)
}

/// Removes, from `entries`, one structurally-equal match per item of
/// `removals` (multiset subtraction); unmatched removals are dropped
/// silently. Returns the number of removals that found a match.
fn subtract_multiset<T: PartialEq>(entries: &mut Vec<Entry<T>>, removals: Vec<Entry<T>>) -> usize {
    let mut removed = 0;
    for removal in removals {
        if let Some(pos) = entries.iter().position(|e| *e == removal) {
            entries.remove(pos);
            removed += 1;
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{random_entries, SEED_1};
    use std::collections::HashMap;

    fn multiset<T: Clone + Eq + std::hash::Hash>(entries: &[Entry<T>]) -> HashMap<T, usize> {
        let mut counts = HashMap::new();
        for e in entries {
            *counts.entry(e.payload.clone()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_scenario_d_update_multiset() {
        let e1 = Entry::new(0.0, 0.0, 1.0, 1.0, "e1");
        let e2 = Entry::new(1.0, 1.0, 2.0, 2.0, "e2");
        let e3 = Entry::new(2.0, 2.0, 3.0, 3.0, "e3");
        let e4 = Entry::new(3.0, 3.0, 4.0, 4.0, "e4");
        let e5 = Entry::new(4.0, 4.0, 5.0, 5.0, "e5");

        let tree = Tree::build(vec![e1, e2, e3], 4).unwrap();
        let updated = update(&tree, vec![e2], vec![e4, e5], 4).unwrap();

        let got = multiset(&updated.entries().into_iter().cloned().collect::<Vec<_>>());
        let expected: HashMap<&str, usize> =
            [("e1", 1), ("e3", 1), ("e4", 1), ("e5", 1)].into_iter().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_scenario_f_diff_multiset_removal() {
        let e1 = Entry::new(0.0, 0.0, 1.0, 1.0, "e1");
        let e2 = Entry::new(1.0, 1.0, 2.0, 2.0, "e2");

        let tree = Tree::build(vec![e1, e1, e2], 4).unwrap();
        let diffed = diff(&tree, vec![e1], 4).unwrap();

        let got = multiset(&diffed.entries().into_iter().cloned().collect::<Vec<_>>());
        let expected: HashMap<&str, usize> = [("e1", 1), ("e2", 1)].into_iter().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_diff_ignores_unmatched_removal() {
        let e1 = Entry::new(0.0, 0.0, 1.0, 1.0, "e1");
        let phantom = Entry::new(9.0, 9.0, 10.0, 10.0, "phantom");

        let tree = Tree::build(vec![e1], 4).unwrap();
        let diffed = diff(&tree, vec![phantom], 4).unwrap();

        assert_eq!(diffed.len(), 1);
    }

    #[test]
    fn test_insert_only_is_union() {
        let entries = random_entries(100, SEED_1);
        let tree = Tree::build(entries.clone(), 8).unwrap();
        let more = random_entries(20, SEED_1);
        let merged = merge(&tree, more.clone(), 8).unwrap();
        assert_eq!(merged.len(), entries.len() + more.len());
    }

    #[test]
    fn test_diff_only_recovers_original() {
        let entries = random_entries(80, SEED_1);
        let extra = random_entries(10, SEED_1);
        let mut combined = entries.clone();
        combined.extend(extra.clone());

        let tree = Tree::build(combined, 8).unwrap();
        let recovered = diff(&tree, extra, 8).unwrap();
        assert_eq!(recovered.len(), entries.len());
    }

    #[test]
    fn test_update_propagates_capacity_error() {
        let tree = Tree::build(vec![Entry::new(0.0, 0.0, 1.0, 1.0, 1)], 4).unwrap();
        assert!(update(&tree, vec![], vec![], 1).is_err());
    }
}
