//! Nearest-neighbor search: branch-and-bound with per-branch,
//! distance-sorted recursion and a shrinking max-distance prune.

use crate::distance::DistanceCalculator;
use crate::entry::Entry;
use crate::node::Node;

/// Finds the entry closest to `(x, y)` under `calc`, among those strictly
/// closer than `max_distance`. Returns `None` if the tree is empty or no
/// entry beats `max_distance`.
///
/// Ties are broken deterministically: the first-visited entry at the
/// winning distance wins, where "first visited" follows the
/// distance-ascending recursion order documented on [`crate::Tree::nearest`].
pub(crate) fn nearest<'a, T, D: DistanceCalculator>(
    root: &'a Node<T>,
    x: f32,
    y: f32,
    max_distance: f32,
    calc: &D,
) -> Option<(f32, &'a Entry<T>)> {
    let mut best_distance = max_distance;
    let mut best = None;
    visit(root, x, y, calc, &mut best_distance, &mut best);
    best
}

fn visit<'a, T, D: DistanceCalculator>(
    node: &'a Node<T>,
    x: f32,
    y: f32,
    calc: &D,
    best_distance: &mut f32,
    best: &mut Option<(f32, &'a Entry<T>)>,
) {
    match node {
        Node::Leaf(entry) => {
            let d = calc.distance(x, y, &entry.mbr);
            if d < *best_distance {
                *best_distance = d;
                *best = Some((d, entry));
            }
        }
        Node::Branch(branch) => {
            let mut candidates: Vec<(&Node<T>, f32)> = branch
                .children
                .iter()
                .map(|child| (child, calc.distance(x, y, child.mbr())))
                .filter(|&(_, d)| d < *best_distance)
                .collect();
            candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());

            for (child, lower_bound) in candidates {
                // best_distance may have tightened since the filter above, as
                // earlier siblings in this same loop are visited.
                if lower_bound >= *best_distance {
                    continue;
                }
                visit(child, x, y, calc, best_distance, best);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bulk_load::bulk_load;
    use crate::distance::Euclidean;
    use crate::entry::Entry;
    use crate::node::Branch;
    use crate::test_utils::{random_entries, random_points, SEED_1, SEED_2};

    #[test]
    fn test_empty_tree_returns_none() {
        let root: Node<i32> = Node::Branch(Branch::empty());
        assert!(nearest(&root, 0.0, 213.0, f32::INFINITY, &Euclidean).is_none());
    }

    #[test]
    fn test_point_inside_entry_gives_zero_distance() {
        let entries = vec![
            Entry::new(0.0, 0.0, 1.0, 1.0, "a"),
            Entry::new(5.0, 5.0, 6.0, 6.0, "b"),
        ];
        let root = bulk_load(entries, 4).unwrap();
        let (d, e) = nearest(&root, 0.5, 0.5, f32::INFINITY, &Euclidean).unwrap();
        assert_eq!(d, 0.0);
        assert_eq!(e.payload, "a");
    }

    #[test]
    fn test_scenario_b_tie_is_deterministic() {
        let entries = vec![
            Entry::new(0.0, 0.0, 1.0, 1.0, "a"),
            Entry::new(2.0, 2.0, 3.0, 3.0, "b"),
        ];
        let root = bulk_load(entries, 4).unwrap();
        let first = nearest(&root, 1.5, 1.5, f32::INFINITY, &Euclidean).unwrap();
        let second = nearest(&root, 1.5, 1.5, f32::INFINITY, &Euclidean).unwrap();
        assert_eq!(first.1.payload, second.1.payload, "tie-break must be deterministic");
        assert!((first.0 - 0.5f32 * 2.0f32.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn test_nearest_matches_brute_force() {
        let entries = random_entries(500, SEED_1);
        let root = bulk_load(entries.clone(), 8).unwrap();

        for (x, y) in random_points(50, SEED_2) {
            let expected = entries
                .iter()
                .map(|e| Euclidean.distance(x, y, &e.mbr))
                .fold(f32::INFINITY, f32::min);
            let (d, _) = nearest(&root, x, y, f32::INFINITY, &Euclidean).unwrap();
            assert!(
                (d - expected).abs() < 1e-3,
                "nearest distance {d} should match brute force {expected}"
            );
        }
    }

    #[test]
    fn test_max_distance_prunes_farther_results() {
        let entries = vec![
            Entry::new(0.0, 0.0, 1.0, 1.0, "near"),
            Entry::new(100.0, 100.0, 101.0, 101.0, "far"),
        ];
        let root = bulk_load(entries, 4).unwrap();

        let unconstrained = nearest(&root, 0.5, 0.5, f32::INFINITY, &Euclidean).unwrap();
        let within = nearest(&root, 0.5, 0.5, unconstrained.0 + 1.0, &Euclidean);
        assert!(within.is_some());

        let too_tight = nearest(&root, 0.5, 0.5, unconstrained.0, &Euclidean);
        assert!(
            too_tight.is_none(),
            "max_distance is exclusive: a result exactly at the bound must not match"
        );
    }
}
