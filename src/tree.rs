//! The public facade: [`Tree`], an immutable, bulk-loaded spatial index.

use crate::bulk_load::bulk_load;
use crate::distance::DistanceCalculator;
use crate::entry::Entry;
use crate::error::CapacityError;
use crate::geom::Mbr;
use crate::nearest;
use crate::node::Node;
use crate::search::{self, EntriesIter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable, bulk-loaded R-tree over axis-aligned 2D rectangles.
///
/// # Usage
/// A `Tree` is built once, from a complete entry sequence, via
/// [`Tree::build`]. There is no in-place insertion or removal: to reflect a
/// change, use the free functions [`crate::merge`], [`crate::diff`], or
/// [`crate::update`], each of which returns a new, independent tree.
///
/// ## Example
/// ```
/// use str_rtree::{Entry, Tree, Euclidean};
///
/// let entries = vec![
///     Entry::new(0.0, 0.0, 1.0, 1.0, "a"),
///     Entry::new(2.0, 2.0, 3.0, 3.0, "b"),
/// ];
/// let tree = Tree::build(entries, 4).unwrap();
///
/// assert_eq!(tree.search_all_point(0.5, 0.5)[0].payload, "a");
/// assert_eq!(tree.nearest_unbounded(1.5, 1.5, &Euclidean).unwrap().1.payload, "a");
/// ```
///
/// # Concurrency
/// Once built, a `Tree` is read-only: it implements `Send`/`Sync` whenever
/// `T` does, with no internal synchronization needed, and can be shared
/// freely across threads.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tree<T> {
    root: Node<T>,
    len: usize,
}

impl<T> Tree<T> {
    /// Bulk-loads `entries` into a tree with the given node `capacity`
    /// (§4.4). Fails only if `capacity < 2`.
    pub fn build(entries: Vec<Entry<T>>, capacity: usize) -> Result<Tree<T>, CapacityError> {
        let len = entries.len();
        let root = bulk_load(entries, capacity)?;
        Ok(Tree { root, len })
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True iff the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The MBR covering every entry in the tree (the canonical empty MBR if
    /// the tree is empty).
    pub fn root_mbr(&self) -> Mbr {
        *self.root.mbr()
    }

    /// A lazy, restartable cursor over every entry, in traversal order.
    pub fn iter(&self) -> EntriesIter<'_, T> {
        EntriesIter::new(&self.root)
    }

    /// Eagerly collects every entry, in traversal order.
    pub fn entries(&self) -> Vec<&Entry<T>> {
        self.iter().collect()
    }

    /// Every entry whose MBR contains `(x, y)`, edges inclusive.
    pub fn search_all_point(&self, x: f32, y: f32) -> Vec<&Entry<T>> {
        search::search_all_point(&self.root, x, y)
    }

    /// Every entry whose MBR intersects `rect`.
    pub fn search_all_rect(&self, rect: &Mbr) -> Vec<&Entry<T>> {
        search::search_all_rect(&self.root, rect)
    }

    /// Visits every entry whose MBR contains `(x, y)`, stopping as soon as
    /// `visitor` returns `true`. Allocates nothing beyond the traversal
    /// stack: prefer this over [`Tree::search_all_point`] when counting or
    /// filtering, not collecting.
    pub fn search_point<'a>(&'a self, x: f32, y: f32, visitor: impl FnMut(&'a Entry<T>) -> bool) {
        search::search_point(&self.root, x, y, visitor)
    }

    /// Visits every entry whose MBR intersects `rect`, stopping as soon as
    /// `visitor` returns `true`.
    pub fn search_rect<'a>(
        &'a self,
        rect: &Mbr,
        visitor: impl FnMut(&'a Entry<T>) -> bool,
    ) {
        search::search_rect(&self.root, rect, visitor)
    }

    /// The entry closest to `(x, y)` under `calc`, among those strictly
    /// closer than `max_distance`, or `None` if the tree is empty or no
    /// entry qualifies.
    ///
    /// Ties are broken deterministically, not arbitrarily-per-run: branches
    /// are visited in ascending order of their MBR's lower-bound distance,
    /// so the first entry found at the winning distance is returned.
    pub fn nearest<'a, D: DistanceCalculator>(
        &'a self,
        x: f32,
        y: f32,
        max_distance: f32,
        calc: &D,
    ) -> Option<(f32, &'a Entry<T>)> {
        nearest::nearest(&self.root, x, y, max_distance, calc)
    }

    /// Sugar for [`Tree::nearest`] with `max_distance = f32::INFINITY`.
    pub fn nearest_unbounded<'a, D: DistanceCalculator>(
        &'a self,
        x: f32,
        y: f32,
        calc: &D,
    ) -> Option<(f32, &'a Entry<T>)> {
        self.nearest(x, y, f32::INFINITY, calc)
    }
}

impl<T: Clone> Tree<T> {
    pub(crate) fn entries_cloned(&self) -> Vec<Entry<T>> {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a Entry<T>;
    type IntoIter = EntriesIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
