//! An immutable, bulk-loaded R-tree over axis-aligned 2D rectangles.
//!
//! A [`Tree`] is built once, in a single pass, from a complete sequence of
//! [`Entry`] values via the Sort-Tile-Recursive (STR) algorithm. It answers
//! point-containment search, rectangle-overlap search, and nearest-neighbor
//! queries under a pluggable [`DistanceCalculator`] ([`Euclidean`] or
//! [`SphericalEarth`]). There is no in-place mutation: [`merge`], [`diff`],
//! and [`update`] each build and return a new, independent tree.
//!
//! ```
//! use str_rtree::{Entry, Tree, Euclidean};
//!
//! let tree = Tree::build(
//!     vec![
//!         Entry::new(0.0, 0.0, 1.0, 1.0, "a"),
//!         Entry::new(5.0, 5.0, 6.0, 6.0, "b"),
//!     ],
//!     4,
//! ).unwrap();
//!
//! assert_eq!(tree.search_all_point(0.5, 0.5)[0].payload, "a");
//! let (_, nearest) = tree.nearest_unbounded(4.0, 4.0, &Euclidean).unwrap();
//! assert_eq!(nearest.payload, "b");
//! ```

mod bulk_load;
mod distance;
mod entry;
mod error;
mod geom;
mod merge;
mod nearest;
mod node;
mod search;
mod tree;

#[cfg(test)]
mod test_utils;

pub use distance::{DistanceCalculator, Euclidean, SphericalEarth, EARTH_RADIUS_KM};
pub use entry::Entry;
pub use error::CapacityError;
pub use geom::Mbr;
pub use merge::{diff, merge, update};
pub use node::{Branch, Node};
pub use search::EntriesIter;
pub use tree::Tree;
