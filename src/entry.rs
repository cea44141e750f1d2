//! Leaf records: a bounding rectangle paired with a user payload.

use crate::geom::Mbr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A leaf record: an [`Mbr`] plus an opaque, user-supplied payload.
///
/// Entries are value-typed and immutable once constructed. Structural
/// equality (used by [`crate::diff`]'s multiset matching) compares the four
/// coordinates with plain `f32` equality and the payload with `T`'s own
/// `PartialEq` impl; callers wanting coordinate tolerance must pre-round.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry<T> {
    pub mbr: Mbr,
    pub payload: T,
}

impl<T> Entry<T> {
    /// Creates an entry from explicit corners and a payload.
    ///
    /// Coordinates are normalized so that `x1 <= x2` and `y1 <= y2`
    /// regardless of the order the corners are given in. NaN coordinates are
    /// caller error: the resulting geometric behavior is unspecified but
    /// will not panic.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, payload: T) -> Self {
        Entry {
            mbr: Mbr::new(x1, y1, x2, y2),
            payload,
        }
    }

    /// Creates an entry directly from an [`Mbr`] and a payload.
    pub fn from_mbr(mbr: Mbr, payload: T) -> Self {
        Entry { mbr, payload }
    }
}
