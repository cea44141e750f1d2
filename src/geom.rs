//! Axis-aligned minimum bounding rectangle arithmetic.

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A minimum bounding rectangle (MBR) over `f32` coordinates.
///
/// The invariant `x1 <= x2 && y1 <= y2` holds for every MBR except the
/// canonical [empty](Mbr::empty) one, which is deliberately inverted so that
/// every intersection and containment test against it returns `false`.
///
/// Note that AABBs cannot be inserted into the tree directly: use
/// [`Entry`](crate::Entry) for that purpose.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mbr {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Mbr {
    /// Creates an MBR from two arbitrary corners, normalizing min/max.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Mbr {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// The canonical empty rectangle: `x1 = y1 = +inf`, `x2 = y2 = -inf`.
    ///
    /// Intersection and containment checks against this value always return
    /// `false`, which is what lets an empty tree's root carry a well-defined
    /// MBR instead of an `Option`.
    pub fn empty() -> Self {
        Mbr {
            x1: f32::infinity(),
            y1: f32::infinity(),
            x2: f32::neg_infinity(),
            y2: f32::neg_infinity(),
        }
    }

    /// True iff `(x, y)` lies within this rectangle, edges inclusive.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.x1 <= x && x <= self.x2 && self.y1 <= y && y <= self.y2
    }

    /// True iff `self` and `other` share at least one point.
    pub fn intersects(&self, other: &Mbr) -> bool {
        self.x1 <= other.x2 && other.x1 <= self.x2 && self.y1 <= other.y2 && other.y1 <= self.y2
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Mbr) -> Mbr {
        Mbr {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Extends `self` in place to also cover `other`.
    pub fn merge(&mut self, other: &Mbr) {
        *self = self.union(other);
    }

    /// The rectangle's area. Zero for degenerate (point or line) rectangles.
    pub fn area(&self) -> f32 {
        let dx = (self.x2 - self.x1).max(0.0);
        let dy = (self.y2 - self.y1).max(0.0);
        dx * dy
    }

    /// The rectangle's center point, used by the bulk loader's sort keys.
    pub fn center(&self) -> (f32, f32) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// The squared Euclidean distance from `(x, y)` to the nearest point of
    /// this rectangle, 0 if the point is inside.
    pub(crate) fn euclidean_distance(&self, x: f32, y: f32) -> f32 {
        let (cx, cy) = self.center();
        let half_w = (self.x2 - self.x1) / 2.0;
        let half_h = (self.y2 - self.y1) / 2.0;
        let dx = ((cx - x).abs() - half_w).max(0.0);
        let dy = ((cy - y).abs() - half_h).max(0.0);
        (dx * dx + dy * dy).sqrt()
    }
}
