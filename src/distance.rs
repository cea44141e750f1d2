//! Pluggable distance metrics used for pruning and answering nearest-neighbor
//! queries.

use crate::geom::Mbr;
use num_traits::Float;

/// The earth's mean radius in kilometers (IUGG value), used by
/// [`SphericalEarth`].
pub const EARTH_RADIUS_KM: f32 = 6371.0088;

/// A capability with a single operation: the minimum distance from a point
/// to any point of a rectangle, 0 if the point lies inside (edges
/// inclusive).
///
/// This is a small, closed capability rather than a deep inheritance
/// hierarchy — implementers need only provide `distance`. The two stock
/// implementations, [`Euclidean`] and [`SphericalEarth`], are zero-sized and
/// `Copy`, so they can be passed by reference with no allocation.
pub trait DistanceCalculator {
    /// Returns the distance from `(x, y)` to `mbr` under this metric.
    fn distance(&self, x: f32, y: f32, mbr: &Mbr) -> f32;
}

/// Straight-line (planar) distance. Appropriate when coordinates are in a
/// flat, already-projected coordinate system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceCalculator for Euclidean {
    fn distance(&self, x: f32, y: f32, mbr: &Mbr) -> f32 {
        mbr.euclidean_distance(x, y)
    }
}

/// Great-circle distance in kilometers on a sphere of radius
/// [`EARTH_RADIUS_KM`]. `x` is interpreted as latitude in degrees
/// (-90..=90), `y` as longitude in degrees (-180..=180). Antimeridian-aware:
/// longitude differences always take the shorter east/west wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SphericalEarth;

impl DistanceCalculator for SphericalEarth {
    fn distance(&self, lat: f32, lon: f32, mbr: &Mbr) -> f32 {
        if mbr.contains_point(lat, lon) {
            return 0.0;
        }

        let lat_in_band = mbr.x1 <= lat && lat <= mbr.x2;
        let lon_in_band = lon_within(lon, mbr.y1, mbr.y2);

        if lat_in_band && !lon_in_band {
            let d_west = great_circle(lat, lon, lat, mbr.y1);
            let d_east = great_circle(lat, lon, lat, mbr.y2);
            return d_west.min(d_east);
        }

        if lon_in_band && !lat_in_band {
            let d_south = great_circle(lat, lon, mbr.x1, lon);
            let d_north = great_circle(lat, lon, mbr.x2, lon);
            return d_south.min(d_north);
        }

        let corners = [
            (mbr.x1, mbr.y1),
            (mbr.x1, mbr.y2),
            (mbr.x2, mbr.y1),
            (mbr.x2, mbr.y2),
        ];
        corners
            .iter()
            .map(|&(clat, clon)| great_circle(lat, lon, clat, clon))
            .fold(f32::infinity(), |acc, d| acc.min(d))
    }
}

/// True iff `lon` falls within `[lo, hi]`.
///
/// Rectangles never wrap across the antimeridian themselves (the `Entry`
/// invariant requires `y1 <= y2`), so this is a plain range check. The
/// antimeridian only matters when *measuring* the distance from an exterior
/// point to the nearer edge, which `great_circle` handles correctly on its
/// own: haversine's `sin²(Δλ/2)` term is periodic in `Δλ`, so a 359.5°
/// difference already evaluates the same as the true 0.5° short way around.
fn lon_within(lon: f32, lo: f32, hi: f32) -> bool {
    lo <= lon && lon <= hi
}

/// Haversine great-circle distance between two lat/lon points, in
/// kilometers.
fn great_circle(lat1: f32, lon1: f32, lat2: f32, lon2: f32) -> f32 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    EARTH_RADIUS_KM * c
}
