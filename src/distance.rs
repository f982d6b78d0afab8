use geo::HaversineDistance;
use geo_types::Point;
use itertools::Itertools;

use crate::track::{GeoPoint, Track};

/// Great-circle distance between two points, in meters.
///
/// The geodesy collaborator takes (x, y) = (longitude, latitude), so the
/// field order is adapted here at the call site.
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    Point::new(a.longitude, a.latitude).haversine_distance(&Point::new(b.longitude, b.latitude))
}

/// Sum of consecutive-pair distances over the whole track. Single O(n)
/// pass, recomputed on every call; 0.0 for a track with fewer than 2
/// points (the caller must treat that as non-drawable).
pub fn total_length_meters(track: &Track) -> f64 {
    track
        .points
        .iter()
        .tuple_windows()
        .map(|(a, b)| distance_meters(a, b))
        .sum()
}
