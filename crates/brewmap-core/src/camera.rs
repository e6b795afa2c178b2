//! Camera framing: turns a set of result coordinates into a viewport.
//!
//! Pure functions only. Output depends on the point set, never on its order
//! or on the current zoom level of the map.

use std::f64::consts::PI;

use crate::types::{Coordinate, Region};

/// Multiplier applied to the bounding-box span so pins sit inside the
/// viewport edge rather than on it.
pub const FRAME_PADDING_FACTOR: f64 = 1.25;

/// Span, in degrees on both axes, of the region framed around a single point.
pub const SINGLE_POINT_SPAN_DEGREES: f64 = 2.5;

const METERS_PER_LAT_DEGREE: f64 = 111_320.0;

/// Computes a region that frames every point in `points`.
///
/// - No points: `None`; the caller leaves the camera where it is.
/// - One point: a [`SINGLE_POINT_SPAN_DEGREES`] region centered on it.
/// - Otherwise: the midpoint of the bounding box, with each axis span
///   scaled by [`FRAME_PADDING_FACTOR`].
#[must_use]
pub fn frame(points: &[Coordinate]) -> Option<Region> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return Some(focus(*first));
    }

    let init = (first.latitude, first.latitude, first.longitude, first.longitude);
    let (min_lat, max_lat, min_lng, max_lng) =
        rest.iter().fold(init, |(min_lat, max_lat, min_lng, max_lng), p| {
            (
                min_lat.min(p.latitude),
                max_lat.max(p.latitude),
                min_lng.min(p.longitude),
                max_lng.max(p.longitude),
            )
        });

    let center = Coordinate::new((min_lat + max_lat) / 2.0, (min_lng + max_lng) / 2.0);
    Some(Region::new(
        center,
        (max_lat - min_lat).abs() * FRAME_PADDING_FACTOR,
        (max_lng - min_lng).abs() * FRAME_PADDING_FACTOR,
    ))
}

/// Fixed-size region centered on `point`, used for a single result or a
/// selected pin.
#[must_use]
pub fn focus(point: Coordinate) -> Region {
    Region::new(point, SINGLE_POINT_SPAN_DEGREES, SINGLE_POINT_SPAN_DEGREES)
}

/// Region covering `meters` north-south and east-west around `center`.
///
/// Longitude degrees shrink toward the poles, so the east-west span widens
/// with latitude to keep the physical distance constant.
#[must_use]
pub fn region_around(center: Coordinate, meters: f64) -> Region {
    let latitude_delta = meters / METERS_PER_LAT_DEGREE;
    let cos_lat = (center.latitude * PI / 180.0).cos().abs().max(1e-6);
    let longitude_delta = (meters / (METERS_PER_LAT_DEGREE * cos_lat)).min(360.0);
    Region::new(center, latitude_delta, longitude_delta)
}
