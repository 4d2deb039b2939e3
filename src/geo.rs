//! Geographic unit conversions on a spherical earth.
//!
//! Conversions between degrees of longitude/latitude, physical meters and tile pixel offsets,
//! plus the distance helpers built on them. All functions are pure and closed form.
//!
//! Distances use an equirectangular approximation: accurate over the short spans a map editor
//! deals with, but not a true great-circle distance, see [`spherical_distance`].
//!
//! [`spherical_distance`]: fn.spherical_distance.html
use crate::Vec2;
use std::f64::consts::TAU;

/// Equatorial earth radius in meters.
pub const EQUATORIAL_RADIUS: f64 = 6378137.0;

/// Polar earth radius in meters.
pub const POLAR_RADIUS: f64 = 6356752.314245179;

/// Conventional edge length of a map tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// The closest member of a point set, see [`closest_point`].
///
/// [`closest_point`]: fn.closest_point.html
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct ClosestPoint {
    pub index: usize,
    pub distance: f64,
    pub point: Vec2,
}

/// Convert a latitude delta in degrees to meters.
pub fn lat_to_meters(d_lat: f64) -> f64 {
    d_lat * (TAU * POLAR_RADIUS / 360.0)
}

/// Convert meters to a latitude delta in degrees. Exact inverse of [`lat_to_meters`].
///
/// [`lat_to_meters`]: fn.lat_to_meters.html
pub fn meters_to_lat(m: f64) -> f64 {
    m / (TAU * POLAR_RADIUS / 360.0)
}

/// Convert a longitude delta in degrees to meters, at the latitude `at_lat`.
///
/// Longitude lines converge towards the poles, at `|at_lat| >= 90` a longitude delta spans no
/// distance at all and the result is `0`.
///
/// # Examples
/// ```
/// use osm_geom::geo::lon_to_meters;
/// assert!(lon_to_meters(1.0, 0.0) > lon_to_meters(1.0, 60.0));
/// assert_eq!(lon_to_meters(1.0, 90.0), 0.0);
/// ```
pub fn lon_to_meters(d_lon: f64, at_lat: f64) -> f64 {
    if at_lat.abs() >= 90.0 {
        0.0
    } else {
        d_lon * (TAU * EQUATORIAL_RADIUS / 360.0) * at_lat.to_radians().cos().abs()
    }
}

/// Convert meters to a longitude delta in degrees, at the latitude `at_lat`.
///
/// Approximate inverse of [`lon_to_meters`] away from the poles; at `|at_lat| >= 90` the
/// result is `0`.
///
/// [`lon_to_meters`]: fn.lon_to_meters.html
pub fn meters_to_lon(m: f64, at_lat: f64) -> f64 {
    if at_lat.abs() >= 90.0 {
        0.0
    } else {
        m / (TAU * EQUATORIAL_RADIUS / 360.0) / at_lat.to_radians().cos().abs()
    }
}

/// Convert a meter delta to a tile pixel offset.
///
/// Screen y grows downward while latitude grows upward, so the y component flips sign.
pub fn meters_to_offset(meters: Vec2, tile_size: f64) -> Vec2 {
    Vec2::new(
        meters.x * tile_size / (TAU * EQUATORIAL_RADIUS),
        -meters.y * tile_size / (TAU * POLAR_RADIUS),
    )
}

/// Convert a tile pixel offset to a meter delta. Exact inverse of [`meters_to_offset`] for any
/// tile size.
///
/// [`meters_to_offset`]: fn.meters_to_offset.html
pub fn offset_to_meters(offset: Vec2, tile_size: f64) -> Vec2 {
    Vec2::new(
        offset.x * TAU * EQUATORIAL_RADIUS / tile_size,
        -offset.y * TAU * POLAR_RADIUS / tile_size,
    )
}

/// Approximate distance in meters between two (longitude, latitude) points.
///
/// This is the equirectangular approximation: the longitude delta is converted to meters at the
/// average latitude of the two points and combined with the latitude delta as a flat Euclidean
/// norm. Good over editing-scale spans, increasingly wrong over continental ones; do not use it
/// where true great-circle distance matters.
pub fn spherical_distance(a: Vec2, b: Vec2) -> f64 {
    let x = lon_to_meters(a.x - b.x, (a.y + b.y) / 2.0);
    let y = lat_to_meters(a.y - b.y);
    (x * x + y * y).sqrt()
}

/// Convert a projection scale factor to the equivalent tile zoom level.
///
/// # Examples
/// ```
/// use osm_geom::geo::{scale_to_zoom, TILE_SIZE};
/// use std::f64::consts::PI;
/// // k = 256/π is zoom level 1.
/// assert!((scale_to_zoom(256.0 / PI, TILE_SIZE) - 1.0).abs() < 1e-12);
/// ```
pub fn scale_to_zoom(k: f64, tile_size: f64) -> f64 {
    (k * TAU).log2() - tile_size.log2()
}

/// Convert a tile zoom level to the equivalent projection scale factor. Exact inverse of
/// [`scale_to_zoom`].
///
/// [`scale_to_zoom`]: fn.scale_to_zoom.html
pub fn zoom_to_scale(z: f64, tile_size: f64) -> f64 {
    tile_size * 2f64.powf(z) / TAU
}

/// Find the member of `points` closest to `a` by [`spherical_distance`].
///
/// Ties resolve to the first minimal index. Returns `None` for an empty slice.
///
/// # Examples
/// ```
/// use osm_geom::geo::closest_point;
/// use osm_geom::Vec2;
/// let points = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)];
///
/// let closest = closest_point(&points, Vec2::new(1.1, 1.1)).unwrap();
/// assert_eq!(closest.index, 1);
/// assert_eq!(closest.point, Vec2::new(1.0, 1.0));
/// ```
///
/// [`spherical_distance`]: fn.spherical_distance.html
pub fn closest_point(points: &[Vec2], a: Vec2) -> Option<ClosestPoint> {
    let mut min = f64::INFINITY;
    let mut result = None;

    for (index, &point) in points.iter().enumerate() {
        let distance = spherical_distance(point, a);
        if distance < min {
            min = distance;
            result = Some(ClosestPoint {
                index,
                distance,
                point,
            });
        }
    }

    result
}
