//! The map view transform between geographic degrees and screen pixels.
//!
//! [`Projection`] wraps a raw spherical Mercator formula with the mutable scale and translation
//! of a map view. It is the single place where geographic and planar coordinates cross over;
//! everything on the geographic side stays in degrees, everything on the planar side in pixels
//! with y growing downward.
//!
//! [`Projection`]: struct.Projection.html
use crate::Vec2;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of a projection's translation and scale.
///
/// This is the value to persist when saving a view position, and [`set_transform`] is the one
/// atomic way to restore it.
///
/// [`set_transform`]: struct.Projection.html#method.set_transform
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

/// A stateful transform between (longitude, latitude) in degrees and planar screen pixels.
///
/// The underlying formula is raw spherical Mercator: no antimeridian clipping, no rotation, no
/// resampling. A fresh projection has scale `256/π` (tile zoom level 1), no translation and
/// zero dimensions; pan and zoom interactions mutate the state through the setters, which
/// return `&mut Self` so updates chain.
///
/// The state has no internal locking. It is meant to be owned by a single view and read on the
/// same thread that mutates it; use [`set_transform`] when scale and translation must change
/// together.
///
/// # Examples
/// ```
/// use osm_geom::{Projection, Vec2};
/// let projection = Projection::new();
///
/// // The null island projects onto the origin.
/// let p = projection.project(Vec2::new(0.0, 0.0));
/// assert!(p.equal_within(Vec2::new(0.0, 0.0), 1e-9));
///
/// // project and invert are mutual inverses.
/// let p = projection.project(Vec2::new(17.14, 60.68));
/// assert!(projection.invert(p).equal_within(Vec2::new(17.14, 60.68), 1e-9));
/// ```
///
/// [`set_transform`]: #method.set_transform
#[derive(Debug, PartialEq, Clone)]
pub struct Projection {
    x: f64,
    y: f64,
    k: f64,
    dimensions: [Vec2; 2],
}

impl Projection {
    pub fn new() -> Projection {
        Projection {
            x: 0.0,
            y: 0.0,
            k: 256.0 / PI, // zoom level 1
            dimensions: [Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0)],
        }
    }

    /// Project a (longitude, latitude) point in degrees to screen pixels.
    pub fn project(&self, p: Vec2) -> Vec2 {
        let (x, y) = mercator(p.x.to_radians(), p.y.to_radians());
        Vec2::new(x * self.k + self.x, self.y - y * self.k)
    }

    /// Invert a screen pixel point back to (longitude, latitude) in degrees.
    ///
    /// Exact algebraic inverse of [`project`].
    ///
    /// [`project`]: #method.project
    pub fn invert(&self, p: Vec2) -> Vec2 {
        let (lambda, phi) = mercator_invert((p.x - self.x) / self.k, (self.y - p.y) / self.k);
        Vec2::new(lambda.to_degrees(), phi.to_degrees())
    }

    pub fn scale(&self) -> f64 {
        self.k
    }

    pub fn set_scale(&mut self, k: f64) -> &mut Self {
        self.k = k;
        self
    }

    pub fn translate(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set_translate(&mut self, t: Vec2) -> &mut Self {
        self.x = t.x;
        self.y = t.y;
        self
    }

    /// The current translation and scale as one snapshot.
    pub fn transform(&self) -> Transform {
        Transform {
            x: self.x,
            y: self.y,
            k: self.k,
        }
    }

    /// Replace translation and scale in one update.
    ///
    /// # Examples
    /// ```
    /// use osm_geom::{Projection, Transform};
    /// let mut projection = Projection::new();
    ///
    /// let transform = Transform { x: 100.0, y: 150.0, k: 512.0 };
    /// projection.set_transform(transform);
    /// assert_eq!(projection.transform(), transform);
    /// ```
    pub fn set_transform(&mut self, t: Transform) -> &mut Self {
        self.x = t.x;
        self.y = t.y;
        self.k = t.k;
        self
    }

    /// The viewport rectangle as `[min, max]` pixel corners.
    pub fn dimensions(&self) -> [Vec2; 2] {
        self.dimensions
    }

    pub fn set_dimensions(&mut self, dimensions: [Vec2; 2]) -> &mut Self {
        self.dimensions = dimensions;
        self
    }
}

impl Default for Projection {
    fn default() -> Self {
        Projection::new()
    }
}

// Raw spherical Mercator: x = λ, y = ln(tan(π/4 + φ/2)), both in radians.
fn mercator(lambda: f64, phi: f64) -> (f64, f64) {
    (lambda, (FRAC_PI_4 + phi / 2.0).tan().ln())
}

fn mercator_invert(x: f64, y: f64) -> (f64, f64) {
    (x, 2.0 * y.exp().atan() - FRAC_PI_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{scale_to_zoom, TILE_SIZE};
    use approx::assert_relative_eq;

    // Latitude of the tile square's edge, atan(sinh(π)) in degrees.
    const MAX_LAT: f64 = 85.0511287798;

    #[test]
    fn default_state_is_zoom_one() {
        let projection = Projection::new();

        assert_eq!(projection.scale(), 256.0 / PI);
        assert_eq!(projection.translate(), Vec2::new(0.0, 0.0));
        assert_eq!(
            projection.dimensions(),
            [Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0)]
        );
        assert_relative_eq!(
            scale_to_zoom(projection.scale(), TILE_SIZE),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn project_origin() {
        let p = Projection::new().project(Vec2::new(0.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn project_tile_corner() {
        let p = Projection::new().project(Vec2::new(180.0, -MAX_LAT));
        assert_relative_eq!(p.x, 256.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 256.0, epsilon = 1e-6);

        let mut projection = Projection::new();
        projection.set_scale(512.0 / PI);
        let p = projection.project(Vec2::new(180.0, -MAX_LAT));
        assert_relative_eq!(p.x, 512.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 512.0, epsilon = 1e-6);
    }

    #[test]
    fn north_is_up() {
        let p = Projection::new().project(Vec2::new(0.0, 45.0));
        assert!(p.y < 0.0);
        let p = Projection::new().project(Vec2::new(0.0, -45.0));
        assert!(p.y > 0.0);
    }

    #[test]
    fn invert_project_round_trip() {
        let transforms = [
            Transform {
                x: 0.0,
                y: 0.0,
                k: 256.0 / PI,
            },
            Transform {
                x: 480.5,
                y: -320.25,
                k: 512.0 / PI,
            },
            Transform {
                x: -1e6,
                y: 2e6,
                k: (1u32 << 17) as f64 / PI,
            },
        ];
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(17.1421725, 60.6763366),
            Vec2::new(-73.9857, 40.7484),
            Vec2::new(139.6917, 35.6895),
            Vec2::new(-179.9, -84.0),
        ];

        for &transform in &transforms {
            let mut projection = Projection::new();
            projection.set_transform(transform);

            for &point in &points {
                let round_trip = projection.invert(projection.project(point));
                assert_relative_eq!(round_trip.x, point.x, epsilon = 1e-6);
                assert_relative_eq!(round_trip.y, point.y, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn setters_chain_and_snapshot_round_trips() {
        let mut projection = Projection::new();
        projection
            .set_scale(1024.0 / PI)
            .set_translate(Vec2::new(320.0, 240.0))
            .set_dimensions([Vec2::new(0.0, 0.0), Vec2::new(640.0, 480.0)]);

        assert_eq!(projection.scale(), 1024.0 / PI);
        assert_eq!(projection.translate(), Vec2::new(320.0, 240.0));
        assert_eq!(
            projection.dimensions(),
            [Vec2::new(0.0, 0.0), Vec2::new(640.0, 480.0)]
        );

        let snapshot = projection.transform();
        let mut restored = Projection::new();
        restored.set_transform(snapshot);
        assert_eq!(restored.transform(), snapshot);

        // The restored projection maps points identically.
        let p = Vec2::new(11.97, 57.70);
        assert_eq!(projection.project(p), restored.project(p));
    }

    #[test]
    fn translate_shifts_output() {
        let mut projection = Projection::new();
        let before = projection.project(Vec2::new(10.0, 10.0));

        projection.set_translate(Vec2::new(100.0, 50.0));
        let after = projection.project(Vec2::new(10.0, 10.0));

        assert_relative_eq!(after.x, before.x + 100.0);
        assert_relative_eq!(after.y, before.y + 50.0);
    }
}
