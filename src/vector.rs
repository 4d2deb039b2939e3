//! 2D vector primitives.
//!
//! [`Vec2`] is used for both geographic coordinates (longitude, latitude in degrees) and planar
//! pixel coordinates. The two meter systems must not be mixed without going through a
//! [`Projection`].
//!
//! [`Vec2`]: struct.Vec2.html
//! [`Projection`]: ../struct.Projection.html
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D vector or point, passed and returned by value.
///
/// Every operation returns a new vector, mutating a result never affects the source.
///
/// # Examples
/// ```
/// use osm_geom::Vec2;
/// let a = Vec2::new(1.0, 2.0);
/// let b = Vec2::new(3.0, 4.0);
///
/// assert_eq!(a + b, Vec2::new(4.0, 6.0));
/// assert_eq!(b - a, Vec2::new(2.0, 2.0));
/// assert_eq!(b.length(), 5.0);
///
/// // Tuples and arrays convert directly.
/// let c: Vec2 = (3.0, 4.0).into();
/// assert_eq!(b, c);
/// ```
#[derive(Debug, PartialEq, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// The nearest point on a polyline, see [`project_onto_polyline`].
///
/// `index` refers to the end node of the matched segment, i.e. the segment between
/// `points[index - 1]` and `points[index]`.
///
/// [`project_onto_polyline`]: fn.project_onto_polyline.html
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct PolylineProjection {
    pub index: usize,
    pub distance: f64,
    pub target: Vec2,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Component wise equality within an inclusive tolerance.
    ///
    /// # Examples
    /// ```
    /// # use osm_geom::Vec2;
    /// let a = Vec2::new(1.0, 2.0);
    /// assert!(a.equal_within(Vec2::new(1.0, 2.5), 0.5));
    /// assert!(!a.equal_within(Vec2::new(1.0, 2.6), 0.5));
    /// ```
    pub fn equal_within(self, other: Vec2, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    pub fn scale(self, factor: f64) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }

    pub fn floor(self) -> Vec2 {
        Vec2::new(self.x.floor(), self.y.floor())
    }

    /// Linear interpolation from `self` towards `b`. `t` is not clamped, values outside `0..=1`
    /// extrapolate.
    pub fn interp(self, b: Vec2, t: f64) -> Vec2 {
        Vec2::new(self.x + (b.x - self.x) * t, self.y + (b.y - self.y) * t)
    }

    /// Euclidean norm, the distance from the origin.
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance between two points.
    pub fn distance(self, b: Vec2) -> f64 {
        (b - self).length()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// The zero vector has no direction and normalizes to itself.
    ///
    /// # Examples
    /// ```
    /// # use osm_geom::Vec2;
    /// assert_eq!(Vec2::new(3.0, 4.0).normalize(), Vec2::new(0.6, 0.8));
    /// assert_eq!(Vec2::new(0.0, 0.0).normalize(), Vec2::new(0.0, 0.0));
    /// ```
    pub fn normalize(self) -> Vec2 {
        let length = self.length();
        if length != 0.0 {
            Vec2::new(self.x / length, self.y / length)
        } else {
            Vec2::new(0.0, 0.0)
        }
    }

    /// Angle of the line from `self` to `b`, in radians in the range `(-π, π]`.
    pub fn angle_to(self, b: Vec2) -> f64 {
        (b.y - self.y).atan2(b.x - self.x)
    }

    pub fn dot(self, b: Vec2) -> f64 {
        self.x * b.x + self.y * b.y
    }

    /// Dot product of `self` and `b` relative to `origin`.
    pub fn dot_about(self, b: Vec2, origin: Vec2) -> f64 {
        (self - origin).dot(b - origin)
    }

    /// Dot product of the unit vectors from `origin` towards `self` and `b`. This is the cosine
    /// of the angle between them.
    pub fn normalized_dot_about(self, b: Vec2, origin: Vec2) -> f64 {
        (self - origin).normalize().dot((b - origin).normalize())
    }

    /// 2D cross product (z component of the 3D cross product).
    ///
    /// Positive when the turn `self` → origin → `b` is counter-clockwise.
    pub fn cross(self, b: Vec2) -> f64 {
        self.x * b.y - self.y * b.x
    }

    /// Cross product of `self` and `b` relative to `origin`.
    pub fn cross_about(self, b: Vec2, origin: Vec2) -> f64 {
        (self - origin).cross(b - origin)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vec2::new(x, y)
    }
}

impl From<Vec2> for (f64, f64) {
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

/// Find the nearest point on a polyline.
///
/// Each consecutive pair of `points` is treated as a segment. `point` is projected orthogonally
/// onto each segment, clamped to the segment's end nodes when the perpendicular foot falls
/// outside it, and the globally closest projection wins.
///
/// Returns `None` when `points` has fewer than two elements, or when no finite minimum exists.
///
/// # Examples
/// ```
/// use osm_geom::{project_onto_polyline, Vec2};
/// let line = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
///
/// let hit = project_onto_polyline(Vec2::new(5.0, 5.0), &line).unwrap();
/// assert_eq!(hit.index, 1);
/// assert_eq!(hit.target, Vec2::new(5.0, 0.0));
/// assert_eq!(hit.distance, 5.0);
///
/// // Beyond the line the projection clamps to the nearest end node.
/// let hit = project_onto_polyline(Vec2::new(-5.0, 0.0), &line).unwrap();
/// assert_eq!(hit.target, Vec2::new(0.0, 0.0));
/// ```
pub fn project_onto_polyline(point: Vec2, points: &[Vec2]) -> Option<PolylineProjection> {
    let mut min = f64::INFINITY;
    let mut result = None;

    for i in 0..points.len().saturating_sub(1) {
        let o = points[i];
        let s = points[i + 1] - o;
        let v = point - o;
        let proj = v.dot(s) / s.dot(s);

        let target = if proj < 0.0 {
            o
        } else if proj > 1.0 {
            points[i + 1]
        } else {
            o + s.scale(proj)
        };

        let distance = target.distance(point);
        if distance < min {
            min = distance;
            result = Some(PolylineProjection {
                index: i + 1,
                distance,
                target,
            });
        }
    }

    result
}
