//! Axis-aligned bounding boxes.
//!
//! An [`Extent`] bounds a set of 2D points, either geographic (longitude, latitude) or planar
//! pixels; the operations are generic over both except [`pad_by_meters`], which assumes the
//! vertical axis is latitude in degrees.
//!
//! [`Extent`]: struct.Extent.html
//! [`pad_by_meters`]: struct.Extent.html#method.pad_by_meters
use crate::geo::{meters_to_lat, meters_to_lon};
use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box with `min` and `max` corners.
///
/// For a non-empty extent `min.x <= max.x` and `min.y <= max.y`. The empty extent is the
/// sentinel `min = (+∞, +∞)`, `max = (-∞, -∞)`; it is the identity of [`extend`] and is what
/// [`intersection`] returns for disjoint boxes. Binary operations return new extents, the
/// in-place [`expand`] variant exists for accumulating bounds over many points.
///
/// # Examples
/// ```
/// use osm_geom::{Extent, Vec2};
/// let mut bounds = Extent::empty();
///
/// bounds.expand(Vec2::new(10.0, 20.0));
/// bounds.expand(Vec2::new(30.0, 40.0));
///
/// assert_eq!(bounds, Extent::new((10.0, 20.0), (30.0, 40.0)));
/// assert_eq!(bounds.center(), Vec2::new(20.0, 30.0));
/// assert_eq!(bounds.area(), 400.0);
/// ```
///
/// [`extend`]: #method.extend
/// [`intersection`]: #method.intersection
/// [`expand`]: #method.expand
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extent {
    pub min: Vec2,
    pub max: Vec2,
}

/// Named-field view of an extent, see [`Extent::bbox`].
///
/// [`Extent::bbox`]: struct.Extent.html#method.bbox
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bbox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    pub fn new<V: Into<Vec2>>(min: V, max: V) -> Extent {
        Extent {
            min: min.into(),
            max: max.into(),
        }
    }

    /// The empty extent. Contains no points, extending it with anything yields the other
    /// operand unchanged.
    pub fn empty() -> Extent {
        Extent {
            min: Vec2::new(f64::INFINITY, f64::INFINITY),
            max: Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// A degenerate extent covering a single point.
    pub fn point<V: Into<Vec2>>(p: V) -> Extent {
        let p = p.into();
        Extent { min: p, max: p }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// The smallest extent containing both `self` and `other`.
    ///
    /// Commutative and associative; [`empty`] is the identity.
    ///
    /// [`empty`]: #method.empty
    pub fn extend(self, other: Extent) -> Extent {
        Extent {
            min: Vec2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vec2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Expand in place to include a point.
    pub fn expand(&mut self, p: Vec2) {
        if p.x < self.min.x {
            self.min.x = p.x;
        }
        if p.x > self.max.x {
            self.max.x = p.x;
        }
        if p.y < self.min.y {
            self.min.y = p.y;
        }
        if p.y > self.max.y {
            self.max.y = p.y;
        }
    }

    /// Expand in place to include another extent. In-place variant of [`extend`].
    ///
    /// [`extend`]: #method.extend
    pub fn expand_extent(&mut self, other: Extent) {
        *self = self.extend(other);
    }

    /// Area of the box. The empty extent has area `0`, never `NaN` or `∞`.
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            ((self.max.x - self.min.x) * (self.max.y - self.min.y)).abs()
        }
    }

    /// Midpoint of the box. Meaningless for the empty extent.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// The corners as a flat `[min_x, min_y, max_x, max_y]` array.
    pub fn rectangle(&self) -> [f64; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }

    /// The corners as named fields.
    pub fn bbox(&self) -> Bbox {
        Bbox {
            min_x: self.min.x,
            min_y: self.min.y,
            max_x: self.max.x,
            max_y: self.max.y,
        }
    }

    /// The box as a closed counter-clockwise ring, starting and ending at `min`.
    pub fn polygon(&self) -> [Vec2; 5] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
            self.min,
        ]
    }

    /// True when `other` lies entirely within `self`, borders included.
    pub fn contains(&self, other: Extent) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    /// True when the boxes overlap or touch at an edge or corner.
    pub fn intersects(&self, other: Extent) -> bool {
        self.min.x <= other.max.x
            && self.min.y <= other.max.y
            && self.max.x >= other.min.x
            && self.max.y >= other.min.y
    }

    /// The overlapping region, or the empty extent when the boxes are disjoint.
    ///
    /// # Examples
    /// ```
    /// use osm_geom::Extent;
    /// let a = Extent::new((0.0, 0.0), (10.0, 10.0));
    /// let b = Extent::new((5.0, 5.0), (15.0, 15.0));
    ///
    /// assert_eq!(a.intersection(b), Extent::new((5.0, 5.0), (10.0, 10.0)));
    /// assert!(a.intersection(Extent::new((20.0, 20.0), (30.0, 30.0))).is_empty());
    /// ```
    pub fn intersection(&self, other: Extent) -> Extent {
        if !self.intersects(other) {
            return Extent::empty();
        }
        Extent {
            min: Vec2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Vec2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        }
    }

    /// Fraction of `self`'s area that lies within `other`.
    ///
    /// `0` whenever either area is zero or infinite. Not symmetric.
    ///
    /// # Examples
    /// ```
    /// use osm_geom::Extent;
    /// let a = Extent::new((0.0, 0.0), (10.0, 10.0));
    /// let b = Extent::new((0.0, 0.0), (5.0, 10.0));
    ///
    /// assert_eq!(a.percent_contained_in(b), 0.5);
    /// assert_eq!(b.percent_contained_in(a), 1.0);
    /// ```
    pub fn percent_contained_in(&self, other: Extent) -> f64 {
        let a1 = self.intersection(other).area();
        let a2 = self.area();

        if a1.is_infinite() || a2.is_infinite() || a1 == 0.0 || a2 == 0.0 {
            0.0
        } else {
            a1 / a2
        }
    }

    /// Expand the box symmetrically by a physical distance.
    ///
    /// `meters` is converted to degree deltas at the extent's center latitude, so this is only
    /// meaningful when the vertical axis is latitude in degrees.
    pub fn pad_by_meters(&self, meters: f64) -> Extent {
        let d_lat = meters_to_lat(meters);
        let d_lon = meters_to_lon(meters, self.center().y);
        Extent {
            min: Vec2::new(self.min.x - d_lon, self.min.y - d_lat),
            max: Vec2::new(self.max.x + d_lon, self.max.y + d_lat),
        }
    }
}

impl Default for Extent {
    fn default() -> Self {
        Extent::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_extent_is_extend_identity() {
        let a = Extent::new((2.0, 3.0), (5.0, 7.0));

        assert_eq!(a.extend(Extent::empty()), a);
        assert_eq!(Extent::empty().extend(a), a);
        assert!(Extent::empty().is_empty());
    }

    #[test]
    fn extend_contains_both_operands() {
        let a = Extent::new((0.0, 0.0), (5.0, 5.0));
        let b = Extent::new((3.0, -2.0), (10.0, 4.0));
        let union = a.extend(b);

        assert_eq!(union, Extent::new((0.0, -2.0), (10.0, 5.0)));
        assert!(union.contains(a));
        assert!(union.contains(b));
        assert_eq!(a.extend(b), b.extend(a));
    }

    #[test]
    fn expand_accumulates_points() {
        let mut bounds = Extent::empty();
        bounds.expand(Vec2::new(5.0, 5.0));
        bounds.expand(Vec2::new(-1.0, 8.0));
        bounds.expand(Vec2::new(2.0, 2.0));

        assert_eq!(bounds, Extent::new((-1.0, 2.0), (5.0, 8.0)));

        let mut accumulated = Extent::point((0.0, 0.0));
        accumulated.expand_extent(bounds);
        assert_eq!(accumulated, Extent::new((-1.0, 0.0), (5.0, 8.0)));
    }

    #[test]
    fn area_of_empty_extent_is_zero() {
        assert_eq!(Extent::empty().area(), 0.0);
        assert_eq!(Extent::point((3.0, 4.0)).area(), 0.0);
        assert_eq!(Extent::new((0.0, 0.0), (4.0, 5.0)).area(), 20.0);
    }

    #[test]
    fn center_and_views() {
        let e = Extent::new((0.0, 2.0), (10.0, 4.0));

        assert_eq!(e.center(), Vec2::new(5.0, 3.0));
        assert_eq!(e.rectangle(), [0.0, 2.0, 10.0, 4.0]);

        let bbox = e.bbox();
        assert_eq!(bbox.min_x, 0.0);
        assert_eq!(bbox.min_y, 2.0);
        assert_eq!(bbox.max_x, 10.0);
        assert_eq!(bbox.max_y, 4.0);

        // Closed counter-clockwise ring from min.
        assert_eq!(
            e.polygon(),
            [
                Vec2::new(0.0, 2.0),
                Vec2::new(10.0, 2.0),
                Vec2::new(10.0, 4.0),
                Vec2::new(0.0, 4.0),
                Vec2::new(0.0, 2.0),
            ]
        );
    }

    #[test]
    fn contains_is_inclusive() {
        let a = Extent::new((0.0, 0.0), (10.0, 10.0));

        assert!(a.contains(a));
        assert!(a.contains(Extent::new((0.0, 0.0), (10.0, 5.0))));
        assert!(a.contains(Extent::point((10.0, 10.0))));
        assert!(!a.contains(Extent::new((0.0, 0.0), (10.0, 10.1))));
    }

    #[test]
    fn intersects_is_symmetric_and_counts_touching() {
        let a = Extent::new((0.0, 0.0), (5.0, 5.0));
        let b = Extent::new((5.0, 5.0), (10.0, 10.0)); // touches at one corner
        let c = Extent::new((6.0, 6.0), (10.0, 10.0));

        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));
        assert!(!c.intersects(a));
    }

    #[test]
    fn disjoint_intersection_is_empty() {
        let a = Extent::new((0.0, 0.0), (1.0, 1.0));
        let b = Extent::new((2.0, 2.0), (3.0, 3.0));
        let i = a.intersection(b);

        assert!(i.is_empty());
        assert_eq!(i.area(), 0.0);
        assert_eq!(i, Extent::empty());
    }

    #[test]
    fn percent_contained_in_is_asymmetric() {
        let a = Extent::new((0.0, 0.0), (10.0, 10.0));
        let b = Extent::new((0.0, 0.0), (5.0, 10.0));

        assert_eq!(a.percent_contained_in(b), 0.5);
        assert_eq!(b.percent_contained_in(a), 1.0);
    }

    #[test]
    fn percent_contained_in_guards_degenerate_areas() {
        let a = Extent::new((0.0, 0.0), (10.0, 10.0));
        let line = Extent::new((0.0, 0.0), (0.0, 10.0));

        assert_eq!(a.percent_contained_in(Extent::empty()), 0.0);
        assert_eq!(Extent::empty().percent_contained_in(a), 0.0);
        assert_eq!(line.percent_contained_in(a), 0.0);

        let unbounded = Extent::new((0.0, 0.0), (f64::INFINITY, f64::INFINITY));
        assert_eq!(unbounded.percent_contained_in(a), 0.0);
    }

    #[test]
    fn pad_by_meters_expands_symmetrically() {
        use crate::geo::{lat_to_meters, meters_to_lat, meters_to_lon};

        let e = Extent::new((17.0, 60.0), (17.1, 60.1));
        let padded = e.pad_by_meters(100.0);

        let d_lat = meters_to_lat(100.0);
        let d_lon = meters_to_lon(100.0, 60.05);
        assert_relative_eq!(padded.min.x, 17.0 - d_lon, epsilon = 1e-12);
        assert_relative_eq!(padded.min.y, 60.0 - d_lat, epsilon = 1e-12);
        assert_relative_eq!(padded.max.x, 17.1 + d_lon, epsilon = 1e-12);
        assert_relative_eq!(padded.max.y, 60.1 + d_lat, epsilon = 1e-12);

        // The vertical growth corresponds to 100m on each side.
        let grown = lat_to_meters(padded.max.y - e.max.y);
        assert_relative_eq!(grown, 100.0, epsilon = 1e-9);
        assert!(padded.contains(e));
    }
}
