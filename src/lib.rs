//! This crate contains the geometry and projection math underlying an OSM map editor.
//!
//! The [`Projection`] struct is the stateful transform between geographic (longitude, latitude)
//! coordinates in degrees and planar screen pixels, carrying the scale and translation of a map
//! view through pan and zoom.
//!
//! The [`Extent`] struct is an axis-aligned bounding box used for viewport and feature-bounds
//! computation, with union, intersection, containment and physical padding.
//!
//! The [`geo`] module contains pure unit conversions between degrees, meters and tile pixel
//! offsets, and distance helpers built on a spherical earth approximation.
//!
//! The [`Vec2`] struct and its helpers are the 2D vector primitives everything else builds on.
//!
//! # Examples
//! Compute the bounds of a few nodes, pad them by a physical distance and project the center
//! onto the screen:
//! ```
//! use osm_geom::{Extent, Projection, Vec2};
//!
//! let nodes = [
//!     Vec2::new(17.1362500, 60.6750500),
//!     Vec2::new(17.1389800, 60.6763100),
//! ];
//!
//! let mut bounds = Extent::empty();
//! for &node in &nodes {
//!     bounds.expand(node);
//! }
//! let bounds = bounds.pad_by_meters(50.0);
//!
//! let projection = Projection::new();
//! let screen = projection.project(bounds.center());
//! let back = projection.invert(screen);
//! assert!(back.equal_within(bounds.center(), 1e-9));
//! ```
//!
//! [`Projection`]: struct.Projection.html
//! [`Extent`]: struct.Extent.html
//! [`geo`]: geo/index.html
//! [`Vec2`]: struct.Vec2.html
mod extent;
mod projection;
mod vector;

pub mod geo;

pub use extent::{Bbox, Extent};
pub use projection::{Projection, Transform};
pub use vector::{project_onto_polyline, PolylineProjection, Vec2};
