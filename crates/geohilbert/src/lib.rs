//! Hilbert curve indexing for points inside a bounding box.
//!
//! A box is split recursively into quadrants; at each level the quadrant
//! holding the query point contributes two bits to the index. The shape of the
//! curve inside each cell is one of eight [`Orientation`]s, advanced from level
//! to level by two small lookup tables.
//!
//! The crate also renders the curve itself as a polyline, suitable for
//! embedding in a KML document.
//!
//! ```
//! use geohilbert::{Orientation, point::Point, transform};
//!
//! let index = transform(
//!     &Point::new(-1.0, -4.0),
//!     &Point::new(-4.0, -4.0),
//!     &Point::new(4.0, 4.0),
//!     3,
//!     Orientation::LeftTop,
//! )?;
//! assert_eq!(index, 49);
//! # Ok::<(), geohilbert::error::Error>(())
//! ```

/// Bounding boxes and the quadrant classifier.
pub mod bounds;
/// The per-level recursion step shared by indexing and rendering.
pub mod cell;
/// A curve bound to a box, order and orientation.
mod curve;
/// Error types used across the crate.
pub mod error;
/// KML output for rendered curves.
pub mod kml;
/// Curve orientations.
pub mod orientation;
/// Planar and geographic points.
pub mod point;
/// Curve geometry rendering.
pub mod render;
/// Orientation lookup tables.
pub mod tables;
/// Point to index mapping.
pub mod transform;

pub use crate::{
    bounds::{Bounds, Quadrant, quadrant},
    curve::HilbertCurve,
    orientation::Orientation,
    render::{Vertex, Vertices, render},
    transform::{MAX_ORDER, transform},
};
