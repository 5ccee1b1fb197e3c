//! Curve geometry: the polyline through every leaf cell, in curve order.

use std::iter::FusedIterator;

use log::debug;
use smallvec::SmallVec;

use crate::{
    bounds::Bounds,
    cell::Cell,
    error::Result,
    orientation::Orientation,
    point::Point,
    transform::check_order,
};

/// A polyline vertex. Curves are planar, so `z` is always zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Altitude, always `0.0`.
    pub z: f64,
}

impl From<Point> for Vertex {
    fn from(p: Point) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: 0.0,
        }
    }
}

impl From<Vertex> for Point {
    fn from(v: Vertex) -> Self {
        Self::new(v.x, v.y)
    }
}

/// A pending cell on the traversal stack.
#[derive(Clone, Debug)]
struct Frame {
    /// The cell being walked.
    cell: Cell,
    /// Levels left below and including this cell.
    order: u32,
    /// Rank of the next child to visit.
    next: u8,
}

/// Lazy depth-first walk over the leaf cells of a curve.
///
/// Yields one vertex per leaf cell, `4^order` in total, each at the centre of
/// its cell. Clone the iterator (or call [`render`] again) to restart.
#[derive(Clone, Debug)]
pub struct Vertices {
    /// Cells still being expanded, innermost last.
    stack: SmallVec<[Frame; 16]>,
    /// Vertices not yet yielded.
    remaining: u128,
}

impl Vertices {
    /// Start a walk at `cell`. The caller validates `order`.
    pub(crate) fn new(cell: Cell, order: u32) -> Self {
        debug!(
            "rendering order {order} {} curve over {:?}",
            cell.orientation, cell.bounds
        );
        let mut stack = SmallVec::new();
        stack.push(Frame {
            cell,
            order,
            next: 0,
        });
        Self {
            stack,
            remaining: 1u128 << (2 * order),
        }
    }
}

impl Iterator for Vertices {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        loop {
            let top = self.stack.last_mut()?;
            if top.next == 4 {
                self.stack.pop();
                continue;
            }
            let rank = top.next;
            top.next += 1;
            if top.order == 1 {
                self.remaining -= 1;
                return Some(top.cell.vertex(rank).into());
            }
            let child = Frame {
                cell: top.cell.child(rank),
                order: top.order - 1,
                next: 0,
            };
            self.stack.push(child);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Vertices {}

/// Polyline of the order-`order` curve over the box from `lower_left` to
/// `upper_right`, starting in `orientation`.
///
/// Each leaf vertex sits a quarter of its parent box in from the edges, so
/// consecutive vertices are exactly one leaf cell apart.
pub fn render(
    lower_left: &Point,
    upper_right: &Point,
    order: u32,
    orientation: Orientation,
) -> Result<Vertices> {
    check_order(order)?;
    Ok(Vertices::new(
        Cell::new(Bounds::new(*lower_left, *upper_right), orientation),
        order,
    ))
}
