//! One level of the recursive subdivision: a box plus its orientation.
//!
//! Both the index transform and the renderer walk down a tree of cells; this
//! is the step they share.

use crate::{
    bounds::{Bounds, Quadrant},
    error::Result,
    orientation::Orientation,
    point::Point,
    tables,
};

/// A box together with the orientation of the curve running through it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Area covered by the cell.
    pub bounds: Bounds,
    /// Shape of the curve inside the cell.
    pub orientation: Orientation,
}

impl Cell {
    /// Create a cell.
    pub const fn new(bounds: Bounds, orientation: Orientation) -> Self {
        Self {
            bounds,
            orientation,
        }
    }

    /// The child cell visited at position `rank` along the curve.
    ///
    /// The child's box is the geometric quadrant holding that rank, while its
    /// orientation is looked up by rank.
    pub fn child(&self, rank: u8) -> Self {
        let quadrant = tables::rank_quadrant(self.orientation, rank);
        self.child_at(quadrant, rank)
    }

    /// Find the child holding `p`, returning its rank and the child itself.
    pub fn locate(&self, p: &Point) -> Result<(u8, Self)> {
        let quadrant = self.bounds.classify(p)?;
        let rank = tables::quadrant_rank(self.orientation, quadrant);
        Ok((rank, self.child_at(quadrant, rank)))
    }

    /// Leaf vertex for position `rank`, used at the last level of rendering.
    pub fn vertex(&self, rank: u8) -> Point {
        self.bounds.inset(tables::rank_quadrant(self.orientation, rank))
    }

    /// Build a child from an already resolved quadrant and rank.
    fn child_at(&self, quadrant: Quadrant, rank: u8) -> Self {
        Self::new(
            self.bounds.subdivide(quadrant),
            tables::child_orientation(self.orientation, rank),
        )
    }
}
