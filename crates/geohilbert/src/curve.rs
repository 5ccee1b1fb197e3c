use crate::{
    bounds::Bounds,
    cell::Cell,
    error,
    orientation::Orientation,
    point::{GeoPoint, Point},
    render::Vertices,
    transform::{check_order, index_in},
};

/// A Hilbert curve laid over a fixed bounding box.
///
/// The order always lies in `1..=MAX_ORDER`.
///
/// [`MAX_ORDER`]: crate::transform::MAX_ORDER
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HilbertCurve {
    /// The area covered by the curve.
    bounds: Bounds,
    /// The order of the curve. The box is split into `4^order` leaf cells.
    order: u32,
    /// Orientation of the outermost cell.
    orientation: Orientation,
}

impl HilbertCurve {
    /// Construct a curve, rejecting orders outside `1..=MAX_ORDER`.
    ///
    /// [`MAX_ORDER`]: crate::transform::MAX_ORDER
    pub fn new(bounds: Bounds, order: u32, orientation: Orientation) -> error::Result<Self> {
        check_order(order)?;
        Ok(Self {
            bounds,
            order,
            orientation,
        })
    }

    /// The area covered by the curve.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Recursion depth.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Orientation of the outermost cell.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The number of leaf cells, `4^order`.
    pub fn length(&self) -> u128 {
        1u128 << (2 * self.order)
    }

    /// Width and height of a leaf cell.
    pub fn cell_size(&self) -> (f64, f64) {
        let (w, h) = self.bounds.size();
        let side = f64::from(self.order).exp2();
        (w / side, h / side)
    }

    /// Index of the leaf cell containing `p`.
    pub fn index(&self, p: &Point) -> error::Result<u64> {
        index_in(self.root(), self.order, p)
    }

    /// Index of the leaf cell containing a geographic coordinate.
    pub fn geo_index(&self, p: &GeoPoint) -> error::Result<u64> {
        self.index(&p.point())
    }

    /// Lazily walk the curve, yielding the centre of each leaf cell in order.
    pub fn vertices(&self) -> Vertices {
        Vertices::new(self.root(), self.order)
    }

    /// The outermost cell.
    fn root(&self) -> Cell {
        Cell::new(self.bounds, self.orientation)
    }
}
