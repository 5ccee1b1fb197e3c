//! Axis-aligned bounding boxes and their quadrant split.

use crate::{
    error::{Error, Result},
    point::Point,
};

/// One of the four quadrants of a box, numbered counter-clockwise from the
/// upper left. The numbering is geometric and never depends on orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// On or left of the vertical bisector, above the horizontal one.
    UpperLeft,
    /// On or left of the vertical bisector, on or below the horizontal one.
    LowerLeft,
    /// Right of the vertical bisector, on or below the horizontal one.
    LowerRight,
    /// Right of the vertical bisector, above the horizontal one.
    UpperRight,
}

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Self; 4] = [
        Self::UpperLeft,
        Self::LowerLeft,
        Self::LowerRight,
        Self::UpperRight,
    ];

    /// Geometric index, `0..4`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Quadrant::index`]. Only the low two bits are used.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index & 3]
    }
}

/// A box given by its lower-left and upper-right corners.
///
/// Corner ordering is not checked: a box with `lower_left` above or to the
/// right of `upper_right` contains no points, so every classification fails.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Minimum corner.
    pub lower_left: Point,
    /// Maximum corner.
    pub upper_right: Point,
}

impl Bounds {
    /// Create a box from its two corners.
    pub const fn new(lower_left: Point, upper_right: Point) -> Self {
        Self {
            lower_left,
            upper_right,
        }
    }

    /// The vertical and horizontal bisectors, as a point.
    pub fn bisectors(&self) -> Point {
        self.lower_left.midpoint(&self.upper_right)
    }

    /// Center of the box. Same as [`Bounds::bisectors`].
    pub fn center(&self) -> Point {
        self.bisectors()
    }

    /// Width and height of the box.
    pub fn size(&self) -> (f64, f64) {
        (
            self.upper_right.x - self.lower_left.x,
            self.upper_right.y - self.lower_left.y,
        )
    }

    /// True if `p` lies inside the box, edges included. NaN coordinates are
    /// never contained.
    pub fn contains(&self, p: &Point) -> bool {
        (self.lower_left.x..=self.upper_right.x).contains(&p.x)
            && (self.lower_left.y..=self.upper_right.y).contains(&p.y)
    }

    /// The quadrant containing `p`.
    ///
    /// Points on a bisector go to the lower (or left) side: the comparison
    /// against each midpoint is `<=`.
    pub fn classify(&self, p: &Point) -> Result<Quadrant> {
        if !self.contains(p) {
            return Err(Error::OutOfBounds { x: p.x, y: p.y });
        }
        let mid = self.bisectors();
        Ok(match (p.x <= mid.x, p.y <= mid.y) {
            (true, false) => Quadrant::UpperLeft,
            (true, true) => Quadrant::LowerLeft,
            (false, true) => Quadrant::LowerRight,
            (false, false) => Quadrant::UpperRight,
        })
    }

    /// The quarter of this box covered by `quadrant`.
    pub fn subdivide(&self, quadrant: Quadrant) -> Self {
        let (ll, ur) = (self.lower_left, self.upper_right);
        let mid = self.bisectors();
        match quadrant {
            Quadrant::UpperLeft => Self::new(Point::new(ll.x, mid.y), Point::new(mid.x, ur.y)),
            Quadrant::LowerLeft => Self::new(ll, mid),
            Quadrant::LowerRight => Self::new(Point::new(mid.x, ll.y), Point::new(ur.x, mid.y)),
            Quadrant::UpperRight => Self::new(mid, ur),
        }
    }

    /// The vertex drawn for `quadrant` at the finest level: the center of
    /// that quadrant, a quarter of the box in from each edge.
    pub fn inset(&self, quadrant: Quadrant) -> Point {
        let (ll, ur) = (self.lower_left, self.upper_right);
        let lx = (3.0 * ll.x + ur.x) / 4.0;
        let ux = (3.0 * ur.x + ll.x) / 4.0;
        let ly = (3.0 * ll.y + ur.y) / 4.0;
        let uy = (3.0 * ur.y + ll.y) / 4.0;
        match quadrant {
            Quadrant::UpperLeft => Point::new(lx, uy),
            Quadrant::LowerLeft => Point::new(lx, ly),
            Quadrant::LowerRight => Point::new(ux, ly),
            Quadrant::UpperRight => Point::new(ux, uy),
        }
    }
}

/// Classify `p` against the box spanned by `lower_left` and `upper_right`.
pub fn quadrant(p: &Point, lower_left: &Point, upper_right: &Point) -> Result<Quadrant> {
    Bounds::new(*lower_left, *upper_right).classify(p)
}
