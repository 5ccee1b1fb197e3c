//! Error types shared by every operation in the crate.

use thiserror::Error;

use crate::transform::MAX_ORDER;

/// Errors produced while indexing or rendering a curve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The requested curve order is outside `1..=MAX_ORDER`.
    #[error("curve order must be between 1 and {max}, got {order}", max = MAX_ORDER)]
    InvalidOrder {
        /// The rejected order.
        order: u32,
    },
    /// The query point does not lie inside the bounding box.
    #[error("point ({x}, {y}) is out of bounds")]
    OutOfBounds {
        /// X coordinate of the rejected point.
        x: f64,
        /// Y coordinate of the rejected point.
        y: f64,
    },
    /// Latitude outside `[-90, 90]`.
    #[error("latitude {0} is out of range [-90, 90]")]
    InvalidLatitude(f64),
    /// Longitude outside `[-180, 180]`.
    #[error("longitude {0} is out of range [-180, 180]")]
    InvalidLongitude(f64),
    /// An orientation name that does not match any variant.
    #[error("unknown orientation '{0}'")]
    UnknownOrientation(String),
}

impl Error {
    /// True for errors caused by a malformed argument rather than a position.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidOrder { .. } | Self::UnknownOrientation(_))
    }

    /// True for errors caused by a coordinate falling outside its valid range.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. } | Self::InvalidLatitude(_) | Self::InvalidLongitude(_)
        )
    }
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy() {
        assert!(Error::InvalidOrder { order: 0 }.is_invalid_argument());
        assert!(!Error::InvalidOrder { order: 0 }.is_out_of_bounds());
        assert!(Error::OutOfBounds { x: 1.0, y: 2.0 }.is_out_of_bounds());
        assert!(Error::InvalidLatitude(91.0).is_out_of_bounds());
        assert!(Error::InvalidLongitude(-181.0).is_out_of_bounds());
        assert!(Error::UnknownOrientation("sideways".into()).is_invalid_argument());
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::InvalidOrder { order: 0 }.to_string(),
            format!("curve order must be between 1 and {MAX_ORDER}, got 0")
        );
        assert_eq!(
            Error::OutOfBounds { x: -5.0, y: 0.5 }.to_string(),
            "point (-5, 0.5) is out of bounds"
        );
    }
}
