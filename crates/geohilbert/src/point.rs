//! Planar points and the validated geographic coordinate wrapper.

use crate::error::{Error, Result};

/// A point in the plane. Also used for the corners of bounding boxes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate (longitude for geographic data).
    pub x: f64,
    /// Vertical coordinate (latitude for geographic data).
    pub y: f64,
}

impl Point {
    /// Create a new `Point`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the Euclidean distance between two points.
    pub fn distance(&self, p2: &Self) -> f64 {
        (self.x - p2.x).hypot(self.y - p2.y)
    }

    /// Midpoint between `self` and `other`.
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// True if `lat` lies in `[-90, 90]`.
pub fn latitude_is_valid(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
}

/// True if `lon` lies in `[-180, 180]`.
pub fn longitude_is_valid(lon: f64) -> bool {
    (-180.0..=180.0).contains(&lon)
}

/// A latitude/longitude pair whose ranges are checked on every write.
///
/// Converts into a [`Point`] with `x = longitude` and `y = latitude`, which is
/// the form the transform consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    /// Backing planar point.
    point: Point,
}

impl GeoPoint {
    /// Construct a coordinate, failing if either component is out of range.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let mut geo = Self {
            point: Point::default(),
        };
        geo.set_latitude(lat)?;
        geo.set_longitude(lon)?;
        Ok(geo)
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.point.y
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.point.x
    }

    /// Replace the latitude. The coordinate is left untouched on error.
    pub fn set_latitude(&mut self, lat: f64) -> Result<()> {
        if !latitude_is_valid(lat) {
            return Err(Error::InvalidLatitude(lat));
        }
        self.point.y = lat;
        Ok(())
    }

    /// Replace the longitude. The coordinate is left untouched on error.
    pub fn set_longitude(&mut self, lon: f64) -> Result<()> {
        if !longitude_is_valid(lon) {
            return Err(Error::InvalidLongitude(lon));
        }
        self.point.x = lon;
        Ok(())
    }

    /// The planar form of this coordinate.
    pub fn point(&self) -> Point {
        self.point
    }
}

impl From<GeoPoint> for Point {
    fn from(val: GeoPoint) -> Self {
        val.point
    }
}
