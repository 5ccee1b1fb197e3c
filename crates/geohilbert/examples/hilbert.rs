//! Minimal example: index a coordinate and draw the curve it sits on.

use std::error::Error;

use geohilbert::{Bounds, HilbertCurve, Orientation, kml, point::{GeoPoint, Point}};

fn main() -> Result<(), Box<dyn Error>> {
    // snips-start: example
    // Order 4 curve over a small box, 256 cells.
    let curve = HilbertCurve::new(
        Bounds::new(Point::new(-85.59, 32.51), Point::new(-85.41, 32.69)),
        4,
        Orientation::UpLeft,
    )?;
    println!("{} curve with {} cells", curve.orientation(), curve.length());

    let here = GeoPoint::new(32.608915, -85.481880)?;
    let index = curve.geo_index(&here)?;
    println!("{here:?} -> {index}");

    let first = curve.vertices().take(4);
    println!("first vertices: {}", kml::coordinates(first));
    // snips-end: example

    Ok(())
}
