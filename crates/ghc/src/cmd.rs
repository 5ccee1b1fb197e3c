//! Command handlers for the `ghc` CLI.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, bail};
use geohilbert::{
    Bounds, HilbertCurve, Orientation, Quadrant, kml,
    point::{GeoPoint, Point},
};
use log::{info, warn};

use crate::CurveArgs;

/// Orders above this produce KML that most viewers struggle to open.
const KML_ORDER_WARNING: u32 = 10;

/// Index a planar point on the configured curve.
pub fn index(args: &CurveArgs, p: Point) -> Result<u64> {
    let curve = args.curve()?;
    info!("indexing ({}, {}) at order {}", p.x, p.y, curve.order());
    curve
        .index(&p)
        .with_context(|| format!("cannot index point against bounds {:?}", curve.bounds()))
}

/// Validate a latitude/longitude pair, then index it.
pub fn geo(args: &CurveArgs, lat: f64, lon: f64) -> Result<u64> {
    let geo = GeoPoint::new(lat, lon).context("invalid geographic coordinate")?;
    index(args, geo.point())
}

/// Classify a point against the quadrants of `bounds`.
pub fn quadrant(bounds: Bounds, p: Point) -> Result<Quadrant> {
    Ok(bounds.classify(&p)?)
}

/// Stream the curve as KML to `output`, or to stdout when no path is given.
pub fn kml(
    args: &CurveArgs,
    name: &str,
    coordinates_only: bool,
    output: Option<&Path>,
) -> Result<()> {
    let curve = args.curve()?;
    if curve.order() > kml::MAX_ORDER {
        bail!(
            "order {} would write {} vertices; KML export supports orders up to {}",
            curve.order(),
            curve.length(),
            kml::MAX_ORDER
        );
    }
    if curve.order() > KML_ORDER_WARNING {
        warn!(
            "order {} renders {} vertices; output will be large",
            curve.order(),
            curve.length()
        );
    }
    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            write_kml(&mut BufWriter::new(file), &curve, name, coordinates_only)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => write_kml(
            &mut BufWriter::new(io::stdout().lock()),
            &curve,
            name,
            coordinates_only,
        )?,
    }
    Ok(())
}

/// Write the document (or bare coordinates) for `curve` and flush.
fn write_kml<W: Write>(
    w: &mut W,
    curve: &HilbertCurve,
    name: &str,
    coordinates_only: bool,
) -> io::Result<()> {
    if coordinates_only {
        kml::write_coordinates(w, curve.vertices())?;
        w.write_all(b"\n")?;
    } else {
        kml::write_document(w, name, curve.vertices())?;
    }
    w.flush()
}

/// Reference coordinates around Auburn, Alabama: four close together and one
/// across town.
const DEMO_POINTS: [(f64, f64); 5] = [
    (-85.481880, 32.608915),
    (-85.480510, 32.609240),
    (-85.479774, 32.608709),
    (-85.481590, 32.610287),
    (-85.5345952175, 32.55961729),
];

/// Index the reference coordinates, one output line per point.
pub fn demo() -> Result<Vec<String>> {
    let mut lines = Vec::new();

    let fixture = geohilbert::transform(
        &Point::new(-1.0, -4.0),
        &Point::new(-4.0, -4.0),
        &Point::new(4.0, 4.0),
        3,
        Orientation::LeftTop,
    )?;
    lines.push(format!("(-1, -4) in (-4,-4)-(4,4) order 3 left-top: {fixture}"));

    let curve = HilbertCurve::new(
        Bounds::new(Point::new(-85.59, 32.51), Point::new(-85.41, 32.69)),
        7,
        Orientation::UpLeft,
    )?;
    for (x, y) in DEMO_POINTS {
        let index = curve.index(&Point::new(x, y))?;
        lines.push(format!("({x}, {y}) order 7 up-left: {index}"));
    }
    Ok(lines)
}
