//! KML serialisation of rendered curves.
//!
//! The `write_*` functions stream into any [`io::Write`] sink and never hold
//! more than one vertex in memory. [`coordinates`] and [`document`] build a
//! `String` and are meant for small curves.

use std::{fmt, io};

use crate::render::Vertex;

/// Fractional digits kept when printing a coordinate.
pub const PRECISION: usize = 14;

/// Largest order worth exporting: `4^12` vertices is already several hundred
/// megabytes of KML.
pub const MAX_ORDER: u32 = 12;

/// Format `v` with at most [`PRECISION`] fractional digits and no trailing
/// zeros.
pub fn format_coordinate(v: f64) -> String {
    let mut s = format!("{v:.prec$}", prec = PRECISION);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// Formats as a KML `x,y,z` tuple.
impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            format_coordinate(self.x),
            format_coordinate(self.y),
            format_coordinate(self.z)
        )
    }
}

/// Stream the body of a KML `<coordinates>` element into `w`: `x,y,z` tuples
/// separated by single spaces.
pub fn write_coordinates<W: io::Write>(
    w: &mut W,
    vertices: impl IntoIterator<Item = Vertex>,
) -> io::Result<()> {
    for (i, v) in vertices.into_iter().enumerate() {
        if i > 0 {
            w.write_all(b" ")?;
        }
        write!(w, "{v}")?;
    }
    Ok(())
}

/// Opening of a KML 2.2 document holding one named `LineString` placemark,
/// up to and including the `<coordinates>` tag.
fn document_head(name: &str) -> String {
    let name = escape(name);
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <kml xmlns=\"http://www.opengis.net/kml/2.2\">\n\
         <Document>\n\
         <name>{name}</name>\n\
         <Placemark>\n\
         <name>{name}</name>\n\
         <LineString>\n\
         <tessellate>1</tessellate>\n\
         <coordinates>"
    )
}

/// Closing tags matching [`document_head`].
const DOCUMENT_TAIL: &str = "</coordinates>\n\
                             </LineString>\n\
                             </Placemark>\n\
                             </Document>\n\
                             </kml>\n";

/// Stream a complete KML 2.2 document holding the curve as a single named
/// `LineString` placemark.
pub fn write_document<W: io::Write>(
    w: &mut W,
    name: &str,
    vertices: impl IntoIterator<Item = Vertex>,
) -> io::Result<()> {
    w.write_all(document_head(name).as_bytes())?;
    write_coordinates(w, vertices)?;
    w.write_all(DOCUMENT_TAIL.as_bytes())
}

/// [`write_coordinates`] into a `String`.
pub fn coordinates(vertices: impl IntoIterator<Item = Vertex>) -> String {
    let mut out = String::new();
    for (i, v) in vertices.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&v.to_string());
    }
    out
}

/// [`write_document`] into a `String`.
pub fn document(name: &str, vertices: impl IntoIterator<Item = Vertex>) -> String {
    document_head(name) + &coordinates(vertices) + DOCUMENT_TAIL
}

/// Escape the characters KML (XML) reserves in text content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
