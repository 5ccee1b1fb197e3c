//! Command‑line entry point for the `ghc` tool.
//!
//! Provides subcommands to index planar or geographic points along a Hilbert
//! curve, and to export the curve itself as KML.

use std::{fmt::Display, path::PathBuf, process, str::FromStr};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use geohilbert::{Bounds, HilbertCurve, MAX_ORDER, Orientation, error, point::Point};

/// CLI command implementations.
mod cmd;

/// A bounding box parsed from `MINX,MINY,MAXX,MAXY`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct BoundsArg(Bounds);

impl FromStr for BoundsArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        let [min_x, min_y, max_x, max_y] = parts.as_slice() else {
            return Err("bounds must be in MINX,MINY,MAXX,MAXY form".to_string());
        };

        let parse_bound = |label: &str, bound: &str| -> Result<f64, String> {
            bound
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| format!("invalid {label} '{bound}': expected a finite number"))
        };

        let lower_left = Point::new(parse_bound("MINX", min_x)?, parse_bound("MINY", min_y)?);
        let upper_right = Point::new(parse_bound("MAXX", max_x)?, parse_bound("MAXY", max_y)?);

        if lower_left.x > upper_right.x || lower_left.y > upper_right.y {
            return Err(format!(
                "bounds minimum ({}, {}) must not exceed maximum ({}, {})",
                lower_left.x, lower_left.y, upper_right.x, upper_right.y
            ));
        }

        Ok(Self(Bounds::new(lower_left, upper_right)))
    }
}

/// Validate an orientation name.
fn parse_orientation(s: &str) -> Result<Orientation, String> {
    s.parse::<Orientation>().map_err(|_| {
        format!(
            "Invalid orientation '{}'. Valid options: {}",
            s,
            orientation_names()
        )
    })
}

/// Comma separated list of orientation names.
fn orientation_names() -> String {
    Orientation::ALL
        .iter()
        .map(|o| o.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Options describing the curve laid over the area of interest.
#[derive(Args, Debug)]
struct CurveArgs {
    #[arg(
        short = 'b',
        long = "bounds",
        value_name = "MINX,MINY,MAXX,MAXY",
        default_value = "-180,-90,180,90",
        allow_hyphen_values = true,
        help = "Bounding box covered by the curve"
    )]
    /// Bounding box covered by the curve.
    bounds: BoundsArg,

    #[arg(
        short = 'o',
        long = "order",
        default_value_t = 7,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ORDER)),
        help = "Curve order (the box is split into 4^ORDER cells)"
    )]
    /// Curve order.
    order: u32,

    #[arg(
        short = 'r',
        long = "orientation",
        default_value = "up-left",
        value_parser = parse_orientation,
        help = &format!("Orientation of the outermost cell (options: {})", orientation_names())
    )]
    /// Orientation of the outermost cell.
    orientation: Orientation,
}

impl CurveArgs {
    /// Build the curve these options describe.
    fn curve(&self) -> error::Result<HilbertCurve> {
        HilbertCurve::new(self.bounds.0, self.order, self.orientation)
    }
}

#[derive(Parser)]
#[command(name = "ghc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, global = true, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `ghc` tool.
enum Commands {
    #[command(about = "Print the Hilbert index of a planar point")]
    /// Print the Hilbert index of a planar point.
    Index {
        /// Curve options.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(allow_negative_numbers = true, help = "X coordinate")]
        /// X coordinate.
        x: f64,

        #[arg(allow_negative_numbers = true, help = "Y coordinate")]
        /// Y coordinate.
        y: f64,
    },

    #[command(about = "Print the Hilbert index of a latitude/longitude pair")]
    /// Print the Hilbert index of a geographic coordinate.
    Geo {
        /// Curve options.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(allow_negative_numbers = true, help = "Latitude in degrees")]
        /// Latitude in degrees.
        lat: f64,

        #[arg(allow_negative_numbers = true, help = "Longitude in degrees")]
        /// Longitude in degrees.
        lon: f64,
    },

    #[command(about = "Print the quadrant of the bounding box containing a point")]
    /// Print the quadrant containing a point.
    Quadrant {
        #[arg(
            short = 'b',
            long = "bounds",
            value_name = "MINX,MINY,MAXX,MAXY",
            default_value = "-180,-90,180,90",
            allow_hyphen_values = true,
            help = "Bounding box to split"
        )]
        /// Bounding box to split.
        bounds: BoundsArg,

        #[arg(allow_negative_numbers = true, help = "X coordinate")]
        /// X coordinate.
        x: f64,

        #[arg(allow_negative_numbers = true, help = "Y coordinate")]
        /// Y coordinate.
        y: f64,
    },

    #[command(about = "Write the curve as a KML line string")]
    /// Export the curve geometry as KML.
    Kml {
        /// Curve options.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(long = "name", default_value = "Hilbert curve", help = "Placemark name")]
        /// Name given to the document and placemark.
        name: String,

        #[arg(
            long = "coordinates-only",
            default_value_t = false,
            help = "Print only the coordinate tuples, without the KML document"
        )]
        /// Emit only the `<coordinates>` body.
        coordinates_only: bool,

        #[arg(help = "Optional output file path; prints to stdout when omitted")]
        /// Optional output file path.
        output: Option<PathBuf>,
    },

    #[command(about = "Print the indices of the reference coordinates")]
    /// Print the reference fixtures.
    Demo,
}

/// Print nothing on success, or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>) {
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install the logger. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        Commands::Index { curve, x, y } => {
            report_ok(cmd::index(&curve, Point::new(x, y)).map(|i| println!("{i}")))
        }
        Commands::Geo { curve, lat, lon } => {
            report_ok(cmd::geo(&curve, lat, lon).map(|i| println!("{i}")))
        }
        Commands::Quadrant { bounds, x, y } => report_ok(
            cmd::quadrant(bounds.0, Point::new(x, y))
                .map(|q| println!("{} {:?}", q.index(), q)),
        ),
        Commands::Kml {
            curve,
            name,
            coordinates_only,
            output,
        } => report_ok(cmd::kml(&curve, &name, coordinates_only, output.as_deref())),
        Commands::Demo => report_ok(cmd::demo().map(|lines| {
            for line in lines {
                println!("{line}");
            }
        })),
    }
}
