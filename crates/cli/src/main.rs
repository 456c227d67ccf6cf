use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use cogo::intersect::{
    bearing_bearing, bearing_distance, distance_distance, four_point, perpendicular, PointPair,
};
use cogo::point::{inverse, project, project_with_slope};
use cogo::traverse::Closure;
use cogo::{convert, Angle, Point2, Point3};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;

use input::{parse_point2, parse_point3, read_traverse};

#[derive(Parser)]
#[command(name = "cogo")]
#[command(about = "Survey coordinate geometry: inverse, intersections, traverses")]
struct Cmd {
    /// Raise log verbosity (-v debug, -vv trace); logs go to stderr
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Bearing, distance, deltas and slope between two points
    Inverse {
        #[arg(long, value_parser = parse_point3, allow_hyphen_values = true)]
        from: Point3<f64>,
        #[arg(long, value_parser = parse_point3, allow_hyphen_values = true)]
        to: Point3<f64>,
    },
    /// Point at a bearing and distance from a base point
    Project {
        #[arg(long, value_parser = parse_point3, allow_hyphen_values = true)]
        base: Point3<f64>,
        /// DDD.MMSS
        #[arg(long, allow_hyphen_values = true)]
        bearing: Angle,
        #[arg(long, allow_hyphen_values = true)]
        distance: f64,
        /// Grade in percent; sets the elevation of the new point
        #[arg(long, allow_hyphen_values = true)]
        slope: Option<f64>,
    },
    /// Two-constraint intersections
    Intersect {
        #[command(subcommand)]
        kind: Intersect,
    },
    /// Reduce a traverse file (JSON, `-` for stdin) to coordinates
    Traverse {
        #[arg(long)]
        input: PathBuf,
    },
    /// Field units to meters
    Convert {
        #[arg(value_enum)]
        unit: Unit,
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
}

#[derive(Subcommand)]
enum Intersect {
    /// Bearing from each of two points
    Bearings {
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        p1: Point2<f64>,
        #[arg(long, allow_hyphen_values = true)]
        b1: Angle,
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        p2: Point2<f64>,
        #[arg(long, allow_hyphen_values = true)]
        b2: Angle,
    },
    /// Distance from each of two points
    Distances {
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        c1: Point2<f64>,
        #[arg(long, allow_hyphen_values = true)]
        r1: f64,
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        c2: Point2<f64>,
        #[arg(long, allow_hyphen_values = true)]
        r2: f64,
        /// Keep only the candidate nearest this point
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        pick: Option<Point2<f64>>,
    },
    /// Bearing from one point, distance from another
    BearingDistance {
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        p1: Point2<f64>,
        #[arg(long, allow_hyphen_values = true)]
        bearing: Angle,
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        center: Point2<f64>,
        #[arg(long, allow_hyphen_values = true)]
        radius: f64,
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        pick: Option<Point2<f64>>,
    },
    /// Line p1-p2 against line p3-p4
    FourPoint {
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        p1: Point2<f64>,
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        p2: Point2<f64>,
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        p3: Point2<f64>,
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        p4: Point2<f64>,
    },
    /// Foot of the perpendicular from a point onto line p1-p2
    Perpendicular {
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        p1: Point2<f64>,
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        p2: Point2<f64>,
        #[arg(long, value_parser = parse_point2, allow_hyphen_values = true)]
        point: Point2<f64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Unit {
    /// Gunter's chain links
    Links,
    /// Feet and inches packed as ft.in
    Feet,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let out = match cmd.action {
        Action::Inverse { from, to } => {
            tracing::info!(?from, ?to, "inverse");
            serde_json::to_value(inverse(from, to))?
        }
        Action::Project {
            base,
            bearing,
            distance,
            slope,
        } => {
            tracing::info!(?base, %bearing, distance, slope, "project");
            match slope {
                Some(slope) => serde_json::to_value(project_with_slope(bearing, distance, slope, base))?,
                None => serde_json::to_value(project(bearing, distance, base.xy()))?,
            }
        }
        Action::Intersect { kind } => intersect(kind),
        Action::Traverse { input } => traverse(input)?,
        Action::Convert { unit, value } => {
            let meters = match unit {
                Unit::Links => convert::links_to_meters(value),
                Unit::Feet => convert::feet_and_inches_to_meters(value),
            };
            tracing::info!(value, meters, "convert");
            json!({ "meters": meters })
        }
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn single(found: Option<Point2<f64>>) -> Value {
    if found.is_none() {
        tracing::info!("no intersection");
    }
    json!({ "found": found.is_some(), "point": found })
}

fn pair(found: Option<PointPair>, pick: Option<Point2<f64>>) -> Value {
    let Some(pair) = found else {
        tracing::info!("no intersection");
        return json!({ "found": false });
    };
    match pick {
        Some(pick) => json!({ "found": true, "point": pair.nearest_to(pick) }),
        None => json!({ "found": true, "candidates": pair }),
    }
}

fn intersect(kind: Intersect) -> Value {
    match kind {
        Intersect::Bearings { p1, b1, p2, b2 } => {
            tracing::info!(?p1, %b1, ?p2, %b2, "intersect bearings");
            single(bearing_bearing(p1, b1, p2, b2))
        }
        Intersect::Distances {
            c1,
            r1,
            c2,
            r2,
            pick,
        } => {
            tracing::info!(?c1, r1, ?c2, r2, "intersect distances");
            pair(distance_distance(c1, r1, c2, r2), pick)
        }
        Intersect::BearingDistance {
            p1,
            bearing,
            center,
            radius,
            pick,
        } => {
            tracing::info!(?p1, %bearing, ?center, radius, "intersect bearing-distance");
            pair(bearing_distance(p1, bearing, center, radius), pick)
        }
        Intersect::FourPoint { p1, p2, p3, p4 } => {
            tracing::info!(?p1, ?p2, ?p3, ?p4, "intersect four-point");
            single(four_point(p1, p2, p3, p4))
        }
        Intersect::Perpendicular { p1, p2, point } => {
            tracing::info!(?p1, ?p2, ?point, "intersect perpendicular");
            single(perpendicular(p1, p2, point))
        }
    }
}

fn traverse(input: PathBuf) -> Result<Value> {
    let doc = read_traverse(&input)?;
    tracing::info!(input = %input.display(), legs = doc.leg_count(), "traverse");
    let points = doc.solve()?;
    let closure = Closure::of(&points);
    if let Some(c) = &closure {
        tracing::debug!(misclose = c.misclose_distance, perimeter = c.perimeter, "closure");
    }
    Ok(json!({ "points": points, "closure": closure }))
}
