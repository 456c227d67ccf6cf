//! Point/vector helpers: inverse (bearing + distance between points), the
//! polar projection that inverts it, and the slope/offset utilities built on
//! the pair.
//!
//! Coordinates are easting `x`, northing `y`, elevation `z`. Results are
//! rounded to `cfg::OUTPUT_DECIMALS`; the `_unrounded` variants feed internal
//! construction geometry.

use nalgebra::{Point2, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::cfg::{OUTPUT_DECIMALS, SLOPE_DECIMALS};
use crate::convert::round_to;

#[inline]
pub(crate) fn round_point(p: Point2<f64>) -> Point2<f64> {
    Point2::new(round_to(p.x, OUTPUT_DECIMALS), round_to(p.y, OUTPUT_DECIMALS))
}

#[inline]
pub fn distance_between_unrounded(p1: Point2<f64>, p2: Point2<f64>) -> f64 {
    nalgebra::distance(&p1, &p2)
}

#[inline]
pub fn distance_between_rounded(p1: Point2<f64>, p2: Point2<f64>, decimals: u32) -> f64 {
    round_to(distance_between_unrounded(p1, p2), decimals)
}

/// Horizontal distance, 4 dp.
#[inline]
pub fn distance_between(p1: Point2<f64>, p2: Point2<f64>) -> f64 {
    distance_between_rounded(p1, p2, OUTPUT_DECIMALS)
}

/// Bearing from `p1` to `p2`, normalized to `[0°, 360°)`.
///
/// `atan2(Δx, Δy)` measures clockwise from North. Coincident points give 0°.
pub fn angle_between(p1: Point2<f64>, p2: Point2<f64>) -> Angle {
    let mut rad = (p2.x - p1.x).atan2(p2.y - p1.y);
    if rad < 0.0 {
        rad += 2.0 * std::f64::consts::PI;
    }
    Angle::from_radians(rad).normalized()
}

pub fn midpoint(p1: Point2<f64>, p2: Point2<f64>) -> Point2<f64> {
    round_point(nalgebra::center(&p1, &p2))
}

/// Point at `distance` along `angle` from `base`, without output rounding.
#[inline]
pub fn project_unrounded(angle: Angle, distance: f64, base: Point2<f64>) -> Point2<f64> {
    let rad = angle.to_radians();
    Point2::new(base.x + distance * rad.sin(), base.y + distance * rad.cos())
}

/// Point at `distance` along bearing `angle` from `base` (4 dp).
///
/// Inverse of `angle_between` + `distance_between`; every intersection and
/// traverse leg reduces to calls of this.
#[inline]
pub fn project(angle: Angle, distance: f64, base: Point2<f64>) -> Point2<f64> {
    round_point(project_unrounded(angle, distance, base))
}

/// `p2 - p1` per axis (4 dp).
pub fn delta(p1: Point3<f64>, p2: Point3<f64>) -> Vector3<f64> {
    (p2 - p1).map(|c| round_to(c, OUTPUT_DECIMALS))
}

/// Whether the direction `p1 → p2` is an ordinary bearing (see
/// [`Angle::is_ordinary`]).
pub fn is_ordinary_direction(p1: Point2<f64>, p2: Point2<f64>) -> bool {
    angle_between(p1, p2).is_ordinary()
}

/// Bearing of `p1 → p2`, flipped into the ordinary half-circle when needed.
pub fn ordinary_bearing(p1: Point2<f64>, p2: Point2<f64>) -> Angle {
    angle_between(p1, p2).to_ordinary()
}

/// Full inverse between two 3D points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inverse {
    pub bearing: Angle,
    /// Horizontal distance.
    pub distance: f64,
    pub delta: Vector3<f64>,
    /// `|Δz / distance| · 100`, 3 dp; 0 for a zero horizontal distance.
    pub slope_percent: f64,
}

pub fn inverse(p1: Point3<f64>, p2: Point3<f64>) -> Inverse {
    let distance = distance_between(p1.xy(), p2.xy());
    let delta = delta(p1, p2);
    let slope_percent = if distance > 0.0 {
        round_to((delta.z / distance * 100.0).abs(), SLOPE_DECIMALS)
    } else {
        0.0
    };
    Inverse {
        bearing: angle_between(p1.xy(), p2.xy()),
        distance,
        delta,
        slope_percent,
    }
}

/// `base_z` raised by `slope_percent` over `distance`.
#[inline]
pub fn elevation_at_slope(base_z: f64, distance: f64, slope_percent: f64) -> f64 {
    base_z + distance * (slope_percent / 100.0)
}

/// `target` lifted to the elevation reached from `base` at `slope_percent`.
pub fn point_at_slope(base: Point3<f64>, target: Point2<f64>, slope_percent: f64) -> Point3<f64> {
    let distance = distance_between(base.xy(), target);
    Point3::new(
        target.x,
        target.y,
        elevation_at_slope(base.z, distance, slope_percent),
    )
}

/// Project along a bearing and grade in one step.
pub fn project_with_slope(
    angle: Angle,
    distance: f64,
    slope_percent: f64,
    base: Point3<f64>,
) -> Point3<f64> {
    let p = project(angle, distance, base.xy());
    Point3::new(p.x, p.y, elevation_at_slope(base.z, distance, slope_percent))
}

/// Point `distance` from `start` in the direction of `end`. Negative values
/// go behind `start`; values past `end` extend the line.
pub fn point_along_line(start: Point2<f64>, end: Point2<f64>, distance: f64) -> Point2<f64> {
    project(angle_between(start, end), distance, start)
}

/// Left and right offset points at `chainage` along `start → end`.
///
/// Left is at bearing − 90°, right at bearing + 90°.
pub fn offset_from_line(
    start: Point2<f64>,
    end: Point2<f64>,
    chainage: f64,
    left: f64,
    right: f64,
) -> (Point2<f64>, Point2<f64>) {
    let bearing = angle_between(start, end);
    let on_line = project_unrounded(bearing, chainage, start);
    let quarter = Angle::from_degrees(90);
    (
        project(bearing - quarter, left, on_line),
        project(bearing + quarter, right, on_line),
    )
}
