//! Two-constraint intersection solvers.
//!
//! Purpose
//! - Compute the point(s) fixed by two geometric constraints: two lines, two
//!   bearings, two distances (circle × circle), a bearing and a distance
//!   (line × circle), or a line and a perpendicular through an outside point.
//!
//! Contract
//! - Pure functions of their inputs. Degenerate input (parallel lines, circles
//!   that miss, zero radius, zero-length lines) yields `None`; nothing panics.
//! - Every degeneracy test uses `cfg::EPS` on a dimensionless quantity: the
//!   sine of the angle between two directions, or a discriminant divided by
//!   the squared radius.
//! - Dual solutions come back as a `PointPair`; choosing one is the caller's
//!   business (`PointPair::nearest_to` implements the usual pick rule).
//! - Lines are infinite. Results are rounded to `cfg::OUTPUT_DECIMALS`.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::cfg::{CONSTRUCTION_LENGTH, EPS};
use crate::point::{distance_between, project_unrounded, round_point};

/// Both candidates of a two-solution intersection. For tangency both points
/// coincide.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointPair {
    pub first: Point2<f64>,
    pub second: Point2<f64>,
}

impl PointPair {
    /// Candidate closest to `pick`; ties go to `first`.
    pub fn nearest_to(&self, pick: Point2<f64>) -> Point2<f64> {
        if distance_between(pick, self.first) <= distance_between(pick, self.second) {
            self.first
        } else {
            self.second
        }
    }

    fn rounded(first: Point2<f64>, second: Point2<f64>) -> Self {
        Self {
            first: round_point(first),
            second: round_point(second),
        }
    }
}

#[inline]
fn bearing_unit(bearing: Angle) -> Vector2<f64> {
    let rad = bearing.to_radians();
    Vector2::new(rad.sin(), rad.cos())
}

/// Intersection of the infinite lines `a + s·da` and `b + t·db` (unrounded).
fn line_line(
    a: Point2<f64>,
    da: Vector2<f64>,
    b: Point2<f64>,
    db: Vector2<f64>,
) -> Option<Point2<f64>> {
    let na = da.norm();
    let nb = db.norm();
    if na <= EPS || nb <= EPS {
        tracing::debug!(?a, ?b, "zero-length line");
        return None;
    }
    let cross = da.perp(&db);
    if cross.abs() <= EPS * na * nb {
        tracing::debug!(?a, ?b, "parallel lines");
        return None;
    }
    let s = (b - a).perp(&db) / cross;
    Some(a + da * s)
}

/// Intersection of line `p1–p2` with line `p3–p4`, both extended.
pub fn four_point(
    p1: Point2<f64>,
    p2: Point2<f64>,
    p3: Point2<f64>,
    p4: Point2<f64>,
) -> Option<Point2<f64>> {
    line_line(p1, p2 - p1, p3, p4 - p3).map(round_point)
}

/// Intersection of a bearing from `p1` with a bearing from `p2`.
///
/// Each bearing is turned into a construction segment of
/// `cfg::CONSTRUCTION_LENGTH`, then the two are intersected as infinite
/// lines, so opposite bearings meet the same way as forward ones.
pub fn bearing_bearing(
    p1: Point2<f64>,
    bearing1: Angle,
    p2: Point2<f64>,
    bearing2: Angle,
) -> Option<Point2<f64>> {
    let end1 = project_unrounded(bearing1, CONSTRUCTION_LENGTH, p1);
    let end2 = project_unrounded(bearing2, CONSTRUCTION_LENGTH, p2);
    line_line(p1, end1 - p1, p2, end2 - p2).map(round_point)
}

/// Circle × circle: points at `r1` from `c1` and `r2` from `c2`.
///
/// `first` lies left of the direction `c1 → c2`, `second` right of it.
pub fn distance_distance(
    c1: Point2<f64>,
    r1: f64,
    c2: Point2<f64>,
    r2: f64,
) -> Option<PointPair> {
    if r1 <= EPS || r2 <= EPS {
        tracing::debug!(r1, r2, "degenerate circle");
        return None;
    }
    let d = c2 - c1;
    let dist = d.norm();
    if dist <= EPS * (r1 + r2) {
        tracing::debug!(?c1, ?c2, "concentric circles");
        return None;
    }
    let a = (r1 * r1 - r2 * r2 + dist * dist) / (2.0 * dist);
    let h2 = r1 * r1 - a * a;
    if h2 < -EPS * r1 * r1 {
        tracing::debug!(?c1, r1, ?c2, r2, "circles do not intersect");
        return None;
    }
    let h = h2.max(0.0).sqrt();
    let u = d / dist;
    let left = Vector2::new(-u.y, u.x);
    let foot = c1 + u * a;
    Some(PointPair::rounded(foot + left * h, foot - left * h))
}

/// Line × circle: the line through `p1` on `bearing` against the circle of
/// `radius` about `center`.
///
/// `first` is the candidate further along `bearing`, `second` the nearer
/// (possibly behind `p1`).
pub fn bearing_distance(
    p1: Point2<f64>,
    bearing: Angle,
    center: Point2<f64>,
    radius: f64,
) -> Option<PointPair> {
    if radius <= EPS {
        tracing::debug!(radius, "degenerate circle");
        return None;
    }
    let u = bearing_unit(bearing);
    let f = p1 - center;
    // |f + t·u|² = r², |u| = 1  →  t² + 2bt + c = 0
    let b = u.dot(&f);
    let c = f.norm_squared() - radius * radius;
    let disc = b * b - c;
    if disc < -EPS * radius * radius {
        tracing::debug!(?p1, ?center, radius, "line misses circle");
        return None;
    }
    let s = disc.max(0.0).sqrt();
    Some(PointPair::rounded(p1 + u * (-b + s), p1 + u * (-b - s)))
}

/// Foot of the perpendicular from `outside` onto the line `p1–p2`.
pub fn perpendicular(
    p1: Point2<f64>,
    p2: Point2<f64>,
    outside: Point2<f64>,
) -> Option<Point2<f64>> {
    let d = p2 - p1;
    if d.norm() <= EPS {
        tracing::debug!(?p1, "zero-length line");
        return None;
    }
    let t = (outside - p1).dot(&d) / d.norm_squared();
    Some(round_point(p1 + d * t))
}

/// Line `start–end` shifted `distance` toward the side containing `side`.
///
/// `None` for a zero-length line or a `side` point on the line itself.
pub fn offset_line(
    start: Point2<f64>,
    end: Point2<f64>,
    distance: f64,
    side: Point2<f64>,
) -> Option<(Point2<f64>, Point2<f64>)> {
    let d = end - start;
    let len = d.norm();
    if len <= EPS {
        tracing::debug!(?start, "zero-length line");
        return None;
    }
    let w = side - start;
    let sine = d.perp(&w);
    if sine.abs() <= EPS * len * w.norm() {
        tracing::debug!(?side, "offset side is on the line");
        return None;
    }
    let left = Vector2::new(-d.y, d.x) / len;
    let shift = left * (distance * sine.signum());
    Some((start + shift, end + shift))
}

/// Offset two lines toward `side` by `distance` and intersect the results.
pub fn offset_lines_intersection(
    line_a: (Point2<f64>, Point2<f64>),
    line_b: (Point2<f64>, Point2<f64>),
    distance: f64,
    side: Point2<f64>,
) -> Option<Point2<f64>> {
    let (a1, a2) = offset_line(line_a.0, line_a.1, distance, side)?;
    let (b1, b2) = offset_line(line_b.0, line_b.1, distance, side)?;
    line_line(a1, a2 - a1, b1, b2 - b1).map(round_point)
}
