//! Flat call surface for host integrations.
//!
//! One import for everything a command layer needs: measurements in, points
//! out. Names follow the engine modules; nothing here adds behavior.

// Angles and scalar conversions
pub use crate::angle::Angle;
pub use crate::convert::{
    decimal_degrees_to_radians, feet_and_inches_to_meters, links_to_meters,
    radians_to_decimal_degrees, round_to,
};
// Point helpers
pub use crate::point::{
    angle_between, delta, distance_between, distance_between_unrounded, elevation_at_slope,
    inverse, is_ordinary_direction, midpoint, offset_from_line, ordinary_bearing,
    point_along_line, point_at_slope, project, project_with_slope, Inverse,
};
// Intersections
pub use crate::intersect::{
    bearing_bearing, bearing_distance, distance_distance, four_point, offset_line,
    offset_lines_intersection, perpendicular, PointPair,
};
// Traverses
pub use crate::traverse::{
    angle_legs_to_bearings, angle_traverse, angle_traverse_from, bearing_traverse, Closure,
    ReferenceDirection, RotationDirection, TraverseAngleLeg, TraverseLeg,
};

use nalgebra::Point2;

/// Point fixed by two distances, choosing the candidate nearest `pick`.
pub fn distance_distance_nearest(
    c1: Point2<f64>,
    r1: f64,
    c2: Point2<f64>,
    r2: f64,
    pick: Point2<f64>,
) -> Option<Point2<f64>> {
    distance_distance(c1, r1, c2, r2).map(|pair| pair.nearest_to(pick))
}

/// Point fixed by a bearing and a distance, choosing the candidate nearest
/// `pick`.
pub fn bearing_distance_nearest(
    p1: Point2<f64>,
    bearing: Angle,
    center: Point2<f64>,
    radius: f64,
    pick: Point2<f64>,
) -> Option<Point2<f64>> {
    bearing_distance(p1, bearing, center, radius).map(|pair| pair.nearest_to(pick))
}
