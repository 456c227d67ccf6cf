//! Traverse solver: ordered legs → absolute coordinates.
//!
//! Purpose
//! - `bearing_traverse`: every leg carries an absolute bearing.
//! - `angle_traverse`/`angle_traverse_from`: every leg carries an angle turned
//!   from the previous leg (forward or back bearing, clockwise or
//!   counter-clockwise).
//!
//! Contract
//! - Single pass, input untouched. The output starts with `base` and holds one
//!   point per leg (`legs.len() + 1` points).
//! - The running bearing is not normalized between legs; projection is
//!   periodic so the coordinates are unaffected.
//! - No closure check here. See `Closure`.

mod closure;
mod types;

use nalgebra::Point2;

use crate::angle::Angle;
use crate::point::project;

pub use closure::Closure;
pub use types::{ReferenceDirection, RotationDirection, TraverseAngleLeg, TraverseLeg};

fn walk(base: Point2<f64>, legs: impl ExactSizeIterator<Item = (Angle, f64)>) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(legs.len() + 1);
    points.push(base);
    let mut current = base;
    for (i, (bearing, distance)) in legs.enumerate() {
        current = project(bearing, distance, current);
        tracing::trace!(leg = i, %bearing, distance, x = current.x, y = current.y, "traverse leg");
        points.push(current);
    }
    points
}

/// Coordinates of an absolute-bearing traverse starting at `base`.
pub fn bearing_traverse(legs: &[TraverseLeg], base: Point2<f64>) -> Vec<Point2<f64>> {
    walk(base, legs.iter().map(|leg| (leg.bearing, leg.distance)))
}

/// Bearing of the leg following a station whose previous bearing is `last`.
fn next_bearing(last: Angle, leg: &TraverseAngleLeg) -> Angle {
    if leg.angle.is_empty() {
        return last;
    }
    let reference = match leg.reference {
        ReferenceDirection::Forward => last,
        ReferenceDirection::Backward => last - Angle::from_degrees(180),
    };
    match leg.rotation {
        RotationDirection::Positive => reference + leg.angle,
        RotationDirection::Negative => reference - leg.angle,
    }
}

fn running_bearings(legs: &[TraverseAngleLeg], start: Angle) -> Vec<Angle> {
    legs.iter()
        .scan(start, |last, leg| {
            *last = next_bearing(*last, leg);
            Some(*last)
        })
        .collect()
}

/// Absolute bearing of every turned-angle leg, normalized to `[0°, 360°)`.
pub fn angle_legs_to_bearings(legs: &[TraverseAngleLeg], start_bearing: Angle) -> Vec<Angle> {
    running_bearings(legs, start_bearing)
        .into_iter()
        .map(Angle::normalized)
        .collect()
}

/// Turned-angle traverse with the running bearing seeded at `start_bearing`.
pub fn angle_traverse_from(
    legs: &[TraverseAngleLeg],
    base: Point2<f64>,
    start_bearing: Angle,
) -> Vec<Point2<f64>> {
    let bearings = running_bearings(legs, start_bearing);
    walk(
        base,
        bearings.into_iter().zip(legs).map(|(b, leg)| (b, leg.distance)),
    )
}

/// Turned-angle traverse with the running bearing seeded at 0° (North).
#[inline]
pub fn angle_traverse(legs: &[TraverseAngleLeg], base: Point2<f64>) -> Vec<Point2<f64>> {
    angle_traverse_from(legs, base, Angle::ZERO)
}

#[cfg(test)]
mod tests;
