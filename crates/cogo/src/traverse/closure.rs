//! Misclosure report for a computed traverse.
//!
//! The solver never checks closure; callers that expect the traverse to end
//! on its start point build a `Closure` from the returned points.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::cfg::OUTPUT_DECIMALS;
use crate::convert::round_to;
use crate::point::{angle_between, distance_between, distance_between_unrounded};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Closure {
    /// Distance from the last point back to the first.
    pub misclose_distance: f64,
    /// Bearing from the last point back to the first.
    pub misclose_bearing: Angle,
    /// Sum of leg lengths.
    pub perimeter: f64,
    /// `perimeter / misclose_distance` (read as 1 : N); `None` when the
    /// traverse closes exactly at output precision.
    pub precision: Option<f64>,
    /// Shoelace area of the polygon through all points, closed back to the
    /// first.
    pub area: f64,
}

impl Closure {
    /// `None` for fewer than two points.
    pub fn of(points: &[Point2<f64>]) -> Option<Self> {
        let (first, last) = match points {
            [first, .., last] => (*first, *last),
            _ => return None,
        };
        let perimeter: f64 = points
            .windows(2)
            .map(|w| distance_between_unrounded(w[0], w[1]))
            .sum();
        let perimeter = round_to(perimeter, OUTPUT_DECIMALS);
        let misclose_distance = distance_between(last, first);
        let twice_area: f64 = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(a, b)| (a - first).perp(&(b - first)))
            .sum();
        Some(Self {
            misclose_distance,
            misclose_bearing: angle_between(last, first),
            perimeter,
            precision: (misclose_distance > 0.0).then(|| perimeter / misclose_distance),
            area: round_to(twice_area.abs() / 2.0, OUTPUT_DECIMALS),
        })
    }

    #[inline]
    pub fn is_closed(&self, tolerance: f64) -> bool {
        self.misclose_distance <= tolerance
    }
}
