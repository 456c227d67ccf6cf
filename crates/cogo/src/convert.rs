//! Scalar conversions: rounding, degrees↔radians, field units → meters.

use std::f64::consts::PI;

/// Round `value` to `decimals` places, ties away from zero.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[inline]
pub fn decimal_degrees_to_radians(decimal_degrees: f64) -> f64 {
    decimal_degrees * (PI / 180.0)
}

#[inline]
pub fn radians_to_decimal_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Gunter's chain links to meters (4 dp).
pub fn links_to_meters(links: f64) -> f64 {
    const LINK: f64 = 0.201168;
    round_to(links * LINK, 4)
}

/// Feet-and-inches packed as `ft.in` (`5.02` is 5 ft 2 in) to meters (4 dp).
///
/// Inches below 10 need the leading zero; the fractional part is read as two
/// digits of inches.
pub fn feet_and_inches_to_meters(feet_and_inches: f64) -> f64 {
    const FOOT: f64 = 0.3048;
    const INCH: f64 = 0.0254;
    let feet = feet_and_inches.trunc();
    let inches = (feet_and_inches - feet) * 100.0;
    round_to(feet * FOOT + inches * INCH, 4)
}
