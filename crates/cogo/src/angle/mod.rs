//! Survey bearings in degrees, minutes and seconds.
//!
//! Purpose
//! - `Angle` is the value type every other module consumes: a bearing measured
//!   clockwise from North, stored as whole degrees, minutes and seconds.
//!
//! Representation
//! - The value is `degrees + minutes/60 + seconds/3600` with minutes and
//!   seconds in `[0, 60)` after every public operation. The sign lives in
//!   `degrees` (floor convention), so −0°30' is `{-1°, 30', 0"}`.
//! - Arithmetic carries in base 60 but never wraps degrees; traverse math may
//!   go negative or past 360° and only `normalized`/`flip` reduce mod 360°.
//!   Results past the `i32` degree range saturate instead of overflowing.
//! - Equality is component-wise. Normalize before comparing bearings.

mod dms;

use serde::{Deserialize, Serialize};

use crate::cfg::FULL_CIRCLE_SECONDS;
use crate::convert::{decimal_degrees_to_radians, radians_to_decimal_degrees, round_to};

const MIN_TOTAL_SECONDS: i64 = i32::MIN as i64 * 3600;
const MAX_TOTAL_SECONDS: i64 = i32::MAX as i64 * 3600 + 3599;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Angle {
    pub degrees: i32,
    pub minutes: i32,
    pub seconds: i32,
}

impl Angle {
    pub const ZERO: Angle = Angle::from_degrees(0);

    /// Build from components; out-of-range minutes/seconds are carried.
    #[inline]
    pub fn new(degrees: i32, minutes: i32, seconds: i32) -> Self {
        Self::from_total_seconds(
            degrees as i64 * 3600 + minutes as i64 * 60 + seconds as i64,
        )
    }

    #[inline]
    pub const fn from_degrees(degrees: i32) -> Self {
        Self {
            degrees,
            minutes: 0,
            seconds: 0,
        }
    }

    /// Signed arc-seconds represented by the three components.
    #[inline]
    pub fn total_seconds(&self) -> i64 {
        self.degrees as i64 * 3600 + self.minutes as i64 * 60 + self.seconds as i64
    }

    /// Carry a signed second count into components. Counts beyond the `i32`
    /// degree range saturate to the nearest representable angle.
    fn from_total_seconds(total: i64) -> Self {
        let total = total.clamp(MIN_TOTAL_SECONDS, MAX_TOTAL_SECONDS);
        let rem = total.rem_euclid(3600);
        Self {
            degrees: total.div_euclid(3600) as i32,
            minutes: (rem / 60) as i32,
            seconds: (rem % 60) as i32,
        }
    }

    /// All components zero. A turned-angle leg with an empty angle continues
    /// on the previous bearing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.degrees == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Reduce mod 360° into `[0°, 360°)`.
    #[inline]
    pub fn normalized(self) -> Self {
        Self::from_total_seconds(self.total_seconds().rem_euclid(FULL_CIRCLE_SECONDS))
    }

    /// Reciprocal bearing (`self + 180°`, normalized).
    #[inline]
    pub fn flip(self) -> Self {
        (self + Angle::from_degrees(180)).normalized()
    }

    #[inline]
    pub fn to_decimal_degrees(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / 3600.0
    }

    /// Inverse of `to_decimal_degrees`: floor degrees, floor minutes, seconds
    /// rounded half away from zero. A seconds value that rounds up to 60 is
    /// carried, so the result always has components in range.
    /// Values outside the `i32` degree range (infinities included) saturate;
    /// NaN gives [`Angle::ZERO`].
    pub fn from_decimal_degrees(decimal_degrees: f64) -> Self {
        if decimal_degrees.is_nan() {
            return Self::ZERO;
        }
        let decimal_degrees = decimal_degrees.clamp(i32::MIN as f64, i32::MAX as f64 + 1.0);
        let degrees = decimal_degrees.floor();
        let minutes = ((decimal_degrees - degrees) * 60.0).floor();
        let seconds = round_to(((decimal_degrees - degrees) * 60.0 - minutes) * 60.0, 0);
        Self::from_total_seconds(degrees as i64 * 3600 + minutes as i64 * 60 + seconds as i64)
    }

    #[inline]
    pub fn to_radians(&self) -> f64 {
        decimal_degrees_to_radians(self.to_decimal_degrees())
    }

    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self::from_decimal_degrees(radians_to_decimal_degrees(radians))
    }

    /// Counter-clockwise-from-East angle in `[0, 2π)` for this bearing.
    pub fn to_math_radians(&self) -> f64 {
        let tau = 2.0 * std::f64::consts::PI;
        (std::f64::consts::FRAC_PI_2 - self.to_radians()).rem_euclid(tau)
    }

    /// A bearing is ordinary when it points into the eastern half-plane,
    /// i.e. its normalized value lies in `[0°, 180°)`. Text and linework drawn
    /// along an ordinary bearing read left to right.
    #[inline]
    pub fn is_ordinary(&self) -> bool {
        self.normalized().degrees < 180
    }

    /// Normalized bearing, flipped when not ordinary.
    pub fn to_ordinary(self) -> Self {
        if self.is_ordinary() {
            self.normalized()
        } else {
            self.flip()
        }
    }
}

impl std::ops::Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Self::Output {
        Angle::from_total_seconds(self.total_seconds() + rhs.total_seconds())
    }
}

impl std::ops::Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Self::Output {
        Angle::from_total_seconds(self.total_seconds() - rhs.total_seconds())
    }
}

impl std::ops::Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self::Output {
        Angle::from_total_seconds(-self.total_seconds())
    }
}

impl std::ops::AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Angle) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Angle) {
        *self = *self - rhs;
    }
}
