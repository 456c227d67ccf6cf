//! Traverse legs and the direction flags of turned-angle legs.

use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::error::CogoError;

/// What a turned angle is measured from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceDirection {
    /// The previous leg's forward bearing.
    #[default]
    Forward,
    /// The previous leg's back bearing (forward − 180°).
    Backward,
}

/// Sense in which a turned angle is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationDirection {
    /// Clockwise (added).
    #[default]
    Positive,
    /// Counter-clockwise (subtracted).
    Negative,
}

/// Raw discriminants from a host: `0 = Forward`, `1 = Backward`.
impl TryFrom<i64> for ReferenceDirection {
    type Error = CogoError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Forward),
            1 => Ok(Self::Backward),
            other => Err(CogoError::InvalidReferenceDirection(other)),
        }
    }
}

/// Raw discriminants from a host: `0 = Positive`, `1 = Negative`.
impl TryFrom<i64> for RotationDirection {
    type Error = CogoError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Positive),
            1 => Ok(Self::Negative),
            other => Err(CogoError::InvalidRotationDirection(other)),
        }
    }
}

/// Absolute bearing + distance leg.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraverseLeg {
    pub bearing: Angle,
    pub distance: f64,
}

impl TraverseLeg {
    #[inline]
    pub fn new(bearing: Angle, distance: f64) -> Self {
        Self { bearing, distance }
    }
}

/// Turned angle + distance leg.
///
/// An empty `angle` (0°00'00") means "no angle turned": the leg continues on
/// the previous bearing and the direction flags are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraverseAngleLeg {
    pub angle: Angle,
    pub distance: f64,
    #[serde(default)]
    pub reference: ReferenceDirection,
    #[serde(default)]
    pub rotation: RotationDirection,
}

impl TraverseAngleLeg {
    #[inline]
    pub fn new(
        angle: Angle,
        distance: f64,
        reference: ReferenceDirection,
        rotation: RotationDirection,
    ) -> Self {
        Self {
            angle,
            distance,
            reference,
            rotation,
        }
    }

    /// Leg continuing on the previous bearing.
    #[inline]
    pub fn straight(distance: f64) -> Self {
        Self::new(
            Angle::ZERO,
            distance,
            ReferenceDirection::Forward,
            RotationDirection::Positive,
        )
    }
}
