use super::*;
use crate::error::CogoError;
use proptest::prelude::*;

fn p(x: f64, y: f64) -> Point2<f64> {
    Point2::new(x, y)
}

fn close_to(a: Point2<f64>, b: Point2<f64>) -> bool {
    (a - b).norm() < 1e-9
}

fn turned(deg: i32, reference: ReferenceDirection, rotation: RotationDirection) -> TraverseAngleLeg {
    TraverseAngleLeg::new(Angle::from_degrees(deg), 10.0, reference, rotation)
}

#[test]
fn bearing_traverse_walks_each_leg() {
    let legs = [
        TraverseLeg::new(Angle::from_degrees(90), 3.0),
        TraverseLeg::new(Angle::ZERO, 4.0),
        TraverseLeg::new(Angle::new(216, 52, 12), 5.0),
    ];
    let base = p(1000.0, 5000.0);
    let pts = bearing_traverse(&legs, base);
    assert_eq!(pts.len(), 4);
    assert_eq!(pts[0], base);
    assert_eq!(pts[1], p(1003.0, 5000.0));
    assert_eq!(pts[2], p(1003.0, 5004.0));
    // closing leg lands back on the start within a second of arc over 5 m
    assert!((pts[3] - base).norm() < 1e-4);
}

#[test]
fn closed_square_forward_positive() {
    use ReferenceDirection::Forward;
    use RotationDirection::Positive;
    let legs = [turned(90, Forward, Positive); 4];
    let pts = angle_traverse(&legs, p(0.0, 0.0));
    assert_eq!(pts.len(), 5);
    assert!(close_to(pts[1], p(10.0, 0.0)));
    assert!(close_to(pts[2], p(10.0, -10.0)));
    assert!(close_to(pts[3], p(0.0, -10.0)));
    assert!(close_to(pts[4], p(0.0, 0.0)));
}

#[test]
fn closed_square_counter_clockwise_and_backsight() {
    use ReferenceDirection::{Backward, Forward};
    use RotationDirection::{Negative, Positive};
    let expected = [p(-10.0, 0.0), p(-10.0, -10.0), p(0.0, -10.0), p(0.0, 0.0)];

    let ccw = angle_traverse(&[turned(90, Forward, Negative); 4], p(0.0, 0.0));
    let back = angle_traverse(&[turned(90, Backward, Positive); 4], p(0.0, 0.0));
    for (i, e) in expected.iter().enumerate() {
        assert!(close_to(ccw[i + 1], *e), "ccw {i}: {:?}", ccw[i + 1]);
        assert!(close_to(back[i + 1], *e), "back {i}: {:?}", back[i + 1]);
    }
}

#[test]
fn empty_angle_continues_straight() {
    let legs = [
        TraverseAngleLeg::straight(10.0),
        // flags are ignored when no angle is turned
        TraverseAngleLeg::new(
            Angle::ZERO,
            10.0,
            ReferenceDirection::Backward,
            RotationDirection::Negative,
        ),
    ];
    let pts = angle_traverse_from(&legs, p(0.0, 0.0), Angle::from_degrees(90));
    assert!(close_to(pts[1], p(10.0, 0.0)));
    assert!(close_to(pts[2], p(20.0, 0.0)));
}

#[test]
fn bearings_of_turned_legs_are_normalized() {
    use ReferenceDirection::Backward;
    use RotationDirection::Positive;
    let legs = [turned(90, Backward, Positive); 3];
    let bearings = angle_legs_to_bearings(&legs, Angle::ZERO);
    assert_eq!(
        bearings,
        vec![
            Angle::from_degrees(270),
            Angle::from_degrees(180),
            Angle::from_degrees(90)
        ]
    );
}

#[test]
fn empty_traverse_is_just_the_base() {
    let base = p(12.5, -3.25);
    assert_eq!(bearing_traverse(&[], base), vec![base]);
    assert_eq!(angle_traverse(&[], base), vec![base]);
}

#[test]
fn zero_distance_leg_adds_coincident_point() {
    let pts = bearing_traverse(&[TraverseLeg::new(Angle::from_degrees(33), 0.0)], p(1.0, 2.0));
    assert_eq!(pts, vec![p(1.0, 2.0), p(1.0, 2.0)]);
}

#[test]
fn closure_of_square_and_open_triangle() {
    use ReferenceDirection::Forward;
    use RotationDirection::Positive;
    let square = angle_traverse(&[turned(90, Forward, Positive); 4], p(0.0, 0.0));
    let c = Closure::of(&square).unwrap();
    assert_eq!(c.misclose_distance, 0.0);
    assert!(c.precision.is_none());
    assert!(c.is_closed(1e-3));
    assert!((c.perimeter - 40.0).abs() < 1e-9);
    assert!((c.area - 100.0).abs() < 1e-9);

    let open = [p(0.0, 0.0), p(3.0, 0.0), p(3.0, 4.0)];
    let c = Closure::of(&open).unwrap();
    assert_eq!(c.misclose_distance, 5.0);
    assert_eq!(c.misclose_bearing, Angle::new(216, 52, 12));
    assert!((c.perimeter - 7.0).abs() < 1e-9);
    assert!((c.precision.unwrap() - 1.4).abs() < 1e-9);
    assert!((c.area - 6.0).abs() < 1e-9);
    assert!(!c.is_closed(1e-3));

    assert!(Closure::of(&[p(0.0, 0.0)]).is_none());
}

#[test]
fn raw_discriminants_fail_fast() {
    assert_eq!(ReferenceDirection::try_from(1i64), Ok(ReferenceDirection::Backward));
    assert_eq!(RotationDirection::try_from(0i64), Ok(RotationDirection::Positive));
    assert_eq!(
        ReferenceDirection::try_from(2i64),
        Err(CogoError::InvalidReferenceDirection(2))
    );
    assert_eq!(
        RotationDirection::try_from(-1i64),
        Err(CogoError::InvalidRotationDirection(-1))
    );
}

#[test]
fn legs_decode_from_json() {
    let leg: TraverseAngleLeg = serde_json::from_str(
        r#"{"angle":{"degrees":90,"minutes":0,"seconds":0},"distance":10.0,"reference":"backward"}"#,
    )
    .unwrap();
    assert_eq!(leg.reference, ReferenceDirection::Backward);
    assert_eq!(leg.rotation, RotationDirection::Positive);
    let bad = serde_json::from_str::<TraverseAngleLeg>(
        r#"{"angle":{"degrees":90,"minutes":0,"seconds":0},"distance":10.0,"rotation":"sideways"}"#,
    );
    assert!(bad.is_err());
}

proptest! {
    #[test]
    fn output_has_one_point_per_leg_plus_base(
        legs in prop::collection::vec((0i32..360, 0i32..60, 0.0f64..500.0, any::<bool>(), any::<bool>()), 0..40),
        x in -1.0e4f64..1.0e4, y in -1.0e4f64..1.0e4,
    ) {
        let base = p(x, y);
        let angle_legs: Vec<_> = legs
            .iter()
            .map(|&(d, m, dist, back, neg)| TraverseAngleLeg::new(
                Angle::new(d, m, 0),
                dist,
                if back { ReferenceDirection::Backward } else { ReferenceDirection::Forward },
                if neg { RotationDirection::Negative } else { RotationDirection::Positive },
            ))
            .collect();
        let bearing_legs: Vec<_> = legs
            .iter()
            .map(|&(d, m, dist, _, _)| TraverseLeg::new(Angle::new(d, m, 0), dist))
            .collect();
        let a = angle_traverse(&angle_legs, base);
        let b = bearing_traverse(&bearing_legs, base);
        prop_assert_eq!(a.len(), legs.len() + 1);
        prop_assert_eq!(b.len(), legs.len() + 1);
        prop_assert_eq!(a[0], base);
        prop_assert_eq!(b[0], base);
    }

    #[test]
    fn turned_angles_match_their_absolute_bearings(
        legs in prop::collection::vec((1i32..360, 1.0f64..200.0, any::<bool>()), 1..20),
    ) {
        let angle_legs: Vec<_> = legs
            .iter()
            .map(|&(d, dist, back)| TraverseAngleLeg::new(
                Angle::from_degrees(d),
                dist,
                if back { ReferenceDirection::Backward } else { ReferenceDirection::Forward },
                RotationDirection::Positive,
            ))
            .collect();
        let start = Angle::new(12, 34, 56);
        let bearings = angle_legs_to_bearings(&angle_legs, start);
        let bearing_legs: Vec<_> = bearings
            .iter()
            .zip(&angle_legs)
            .map(|(b, leg)| TraverseLeg::new(*b, leg.distance))
            .collect();
        let a = angle_traverse_from(&angle_legs, p(0.0, 0.0), start);
        let b = bearing_traverse(&bearing_legs, p(0.0, 0.0));
        for (pa, pb) in a.iter().zip(&b) {
            prop_assert!((pa - pb).norm() < 1e-3);
        }
    }
}
