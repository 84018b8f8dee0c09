use spatial_core::{magnitude_cmp, parse_vector, CoordPoint, Vector3d, VectorError, VectorFormat};
use std::cmp::Ordering;

const EPSILON: f64 = 1e-12;

// --- Algebra ---

#[test]
fn magnitude_matches_euclidean_norm() {
    let cases = [
        (3.0, 4.0, 0.0, 5.0),
        (1.0, 2.0, 2.0, 3.0),
        (0.0, 0.0, 0.0, 0.0),
        (-6.0, 8.0, 0.0, 10.0),
    ];
    for (x, y, z, expected) in cases {
        let v = Vector3d::new(x, y, z);
        assert!((v.magnitude() - expected).abs() < EPSILON);
    }
}

#[test]
fn cross_of_vector_with_itself_is_zero() {
    for v in [
        Vector3d::new(1.0, 2.0, 3.0),
        Vector3d::new(-0.5, 100.0, 0.001),
        Vector3d::ZERO,
    ] {
        assert_eq!(v.cross(&v), Vector3d::ZERO);
    }
}

#[test]
fn cross_product_is_orthogonal_to_both_operands() {
    let a = Vector3d::new(2.0, -3.0, 4.0);
    let b = Vector3d::new(5.0, 1.0, -2.0);
    let c = a.cross(&b);
    assert!(a.dot(&c).abs() < EPSILON);
    assert!(b.dot(&c).abs() < EPSILON);
}

#[test]
fn axis_vectors_are_perpendicular() {
    assert!(Vector3d::new(1.0, 0.0, 0.0).is_perpendicular_to(&Vector3d::new(0.0, 1.0, 0.0)));
    assert!(!Vector3d::new(1.0, 0.0, 0.0).is_perpendicular_to(&Vector3d::new(1.0, 0.0, 0.0)));
}

#[test]
fn right_angle_is_ninety_degrees() {
    let a = Vector3d::new(1.0, 0.0, 0.0);
    let b = Vector3d::new(0.0, 1.0, 0.0);
    assert!((a.angle_between(&b) - 90.0).abs() < EPSILON);
}

#[test]
fn unit_vector_has_unit_magnitude() {
    let v = Vector3d::new(2.0, -5.0, 11.0);
    assert!((v.unit_vector().magnitude() - 1.0).abs() < EPSILON);
}

#[test]
fn zero_vector_unit_vector_is_nan() {
    let unit = Vector3d::ZERO.unit_vector();
    assert!(unit.x.is_nan() && unit.y.is_nan() && unit.z.is_nan());
}

// --- Text round-trip ---

#[test]
fn format_emits_decimal_points() {
    let fmt = VectorFormat::default();
    let v = Vector3d::new(1.0, 2.0, 3.0);
    assert_eq!(fmt.format(&v), "{1.0,2.0,3.0}");
}

#[test]
fn parse_integer_literals() {
    let v = parse_vector("{1,2,3}", &VectorFormat::default())
        .unwrap()
        .unwrap();
    assert_eq!(v, Vector3d::new(1.0, 2.0, 3.0));
}

#[test]
fn formatted_output_is_not_reparseable() {
    // The asymmetric round-trip contract: formatting writes doubles, parsing
    // accepts only integers.
    let fmt = VectorFormat::default();
    let text = fmt.format(&Vector3d::new(1.0, 2.0, 3.0));
    assert!(matches!(
        fmt.parse(&text),
        Err(VectorError::InvalidComponent { .. })
    ));
}

#[test]
fn custom_delimiters_round_trip() {
    let fmt = VectorFormat::new("(", ")", "|");
    let v = parse_vector("(9|-8|7)", &fmt).unwrap().unwrap();
    assert_eq!(v, Vector3d::new(9.0, -8.0, 7.0));
    assert_eq!(fmt.format(&v), "(9.0|-8.0|7.0)");
}

// --- Failure policy ---

#[test]
fn structural_mismatch_yields_no_value() {
    assert!(parse_vector("not-a-vector", &VectorFormat::default())
        .unwrap()
        .is_none());
}

#[test]
fn malformed_field_raises_error() {
    let result = parse_vector("{1,x,3}", &VectorFormat::default());
    match result {
        Err(VectorError::InvalidComponent { component }) => assert_eq!(component, "x"),
        other => panic!("expected InvalidComponent, got {:?}", other),
    }
}

#[test]
fn lenient_constructor_defaults_on_structural_mismatch() {
    assert_eq!(Vector3d::from_text("not-a-vector").unwrap(), Vector3d::ZERO);
}

#[test]
fn lenient_constructor_propagates_field_errors() {
    assert!(Vector3d::from_text("{1,x,3}").is_err());
}

// --- Point conversion ---

#[test]
fn three_dimensional_point_converts() {
    let p = CoordPoint::new(vec![1.0, 2.0, 3.0]);
    assert_eq!(Vector3d::from_point(&p), Vector3d::new(1.0, 2.0, 3.0));
}

#[test]
fn two_dimensional_point_defaults_to_zero() {
    let p = CoordPoint::new(vec![1.0, 2.0]);
    assert_eq!(Vector3d::from_point(&p), Vector3d::ZERO);
}

// --- Ordering ---

#[test]
fn sub_unit_magnitude_difference_compares_equal() {
    let a = Vector3d::new(5.2, 0.0, 0.0);
    let b = Vector3d::new(5.9, 0.0, 0.0);
    assert_eq!(magnitude_cmp(&a, &b), Ordering::Equal);
}

#[test]
fn full_unit_magnitude_difference_orders() {
    let a = Vector3d::new(5.2, 0.0, 0.0);
    let b = Vector3d::new(6.3, 0.0, 0.0);
    assert_eq!(magnitude_cmp(&a, &b), Ordering::Less);
    assert_eq!(magnitude_cmp(&b, &a), Ordering::Greater);
}

// --- Serde ---

#[cfg(feature = "serde")]
#[test]
fn serde_round_trips_as_array() {
    let v = Vector3d::new(1.5, -2.5, 3.5);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "[1.5,-2.5,3.5]");
    let back: Vector3d = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
