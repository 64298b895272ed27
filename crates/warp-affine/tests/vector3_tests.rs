// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use warp_affine::{AffineError, ErrorKind, Tolerance, Vector3};

fn approx_eq(a: f64, b: f64) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-12, "expected {b}, got {a} (diff {diff})");
}

fn v(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::new(x, y, z).expect("valid vector")
}

#[test]
fn construction_preserves_components() {
    let a = v(1.5, -2.0, 0.25);
    assert_eq!(a.as_tuple(), (1.5, -2.0, 0.25));
    assert_eq!(a.to_array(), [1.5, -2.0, 0.25]);
    assert_eq!((a.x(), a.y(), a.z()), (1.5, -2.0, 0.25));
}

#[test]
fn integer_inputs_convert_to_float() {
    let a = Vector3::new(1, 2, 3).expect("valid vector");
    assert_eq!(a.as_tuple(), (1.0, 2.0, 3.0));
}

#[test]
fn zero_vector_is_rejected() {
    let err = Vector3::new(0.0, 0.0, 0.0).unwrap_err();
    assert_eq!(err, AffineError::DegenerateVector { magnitude: 0.0 });
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    // Negative zero has magnitude zero too.
    assert!(Vector3::new(-0.0, 0.0, -0.0).is_err());
}

#[test]
fn vanishing_squared_magnitude_is_rejected() {
    // Each square flushes to zero or into the subnormal range.
    for c in [
        [5e-324, 5e-324, 5e-324],
        [1e-320, 0.0, 0.0],
        [1e-200, 0.0, 0.0],
        [f64::MIN_POSITIVE, f64::MIN_POSITIVE, 0.0],
        [1e-155, 1e-155, 1e-155],
    ] {
        let err = Vector3::try_from(c).unwrap_err();
        assert!(
            matches!(err, AffineError::DegenerateVector { .. }),
            "{c:?} gave {err:?}"
        );
    }
}

#[test]
fn overflowing_squared_magnitude_is_rejected() {
    let err = Vector3::new(1e300, 0.0, 0.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn smallest_accepted_vectors_normalize_to_unit_length() {
    // 2e-154² ≈ 4e-308 sits just above f64::MIN_POSITIVE.
    for c in [
        [2e-154, 0.0, 0.0],
        [2e-154, 5e-324, 0.0],
        [1.2e-154, 1.2e-154, 1.2e-154],
        [1e150, -1e150, 1e150],
    ] {
        let mut a = Vector3::try_from(c).expect("squared magnitude is normal");
        approx_eq(a.normalized().magnitude(), 1.0);
        a.set_magnitude(1.0).expect("unit rescale never fails");
        approx_eq(a.magnitude(), 1.0);
    }
}

#[test]
fn scale_overflow_reports_non_finite_component() {
    let err = v(1e150, 1.0, 1.0).scale(1e300).unwrap_err();
    assert!(matches!(err, AffineError::NonFiniteComponent { .. }));
}

#[test]
fn non_finite_components_are_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = Vector3::new(bad, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, AffineError::NonFiniteComponent { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn magnitude_is_euclidean() {
    approx_eq(v(3.0, 4.0, 0.0).magnitude(), 5.0);
    approx_eq(v(1.0, 2.0, 2.0).magnitude(), 3.0);
    approx_eq(v(-1.0, -1.0, -1.0).magnitude(), 3.0_f64.sqrt());
}

#[test]
fn normalized_is_unit_and_leaves_source_untouched() {
    let a = v(0.0, 2.0, 0.0);
    let n = a.normalized();
    approx_eq(n.magnitude(), 1.0);
    assert_eq!(n.as_tuple(), (0.0, 1.0, 0.0));
    assert_eq!(a.as_tuple(), (0.0, 2.0, 0.0));
}

#[test]
fn normalize_mutates_in_place() {
    let mut a = v(3.0, 0.0, 4.0);
    a.normalize();
    assert!(a.approx_eq(&v(0.6, 0.0, 0.8), &Tolerance::default()));
}

#[test]
fn set_magnitude_rescales_direction_preserving() {
    let mut a = v(1.0, 2.0, 2.0);
    a.set_magnitude(6.0).expect("positive magnitude");
    approx_eq(a.magnitude(), 6.0);
    assert!(a.approx_eq(&v(2.0, 4.0, 4.0), &Tolerance::default()));
}

#[test]
fn set_magnitude_rejects_non_positive_targets() {
    let mut a = v(1.0, 0.0, 0.0);
    let err = a.set_magnitude(0.0).unwrap_err();
    assert_eq!(err, AffineError::InvalidMagnitude { value: 0.0 });
    let err = a.set_magnitude(-2.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(a.as_tuple(), (1.0, 0.0, 0.0));
}

#[test]
fn copy_is_equal_and_independent() {
    let a = v(1.0, 2.0, 3.0);
    let mut b = a.copy();
    assert_eq!(a, b);
    b.normalize();
    assert_ne!(a, b);
    assert_eq!(a.as_tuple(), (1.0, 2.0, 3.0));
}

#[test]
fn iteration_is_ordered_and_restartable() {
    let a = v(7.0, 8.0, 9.0);
    let first: Vec<f64> = a.iter().collect();
    let second: Vec<f64> = a.into_iter().collect();
    assert_eq!(first, vec![7.0, 8.0, 9.0]);
    assert_eq!(first, second);
    let mut sum = 0.0;
    for c in &a {
        sum += c;
    }
    approx_eq(sum, 24.0);
}

#[test]
fn scale_multiplies_each_component() {
    let a = v(1.0, -2.0, 0.5);
    assert_eq!((a * 2.0).expect("scaled").as_tuple(), (2.0, -4.0, 1.0));
    assert_eq!((a * -2).expect("scaled").as_tuple(), (-2.0, 4.0, -1.0));
    assert_eq!(a.scale(3.0).expect("scaled").to_array(), [3.0, -6.0, 1.5]);
}

#[test]
fn scale_by_zero_is_degenerate() {
    let err = (v(1.0, 1.0, 1.0) * 0.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn add_is_elementwise() {
    let sum = (v(1.0, 0.0, 0.0) + v(0.0, 1.0, 0.0)).expect("non-degenerate sum");
    assert_eq!(sum.as_tuple(), (1.0, 1.0, 0.0));
    let a = v(1.0, 2.0, 3.0);
    let b = v(-3.0, 4.0, 1.5);
    assert_eq!((&a + &b).expect("sum").to_array(), [-2.0, 6.0, 4.5]);
}

#[test]
fn add_cancelling_to_zero_is_degenerate() {
    let a = v(1.0, -2.0, 3.0);
    let b = v(-1.0, 2.0, -3.0);
    assert!(matches!(a + b, Err(AffineError::DegenerateVector { .. })));
}

#[test]
fn conversions_roundtrip_through_arrays_and_tuples() {
    let a = Vector3::try_from([1.0, 2.0, 3.0]).expect("valid array");
    let arr: [f64; 3] = a.into();
    assert_eq!(arr, [1.0, 2.0, 3.0]);
    let t: (f64, f64, f64) = a.into();
    assert_eq!(Vector3::try_from(t), Ok(a));
    assert!(Vector3::try_from([0.0; 3]).is_err());
}

#[test]
fn unit_constants_are_unit_length() {
    for unit in [Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::UNIT_Z] {
        approx_eq(unit.magnitude(), 1.0);
    }
}

#[test]
fn display_is_diagnosable() {
    let text = v(1.0, 2.5, -3.0).to_string();
    assert_eq!(text, "Vector3(x=1.0, y=2.5, z=-3.0)");
    assert!(format!("{:?}", v(1.0, 2.0, 3.0)).contains("Vector3"));
}
