//! Value type tests.
//!
//! These tests do not require CSFML.

use std::collections::HashSet;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use sfml::{Angle, Time, Vector2f, Vector2i, Vector2u, Vector3f};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_vector_equality() {
    init_logging();
    let a = Vector2i::new(1, 5);
    assert_eq!(a, a, "equality should be reflexive");
    assert_eq!(Vector2i::new(1, 5), Vector2i::new(1, 5));
    assert_ne!(Vector2i::new(1, 5), Vector2i::new(6, 9));
    assert_eq!(
        Vector2i::new(6, 9) == Vector2i::new(1, 5),
        Vector2i::new(1, 5) == Vector2i::new(6, 9),
        "equality should be symmetric"
    );

    // Float equality is exact, no tolerance.
    assert_ne!(Vector2f::new(1.0, 0.0), Vector2f::new(1.0 + f32::EPSILON, 0.0));
}

#[test]
fn test_vector_hash_matches_equality() {
    let mut set = HashSet::new();
    set.insert(Vector2i::new(1, 5));
    set.insert(Vector2i::new(1, 5));
    set.insert(Vector2i::new(5, 1));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_vector_arithmetic() {
    let a = Vector2i::new(2, 5);
    let b = Vector2i::new(8, 3);

    assert_eq!(a + b, Vector2i::new(10, 8));
    assert_eq!(a - b, Vector2i::new(-6, 2));
    assert_eq!(Vector2i::new(26, 12) * 2, Vector2i::new(52, 24));
    assert_eq!(2 * Vector2i::new(26, 12), Vector2i::new(52, 24));
    assert_eq!(Vector2i::new(26, 12) / 2, Vector2i::new(13, 6));
    assert_eq!(-a, Vector2i::new(-2, -5));
}

#[test]
fn test_vector_float_and_unsigned() {
    assert_eq!(
        Vector2f::new(1.5, -2.0) * 2.0,
        Vector2f::new(3.0, -4.0)
    );
    assert_eq!(0.5 * Vector2f::new(4.0, 8.0), Vector2f::new(2.0, 4.0));
    assert_eq!(Vector2u::new(26, 12) / 4, Vector2u::new(6, 3));
    assert_eq!(
        Vector2u::new(0, 5) - Vector2u::new(1, 5),
        Vector2u::new(u32::MAX, 0)
    );
    assert_eq!(
        Vector3f::new(1.0, 2.0, 3.0) + Vector3f::new(1.0, 1.0, 1.0),
        Vector3f::new(2.0, 3.0, 4.0)
    );
    assert_eq!(2.0 * Vector3f::new(1.0, 2.0, 3.0), Vector3f::new(2.0, 4.0, 6.0));
}

#[test]
fn test_vector_conversions_truncate() {
    assert_eq!(Vector2f::new(2.99, -0.5).as_i32(), Vector2i::new(2, 0));
    assert_eq!(Vector2i::new(3, 4).as_f32(), Vector2f::new(3.0, 4.0));
    assert_eq!(Vector2u::new(7, 8).as_i32(), Vector2i::new(7, 8));
}

#[test]
fn test_angle_wrap_signed() {
    assert_abs_diff_eq!(
        Angle::degrees(360.0).wrap_signed().as_degrees(),
        0.0,
        epsilon = 1e-4
    );
    assert_eq!(Angle::degrees(180.0).wrap_signed(), Angle::degrees(-180.0));
    assert_eq!(Angle::degrees(-180.0).wrap_signed(), Angle::degrees(-180.0));
    assert_relative_eq!(
        Angle::degrees(-90.0).wrap_signed().as_degrees(),
        -90.0,
        max_relative = 1e-5
    );
    assert_relative_eq!(
        Angle::degrees(270.0).wrap_signed().as_degrees(),
        -90.0,
        max_relative = 1e-5
    );
}

#[test]
fn test_angle_wrap_unsigned() {
    assert_relative_eq!(
        Angle::degrees(-90.0).wrap_unsigned().as_degrees(),
        270.0,
        max_relative = 1e-5
    );
    assert_abs_diff_eq!(
        Angle::degrees(720.0).wrap_unsigned().as_degrees(),
        0.0,
        epsilon = 1e-4
    );
    assert_relative_eq!(
        Angle::degrees(90.0).wrap_unsigned().as_degrees(),
        90.0,
        max_relative = 1e-5
    );
}

#[test]
fn test_angle_wrap_tiny_negative_stays_in_range() {
    use std::f32::consts::TAU;

    let wrapped = Angle::radians(-1e-8).wrap_unsigned().as_radians();
    assert!((0.0..TAU).contains(&wrapped), "wrapped to {}", wrapped);

    let rem = (Angle::radians(-1e-8) % Angle::radians(TAU)).as_radians();
    assert!((0.0..TAU).contains(&rem), "remainder {}", rem);

    let signed = Angle::radians(-std::f32::consts::PI - 1e-8).wrap_signed().as_degrees();
    assert!((-180.0..180.0).contains(&signed), "wrapped to {}", signed);
}

#[test]
fn test_angle_modulo() {
    assert_relative_eq!(
        (Angle::degrees(90.0) % Angle::degrees(40.0)).as_degrees(),
        10.0,
        max_relative = 1e-5
    );
    assert_relative_eq!(
        (Angle::degrees(-90.0) % Angle::degrees(40.0)).as_degrees(),
        30.0,
        max_relative = 1e-5
    );
}

#[test]
fn test_angle_conversions() {
    assert_relative_eq!(Angle::degrees(15.0).as_radians(), 0.261_799, max_relative = 1e-5);
    assert_relative_eq!(Angle::radians(1.0).as_degrees(), 57.295_78, max_relative = 1e-5);
    assert_eq!(Angle::ZERO + Angle::radians(0.5), Angle::radians(0.5));
    assert_eq!(-Angle::radians(0.5), Angle::radians(-0.5));
}

#[test]
fn test_angle_compares_raw_value() {
    assert_ne!(Angle::degrees(90.0), Angle::degrees(450.0));
    assert!(Angle::degrees(450.0) > Angle::degrees(90.0));
}

#[test]
fn test_time_integer_arithmetic_is_exact() {
    assert_eq!(
        Time::microseconds(10) + Time::microseconds(5),
        Time::microseconds(15)
    );
    assert_eq!(
        Time::microseconds(10) - Time::microseconds(15),
        Time::microseconds(-5)
    );
    assert_eq!(Time::microseconds(7) * 3i64, Time::microseconds(21));
    assert_eq!(3i64 * Time::microseconds(7), Time::microseconds(21));
    assert_eq!(Time::microseconds(21) / 4i64, Time::microseconds(5));
    assert_eq!(
        Time::microseconds(-22) % Time::microseconds(5),
        Time::microseconds(-2)
    );
}

#[test]
fn test_time_float_arithmetic_is_approximate() {
    let scaled = Time::seconds(1.5) * 2.0f32;
    assert_relative_eq!(scaled.as_seconds(), 3.0, max_relative = 1e-6);

    let halved = Time::milliseconds(333) / 3.0f32;
    assert_abs_diff_eq!(halved.as_microseconds() as f64, 111_000.0, epsilon = 2.0);
}

#[test]
fn test_time_units() {
    let t = Time::milliseconds(1_234);
    assert_eq!(t.as_microseconds(), 1_234_000);
    assert_eq!(t.as_milliseconds(), 1_234);
    assert_relative_eq!(t.as_seconds(), 1.234, max_relative = 1e-6);
    assert_eq!(Time::seconds(0.25), Time::milliseconds(250));
}

#[test]
fn test_time_ordering() {
    assert!(Time::microseconds(1) > Time::ZERO);
    assert!(Time::milliseconds(-1) < Time::microseconds(-999));
    assert_eq!(
        Time::seconds(2.0).max(Time::milliseconds(1_500)),
        Time::seconds(2.0)
    );
}
