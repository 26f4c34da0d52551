//! Angles stored in radians.

use std::f32::consts::{PI, TAU};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

/// Remainder of `a / b` shifted into `[0, b)`. `b` must be positive.
fn positive_remainder(a: f32, b: f32) -> f32 {
    debug_assert!(b > 0.0, "divisor must be positive");
    let val = a - (a / b).trunc() * b;
    if val >= 0.0 {
        return val;
    }
    // A tiny negative remainder can round up to `b` itself.
    let shifted = val + b;
    if shifted >= b {
        0.0
    } else {
        shifted
    }
}

/// An angle.
///
/// Equality and ordering compare the raw radian value: 0° and 360° are
/// different angles until wrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle { radians: 0.0 };

    /// Build an angle from degrees.
    pub fn degrees(angle: f32) -> Angle {
        Angle {
            radians: angle * (PI / 180.0),
        }
    }

    /// Build an angle from radians.
    pub const fn radians(angle: f32) -> Angle {
        Angle { radians: angle }
    }

    /// Value in degrees.
    pub fn as_degrees(self) -> f32 {
        self.radians * (180.0 / PI)
    }

    /// Value in radians.
    pub const fn as_radians(self) -> f32 {
        self.radians
    }

    /// Wrap into [-180°, 180°).
    ///
    /// +180° maps to -180°.
    pub fn wrap_signed(self) -> Angle {
        Angle::radians(positive_remainder(self.radians + PI, TAU) - PI)
    }

    /// Wrap into [0°, 360°).
    pub fn wrap_unsigned(self) -> Angle {
        Angle::radians(positive_remainder(self.radians, TAU))
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle::radians(-self.radians)
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle::radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle::radians(self.radians - rhs.radians)
    }
}

impl Mul<f32> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f32) -> Angle {
        Angle::radians(self.radians * rhs)
    }
}

impl Mul<Angle> for f32 {
    type Output = Angle;
    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}

impl Div<f32> for Angle {
    type Output = Angle;
    fn div(self, rhs: f32) -> Angle {
        Angle::radians(self.radians / rhs)
    }
}

impl Div for Angle {
    type Output = f32;
    fn div(self, rhs: Angle) -> f32 {
        self.radians / rhs.radians
    }
}

impl Rem for Angle {
    type Output = Angle;
    /// Remainder in `[0, rhs)`: `-90° % 40°` is `30°`.
    fn rem(self, rhs: Angle) -> Angle {
        Angle::radians(positive_remainder(self.radians, rhs.radians))
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        *self = *self + rhs;
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Angle) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Angle {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Angle {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl RemAssign for Angle {
    fn rem_assign(&mut self, rhs: Angle) {
        *self = *self % rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_positive_remainder() {
        assert_relative_eq!(positive_remainder(10.0, 3.0), 1.0);
        assert_relative_eq!(positive_remainder(-10.0, 3.0), 2.0);
        assert_eq!(positive_remainder(6.0, 3.0), 0.0);
        assert_eq!(positive_remainder(-1e-8, TAU), 0.0);
    }

    #[test]
    fn test_signed_boundary_is_exact() {
        assert_eq!(Angle::degrees(180.0).wrap_signed(), Angle::degrees(-180.0));
        assert_eq!(Angle::degrees(-180.0).wrap_signed(), Angle::degrees(-180.0));
    }

    #[test]
    fn test_raw_comparison() {
        assert_ne!(Angle::degrees(0.0), Angle::degrees(360.0));
        assert!(Angle::degrees(10.0) < Angle::degrees(20.0));
        assert_eq!(Angle::default(), Angle::ZERO);
    }

    #[test]
    fn test_ratio_and_compound() {
        assert_relative_eq!(Angle::degrees(90.0) / Angle::degrees(45.0), 2.0);
        let mut a = Angle::degrees(30.0);
        a += Angle::degrees(60.0);
        a *= 2.0;
        assert_relative_eq!(a.as_degrees(), 180.0, max_relative = 1e-5);
    }
}
