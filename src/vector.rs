//! 2D and 3D vectors.
//!
//! The component type is one of `f32`, `i32` or `u32`. Integer arithmetic
//! wraps on overflow, like the underlying machine types.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::angle::Angle;

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
}

/// Numeric component type of a vector.
pub trait Scalar: Copy + PartialEq + PartialOrd + Default + fmt::Debug + private::Sealed {
    /// Additive identity.
    const ZERO: Self;

    /// Component addition.
    fn plus(self, rhs: Self) -> Self;
    /// Component subtraction.
    fn minus(self, rhs: Self) -> Self;
    /// Component multiplication.
    fn times(self, rhs: Self) -> Self;
    /// Component division.
    fn over(self, rhs: Self) -> Self;
}

/// Component types that can be negated.
pub trait SignedScalar: Scalar {
    /// Component negation.
    fn negated(self) -> Self;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn plus(self, rhs: Self) -> Self {
        self + rhs
    }
    #[inline]
    fn minus(self, rhs: Self) -> Self {
        self - rhs
    }
    #[inline]
    fn times(self, rhs: Self) -> Self {
        self * rhs
    }
    #[inline]
    fn over(self, rhs: Self) -> Self {
        self / rhs
    }
}

impl SignedScalar for f32 {
    #[inline]
    fn negated(self) -> Self {
        -self
    }
}

macro_rules! impl_integer_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            const ZERO: Self = 0;

            #[inline]
            fn plus(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
            #[inline]
            fn minus(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
            #[inline]
            fn times(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
            #[inline]
            fn over(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }
        }
    };
}

impl_integer_scalar!(i32);
impl_integer_scalar!(u32);

impl SignedScalar for i32 {
    #[inline]
    fn negated(self) -> Self {
        self.wrapping_neg()
    }
}

/// A two-component vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vector2<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
}

/// Vector of `f32`.
pub type Vector2f = Vector2<f32>;
/// Vector of `i32`.
pub type Vector2i = Vector2<i32>;
/// Vector of `u32`.
pub type Vector2u = Vector2<u32>;

impl<T: Scalar> Vector2<T> {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
    };

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Multiply component by component.
    pub fn component_wise_mul(self, rhs: Self) -> Self {
        Self::new(self.x.times(rhs.x), self.y.times(rhs.y))
    }

    /// Divide component by component.
    pub fn component_wise_div(self, rhs: Self) -> Self {
        Self::new(self.x.over(rhs.x), self.y.over(rhs.y))
    }
}

impl Vector2f {
    /// Build a vector from a length and a direction.
    pub fn from_polar(length: f32, angle: Angle) -> Self {
        let (sin, cos) = angle.as_radians().sin_cos();
        Self::new(length * cos, length * sin)
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length, avoiding the square root.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Dot product.
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(self, rhs: Self) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Unit vector in the same direction. The zero vector is returned as is.
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length > 0.0 {
            self / length
        } else {
            self
        }
    }

    /// The vector rotated by +90 degrees.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Signed angle from the X axis.
    pub fn angle(self) -> Angle {
        Angle::radians(self.y.atan2(self.x))
    }

    /// The vector rotated by an angle.
    pub fn rotated_by(self, angle: Angle) -> Self {
        let (sin, cos) = angle.as_radians().sin_cos();
        Self::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    /// Truncating conversion to an integer vector.
    pub fn as_i32(self) -> Vector2i {
        Vector2::new(self.x as i32, self.y as i32)
    }

    /// Truncating conversion to an unsigned vector.
    pub fn as_u32(self) -> Vector2u {
        Vector2::new(self.x as u32, self.y as u32)
    }
}

impl Vector2i {
    /// Conversion to a float vector.
    pub fn as_f32(self) -> Vector2f {
        Vector2::new(self.x as f32, self.y as f32)
    }

    /// Bit-preserving conversion to an unsigned vector.
    pub fn as_u32(self) -> Vector2u {
        Vector2::new(self.x as u32, self.y as u32)
    }
}

impl Vector2u {
    /// Conversion to a float vector.
    pub fn as_f32(self) -> Vector2f {
        Vector2::new(self.x as f32, self.y as f32)
    }

    /// Bit-preserving conversion to a signed vector.
    pub fn as_i32(self) -> Vector2i {
        Vector2::new(self.x as i32, self.y as i32)
    }
}

impl<T> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: SignedScalar> Neg for Vector2<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(self.x.negated(), self.y.negated())
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.plus(rhs.x), self.y.plus(rhs.y))
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.minus(rhs.x), self.y.minus(rhs.y))
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x.times(rhs), self.y.times(rhs))
    }
}

impl<T: Scalar> Div<T> for Vector2<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.x.over(rhs), self.y.over(rhs))
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vector2<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

/// A three-component vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vector3<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
}

/// 3D vector of `f32`.
pub type Vector3f = Vector3<f32>;
/// 3D vector of `i32`.
pub type Vector3i = Vector3<i32>;

impl<T: Scalar> Vector3<T> {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
        z: T::ZERO,
    };

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Multiply component by component.
    pub fn component_wise_mul(self, rhs: Self) -> Self {
        Self::new(self.x.times(rhs.x), self.y.times(rhs.y), self.z.times(rhs.z))
    }

    /// Divide component by component.
    pub fn component_wise_div(self, rhs: Self) -> Self {
        Self::new(self.x.over(rhs.x), self.y.over(rhs.y), self.z.over(rhs.z))
    }
}

impl Vector3f {
    /// Euclidean length.
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Dot product.
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Cross product.
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Unit vector in the same direction. The zero vector is returned as is.
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length > 0.0 {
            self / length
        } else {
            self
        }
    }

    /// Truncating conversion to an integer vector.
    pub fn as_i32(self) -> Vector3i {
        Vector3::new(self.x as i32, self.y as i32, self.z as i32)
    }
}

impl Vector3i {
    /// Conversion to a float vector.
    pub fn as_f32(self) -> Vector3f {
        Vector3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl<T> From<(T, T, T)> for Vector3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self { x, y, z }
    }
}

impl<T: SignedScalar> Neg for Vector3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(self.x.negated(), self.y.negated(), self.z.negated())
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.plus(rhs.x), self.y.plus(rhs.y), self.z.plus(rhs.z))
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.minus(rhs.x), self.y.minus(rhs.y), self.z.minus(rhs.z))
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x.times(rhs), self.y.times(rhs), self.z.times(rhs))
    }
}

impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.x.over(rhs), self.y.over(rhs), self.z.over(rhs))
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vector3<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

// Scalar on the left needs one impl per concrete type.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector2<$t>> for $t {
                type Output = Vector2<$t>;
                fn mul(self, rhs: Vector2<$t>) -> Vector2<$t> {
                    rhs * self
                }
            }

            impl Mul<Vector3<$t>> for $t {
                type Output = Vector3<$t>;
                fn mul(self, rhs: Vector3<$t>) -> Vector3<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, i32, u32);
