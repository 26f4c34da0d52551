//! Durations with microsecond resolution.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use std::time::Duration;

/// A span of time, stored as a signed count of microseconds.
///
/// Integer arithmetic is exact and wraps on overflow, like the integer
/// vectors. Dividing by a zero integer panics. Multiplying or dividing by a
/// float goes through seconds and carries `f32` rounding.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    microseconds: i64,
}

impl Time {
    /// The zero duration.
    pub const ZERO: Time = Time { microseconds: 0 };

    /// Build a time from seconds. Truncates toward zero to whole microseconds.
    pub fn seconds(amount: f32) -> Time {
        Time::microseconds((amount * 1_000_000.0) as i64)
    }

    /// Build a time from milliseconds.
    pub const fn milliseconds(amount: i32) -> Time {
        Time::microseconds(amount as i64 * 1000)
    }

    /// Build a time from microseconds.
    pub const fn microseconds(amount: i64) -> Time {
        Time {
            microseconds: amount,
        }
    }

    /// Value in seconds.
    pub fn as_seconds(self) -> f32 {
        self.microseconds as f32 / 1_000_000.0
    }

    /// Value in milliseconds, truncated.
    pub const fn as_milliseconds(self) -> i32 {
        (self.microseconds / 1000) as i32
    }

    /// Value in microseconds.
    pub const fn as_microseconds(self) -> i64 {
        self.microseconds
    }

    /// Convert to a `Duration`. `None` for negative times.
    pub fn to_duration(self) -> Option<Duration> {
        u64::try_from(self.microseconds)
            .ok()
            .map(Duration::from_micros)
    }
}

impl From<Duration> for Time {
    /// Saturates at `i64::MAX` microseconds.
    fn from(duration: Duration) -> Self {
        Time::microseconds(i64::try_from(duration.as_micros()).unwrap_or(i64::MAX))
    }
}

impl Neg for Time {
    type Output = Time;
    fn neg(self) -> Time {
        Time::microseconds(self.microseconds.wrapping_neg())
    }
}

impl Add for Time {
    type Output = Time;
    fn add(self, rhs: Time) -> Time {
        Time::microseconds(self.microseconds.wrapping_add(rhs.microseconds))
    }
}

impl Sub for Time {
    type Output = Time;
    fn sub(self, rhs: Time) -> Time {
        Time::microseconds(self.microseconds.wrapping_sub(rhs.microseconds))
    }
}

impl Mul<f32> for Time {
    type Output = Time;
    fn mul(self, rhs: f32) -> Time {
        Time::seconds(self.as_seconds() * rhs)
    }
}

impl Mul<i64> for Time {
    type Output = Time;
    fn mul(self, rhs: i64) -> Time {
        Time::microseconds(self.microseconds.wrapping_mul(rhs))
    }
}

impl Mul<Time> for f32 {
    type Output = Time;
    fn mul(self, rhs: Time) -> Time {
        rhs * self
    }
}

impl Mul<Time> for i64 {
    type Output = Time;
    fn mul(self, rhs: Time) -> Time {
        rhs * self
    }
}

impl Div<f32> for Time {
    type Output = Time;
    fn div(self, rhs: f32) -> Time {
        Time::seconds(self.as_seconds() / rhs)
    }
}

impl Div<i64> for Time {
    type Output = Time;
    fn div(self, rhs: i64) -> Time {
        Time::microseconds(self.microseconds.wrapping_div(rhs))
    }
}

impl Div for Time {
    type Output = f32;
    fn div(self, rhs: Time) -> f32 {
        self.as_seconds() / rhs.as_seconds()
    }
}

impl Rem for Time {
    type Output = Time;
    /// Truncating remainder: the result has the sign of `self`.
    fn rem(self, rhs: Time) -> Time {
        Time::microseconds(self.microseconds.wrapping_rem(rhs.microseconds))
    }
}

impl AddAssign for Time {
    fn add_assign(&mut self, rhs: Time) {
        *self = *self + rhs;
    }
}

impl SubAssign for Time {
    fn sub_assign(&mut self, rhs: Time) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Time {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl MulAssign<i64> for Time {
    fn mul_assign(&mut self, rhs: i64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Time {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl DivAssign<i64> for Time {
    fn div_assign(&mut self, rhs: i64) {
        *self = *self / rhs;
    }
}

impl RemAssign for Time {
    fn rem_assign(&mut self, rhs: Time) {
        *self = *self % rhs;
    }
}
