//! RGBA colors.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// An 8-bit per channel RGBA color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (opacity).
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Opaque yellow.
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    /// Opaque magenta.
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    /// Opaque cyan.
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque color from RGB.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::rgba(r, g, b, 255)
    }

    /// Color from RGBA.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Unpack from `0xRRGGBBAA`.
    pub const fn from_u32(packed: u32) -> Color {
        Color::rgba(
            (packed >> 24) as u8,
            (packed >> 16) as u8,
            (packed >> 8) as u8,
            packed as u8,
        )
    }

    /// Pack into `0xRRGGBBAA`.
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Channel-wise addition, clamped to 255.
impl Add for Color {
    type Output = Color;
    fn add(self, rhs: Color) -> Color {
        Color::rgba(
            self.r.saturating_add(rhs.r),
            self.g.saturating_add(rhs.g),
            self.b.saturating_add(rhs.b),
            self.a.saturating_add(rhs.a),
        )
    }
}

/// Channel-wise subtraction, clamped to 0.
impl Sub for Color {
    type Output = Color;
    fn sub(self, rhs: Color) -> Color {
        Color::rgba(
            self.r.saturating_sub(rhs.r),
            self.g.saturating_sub(rhs.g),
            self.b.saturating_sub(rhs.b),
            self.a.saturating_sub(rhs.a),
        )
    }
}

/// Channel-wise modulation: `a * b / 255`.
impl Mul for Color {
    type Output = Color;
    fn mul(self, rhs: Color) -> Color {
        let modulate = |l: u8, r: u8| (u16::from(l) * u16::from(r) / 255) as u8;
        Color::rgba(
            modulate(self.r, rhs.r),
            modulate(self.g, rhs.g),
            modulate(self.b, rhs.b),
            modulate(self.a, rhs.a),
        )
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl SubAssign for Color {
    fn sub_assign(&mut self, rhs: Color) {
        *self = *self - rhs;
    }
}

impl MulAssign for Color {
    fn mul_assign(&mut self, rhs: Color) {
        *self = *self * rhs;
    }
}
