//! Axis-aligned rectangles.

use crate::vector::{Scalar, Vector2};

/// An axis-aligned rectangle given by its top-left corner and size.
///
/// Width and height may be negative; the covered area is then measured from
/// the opposite edge.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    /// Left coordinate.
    pub left: T,
    /// Top coordinate.
    pub top: T,
    /// Width.
    pub width: T,
    /// Height.
    pub height: T,
}

/// Rectangle with `f32` coordinates.
pub type FloatRect = Rect<f32>;
/// Rectangle with `i32` coordinates.
pub type IntRect = Rect<i32>;

fn min<T: Scalar>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

fn max<T: Scalar>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}

impl<T: Scalar> Rect<T> {
    /// Create a rectangle from its coordinates.
    pub const fn new(left: T, top: T, width: T, height: T) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle from a position and a size.
    pub fn from_vecs(position: Vector2<T>, size: Vector2<T>) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Top-left corner.
    pub fn position(&self) -> Vector2<T> {
        Vector2::new(self.left, self.top)
    }

    /// Size.
    pub fn size(&self) -> Vector2<T> {
        Vector2::new(self.width, self.height)
    }

    // (min_x, max_x, min_y, max_y)
    fn bounds(&self) -> (T, T, T, T) {
        let right = self.left.plus(self.width);
        let bottom = self.top.plus(self.height);
        (
            min(self.left, right),
            max(self.left, right),
            min(self.top, bottom),
            max(self.top, bottom),
        )
    }

    /// Check if a point lies inside. The right and bottom edges are excluded.
    pub fn contains(&self, point: Vector2<T>) -> bool {
        let (min_x, max_x, min_y, max_y) = self.bounds();
        point.x >= min_x && point.x < max_x && point.y >= min_y && point.y < max_y
    }

    /// Overlapping area of two rectangles, if any.
    pub fn intersection(&self, other: &Rect<T>) -> Option<Rect<T>> {
        let (a_min_x, a_max_x, a_min_y, a_max_y) = self.bounds();
        let (b_min_x, b_max_x, b_min_y, b_max_y) = other.bounds();

        let left = max(a_min_x, b_min_x);
        let top = max(a_min_y, b_min_y);
        let right = min(a_max_x, b_max_x);
        let bottom = min(a_max_y, b_max_y);

        if left < right && top < bottom {
            Some(Rect::new(left, top, right.minus(left), bottom.minus(top)))
        } else {
            None
        }
    }
}

impl FloatRect {
    /// Center point.
    pub fn center(&self) -> Vector2<f32> {
        Vector2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

impl IntRect {
    /// Conversion to a float rectangle.
    pub fn as_f32(&self) -> FloatRect {
        Rect::new(
            self.left as f32,
            self.top as f32,
            self.width as f32,
            self.height as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vector2f, Vector2i};

    #[test]
    fn test_contains_half_open() {
        let r = IntRect::new(0, 0, 10, 5);
        assert!(r.contains(Vector2i::new(0, 0)));
        assert!(r.contains(Vector2i::new(9, 4)));
        assert!(!r.contains(Vector2i::new(10, 4)));
        assert!(!r.contains(Vector2i::new(9, 5)));
    }

    #[test]
    fn test_contains_negative_size() {
        let r = FloatRect::new(10.0, 10.0, -5.0, -5.0);
        assert!(r.contains(Vector2f::new(6.0, 6.0)));
        assert!(!r.contains(Vector2f::new(11.0, 6.0)));
    }

    #[test]
    fn test_intersection() {
        let a = IntRect::new(0, 0, 10, 10);
        let b = IntRect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Some(IntRect::new(5, 5, 5, 5)));
        assert_eq!(a.intersection(&IntRect::new(10, 0, 5, 5)), None);
    }

    #[test]
    fn test_accessors() {
        let r = FloatRect::from_vecs(Vector2f::new(1.0, 2.0), Vector2f::new(4.0, 6.0));
        assert_eq!(r.position(), Vector2f::new(1.0, 2.0));
        assert_eq!(r.size(), Vector2f::new(4.0, 6.0));
        assert_eq!(r.center(), Vector2f::new(3.0, 5.0));
        assert_eq!(IntRect::new(1, 2, 3, 4).as_f32(), FloatRect::new(1.0, 2.0, 3.0, 4.0));
    }
}
