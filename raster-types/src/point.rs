use core::ops::{Add, Mul, Sub};

/// Two dimensional point with a generic coordinate type.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    /// X coordinate.
    pub x: T,
    /// Y coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Creates a new point with the given x and y coordinates.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Point<f32> {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Linear interpolation between `self` (at `t = 0`) and `other`
    /// (at `t = 1`).
    #[inline(always)]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Reflection of `self` through `center`, i.e. `2 * center - self`.
    ///
    /// This is how smooth curve continuations derive their implicit
    /// control point.
    #[inline(always)]
    pub fn reflect(self, center: Self) -> Self {
        center * 2.0 - self
    }
}

impl<T> Add for Point<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T> Sub for Point<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T> Mul<T> for Point<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: T) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn add_sub() {
        assert_eq!(Point::new(1, 2) + Point::new(3, 4), Point::new(4, 6));
        assert_eq!(Point::new(1, 2) - Point::new(3, 4), Point::new(-2, -2));
    }

    #[test]
    fn scalar_mul() {
        assert_eq!(Point::new(1, 2) * 8, Point::new(8, 16));
        assert_eq!(Point::new(1.5f32, -2.0) * 2.0, Point::new(3.0, -4.0));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Point::new(10.0f32, 20.0);
        let b = Point::new(30.0f32, -20.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(20.0, 0.0));
    }

    #[test]
    fn reflect() {
        let control = Point::new(4.0f32, 6.0);
        let cursor = Point::new(5.0f32, 5.0);
        assert_eq!(control.reflect(cursor), Point::new(6.0, 4.0));
        // reflecting through itself is a no-op
        assert_eq!(cursor.reflect(cursor), cursor);
    }
}
