// THEORY:
// A `Point` is an integer pixel coordinate. It is the currency of the region
// layer (shapes test and enumerate points) and of the surface (points address
// pixels). Arithmetic with another point is exact; arithmetic with a scalar
// rounds back onto the integer grid.

use crate::core_modules::op::Negatable;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub type Coordinate = i32;

/// An integer 2D coordinate. `y` grows downwards, as in the pixel buffer.
///
/// - The `+ - *` operators follow plain `i32` overflow rules; `op` and the
///   `checked_*` methods report overflow instead.
/// - Scalar `*` and `/` saturate at the `Coordinate` range when rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl Point {
    pub const fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> Coordinate {
        self.x
    }

    pub fn y(&self) -> Coordinate {
        self.y
    }

    /// Negates both axes; `i32::MIN` wraps to itself.
    pub fn neg(&self) -> Self {
        Self::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }

    /// Negates both axes, `None` if either is `i32::MIN`.
    pub fn checked_neg(&self) -> Option<Point> {
        Some(Point::new(self.x.checked_neg()?, self.y.checked_neg()?))
    }

    /// Euclidean distance from the origin.
    pub fn magnitude(&self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        dx.hypot(dy)
    }

    /// Axis-wise integer division, `None` if either axis of `rhs` is zero or
    /// the quotient overflows (`i32::MIN / -1`).
    pub fn checked_div(&self, rhs: Point) -> Option<Point> {
        Some(Point::new(
            self.x.checked_div(rhs.x)?,
            self.y.checked_div(rhs.y)?,
        ))
    }

    /// Axis-wise integer remainder, `None` if either axis of `rhs` is zero or
    /// the remainder overflows.
    pub fn checked_rem(&self, rhs: Point) -> Option<Point> {
        Some(Point::new(
            self.x.checked_rem(rhs.x)?,
            self.y.checked_rem(rhs.y)?,
        ))
    }

    pub(crate) fn map(&self, f: impl Fn(Coordinate) -> Coordinate) -> Self {
        Self::new(f(self.x), f(self.y))
    }

    /// Fallible `map`; stops at the first axis error.
    pub(crate) fn try_map<E>(
        &self,
        f: impl Fn(Coordinate) -> Result<Coordinate, E>,
    ) -> Result<Self, E> {
        Ok(Self::new(f(self.x)?, f(self.y)?))
    }
}

/// Rounds a scalar result onto the pixel grid.
pub(crate) fn to_coordinate(value: f64) -> Coordinate {
    value.round() as Coordinate
}

impl Negatable for Point {
    fn negate(&self) -> Self {
        Point::neg(self)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Point {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        Point::new(self.x * rhs.x, self.y * rhs.y)
    }
}

/// The scalar is rounded first, then added to both axes.
impl Add<f64> for Point {
    type Output = Point;

    fn add(self, rhs: f64) -> Point {
        let offset = to_coordinate(rhs);
        self.map(|axis| axis + offset)
    }
}

impl Sub<f64> for Point {
    type Output = Point;

    fn sub(self, rhs: f64) -> Point {
        let offset = to_coordinate(rhs);
        self.map(|axis| axis - offset)
    }
}

/// Each scaled axis is rounded to the nearest integer.
impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        self.map(|axis| to_coordinate(axis as f64 * rhs))
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        self.map(|axis| to_coordinate(axis as f64 / rhs))
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::neg(&self)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.x, self.y)
    }
}

impl From<(Coordinate, Coordinate)> for Point {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Point::new(x, y)
    }
}
