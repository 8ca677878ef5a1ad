// THEORY:
// `op` is the arithmetic layer that sits on top of the value types. A caller
// holding two operands of unknown kind (a color read from a surface, a point
// from a region walk, a plain number typed by a user) asks for `add`, `sub`,
// `mul`, `div`, `rem`, `neg` or `not` and gets back a new value or an error.
//
// Dispatch:
// - Operands are wrapped in the closed `Value` enum, so dispatch is a single
//   exhaustive `match` on the `(lhs, rhs)` pair per operator family. There is
//   no runtime type probing and every pairing is visible in one place.
// - Priority is Color, then Point, then scalar: a Color next to a scalar is
//   color arithmetic, a Point next to a scalar is point arithmetic, two
//   scalars are plain `f64` arithmetic.
// - Everything else (a Color next to a Point, any Bool in arithmetic) is an
//   `InvalidOperand` error.
//
// Spaces:
// - add/sub between colors, and every color-scalar pairing, work in raw
//   0..255 space. mul/div between two colors work in normalized 0..1 space and
//   keep the left alpha. The asymmetry is intentional and preserved.
// - Scalars broadcast to every color channel (never alpha) or point axis.
//   Operand order is kept: `sub(10, c)` is `10 - channel`.
// - Point results are integral. Point-scalar add/sub round the scalar first;
//   mul/div round each scaled axis.

use crate::core_modules::color::Color;
use crate::core_modules::error::{RasterError, Result};
use crate::core_modules::point::{Coordinate, Point, to_coordinate};
use log::trace;
use std::fmt;

pub type Scalar = f64;

/// Values that know how to produce their own negation.
pub trait Negatable {
    fn negate(&self) -> Self;
}

/// Runtime kind of a `Value`, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Color,
    Point,
    Scalar,
    Bool,
}

/// An operand of the arithmetic layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Color(Color),
    Point(Point),
    Scalar(Scalar),
    Bool(bool),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Color(_) => Kind::Color,
            Value::Point(_) => Kind::Point,
            Value::Scalar(_) => Kind::Scalar,
            Value::Bool(_) => Kind::Bool,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Value::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn as_point(&self) -> Option<Point> {
        match self {
            Value::Point(point) => Some(*point),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Value::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

impl From<Point> for Value {
    fn from(point: Point) -> Self {
        Value::Point(point)
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<i32> for Value {
    fn from(scalar: i32) -> Self {
        Value::Scalar(scalar as Scalar)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Color(color) => color.fmt(f),
            Value::Point(point) => point.fmt(f),
            Value::Scalar(scalar) => scalar.fmt(f),
            Value::Bool(flag) => flag.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
            BinaryOp::Rem => "rem",
        }
    }

    fn division_by_zero(self) -> RasterError {
        RasterError::DivisionByZero { op: self.name() }
    }

    /// Raw-space arithmetic on one channel or scalar. `rem` works on the
    /// rounded operands and refuses a zero divisor.
    fn scalar(self, lhs: Scalar, rhs: Scalar) -> Result<Scalar> {
        Ok(match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Rem => {
                let divisor = rhs.round();
                if divisor == 0.0 {
                    return Err(self.division_by_zero());
                }
                lhs.round() % divisor
            }
        })
    }

    fn overflow(self) -> RasterError {
        RasterError::Overflow { op: self.name() }
    }

    /// Integer arithmetic on one point axis. A zero divisor and a result
    /// outside the `Coordinate` range are reported separately.
    fn axis(self, lhs: Coordinate, rhs: Coordinate) -> Result<Coordinate> {
        let result = match self {
            BinaryOp::Add => lhs.checked_add(rhs),
            BinaryOp::Sub => lhs.checked_sub(rhs),
            BinaryOp::Mul => lhs.checked_mul(rhs),
            BinaryOp::Div | BinaryOp::Rem if rhs == 0 => {
                return Err(self.division_by_zero());
            }
            BinaryOp::Div => lhs.checked_div(rhs),
            BinaryOp::Rem => lhs.checked_rem(rhs),
        };
        result.ok_or(self.overflow())
    }
}

fn color_with_color(op: BinaryOp, lhs: Color, rhs: Color) -> Result<Color> {
    match op {
        BinaryOp::Add => Ok(lhs + rhs),
        BinaryOp::Sub => Ok(lhs - rhs),
        BinaryOp::Mul => Ok(lhs * rhs),
        BinaryOp::Div => Ok(lhs / rhs),
        BinaryOp::Rem => lhs.try_zip_rgb(&rhs, |l, r| op.scalar(l, r)),
    }
}

fn point_with_scalar(op: BinaryOp, point: Point, scalar: Scalar) -> Result<Point> {
    match op {
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Rem => {
            let rounded = to_coordinate(scalar);
            point.try_map(|axis| op.axis(axis, rounded))
        }
        BinaryOp::Mul => Ok(point * scalar),
        BinaryOp::Div if scalar == 0.0 => Err(op.division_by_zero()),
        BinaryOp::Div => Ok(point / scalar),
    }
}

fn scalar_with_point(op: BinaryOp, scalar: Scalar, point: Point) -> Result<Point> {
    match op {
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Rem => {
            let rounded = to_coordinate(scalar);
            point.try_map(|axis| op.axis(rounded, axis))
        }
        BinaryOp::Mul => Ok(point * scalar),
        BinaryOp::Div => point.try_map(|axis| {
            if axis == 0 {
                return Err(op.division_by_zero());
            }
            Ok(to_coordinate(scalar / axis as Scalar))
        }),
    }
}

fn binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value> {
    match (lhs, rhs) {
        (Value::Color(l), Value::Color(r)) => color_with_color(op, l, r).map(Value::Color),
        (Value::Color(c), Value::Scalar(s)) => {
            c.try_map_rgb(|channel| op.scalar(channel, s)).map(Value::Color)
        }
        (Value::Scalar(s), Value::Color(c)) => {
            c.try_map_rgb(|channel| op.scalar(s, channel)).map(Value::Color)
        }
        (Value::Point(l), Value::Point(r)) => {
            let x = op.axis(l.x, r.x)?;
            let y = op.axis(l.y, r.y)?;
            Ok(Value::Point(Point::new(x, y)))
        }
        (Value::Point(p), Value::Scalar(s)) => point_with_scalar(op, p, s).map(Value::Point),
        (Value::Scalar(s), Value::Point(p)) => scalar_with_point(op, s, p).map(Value::Point),
        (Value::Scalar(l), Value::Scalar(r)) => {
            let result = match op {
                BinaryOp::Rem => l % r,
                _ => op.scalar(l, r)?,
            };
            Ok(Value::Scalar(result))
        }
        (Value::Color(_), Value::Point(_) | Value::Bool(_))
        | (Value::Point(_), Value::Color(_) | Value::Bool(_))
        | (Value::Scalar(_), Value::Bool(_))
        | (Value::Bool(_), _) => {
            trace!("no {} rule for {:?} and {:?}", op.name(), lhs.kind(), rhs.kind());
            Err(RasterError::InvalidOperand {
                op: op.name(),
                lhs: lhs.kind(),
                rhs: Some(rhs.kind()),
            })
        }
    }
}

// Point results that leave the `Coordinate` range fail with `Overflow`.

/// `lhs + rhs`. Raw space for colors; alpha comes from the Color operand.
pub fn add(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Result<Value> {
    binary(BinaryOp::Add, lhs.into(), rhs.into())
}

/// `lhs - rhs`. Raw space for colors; alpha comes from the Color operand.
pub fn sub(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Result<Value> {
    binary(BinaryOp::Sub, lhs.into(), rhs.into())
}

/// `lhs * rhs`. Normalized space between two colors, raw space otherwise.
pub fn mul(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Result<Value> {
    binary(BinaryOp::Mul, lhs.into(), rhs.into())
}

/// `lhs / rhs`. Normalized space between two colors, raw space otherwise.
/// Integral point results reject a zero divisor; scalars follow IEEE 754.
pub fn div(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Result<Value> {
    binary(BinaryOp::Div, lhs.into(), rhs.into())
}

/// `lhs % rhs` on rounded channels or axes. Two scalars use `f64` remainder.
pub fn rem(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Result<Value> {
    binary(BinaryOp::Rem, lhs.into(), rhs.into())
}

pub fn neg(value: impl Into<Value>) -> Result<Value> {
    match value.into() {
        Value::Color(color) => Ok(Value::Color(color.negate())),
        Value::Point(point) => point
            .checked_neg()
            .map(Value::Point)
            .ok_or(RasterError::Overflow { op: "neg" }),
        Value::Scalar(scalar) => Ok(Value::Scalar(-scalar)),
        other @ Value::Bool(_) => Err(unary_error("neg", other)),
    }
}

/// Logical negation. A scalar counts as true when non-zero.
pub fn not(value: impl Into<Value>) -> Result<Value> {
    match value.into() {
        Value::Bool(flag) => Ok(Value::Bool(!flag)),
        Value::Scalar(scalar) => Ok(Value::Bool(scalar == 0.0)),
        other @ (Value::Color(_) | Value::Point(_)) => Err(unary_error("not", other)),
    }
}

fn unary_error(op: &'static str, value: Value) -> RasterError {
    trace!("no {op} rule for {:?}", value.kind());
    RasterError::InvalidOperand {
        op,
        lhs: value.kind(),
        rhs: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(value: Result<Value>) -> Color {
        value
            .expect("operation succeeds")
            .as_color()
            .expect("color result")
    }

    #[test]
    fn color_add_keeps_left_alpha() {
        let sum = add(Color::rgba(10.0, 20.0, 30.0, 255.0), Color::rgba(5.0, 5.0, 5.0, 0.0));
        assert_eq!(sum, Ok(Value::Color(Color::rgba(15.0, 25.0, 35.0, 255.0))));
    }

    #[test]
    fn color_mul_is_normalized() {
        let product = color(mul(Color::rgb(255.0, 255.0, 255.0), Color::rgb(128.0, 128.0, 128.0)));
        assert!((product.r() - 128.0).abs() < 1e-9);
        assert!((product.a() - 255.0).abs() < 1e-9);
    }

    #[test]
    fn scalar_broadcast_keeps_operand_order() {
        let c = Color::rgba(10.0, 20.0, 30.0, 40.0);
        assert_eq!(color(sub(c, 5.0)), Color::rgba(5.0, 15.0, 25.0, 40.0));
        assert_eq!(color(sub(100.0, c)), Color::rgba(90.0, 80.0, 70.0, 40.0));
        assert_eq!(color(mul(2, c)), Color::rgba(20.0, 40.0, 60.0, 40.0));
        assert_eq!(color(div(c, 10.0)), Color::rgba(1.0, 2.0, 3.0, 40.0));
    }

    #[test]
    fn point_broadcast_is_order_independent_for_add() {
        let expected = Ok(Value::Point(Point::new(4, 5)));
        assert_eq!(add(Point::new(1, 2), 3), expected);
        assert_eq!(add(3, Point::new(1, 2)), expected);
        assert_eq!(sub(10, Point::new(1, 2)), Ok(Value::Point(Point::new(9, 8))));
    }

    #[test]
    fn point_division_by_zero_is_an_error() {
        let zero = Err(RasterError::DivisionByZero { op: "div" });
        assert_eq!(div(Point::new(4, 4), Point::new(2, 0)), zero);
        assert_eq!(div(Point::new(4, 4), 0.0), zero);
        assert_eq!(div(8.0, Point::new(0, 2)), zero);
        assert_eq!(div(8.0, Point::new(4, 3)), Ok(Value::Point(Point::new(2, 3))));
    }

    #[test]
    fn zero_divisor_and_overflow_are_distinct() {
        let low = Point::new(i32::MIN, 6);
        assert_eq!(
            div(low, Point::new(0, -1)),
            Err(RasterError::DivisionByZero { op: "div" })
        );
        assert_eq!(
            div(low, Point::new(-1, 2)),
            Err(RasterError::Overflow { op: "div" })
        );
        assert_eq!(
            sub(0, Point::new(i32::MIN, 0)),
            Err(RasterError::Overflow { op: "sub" })
        );
        assert_eq!(neg(Point::new(i32::MAX, 0)), Ok(Value::Point(Point::new(-i32::MAX, 0))));
    }

    #[test]
    fn scalars_use_plain_arithmetic() {
        assert_eq!(add(1.5, 2.0), Ok(Value::Scalar(3.5)));
        assert_eq!(div(1.0, 4.0), Ok(Value::Scalar(0.25)));
        assert_eq!(rem(7.5, 2.0), Ok(Value::Scalar(1.5)));
        assert_eq!(div(1.0, 0.0), Ok(Value::Scalar(f64::INFINITY)));
    }

    #[test]
    fn rem_rounds_color_channels() {
        let c = Color::rgba(10.4, 20.0, 255.0, 7.0);
        assert_eq!(color(rem(c, 3.0)), Color::rgba(1.0, 2.0, 0.0, 7.0));
        assert_eq!(rem(c, 0.2), Err(RasterError::DivisionByZero { op: "rem" }));
    }

    #[test]
    fn mismatched_kinds_are_invalid() {
        assert_eq!(
            add(Color::grey(1.0), Point::new(1, 1)),
            Err(RasterError::InvalidOperand {
                op: "add",
                lhs: Kind::Color,
                rhs: Some(Kind::Point),
            })
        );
        assert!(mul(true, 2.0).is_err());
        assert!(sub(2.0, false).is_err());
        assert!(div(Point::new(1, 1), Color::grey(1.0)).is_err());
    }

    #[test]
    fn neg_dispatches_on_kind() {
        assert_eq!(
            neg(Color::rgba(0.0, 55.0, 255.0, 9.0)),
            Ok(Value::Color(Color::rgba(255.0, 200.0, 0.0, 9.0)))
        );
        assert_eq!(neg(Point::new(1, -2)), Ok(Value::Point(Point::new(-1, 2))));
        assert_eq!(neg(2.5), Ok(Value::Scalar(-2.5)));
        assert_eq!(
            neg(true),
            Err(RasterError::InvalidOperand {
                op: "neg",
                lhs: Kind::Bool,
                rhs: None,
            })
        );
    }

    #[test]
    fn not_accepts_booleans_and_scalars() {
        assert_eq!(not(true), Ok(Value::Bool(false)));
        assert_eq!(not(0.0), Ok(Value::Bool(true)));
        assert_eq!(not(3), Ok(Value::Bool(false)));
        assert!(not(Point::new(0, 0)).is_err());
        assert!(not(Color::grey(0.0)).is_err());
    }
}
