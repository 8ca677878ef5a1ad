// THEORY:
// Every failure in this crate is synchronous and local: a malformed kernel, a
// pixel read past the edge of a buffer, or an arithmetic request on operands
// that have no meaning together. None of them can be retried, so there is a
// single error enum and every fallible operation returns it directly to the
// caller.

use crate::core_modules::op::Kind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RasterError {
    /// A kernel was built from a number of weights with no integer square root.
    #[error("kernel of {len} elements is not square")]
    InvalidDimension { len: usize },

    #[error("point ({x}, {y}) is outside of a {width}x{height} surface")]
    IndexOutOfRange {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("buffer holds {actual} samples, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// `rhs` is `None` for the unary operators.
    #[error("invalid operand for {op}: {lhs:?} and {rhs:?}")]
    InvalidOperand {
        op: &'static str,
        lhs: Kind,
        rhs: Option<Kind>,
    },

    #[error("division by zero in {op}")]
    DivisionByZero { op: &'static str },

    /// An integer point result does not fit in a `Coordinate`.
    #[error("coordinate overflow in {op}")]
    Overflow { op: &'static str },
}
