// THEORY:
// A `Kernel` is a fixed square matrix of weights stored row-major in a flat
// vector. It is a passive container: this crate builds, indexes and iterates
// kernels, and a convolution or filter operation outside the crate consumes
// them. Squareness is checked once at construction so every later index
// computation can rely on `width == height`.

use crate::core_modules::error::{RasterError, Result};
use crate::core_modules::point::Point;

pub type Weight = f64;

#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: usize,
    elements: Vec<Weight>,
}

/// Anything that can address a kernel element: a flat index or a `Point`.
pub trait KernelIndex {
    fn flat_index(&self, width: usize) -> Option<usize>;
}

impl KernelIndex for usize {
    fn flat_index(&self, _width: usize) -> Option<usize> {
        Some(*self)
    }
}

impl KernelIndex for Point {
    fn flat_index(&self, width: usize) -> Option<usize> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        if x >= width {
            return None;
        }
        Some(y * width + x)
    }
}

impl Kernel {
    /// Builds a kernel from row-major weights.
    /// Fails with `InvalidDimension` unless the length is a non-zero perfect square.
    pub fn new(elements: Vec<Weight>) -> Result<Self> {
        let len = elements.len();
        let width = len.isqrt();
        if len == 0 || width * width != len {
            return Err(RasterError::InvalidDimension { len });
        }
        Ok(Self { width, elements })
    }

    /// A `width`×`width` kernel with every weight set to `value`.
    pub fn filled(width: usize, value: Weight) -> Result<Self> {
        Self::new(vec![value; width * width])
    }

    /// A `(2r+1)`×`(2r+1)` blur kernel whose weights double with each step
    /// towards the center, on both axes. Weights are powers of two in `f64`,
    /// exact up to 2^1023; past that they become infinite.
    pub fn gauss(radius: usize) -> Self {
        let width = radius * 2 + 1;
        let distance_to_edge = |i: usize| if i > radius { width - i - 1 } else { i };
        let elements = (0..width)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let exponent = distance_to_edge(x) + distance_to_edge(y);
                (2.0 as Weight).powi(i32::try_from(exponent).unwrap_or(i32::MAX))
            })
            .collect();
        Self { width, elements }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at a flat index or at `Point(x, y)` (row-major), `None` when out of range.
    pub fn at<I: KernelIndex>(&self, index: I) -> Option<Weight> {
        let i = index.flat_index(self.width)?;
        self.elements.get(i).copied()
    }

    /// Exact membership test, no tolerance.
    pub fn contains(&self, value: Weight) -> bool {
        self.elements.iter().any(|&element| element == value)
    }

    /// Weights in their original row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Weight> + '_ {
        self.elements.iter().copied()
    }

    pub fn sum(&self) -> Weight {
        self.elements.iter().sum()
    }

    pub fn as_slice(&self) -> &[Weight] {
        &self.elements
    }
}

impl TryFrom<Vec<Weight>> for Kernel {
    type Error = RasterError;

    fn try_from(elements: Vec<Weight>) -> Result<Self> {
        Kernel::new(elements)
    }
}
