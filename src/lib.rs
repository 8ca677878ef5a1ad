// THEORY:
// This file is the main entry point for the `raster_kit` library crate. It
// exports the value types (`Color`, `Point`, `Kernel`), the pixel regions
// (`Rect`, `Circle`, `Line`, `Polygon` behind the `Region` trait), the
// `Surface` that reads and writes a caller-owned RGBA buffer, and the `op`
// dispatcher that does arithmetic on operands of mixed kinds.
//
// The modules under `core_modules` stay public for callers that need the
// iterator types or the channel aliases; everything a typical caller needs is
// re-exported here.

pub mod core_modules;

pub use core_modules::color::Color;
pub use core_modules::error::{RasterError, Result};
pub use core_modules::kernel::{Kernel, KernelIndex};
pub use core_modules::op::{Kind, Negatable, Value, add, div, mul, neg, not, rem, sub};
pub use core_modules::point::Point;
pub use core_modules::region::{Circle, Line, Polygon, Rect, Region, Shape};
pub use core_modules::surface::{Sample, Surface};
