pub mod color;
pub mod error;
pub mod kernel;
pub mod op;
pub mod point;
pub mod region;
pub mod surface;
