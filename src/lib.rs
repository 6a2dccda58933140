//! Two-dimensional point and circle value types.

pub mod common;
pub mod math;
pub mod shapes;

// Re-export key types for easier use
pub use common::{Result, ShapeError};
pub use math::{Point, SharedPoint};
pub use shapes::Circle;
