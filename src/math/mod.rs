pub mod point;
pub mod shared;

pub use point::Point;
pub use shared::SharedPoint;
