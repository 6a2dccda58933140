pub mod circle;

// Re-export the specific shape types
pub use circle::Circle;
