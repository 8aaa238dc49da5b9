//! Ellipse geometry
//!
//! Everything here is pure and immutable after construction:
//! - No rendering or platform dependencies
//! - All angles in radians
//! - Parameters wrap via Euclidean modulo, never clamp

pub mod ellipse;
pub mod sweep;

pub use ellipse::Ellipse;
pub use sweep::PartialArc;
