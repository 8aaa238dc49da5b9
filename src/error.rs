//! Error types for the kernel

use thiserror::Error;

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

/// Errors the kernel can report
///
/// Both kinds are synchronous and local to the failing call; the kernel
/// performs no I/O, so nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Geometrically inconsistent construction input. Never silently
    /// clamped; the caller must supply valid geometry.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Distance from the body to its attracting focus collapsed to zero
    /// during `advance`, so the 1/distance rate is undefined. The tick
    /// is skipped and the orbit state left unchanged.
    #[error("degenerate orbit: body coincides with focus at proportion {proportion}")]
    DegenerateOrbit { proportion: f64 },
}
