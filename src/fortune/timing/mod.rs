//! Zero-cost timing instrumentation for the sweep.
//!
//! When the `timing` feature is enabled, this module collects coarse phase
//! timings and reports them through `log` at info level.
//!
//! When disabled, all types become zero-sized and all methods compile away.

#[cfg(feature = "timing")]
mod real;
#[cfg(not(feature = "timing"))]
mod stub;

#[cfg(feature = "timing")]
pub use real::*;
#[cfg(not(feature = "timing"))]
pub use stub::*;
