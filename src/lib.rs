//! Monte Carlo estimation of π, in parallel, at a build-time precision
//!
//! Sample points uniformly from the unit square. The quarter circle of
//! radius 1 covers π/4 of it:
//!
//! ```text
//!     area of quarter circle  = πr²/4 = π/4
//!     area of unit square     = 1² = 1
//! ```
//!
//! so the fraction of samples with `x² + y² <= 1` approaches π/4, and four
//! times that fraction approaches π.
//!
//! Trials are split across a fork-join worker pool. Each worker owns its
//! generator and hit counter; the only synchronization point is the final
//! sum of the counters, so the sampling loop is lock free.
//!
//! The precision of the sampling arithmetic is fixed at build time by
//! enabling exactly one of the `float16`, `float`, or `double` cargo
//! features; the build fails if none is enabled.
//!
//! # Example
//!
//! ```
//! use quadrant::{estimate_pi_with, Real};
//!
//! let est = estimate_pi_with::<Real>(10_000, 2, 7).unwrap();
//!
//! assert!(est.inside <= est.trials);
//! assert_eq!(est.trials, 10_000);
//! ```

pub mod kernel;
pub mod misc;
pub mod real;
pub mod seed;

pub use kernel::{
    estimate_pi, estimate_pi_with, KernelError, PiEstimate, DEFAULT_TRIALS,
};
pub use real::{Precision, Real};
