//! The numerical core: signal generators, three nonlinear ladder filter
//! discretizations, and the decimator that undoes oversampling.
//!
//! Everything here is whole-signal and `f64`: each stage consumes a complete
//! sequence and returns a fresh one, so stages never alias each other's
//! buffers and filter state never outlives a single `process` call.

/// Explicit cascaded-integrator ladder with one-sample-delayed feedback.
pub mod cascade;
/// Half-band FIR decimator.
pub mod decimate;
/// Driving signals and cutoff-coefficient sequences.
pub mod generator;
/// Fixed-size matrices and the scaling-and-squaring matrix exponential.
pub mod matrix;
/// Saturating nonlinearities shared by the ladder models.
pub mod saturation;
/// Matrix-exponential state-space ladder.
pub mod statespace;
/// Zero-delay-feedback trapezoidal ladder.
pub mod tpt;
