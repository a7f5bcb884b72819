//! Saturating nonlinearities shared by the ladder models.
//!
//! Every implementation must be odd and monotonic with `f(0) = 0`, unit slope
//! at the origin, and `|f(x)| < 1` for all finite `x`. The stability
//! behavior of the filters (in particular the k = 4 oscillation threshold)
//! assumes exactly that shape, so any replacement curve has to honor the same
//! contract.

/// A memoryless saturating transfer curve, injected into a filter at
/// construction time.
pub trait Saturator: Send + Sync {
    fn apply(&self, x: f64) -> f64;
}

/// Allow boxed saturators wherever a concrete one is expected.
impl<S: Saturator + ?Sized> Saturator for Box<S> {
    #[inline]
    fn apply(&self, x: f64) -> f64 {
        (**self).apply(x)
    }
}

/// Plain hyperbolic tangent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tanh;

impl Saturator for Tanh {
    #[inline]
    fn apply(&self, x: f64) -> f64 {
        x.tanh()
    }
}

/// Algebraic stand-in `x / sqrt(1 + x^2)`: same qualitative shape as tanh
/// with no transcendental call.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvSqrt;

impl Saturator for InvSqrt {
    #[inline]
    fn apply(&self, x: f64) -> f64 {
        x / (1.0 + x * x).sqrt()
    }
}
