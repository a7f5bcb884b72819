//! Zero-delay-feedback trapezoidal ladder ("TPT").
//!
//! Four cascaded nonlinear one-pole integrators with instantaneous
//! (same-sample) resonance feedback. The implicit per-sample system is solved
//! in closed form by successive substitution, not iteratively: the companding
//! gain of each stage is expressed through `tanh(x)/x`, the stages are
//! resolved in reverse order, and the final output drops out of a single
//! linear combination. Derivation after mystran (Teemu Voipio),
//! kvraudio forum topic 349859.

use crate::error::{DspError, Result};

/// `tanh(x)/x` with the removable singularity at zero eliminated, evaluated
/// through a rational approximation that stays accurate over the filter's
/// operating range.
#[inline]
pub fn tanh_xdx(x: f64) -> f64 {
    let a = x * x;
    ((a + 105.0) * a + 945.0) / ((15.0 * a + 420.0) * a + 945.0)
}

pub struct TptLadder {
    resonance: f64,
    /// One integrator state per pole.
    s: [f64; 4],
    /// Previous raw input, for the trapezoidal input average.
    z1: f64,
}

impl TptLadder {
    pub fn new(resonance: f64) -> Self {
        Self {
            resonance,
            s: [0.0; 4],
            z1: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.s = [0.0; 4];
        self.z1 = 0.0;
    }

    /// Run the filter over a whole signal. State starts from zero on every
    /// call; the output has exactly the input's length.
    pub fn process(&mut self, signal: &[f64], cutoff: &[f64]) -> Result<Vec<f64>> {
        if signal.len() != cutoff.len() {
            return Err(DspError::LengthMismatch {
                signal: signal.len(),
                cutoff: cutoff.len(),
            });
        }
        self.reset();

        let r = self.resonance;
        let mut out = Vec::with_capacity(signal.len());
        for (&xin, &a) in signal.iter().zip(cutoff) {
            // Pre-warped trapezoidal coefficient.
            let f = (a * 0.5).tan();
            // Trapezoidal rule averages the current and previous input.
            let ih = 0.5 * (xin + self.z1);
            self.z1 = xin;

            let t0 = tanh_xdx(ih - r * self.s[3]);
            let t1 = tanh_xdx(self.s[0]);
            let t2 = tanh_xdx(self.s[1]);
            let t3 = tanh_xdx(self.s[2]);
            let t4 = tanh_xdx(self.s[3]);

            // Reverse-order substitution: each stage gain feeds the one
            // before it, which turns the implicit loop into one pass.
            let g0 = 1.0 / (1.0 + f * t1);
            let g1 = 1.0 / (1.0 + f * t2);
            let g2 = 1.0 / (1.0 + f * t3);
            let g3 = 1.0 / (1.0 + f * t4);
            let f3 = f * t3 * g3;
            let f2 = f * t2 * g2 * f3;
            let f1 = f * t1 * g1 * f2;
            let f0 = f * t0 * g0 * f1;

            let y3 = (g3 * self.s[3]
                + f3 * g2 * self.s[2]
                + f2 * g1 * self.s[1]
                + f1 * g0 * self.s[0]
                + f0 * xin)
                / (1.0 + r * f0);

            let xx = t0 * (xin - r * y3);
            let y0 = t1 * g0 * (self.s[0] + f * xx);
            let y1 = t2 * g1 * (self.s[1] + f * y0);
            let y2 = t3 * g2 * (self.s[2] + f * y1);

            self.s[0] += 2.0 * f * (xx - y0);
            self.s[1] += 2.0 * f * (y0 - y1);
            self.s[2] += 2.0 * f * (y1 - y2);
            self.s[3] += 2.0 * f * (y2 - t4 * y3);

            out.push(y3);
        }
        Ok(out)
    }
}
