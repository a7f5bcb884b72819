//! Matrix-exponential state-space ladder.
//!
//! Between nonlinearity evaluations the ladder is a linear system
//! `dy/dt = A*y + B*u`, so its transition over one sample can be taken from
//! the matrix exponential of the Jacobian instead of a finite-difference
//! step. The exponential is expensive, so the transition matrices are cached
//! and refreshed only every [`REFRESH_EVERY`] samples, treating the cutoff as
//! locally constant over that window. Most accurate of the three models, and
//! the slowest.

use crate::dsp::matrix::{expm_hyb, ladder_jacobian, Mat};
use crate::dsp::saturation::Saturator;
use crate::error::{DspError, Result};

/// Samples between transition-matrix recomputations.
pub const REFRESH_EVERY: usize = 64;

/// Taylor terms used inside the scaled series.
const SERIES_ORDER: u32 = 8;
/// Number of squarings undoing the 2^-n scaling.
const SQUARINGS: u32 = 8;

pub struct StateSpaceLadder<S: Saturator> {
    resonance: f64,
    sat: S,
}

impl<S: Saturator> StateSpaceLadder<S> {
    pub fn new(resonance: f64, sat: S) -> Self {
        Self { resonance, sat }
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

        let k = self.resonance;
        let mut y = [0.0f64; 4];
        let mut ty = [0.0f64; 4];
        // Cached transition: forcing vector for the held input, and the
        // autonomous state delta A - I with the resonance column folded in.
        let mut b = [0.0f64; 4];
        let mut am = Mat::<4>::zero();

        let mut out = Vec::with_capacity(signal.len());
        for (i, (&x, &a)) in signal.iter().zip(cutoff).enumerate() {
            if i % REFRESH_EVERY == 0 {
                // Cutoff is read only here; it is held constant until the
                // next refresh.
                let e = expm_hyb(&ladder_jacobian(a, k), SERIES_ORDER, SQUARINGS);
                for j in 0..4 {
                    b[j] = e.0[j + 1][0];
                    for l in 0..4 {
                        am.0[j][l] = e.0[j + 1][l + 1];
                    }
                    am.0[j][j] -= 1.0;
                    // The Jacobian already carries the resonance path, but tx
                    // subtracts k*y3 again at the input tap; correcting the
                    // last column by +B*k keeps the feedback from being
                    // counted twice.
                    am.0[j][3] += b[j] * k;
                }
            }

            let tx = self.sat.apply(x - k * y[3]);
            let dy = am.mul_vec(&ty);
            for j in 0..4 {
                y[j] += b[j] * tx + dy[j];
            }
            for j in 0..4 {
                ty[j] = self.sat.apply(y[j]);
            }
            out.push(y[3]);
        }
        Ok(out)
    }
}
