//! Explicit cascaded-integrator ladder, after Antti Huovilainen's model.
//!
//! Each stage keeps an undamped integrator state and a saturated copy of it;
//! resonance feeds back the last stage averaged with its value from the
//! *previous* sample. That one-sample delay is what makes the model explicit
//! (no per-sample solve), and it is also the model's approximation error
//! relative to the zero-delay TPT ladder, so the update order below is
//! load-bearing, including the exact point where the delayed value is
//! captured between stage updates.

use crate::dsp::saturation::Saturator;
use crate::error::{DspError, Result};

pub struct CascadeLadder<S: Saturator> {
    resonance: f64,
    sat: S,
    /// Raw integrator states.
    y: [f64; 4],
    /// Saturated copies of the states.
    ty: [f64; 4],
    /// Last stage's raw state from the previous sample.
    yy: f64,
}

impl<S: Saturator> CascadeLadder<S> {
    pub fn new(resonance: f64, sat: S) -> Self {
        Self {
            resonance,
            sat,
            y: [0.0; 4],
            ty: [0.0; 4],
            yy: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.y = [0.0; 4];
        self.ty = [0.0; 4];
        self.yy = 0.0;
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

        let k = self.resonance;
        let mut out = Vec::with_capacity(signal.len());
        for (&xin, &a) in signal.iter().zip(cutoff) {
            // Feedback averages the current and one-sample-delayed last
            // stage; yy still holds the value from the previous sample here.
            let tx = self.sat.apply(xin - k * (self.y[3] + self.yy) * 0.5);
            self.y[0] += a * (tx - self.ty[0]);
            self.yy = self.y[3];
            self.ty[0] = self.sat.apply(self.y[0]);
            self.y[1] += a * (self.ty[0] - self.ty[1]);
            self.ty[1] = self.sat.apply(self.y[1]);
            self.y[2] += a * (self.ty[1] - self.ty[2]);
            self.ty[2] = self.sat.apply(self.y[2]);
            self.y[3] += a * (self.ty[2] - self.ty[3]);
            self.ty[3] = self.sat.apply(self.y[3]);
            out.push(self.y[3]);
        }
        Ok(out)
    }
}
