use thiserror::Error;

/// Shape errors surfaced by the DSP stages.
///
/// Numeric-domain trouble (resonance far outside its musical range, cutoff
/// coefficients near the tangent pole) is deliberately not caught here; it
/// shows up as instability or NaNs in the output, which is part of what this
/// tool exists to observe.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DspError {
    #[error("length mismatch: signal has {signal} samples, cutoff sequence has {cutoff}")]
    LengthMismatch { signal: usize, cutoff: usize },

    #[error("insufficient samples: got {got}, need at least {need}")]
    InsufficientSamples { got: usize, need: usize },
}

pub type Result<T> = std::result::Result<T, DspError>;
