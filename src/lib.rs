pub mod dsp;
pub mod error;
pub mod io;
pub mod render; // Batch pipeline: generator -> ladder model -> decimation

/// Base output rate; oversampled stages run at an integer multiple of this.
pub const BASE_SAMPLE_RATE: f64 = 44_100.0;
