//! ladderlab - render a test signal through competing nonlinear ladder
//! filter models and write the result as a WAV file.
//!
//! Run with: cargo run --bin ladderlab -- --filter tpt --k 3.5 --out tpt.wav

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::ensure;
use ladder_lab::io::wav::write_wav;
use ladder_lab::render::{render, FilterKind, RenderConfig, SaturationKind, SignalKind};
use ladder_lab::BASE_SAMPLE_RATE;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Compare nonlinear ladder filter discretizations by ear"
)]
struct Cli {
    /// Oversampling factor (power of two).
    #[arg(long, default_value_t = 1)]
    oversample: u32,
    /// Driving signal.
    #[arg(long, value_enum, default_value_t = Signal::Saw)]
    signal: Signal,
    /// Resonance; 4 is the self-oscillation threshold.
    #[arg(long, default_value_t = 0.0)]
    k: f64,
    /// Ladder model to run.
    #[arg(long, value_enum, default_value_t = Filter::Tpt)]
    filter: Filter,
    /// Saturation curve for the cascade and state-space models.
    #[arg(long, value_enum, default_value_t = Saturation::Tanh)]
    saturation: Saturation,
    /// Input gain in dB.
    #[arg(long, default_value_t = 0.0)]
    gain: f64,
    /// Output gain in dB.
    #[arg(long, default_value_t = 0.0)]
    ogain: f64,
    /// Rendered length in seconds.
    #[arg(long, default_value_t = 6.0)]
    seconds: f64,
    /// Output WAV path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Signal {
    Saw,
    SineSweep,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Filter {
    Tpt,
    Cascade,
    StateSpace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Saturation {
    Tanh,
    InvSqrt,
}

impl From<Signal> for SignalKind {
    fn from(value: Signal) -> Self {
        match value {
            Signal::Saw => SignalKind::Saw,
            Signal::SineSweep => SignalKind::SineSweep,
        }
    }
}

impl From<Filter> for FilterKind {
    fn from(value: Filter) -> Self {
        match value {
            Filter::Tpt => FilterKind::Tpt,
            Filter::Cascade => FilterKind::Cascade,
            Filter::StateSpace => FilterKind::StateSpace,
        }
    }
}

impl From<Saturation> for SaturationKind {
    fn from(value: Saturation) -> Self {
        match value {
            Saturation::Tanh => SaturationKind::Tanh,
            Saturation::InvSqrt => SaturationKind::InvSqrt,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    ensure!(
        cli.oversample.is_power_of_two(),
        "--oversample must be a power of two, got {}",
        cli.oversample
    );

    let config = RenderConfig {
        oversample: cli.oversample,
        signal: cli.signal.into(),
        resonance: cli.k,
        filter: cli.filter.into(),
        saturation: cli.saturation.into(),
        gain_db: cli.gain,
        output_gain_db: cli.ogain,
        seconds: cli.seconds,
    };
    let samples = render(&config)?;
    write_wav(&cli.out, &samples, BASE_SAMPLE_RATE as u32)?;
    info!(
        samples = samples.len(),
        path = %cli.out.display(),
        "wrote output"
    );
    Ok(())
}
