//! Driving signals and cutoff-coefficient sequences.
//!
//! Generators are plain functions from a requested length and sample rate to
//! a fresh `Vec<f64>`. Cutoff sequences are expressed as normalized angular
//! frequency (radians per sample) so the filters never see the sample rate
//! directly.

use std::f64::consts::PI;

/// Fundamental of the band-limited test sawtooth.
pub const SAW_FUNDAMENTAL_HZ: f64 = 63.0;

/// Highest partial summed into the sawtooth period.
const SAW_PARTIALS: usize = 350;
/// Partials above this are faded out linearly to soften the spectral edge.
const SAW_FADE_ABOVE: usize = 300;

/// One period of a band-limited 63 Hz sawtooth: the first 350 harmonics at
/// `1/partial` amplitude, with partials 301..=350 faded linearly to zero to
/// keep Gibbs ringing down.
pub fn saw_period(sample_rate: f64) -> Vec<f64> {
    let f0 = SAW_FUNDAMENTAL_HZ * 2.0 * PI / sample_rate;
    let len = (sample_rate / SAW_FUNDAMENTAL_HZ) as usize;
    (0..len)
        .map(|i| {
            let x0 = i as f64 * f0;
            let mut y = 0.0;
            for partial in 1..=SAW_PARTIALS {
                let mut gain = 1.0 / partial as f64;
                if partial > SAW_FADE_ABOVE {
                    gain *= (SAW_PARTIALS + 1 - partial) as f64
                        / (SAW_PARTIALS + 1 - SAW_FADE_ABOVE) as f64;
                }
                y += gain * (partial as f64 * x0).sin();
            }
            y
        })
        .collect()
}

/// Band-limited sawtooth tiled to `n` samples by repeating the period buffer
/// verbatim (sample repetition, not resynthesis, so the waveform stays
/// phase-locked to the period grid).
pub fn saw(n: usize, sample_rate: f64) -> Vec<f64> {
    saw_period(sample_rate).into_iter().cycle().take(n).collect()
}

/// Quadratic-phase chirp `sin(c * i^2)` whose instantaneous frequency reaches
/// 22 kHz (normalized to the sample rate) at the final sample.
pub fn sine_sweep(n: usize, sample_rate: f64) -> Vec<f64> {
    let fmax = 22_000.0 * 2.0 * PI / sample_rate;
    let scale = fmax * 0.5 / n as f64;
    (0..n)
        .map(|i| {
            let i = i as f64;
            (i * i * scale).sin()
        })
        .collect()
}

/// Up-then-down cutoff sweep: log-linear rise from 20 Hz to 14 kHz across the
/// first half of the sequence, then the exact time-reverse of that rise
/// across the second half. Always returns exactly `n` coefficients.
pub fn cutoff_sweep(n: usize, sample_rate: f64) -> Vec<f64> {
    let half = n / 2;
    let la_min = (20.0 * 2.0 * PI / sample_rate).ln();
    let la_max = (14_000.0 * 2.0 * PI / sample_rate).ln();
    let slope = if half > 0 {
        (la_max - la_min) / half as f64
    } else {
        0.0
    };
    (0..n)
        .map(|i| {
            let idx = if i < half { i } else { n - 1 - i };
            (la_min + slope * idx as f64).exp()
        })
        .collect()
}

/// Constant per-sample cutoff coefficient for `hz`.
pub fn constant_cutoff(n: usize, hz: f64, sample_rate: f64) -> Vec<f64> {
    vec![hz * 2.0 * PI / sample_rate; n]
}

/// Decibels to linear gain.
#[inline]
pub fn db_to_gain(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f64 = 44_100.0;

    #[test]
    fn saw_period_length_divides_sample_rate() {
        let period = saw_period(SR);
        assert_eq!(period.len(), 700); // 44100 / 63
    }

    #[test]
    fn saw_tiles_by_repetition() {
        let n = 2048;
        let out = saw(n, SR);
        assert_eq!(out.len(), n);
        let period = 700;
        for i in 0..(n - period) {
            assert_eq!(out[i], out[i + period], "tiling must repeat samples exactly");
        }
    }

    #[test]
    fn sine_sweep_starts_at_zero_and_stays_bounded() {
        let out = sine_sweep(4096, SR);
        assert_eq!(out.len(), 4096);
        assert_eq!(out[0], 0.0);
        assert!(out.iter().all(|x| x.abs() <= 1.0));
    }

    #[test]
    fn cutoff_sweep_is_symmetric_and_rising() {
        let n = 1000;
        let aas = cutoff_sweep(n, SR);
        assert_eq!(aas.len(), n);
        for i in 0..n {
            assert!(
                (aas[i] - aas[n - 1 - i]).abs() < 1e-15,
                "sweep must mirror around its midpoint"
            );
        }
        for i in 1..n / 2 {
            assert!(aas[i] > aas[i - 1], "first half must rise");
        }
        // Endpoints hit the stated angular-frequency bounds.
        assert!((aas[0] - 20.0 * 2.0 * std::f64::consts::PI / SR).abs() < 1e-12);
    }

    #[test]
    fn cutoff_sweep_odd_length_keeps_n() {
        assert_eq!(cutoff_sweep(1001, SR).len(), 1001);
    }

    #[test]
    fn constant_cutoff_values() {
        let aas = constant_cutoff(10, 1000.0, SR);
        assert_eq!(aas.len(), 10);
        let expected = 1000.0 * 2.0 * std::f64::consts::PI / SR;
        assert!(aas.iter().all(|&a| a == expected));
    }

    #[test]
    fn db_to_gain_reference_points() {
        assert_eq!(db_to_gain(0.0), 1.0);
        assert!((db_to_gain(20.0) - 10.0).abs() < 1e-12);
        assert!((db_to_gain(-6.0) - 0.501187).abs() < 1e-6);
    }
}
