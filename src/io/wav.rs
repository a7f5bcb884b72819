//! Mono 16-bit PCM output.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

/// Integer headroom factor: a float sample of 1.0 maps to 16384, leaving 6 dB
/// of room before the 16-bit rails.
pub const PCM_SCALE: f64 = 16_384.0;

/// Write a rendered sequence as a mono 16-bit PCM WAV file. Each sample is
/// scaled by [`PCM_SCALE`], truncated toward zero, and hard-clipped to
/// +/-32767.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f64], sample_rate: u32) -> hound::Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &x in samples {
        let quantized = ((PCM_SCALE * x) as i64).clamp(-32_767, 32_767) as i16;
        writer.write_sample(quantized)?;
    }
    writer.finalize()
}
