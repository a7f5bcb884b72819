//! Half-band FIR decimator used to undo oversampling.
//!
//! A fixed linear-phase low-pass kernel is convolved against a ring buffer
//! of recent input; one output is emitted for every two inputs. Applying the
//! decimator `log2(oversample)` times brings an oversampled render back to
//! the base rate. The kernel length is a power of two so the ring buffer can
//! wrap with a mask.

use crate::error::{DspError, Result};

pub const FIR_LEN: usize = 128;

/// Odd-symmetric low-pass kernel; coefficients sum to one, so DC passes at
/// unit gain. Read-only for the life of the process.
#[rustfmt::skip]
pub static FIR: [f64; FIR_LEN] = [
    -0.00000152158394097619,
    -0.00000932875737718674,
    -0.00001008290833020705,
    0.00000728628960094510,
    0.00002272556429291851,
    -0.00000017886444625648,
    -0.00004038828866646377,
    -0.00002127235603321839,
    0.00005623314602326363,
    0.00006233931357689778,
    -0.00005884569707596701,
    -0.00012410666372671377,
    0.00003231781361429016,
    0.00019973378481126099,
    0.00004097428652472217,
    -0.00027125558280978066,
    -0.00017513777576291543,
    0.00030833229435342778,
    0.00037363561338823163,
    -0.00027028256701905416,
    -0.00062153272838533420,
    0.00011242294792251808,
    0.00087909017443692499,
    0.00020309303892565388,
    -0.00107928469499717137,
    -0.00069305675670084180,
    0.00113148992142813524,
    0.00133794323705832747,
    -0.00093286682198106608,
    -0.00206892788224323455,
    0.00038777937772768273,
    0.00276141532345176117,
    0.00056670689248167661,
    -0.00323852878331680298,
    -0.00193259906597622396,
    0.00328731491441583683,
    0.00362542589345449945,
    -0.00268785554870503091,
    -0.00545702740033716938,
    0.00125317559909794512,
    0.00713205061850966104,
    0.00112492149537589880,
    -0.00826148096867550946,
    -0.00443085208574918715,
    0.00839336065985300112,
    0.00848839486761648020,
    -0.00705662837862476577,
    -0.01293781936476604867,
    0.00380913247729417143,
    0.01722862947876550518,
    0.00172513205576642695,
    -0.02062091118580804822,
    -0.00985374287540894019,
    0.02217056516274141381,
    0.02089533076058044253,
    -0.02062760756367006815,
    -0.03546365160613443313,
    0.01401630243169032369,
    0.05541063386809867708,
    0.00212045427486363437,
    -0.08794052708207862612,
    -0.04526389505656687462,
    0.18221762668014460096,
    0.41075960732889965632,
    0.41075960732889965632,
    0.18221762668014460096,
    -0.04526389505656687462,
    -0.08794052708207862612,
    0.00212045427486363437,
    0.05541063386809867708,
    0.01401630243169032369,
    -0.03546365160613443313,
    -0.02062760756367006815,
    0.02089533076058044253,
    0.02217056516274141381,
    -0.00985374287540894019,
    -0.02062091118580804822,
    0.00172513205576642695,
    0.01722862947876550518,
    0.00380913247729417143,
    -0.01293781936476604867,
    -0.00705662837862476577,
    0.00848839486761648020,
    0.00839336065985300112,
    -0.00443085208574918715,
    -0.00826148096867550946,
    0.00112492149537589880,
    0.00713205061850966104,
    0.00125317559909794512,
    -0.00545702740033716938,
    -0.00268785554870503091,
    0.00362542589345449945,
    0.00328731491441583683,
    -0.00193259906597622396,
    -0.00323852878331680298,
    0.00056670689248167661,
    0.00276141532345176117,
    0.00038777937772768273,
    -0.00206892788224323455,
    -0.00093286682198106608,
    0.00133794323705832747,
    0.00113148992142813524,
    -0.00069305675670084180,
    -0.00107928469499717137,
    0.00020309303892565388,
    0.00087909017443692499,
    0.00011242294792251808,
    -0.00062153272838533420,
    -0.00027028256701905416,
    0.00037363561338823163,
    0.00030833229435342778,
    -0.00017513777576291543,
    -0.00027125558280978066,
    0.00004097428652472217,
    0.00019973378481126099,
    0.00003231781361429016,
    -0.00012410666372671377,
    -0.00005884569707596701,
    0.00006233931357689778,
    0.00005623314602326363,
    -0.00002127235603321839,
    -0.00004038828866646377,
    -0.00000017886444625648,
    0.00002272556429291851,
    0.00000728628960094510,
    -0.00001008290833020705,
    -0.00000932875737718674,
    -0.00000152158394097619,];

/// Low-pass the input and keep every second sample. The output has exactly
/// `floor(n / 2)` samples; inputs shorter than one kernel period are
/// rejected.
pub fn decimate(input: &[f64]) -> Result<Vec<f64>> {
    if input.len() < FIR_LEN {
        return Err(DspError::InsufficientSamples {
            got: input.len(),
            need: FIR_LEN,
        });
    }

    let mut out = Vec::with_capacity(input.len() / 2);
    let mut buf = [0.0f64; FIR_LEN];
    let mut i = 0usize;
    for &x in input {
        buf[i] = x;
        i = (i + 1) & (FIR_LEN - 1);
        if i & 1 == 0 {
            let mut y = 0.0;
            for (j, &c) in FIR.iter().enumerate() {
                y += c * buf[(i + j) & (FIR_LEN - 1)];
            }
            out.push(y);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_symmetric_and_sums_to_one() {
        for j in 0..FIR_LEN / 2 {
            assert_eq!(FIR[j], FIR[FIR_LEN - 1 - j], "kernel must be symmetric");
        }
        let sum: f64 = FIR.iter().sum();
        assert!((sum - 1.0).abs() < 1e-4, "DC gain is {sum}");
    }

    #[test]
    fn halves_the_length() {
        for n in [FIR_LEN, 500, 501, 4096] {
            let out = decimate(&vec![0.25; n]).unwrap();
            assert_eq!(out.len(), n / 2);
        }
    }

    #[test]
    fn rejects_short_input() {
        let err = decimate(&[0.0; FIR_LEN - 1]).unwrap_err();
        assert_eq!(
            err,
            DspError::InsufficientSamples {
                got: FIR_LEN - 1,
                need: FIR_LEN
            }
        );
    }

    #[test]
    fn dc_passes_at_unit_gain_after_transient() {
        let out = decimate(&vec![0.5; 2048]).unwrap();
        // Skip the kernel fill-in transient, then every output must sit at
        // the input level.
        for (idx, &y) in out.iter().enumerate().skip(FIR_LEN) {
            assert!(
                (y - 0.5).abs() < 1e-4,
                "output {idx} drifted from DC: {y}"
            );
        }
    }

    #[test]
    fn repeated_passes_undo_oversampling_factor() {
        let mut seq = vec![1.0; 4096];
        for _ in 0..2 {
            seq = decimate(&seq).unwrap();
        }
        assert_eq!(seq.len(), 1024);
    }
}
