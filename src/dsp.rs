//! Sine synthesis primitives: single sine waveforms, stationary weighted
//! mixes of sines, and the RMS/peak measurements used to summarize them.

use crate::error::SineMixError;
use crate::types::{MixParams, SineParams, Waveform};
use log::debug;
use std::f64::consts::PI;

/// Generate one sine wave.
///
/// Sample `i` is `gain * sin(phase + i * 2π * frequency / sample_rate)`.
/// Phase grows linearly with the sample index; no wraparound is applied.
/// A zero `sample_count` yields an empty waveform.
pub fn sine_waveform(params: &SineParams) -> Waveform {
    let SineParams {
        frequency,
        sample_count,
        sample_rate,
        phase,
        gain,
    } = *params;
    let sr = sample_rate as f64;
    (0..sample_count)
        .map(|i| gain * (phase + i as f64 * 2.0 * PI * frequency / sr).sin())
        .collect()
}

/// Positional form of [`sine_waveform`].
pub fn generate_sine(
    frequency: f64,
    sample_count: usize,
    sample_rate: u32,
    phase: f64,
    gain: f64,
) -> Waveform {
    sine_waveform(&SineParams {
        frequency,
        sample_count,
        sample_rate,
        phase,
        gain,
    })
}

/// Mix fixed-frequency sines into one stationary waveform.
///
/// Each frequency contributes a unit-gain, zero-phase sine scaled by its
/// weight. The weighted sum is divided by the total weight, so equal weights
/// give the arithmetic mean and scaling every weight by the same positive
/// constant leaves the output unchanged.
///
/// Fails without producing output if the weights do not pair one-to-one
/// with the frequencies, if any value is out of range, or if the weights
/// sum to zero.
pub fn stationary_mix(params: &MixParams) -> Result<Waveform, SineMixError> {
    params.validate()?;

    // Largest weight becomes 1.0, so the total stays finite for any finite weights
    let mut weights = params.effective_weights();
    let largest = weights.iter().fold(0.0f64, |m, &w| m.max(w));
    for w in weights.iter_mut() {
        *w /= largest;
    }
    let total: f64 = weights.iter().sum();
    debug!("mixing {} (total weight {})", params, total);

    let mut acc = vec![0.0f64; params.sample_count];
    for (&frequency, &weight) in params.frequencies.iter().zip(weights.iter()) {
        let voice = sine_waveform(&SineParams {
            frequency,
            sample_count: params.sample_count,
            sample_rate: params.sample_rate,
            phase: 0.0,
            gain: 1.0,
        });
        for (a, s) in acc.iter_mut().zip(voice.iter()) {
            *a += s * weight;
        }
    }

    for a in acc.iter_mut() {
        *a /= total;
    }
    Ok(Waveform::from(acc))
}

/// Positional form of [`stationary_mix`]. `None` weights every frequency equally.
pub fn generate_mix(
    frequencies: &[f64],
    weights: Option<&[f64]>,
    sample_count: usize,
    sample_rate: u32,
) -> Result<Waveform, SineMixError> {
    stationary_mix(&MixParams {
        frequencies: frequencies.to_vec(),
        weights: weights.map(|w| w.to_vec()),
        sample_count,
        sample_rate,
    })
}

/// Root mean square of a sample buffer.
pub fn compute_rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f64).sqrt()
}

/// Largest absolute sample value.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0f64, |m, s| m.max(s.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::{DEFAULT_MIX_FREQUENCIES, DEFAULT_SAMPLE_RATE};

    fn assert_close(a: &[f64], b: &[f64], tol: f64) {
        assert_eq!(a.len(), b.len(), "length mismatch");
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            assert!((x - y).abs() < tol, "sample {}: {} vs {}", i, x, y);
        }
    }

    #[test]
    fn test_sine_first_samples() {
        let wf = generate_sine(5.0, 3, 44100, 0.0, 1.0);
        assert_close(&wf, &[0.0, 0.000712379226274755, 0.0014247580910282892], 1e-12);
    }

    #[test]
    fn test_sine_length() {
        for n in 0..8 {
            let params = SineParams {
                sample_count: n,
                ..SineParams::default()
            };
            assert_eq!(sine_waveform(&params).len(), n);
        }
    }

    #[test]
    fn test_sine_phase_and_gain() {
        // Quarter-period phase starts at the crest
        let wf = generate_sine(440.0, 1, 48000, PI / 2.0, 0.5);
        assert!((wf[0] - 0.5).abs() < 1e-12);
        let wf = generate_sine(440.0, 64, 48000, 0.0, -2.0);
        assert!(peak(&wf) <= 2.0 + 1e-12);
        assert!(wf[1] < 0.0);
    }

    #[test]
    fn test_sine_periodic() {
        // 441 Hz at 44.1 kHz repeats every 100 samples
        let wf = generate_sine(441.0, 300, 44100, 0.3, 1.0);
        for i in 0..200 {
            assert!((wf[i] - wf[i + 100]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_mix_reference_values() {
        let wf = generate_mix(
            &DEFAULT_MIX_FREQUENCIES,
            Some(&[1.0, 2.0, 3.0, 4.0]),
            3,
            DEFAULT_SAMPLE_RATE,
        )
        .unwrap();
        assert_close(&wf, &[0.0, 0.08534908048813569, 0.16988139234280178], 1e-12);
    }

    #[test]
    fn test_mix_equal_weights_is_mean() {
        let freqs = [110.0, 330.0, 1000.0];
        let wf = generate_mix(&freqs, None, 256, 44100).unwrap();
        let voices: Vec<Waveform> = freqs
            .iter()
            .map(|&f| generate_sine(f, 256, 44100, 0.0, 1.0))
            .collect();
        for i in 0..256 {
            let mean = voices.iter().map(|v| v[i]).sum::<f64>() / 3.0;
            assert!((wf[i] - mean).abs() < 1e-12);
        }
    }

    #[test]
    fn test_mix_single_zero_weight_voice_is_silenced() {
        let wf = generate_mix(&[200.0, 400.0], Some(&[1.0, 0.0]), 128, 44100).unwrap();
        let solo = generate_sine(200.0, 128, 44100, 0.0, 1.0);
        assert_close(&wf, &solo, 1e-12);
    }

    #[test]
    fn test_mix_zero_weight_sum_fails() {
        let err = generate_mix(&[200.0, 400.0], Some(&[0.0, 0.0]), 16, 44100).unwrap_err();
        assert_eq!(err, SineMixError::ZeroWeightSum);
        assert_eq!(err.kind(), ErrorKind::DivideByZero);
    }

    #[test]
    fn test_mix_huge_weights_stay_finite() {
        let huge = generate_mix(&[11025.0, 11025.0], Some(&[f64::MAX, f64::MAX]), 3, 44100).unwrap();
        let unit = generate_mix(&[11025.0, 11025.0], Some(&[1.0, 1.0]), 3, 44100).unwrap();
        assert!(huge.iter().all(|s| s.is_finite()));
        assert_close(&huge, &unit, 1e-12);

        let huge = generate_mix(&[200.0, 400.0], Some(&[f64::MAX, f64::MAX]), 4, 44100).unwrap();
        let unit = generate_mix(&[200.0, 400.0], None, 4, 44100).unwrap();
        assert_close(&huge, &unit, 1e-12);
        assert!(huge[1] > 0.0);
    }

    #[test]
    fn test_mix_mismatch_fails() {
        let err = generate_mix(&[200.0, 400.0, 600.0], Some(&[1.0, 2.0]), 16, 44100).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_mix_empty() {
        let wf = stationary_mix(&MixParams {
            sample_count: 0,
            ..MixParams::default()
        })
        .unwrap();
        assert!(wf.is_empty());
    }

    #[test]
    fn test_rms_and_peak() {
        assert_eq!(compute_rms(&[]), 0.0);
        assert_eq!(peak(&[]), 0.0);
        // Whole number of periods: RMS of a unit sine is 1/√2
        let wf = generate_sine(100.0, 44100, 44100, 0.0, 1.0);
        assert!((compute_rms(&wf) - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        assert!((peak(&wf) - 1.0).abs() < 1e-4);
        assert_eq!(peak(&[0.25, -0.75, 0.5]), 0.75);
    }
}
