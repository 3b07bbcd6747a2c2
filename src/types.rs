use crate::error::SineMixError;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// 21 blocks of 2048 samples, just under one second at 44.1 kHz.
pub const DEFAULT_SAMPLE_COUNT: usize = 21 * 2048;
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
pub const DEFAULT_SINE_FREQUENCY: f64 = 5.0;
pub const DEFAULT_MIX_FREQUENCIES: [f64; 4] = [200.0, 400.0, 600.0, 800.0];

// ─── Waveform ───────────────────────────────────────────────────────────────

/// Fixed-length run of amplitude samples at successive sample instants.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Waveform(Vec<f64>);

impl Waveform {
    /// Duration in seconds when played back at `sample_rate`.
    pub fn duration_secs(&self, sample_rate: u32) -> f64 {
        if sample_rate == 0 {
            return 0.0;
        }
        self.0.len() as f64 / sample_rate as f64
    }
}

impl Deref for Waveform {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Waveform {
    fn from(samples: Vec<f64>) -> Self {
        Self(samples)
    }
}

impl FromIterator<f64> for Waveform {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ─── Single sine parameters ─────────────────────────────────────────────────

/// Parameters for one sine wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SineParams {
    /// Oscillation rate in Hz
    pub frequency: f64,
    pub sample_count: usize,
    /// Samples per second
    pub sample_rate: u32,
    /// Angular offset in radians
    pub phase: f64,
    /// Amplitude multiplier
    pub gain: f64,
}

impl Default for SineParams {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_SINE_FREQUENCY,
            sample_count: DEFAULT_SAMPLE_COUNT,
            sample_rate: DEFAULT_SAMPLE_RATE,
            phase: 0.0,
            gain: 1.0,
        }
    }
}

impl SineParams {
    pub fn validate(&self) -> Result<(), SineMixError> {
        if self.sample_rate == 0 {
            return Err(SineMixError::InvalidSampleRate);
        }
        for (name, value) in [
            ("frequency", self.frequency),
            ("phase", self.phase),
            ("gain", self.gain),
        ] {
            if !value.is_finite() {
                return Err(SineMixError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

impl fmt::Display for SineParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} Hz  phase={:.3} rad  gain={:.3}  {} samples @ {} Hz",
            self.frequency, self.phase, self.gain, self.sample_count, self.sample_rate
        )
    }
}

// ─── Stationary mix parameters ──────────────────────────────────────────────

/// Parameters for a weighted mix of fixed-frequency sines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixParams {
    /// Frequencies in Hz, paired positionally with `weights`
    pub frequencies: Vec<f64>,
    /// Relative contribution per frequency. None = all equal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<f64>>,
    pub sample_count: usize,
    pub sample_rate: u32,
}

impl Default for MixParams {
    fn default() -> Self {
        Self {
            frequencies: DEFAULT_MIX_FREQUENCIES.to_vec(),
            weights: None,
            sample_count: DEFAULT_SAMPLE_COUNT,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl MixParams {
    pub fn new(frequencies: Vec<f64>, weights: Option<Vec<f64>>) -> Self {
        Self {
            frequencies,
            weights,
            ..Self::default()
        }
    }

    /// Weights paired with each frequency, filling in 1.0 when absent.
    /// Call `validate` first if the lengths may disagree.
    pub fn effective_weights(&self) -> Vec<f64> {
        match &self.weights {
            Some(w) => w.clone(),
            None => vec![1.0; self.frequencies.len()],
        }
    }

    pub fn validate(&self) -> Result<(), SineMixError> {
        if self.sample_rate == 0 {
            return Err(SineMixError::InvalidSampleRate);
        }
        if self.frequencies.is_empty() {
            return Err(SineMixError::NoFrequencies);
        }
        for (index, &value) in self.frequencies.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(SineMixError::InvalidFrequency { index, value });
            }
        }
        if let Some(weights) = &self.weights {
            if weights.len() != self.frequencies.len() {
                return Err(SineMixError::WeightCountMismatch {
                    frequencies: self.frequencies.len(),
                    weights: weights.len(),
                });
            }
            for (index, &value) in weights.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(SineMixError::InvalidWeight { index, value });
                }
            }
            if weights.iter().sum::<f64>() == 0.0 {
                return Err(SineMixError::ZeroWeightSum);
            }
        }
        Ok(())
    }
}

impl fmt::Display for MixParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weights = self.effective_weights();
        let parts: Vec<String> = self
            .frequencies
            .iter()
            .zip(weights.iter())
            .map(|(freq, w)| format!("{:.1}Hz×{}", freq, w))
            .collect();
        write!(
            f,
            "[{}]  {} samples @ {} Hz",
            parts.join(" "),
            self.sample_count,
            self.sample_rate
        )
    }
}

// ─── Command-line overrides ─────────────────────────────────────────────────

/// Sine fields given on the command line. Each one present replaces the
/// value loaded from a parameter file.
#[derive(Debug, Clone, Default, Args)]
pub struct SineOverrides {
    /// Frequency (Hz)
    #[arg(long)]
    pub frequency: Option<f64>,

    /// Number of samples
    #[arg(long)]
    pub samples: Option<usize>,

    /// Sample rate (Hz)
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Phase (radians)
    #[arg(long, allow_negative_numbers = true)]
    pub phase: Option<f64>,

    /// Amplitude multiplier
    #[arg(long, allow_negative_numbers = true)]
    pub gain: Option<f64>,
}

impl SineParams {
    pub fn apply_overrides(&mut self, o: &SineOverrides) {
        if let Some(v) = o.frequency {
            self.frequency = v;
        }
        if let Some(v) = o.samples {
            self.sample_count = v;
        }
        if let Some(v) = o.sample_rate {
            self.sample_rate = v;
        }
        if let Some(v) = o.phase {
            self.phase = v;
        }
        if let Some(v) = o.gain {
            self.gain = v;
        }
    }
}

/// Mix fields given on the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct MixOverrides {
    /// Comma-separated frequencies (Hz), e.g. 200,400,600,800
    #[arg(long, value_delimiter = ',')]
    pub freqs: Option<Vec<f64>>,

    /// Comma-separated weights, one per frequency (default: all equal)
    #[arg(long, value_delimiter = ',')]
    pub weights: Option<Vec<f64>>,

    /// Number of samples
    #[arg(long)]
    pub samples: Option<usize>,

    /// Sample rate (Hz)
    #[arg(long)]
    pub sample_rate: Option<u32>,
}

impl MixParams {
    pub fn apply_overrides(&mut self, o: &MixOverrides) {
        if let Some(v) = &o.freqs {
            self.frequencies = v.clone();
        }
        if let Some(v) = &o.weights {
            self.weights = Some(v.clone());
        }
        if let Some(v) = o.samples {
            self.sample_count = v;
        }
        if let Some(v) = o.sample_rate {
            self.sample_rate = v;
        }
    }
}
