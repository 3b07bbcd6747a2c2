//! Text renderings of a waveform for the command-line tool.

use crate::dsp::{compute_rms, peak};
use crate::types::Waveform;
use clap::ValueEnum;
use log::info;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON array of samples
    Json,
    /// One sample per line
    Lines,
}

pub fn write_waveform<W: Write>(
    waveform: &Waveform,
    format: OutputFormat,
    mut writer: W,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut writer, waveform).map_err(io::Error::other)?;
            writeln!(writer)?;
        }
        OutputFormat::Lines => {
            for s in waveform.iter() {
                writeln!(writer, "{}", s)?;
            }
        }
    }
    writer.flush()
}

/// Log length, duration and level of a generated waveform.
pub fn log_summary(waveform: &Waveform, sample_rate: u32) {
    info!(
        "Waveform: {} samples  {:.3}s  peak={:.4}  rms={:.4}",
        waveform.len(),
        waveform.duration_secs(sample_rate),
        peak(waveform),
        compute_rms(waveform),
    );
}
