use sine_mix::config;
use sine_mix::dsp;
use sine_mix::output::{self, OutputFormat};
use sine_mix::types::*;

use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "sine-mix")]
#[command(about = "Sine waveform and stationary sine-mix generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    io: IoArgs,
}

#[derive(Args)]
struct IoArgs {
    /// Write samples to this file instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Sample rendering
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    format: OutputFormat,

    /// Save the effective parameters as JSON
    #[arg(long, global = true)]
    save_config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a single sine wave
    Sine {
        /// Load parameters from a JSON file (flags below override it)
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: SineOverrides,
    },
    /// Mix several sines into one stationary waveform
    Mix {
        /// Load parameters from a JSON file (flags below override it)
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: MixOverrides,
    },
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    let cli = Cli::parse();

    info!("═══════════════════════════════════════════════");
    info!("  SINE MIX v{}", env!("CARGO_PKG_VERSION"));
    info!("═══════════════════════════════════════════════");

    if let Err(e) = run(cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (waveform, sample_rate) = match cli.command {
        Command::Sine {
            config: path,
            overrides,
        } => {
            let mut params = match path {
                Some(p) => config::load_sine(&p)?,
                None => SineParams::default(),
            };
            params.apply_overrides(&overrides);
            params.validate()?;
            info!("Sine: {}", params);
            let waveform = dsp::sine_waveform(&params);
            if let Some(p) = &cli.io.save_config {
                config::save_sine(&params, p)?;
            }
            (waveform, params.sample_rate)
        }
        Command::Mix {
            config: path,
            overrides,
        } => {
            let mut params = match path {
                Some(p) => config::load_mix(&p)?,
                None => MixParams::default(),
            };
            params.apply_overrides(&overrides);
            info!("Mix: {}", params);
            let waveform = dsp::stationary_mix(&params)?;
            if let Some(p) = &cli.io.save_config {
                config::save_mix(&params, p)?;
            }
            (waveform, params.sample_rate)
        }
    };

    output::log_summary(&waveform, sample_rate);

    match &cli.io.out {
        Some(path) => {
            let file = File::create(path)?;
            output::write_waveform(&waveform, cli.io.format, BufWriter::new(file))?;
            info!("Samples written to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            output::write_waveform(&waveform, cli.io.format, BufWriter::new(stdout.lock()))?;
        }
    }
    Ok(())
}
