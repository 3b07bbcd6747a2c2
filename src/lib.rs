pub mod config;
pub mod dsp;
pub mod error;
pub mod output;
pub mod types;

pub use dsp::{generate_mix, generate_sine, sine_waveform, stationary_mix};
pub use error::{ErrorKind, SineMixError};
pub use types::{MixParams, SineParams, Waveform};
