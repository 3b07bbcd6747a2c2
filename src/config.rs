//! JSON parameter files for the generators.
//!
//! Missing fields fall back to the generator defaults, so a file holding only
//! `{"weights": [1, 2, 3, 4]}` is a complete mix description.

use crate::types::{MixParams, SineParams};
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use std::path::Path;

fn load<T: DeserializeOwned>(path: &Path) -> io::Result<T> {
    let data = std::fs::read_to_string(path)?;
    let params = serde_json::from_str(&data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    info!("Loaded parameters from {:?}", path);
    Ok(params)
}

fn save<T: Serialize>(params: &T, path: &Path) -> io::Result<()> {
    let json = serde_json::to_string_pretty(params).map_err(io::Error::other)?;
    std::fs::write(path, json)?;
    info!("Parameters saved to {:?}", path);
    Ok(())
}

pub fn load_mix(path: &Path) -> io::Result<MixParams> {
    load(path)
}

pub fn save_mix(params: &MixParams, path: &Path) -> io::Result<()> {
    save(params, path)
}

pub fn load_sine(path: &Path) -> io::Result<SineParams> {
    load(path)
}

pub fn save_sine(params: &SineParams, path: &Path) -> io::Result<()> {
    save(params, path)
}
