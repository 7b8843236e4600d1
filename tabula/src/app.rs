//! # Tabula Commands
//!
//! Each subcommand renders its result into a `String` so the binary only has
//! to print it. Failures carry enough context to say which file or value was
//! at fault.

use crate::cli::Command;
use anyhow::{Context, Result};
use discretize::{BinnerConfig, ScalarBinner};
use rl::StateSpace;
use std::fmt::Write;
use std::path::Path;

/// Runs `command` and returns its rendered output.
///
/// # Errors
///
/// Returns any configuration, binning, or state-encoding error.
pub fn execute(command: &Command) -> Result<String> {
    match command {
        Command::Bounds { config } => bounds(config),
        Command::Bin { config, values } => bin(config, values),
        Command::Scalar {
            intervals,
            low,
            high,
            value,
        } => scalar(*intervals, *low, *high, *value),
    }
}

fn load(path: &Path) -> Result<BinnerConfig> {
    let config = BinnerConfig::from_path(path)
        .with_context(|| format!("loading binner config {}", path.display()))?;
    tracing::debug!(axes = config.axes.len(), path = %path.display(), "loaded config");
    Ok(config)
}

fn bounds(path: &Path) -> Result<String> {
    let config = load(path)?;
    let binner = config.build().context("building binner")?;
    let mut out = String::new();
    for (dim, axis) in binner.axes().iter().enumerate() {
        writeln!(
            out,
            "{}: intervals={} width={} bounds={:?}",
            config.axis_name(dim),
            axis.interval_count(),
            axis.width(),
            axis.boundaries()
        )?;
    }
    Ok(out)
}

fn bin(path: &Path, values: &[f32]) -> Result<String> {
    let config = load(path)?;
    let space = StateSpace::new(config.build().context("building binner")?)?;
    let bins = space
        .binner()
        .bin_slice(values)
        .with_context(|| format!("binning {values:?}"))?;
    let state = space.encode(&bins)?;

    let mut out = String::new();
    for (dim, (value, bin)) in values.iter().zip(&bins).enumerate() {
        writeln!(out, "{}: {value} -> {bin}", config.axis_name(dim))?;
    }
    writeln!(out, "state {state} of {}", space.len())?;
    Ok(out)
}

fn scalar(intervals: usize, low: f32, high: f32, value: f32) -> Result<String> {
    let binner = ScalarBinner::new(intervals, high, low)?;
    let index = binner
        .bin(value)
        .with_context(|| format!("binning {value} into {intervals} bins over [{low}, {high})"))?;
    Ok(format!("{value} -> {index}\n"))
}
