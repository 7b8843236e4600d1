use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tabula", version, about = "Equal-width discretization for tabular RL")]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print each axis's width and boundaries.
    Bounds {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Bin one point, one value per configured axis.
    Bin {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f32>,
    },
    /// Bin a single value without a config file.
    Scalar {
        #[arg(long)]
        intervals: usize,
        #[arg(long, allow_negative_numbers = true)]
        low: f32,
        #[arg(long, allow_negative_numbers = true)]
        high: f32,
        #[arg(allow_negative_numbers = true)]
        value: f32,
    },
}

impl Cli {
    /// Default log filter for the requested verbosity.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
