#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Discretize
//!
//! Equal-width discretization of continuous values for tabular
//! reinforcement learning.
//!
//! Tabular algorithms need a finite state space. This crate turns continuous
//! measurements into bin indices by splitting each configured range
//! `[low, high)` into `interval_count` bins of equal width.
//!
//! ## Key Components
//!
//! -   **[`BinAxis`]:** one dimension's boundaries and the classification
//!     rule. Intervals are left-closed and right-open, and `high` itself is
//!     out of range. Both binners below are built from axes.
//! -   **[`ScalarBinner`]:** a single axis, classifying one `f32`.
//! -   **[`VectorBinner`]:** one independent axis per dimension, classifying
//!     a whole point at once. Construction takes [`tensor::Dense`] buffers of
//!     any numeric type and coerces them to `f32` losslessly.
//! -   **[`BinnerConfig`]:** the JSON form of a binner.
//!
//! Binners never change after construction, so they can be shared across
//! threads and queried concurrently.
//!
//! ```rust
//! use discretize::{BinError, ScalarBinner, VectorBinner};
//!
//! let scalar = ScalarBinner::new(4, 8.0, 0.0).unwrap();
//! assert_eq!(scalar.bin(2.0), Ok(1));
//! assert!(matches!(scalar.bin(8.0), Err(BinError::OutOfRangeHigh { .. })));
//!
//! let vector = VectorBinner::from_slices(&[2, 2], &[0.0, 0.0], &[10.0, 10.0]).unwrap();
//! assert_eq!(vector.bin_slice(&[3.0, 7.0]), Ok(vec![0, 1]));
//! ```

pub mod axis;
pub mod config;
pub mod error;
pub mod scalar;
pub mod vector;

pub use axis::{BinAxis, MAX_INTERVALS};
pub use config::{AxisConfig, BinnerConfig, ConfigError};
pub use error::BinError;
pub use scalar::ScalarBinner;
pub use vector::VectorBinner;
