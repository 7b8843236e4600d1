#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # RL
//!
//! The state-representation layer between continuous environments and
//! tabular agents.
//!
//! A [`StateSpace`] owns a [`discretize::VectorBinner`] and turns each
//! continuous observation into a single state key, suitable for indexing a
//! table of values. [`DiscretizedEnv`] applies that mapping to every
//! observation an [`Env`] emits.

pub mod env;
pub mod error;
pub mod space;
pub mod wrapper;

pub use env::Env;
pub use error::StateError;
pub use space::StateSpace;
pub use wrapper::{DiscretizedEnv, Transition};
