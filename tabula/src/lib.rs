//! # Tabula
//!
//! Equal-width discretization for tabular reinforcement learning.
//!
//! ## Overview
//!
//! Tabular RL algorithms need a finite state space, but most interesting
//! environments report continuous measurements. Tabula bridges the two by
//! splitting each observed quantity into equal-width bins and packing the
//! bins of a whole observation into one state key.
//!
//! ## The Crates
//!
//! -   **`tabula`:** The crate you are currently viewing. It re-exports the
//!     crates below and ships the `tabula` command-line tool for inspecting
//!     binner configurations.
//! -   **[`tensor`]:** Fixed-rank numeric buffers with shape metadata and the
//!     explicit, lossless coercion to `f32` that everything else relies on.
//! -   **[`discretize`]:** The binners. [`discretize::ScalarBinner`] handles a
//!     single range, [`discretize::VectorBinner`] one independent range per
//!     dimension.
//! -   **[`rl`]:** The state-representation layer. [`rl::StateSpace`] maps
//!     bins to state keys and [`rl::DiscretizedEnv`] applies it to an
//!     environment.
//!
//! ## Command Line
//!
//! ```text
//! tabula bounds --config cartpole.json
//! tabula bin --config cartpole.json 0.1 -0.4 0.02 1.1
//! tabula scalar --intervals 4 --low 0 --high 8 2.0
//! ```

pub mod app;
pub mod cli;

pub use discretize;
pub use rl;
pub use tensor;
