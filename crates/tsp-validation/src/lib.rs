//! Harness around the exact solvers: timed runs on instance files and a
//! randomized agreement sweep between exhaustive search and Held-Karp.

#![deny(clippy::all)]

pub mod config;
mod error;
pub mod logging;
pub mod runner;
pub mod sweep;

pub use config::SweepConfig;
pub use error::{Error, Result};
pub use runner::{run, Algorithm, Run};
pub use sweep::{run_sweep, SweepRecord};
