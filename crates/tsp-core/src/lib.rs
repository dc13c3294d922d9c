//! Shared types for the exact TSP solvers.
//!
//! Both solver crates consume an [`Instance`] (a validated city list plus its
//! distance matrix) and produce a [`Solution`].

#![deny(clippy::all)]

mod error;
pub mod input;
mod instance;
mod models;
mod utils;
mod visited;

pub use error::{Error, Result};
pub use instance::{DistanceMatrix, Instance};
pub use models::{City, Solution};
pub use utils::{distance, Metric};
pub use visited::VisitedSet;
