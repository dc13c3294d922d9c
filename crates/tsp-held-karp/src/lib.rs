#![deny(clippy::all)]

mod context;
mod solver;

pub use context::MemoTable;
pub use solver::HeldKarpSolver;

use tsp_core::{City, Instance, Result, Solution};

/// Solves `cities` with Held-Karp dynamic programming.
///
/// Fails with `CapacityExceeded` when there are more than
/// [`HeldKarpSolver::MAX_CITIES`] cities.
pub fn solve_dynamic_programming(cities: &[City]) -> Result<Solution> {
    let instance = Instance::new(cities.to_vec())?;
    Ok(HeldKarpSolver::new(&instance)?.solve())
}
