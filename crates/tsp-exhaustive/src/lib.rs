#![deny(clippy::all)]

mod solver;

pub use solver::ExhaustiveSolver;

use tsp_core::{City, Instance, Result, Solution};

/// Solves `cities` by enumerating all `(n-1)!` tours that start at `cities[0]`.
pub fn solve_exhaustive(cities: &[City]) -> Result<Solution> {
    let instance = Instance::new(cities.to_vec())?;
    ExhaustiveSolver::new(&instance).map(|mut solver| solver.solve())
}
