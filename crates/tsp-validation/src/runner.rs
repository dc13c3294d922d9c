use std::fmt;
use std::time::Instant;

use clap::ValueEnum;
use serde::Serialize;
use tsp_core::{Instance, Solution};
use tsp_exhaustive::ExhaustiveSolver;
use tsp_held_karp::HeldKarpSolver;

use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Depth-first enumeration of every tour
    #[value(alias = "dfs")]
    Exhaustive,
    /// Held-Karp dynamic programming
    #[value(alias = "dp")]
    HeldKarp,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Exhaustive, Algorithm::HeldKarp];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Exhaustive => "exhaustive",
            Algorithm::HeldKarp => "held-karp",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timed solve.
#[derive(Clone, Debug, Serialize)]
pub struct Run {
    pub algorithm: Algorithm,
    #[serde(flatten)]
    pub solution: Solution,
    pub elapsed_ms: f64,
}

pub fn run(algorithm: Algorithm, instance: &Instance) -> Result<Run> {
    let start = Instant::now();
    let solution = match algorithm {
        Algorithm::Exhaustive => ExhaustiveSolver::new(instance)?.solve(),
        Algorithm::HeldKarp => HeldKarpSolver::new(instance)?.solve(),
    };
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    log::info!(
        "{algorithm}: n={} cost={} elapsed_ms={elapsed_ms:.3}",
        instance.len(),
        solution.cost
    );
    Ok(Run {
        algorithm,
        solution,
        elapsed_ms,
    })
}
