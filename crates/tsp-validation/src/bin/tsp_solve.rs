//! Solves a city file with one or both exact solvers and reports cost, tour
//! and elapsed time.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::LevelFilter;
use tsp_core::{input::read_cities, Instance, Metric};
use tsp_validation::{logging::init_logger, run, Algorithm, Result, Run};

#[derive(Parser)]
#[command(name = "tsp-solve")]
#[command(about = "Exact TSP on a small city list (one 'id x y' record per line, or JSON)")]
#[command(version)]
struct Cli {
    /// City file
    instance: PathBuf,

    /// Solver to run; both when omitted
    #[arg(short, long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Edge cost model
    #[arg(short, long, default_value = "euclidean")]
    metric: Metric,

    /// Print runs as JSON instead of text
    #[arg(long)]
    json: bool,

    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() {
    let cli = Cli::parse();

    match solve(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Returns false when the solvers disagree on the optimum.
fn solve(cli: &Cli) -> Result<bool> {
    init_logger(cli.log_level)?;

    let cities = read_cities(&cli.instance)?;
    let instance = Instance::with_metric(cities, cli.metric)?;

    let algorithms = match cli.algorithm {
        Some(algorithm) => vec![algorithm],
        None => Algorithm::ALL.to_vec(),
    };
    let runs = algorithms
        .into_iter()
        .map(|algorithm| run(algorithm, &instance))
        .collect::<Result<Vec<Run>>>()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&runs)?);
    } else {
        println!("Solution for: {}", cli.instance.display());
        println!("Metric:       {}", instance.metric().as_str());
        for r in &runs {
            println!();
            println!("Algorithm:        {}", r.algorithm);
            println!("Minimum Distance: {}", r.solution.cost);
            println!("Minimum Path:     {}", r.solution.path_string());
            println!("Timer:            {:.3} ms", r.elapsed_ms);
        }
    }

    let agree = runs
        .windows(2)
        .all(|w| w[0].solution.cost_matches(w[1].solution.cost));
    if !agree {
        log::error!("solvers disagree on the optimal cost");
    }
    Ok(agree)
}
