//! Cross-checks exhaustive search against Held-Karp on random instances and
//! writes one CSV row per instance.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::LevelFilter;
use tsp_core::Metric;
use tsp_validation::sweep::write_csv;
use tsp_validation::{logging::init_logger, run_sweep, Result, SweepConfig};

#[derive(Parser)]
#[command(name = "solver-sweep")]
#[command(about = "Agreement sweep between the exhaustive and Held-Karp solvers")]
#[command(version)]
struct Cli {
    /// JSON file with sweep settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    instances: Option<usize>,

    #[arg(long)]
    min_cities: Option<usize>,

    #[arg(long)]
    max_cities: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    workers: Option<usize>,

    #[arg(long)]
    extent: Option<f64>,

    #[arg(long)]
    metric: Option<Metric>,

    /// CSV output path; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

impl Cli {
    fn sweep_config(&self) -> Result<SweepConfig> {
        let mut config = match &self.config {
            Some(path) => SweepConfig::load(path)?,
            None => SweepConfig::default(),
        };

        if let Some(v) = self.instances {
            config.instances = v;
        }
        if let Some(v) = self.min_cities {
            config.min_cities = v;
        }
        if let Some(v) = self.max_cities {
            config.max_cities = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
        if let Some(v) = self.workers {
            config.workers = v;
        }
        if let Some(v) = self.extent {
            config.extent = v;
        }
        if let Some(v) = self.metric {
            config.metric = v;
        }
        if self.output.is_some() {
            config.output.clone_from(&self.output);
        }
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    match sweep(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn sweep(cli: &Cli) -> Result<bool> {
    init_logger(cli.log_level)?;
    let config = cli.sweep_config()?;
    let records = run_sweep(&config)?;

    match &config.output {
        Some(path) => write_csv(&records, BufWriter::new(File::create(path)?))?,
        None => write_csv(&records, io::stdout().lock())?,
    }

    let disagreements = records.iter().filter(|r| !r.agree).count();
    log::info!(
        "sweep finished: {} instances, {disagreements} disagreements",
        records.len()
    );
    Ok(disagreements == 0)
}
