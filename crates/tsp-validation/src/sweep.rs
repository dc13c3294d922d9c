use std::io::Write;
use std::thread;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;
use tsp_core::{City, Instance};

use crate::runner::{run, Algorithm};
use crate::{Error, Result, SweepConfig};

/// Outcome of solving one random instance with both solvers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepRecord {
    pub index: usize,
    pub cities: usize,
    pub exhaustive_cost: f64,
    pub held_karp_cost: f64,
    pub exhaustive_ms: f64,
    pub held_karp_ms: f64,
    pub agree: bool,
}

/// Random cities for instance `index`. The same config and index always
/// produce the same cities, independent of worker scheduling.
pub fn generate_instance(config: &SweepConfig, index: usize) -> Vec<City> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
    for _ in 0..index {
        rng.jump();
    }

    let n = rng.gen_range(config.min_cities..=config.max_cities);
    (0..n)
        .map(|i| {
            City::new(
                i as u32 + 1,
                rng.gen_range(0.0..config.extent),
                rng.gen_range(0.0..config.extent),
            )
        })
        .collect()
}

fn evaluate(config: &SweepConfig, index: usize) -> Result<SweepRecord> {
    let instance = Instance::with_metric(generate_instance(config, index), config.metric)?;

    let exhaustive = run(Algorithm::Exhaustive, &instance)?;
    let held_karp = run(Algorithm::HeldKarp, &instance)?;
    exhaustive.solution.verify(&instance)?;
    held_karp.solution.verify(&instance)?;

    let agree = held_karp
        .solution
        .cost_matches(exhaustive.solution.cost);
    if !agree {
        log::error!(
            "instance {index}: exhaustive {} != held-karp {}",
            exhaustive.solution.cost,
            held_karp.solution.cost
        );
    }

    Ok(SweepRecord {
        index,
        cities: instance.len(),
        exhaustive_cost: exhaustive.solution.cost,
        held_karp_cost: held_karp.solution.cost,
        exhaustive_ms: exhaustive.elapsed_ms,
        held_karp_ms: held_karp.elapsed_ms,
        agree,
    })
}

/// Solves `config.instances` random instances on `config.workers` threads
/// and returns the records ordered by instance index.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<SweepRecord>> {
    config.validate()?;

    let (job_tx, job_rx) = crossbeam_channel::unbounded::<usize>();
    let (result_tx, result_rx) = crossbeam_channel::unbounded::<Result<SweepRecord>>();

    for index in 0..config.instances {
        job_tx.send(index).map_err(|_| Error::Worker)?;
    }
    drop(job_tx);

    let workers = config.workers.min(config.instances.max(1));
    log::info!(
        "sweep: {} instances, {}..={} cities, {workers} workers",
        config.instances,
        config.min_cities,
        config.max_cities
    );

    thread::scope(|scope| {
        for worker in 0..workers {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                for index in job_rx.iter() {
                    log::debug!("worker {worker}: instance {index}");
                    if result_tx.send(evaluate(config, index)).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(result_tx);

    let mut records = result_rx.iter().collect::<Result<Vec<_>>>()?;
    if records.len() != config.instances {
        return Err(Error::Worker);
    }
    records.sort_by_key(|record| record.index);
    Ok(records)
}

pub fn write_csv<W: Write>(records: &[SweepRecord], mut out: W) -> std::io::Result<()> {
    writeln!(
        out,
        "index,cities,exhaustive_cost,held_karp_cost,exhaustive_ms,held_karp_ms,agree"
    )?;
    for r in records {
        writeln!(
            out,
            "{},{},{},{},{:.3},{:.3},{}",
            r.index,
            r.cities,
            r.exhaustive_cost,
            r.held_karp_cost,
            r.exhaustive_ms,
            r.held_karp_ms,
            r.agree
        )?;
    }
    out.flush()
}
