//! Service entry points for hosts (CLI, web front ends) that only need the
//! result message and the evaluation trace.

use crate::config::Config;
use crate::error::SfResult;
use crate::genome::Alphabet;
use crate::optimizer::{Evolution, EvolutionOptions, ProgressCallback, RunStatus};
use crate::trace::{EvaluationTrace, TraceRecord};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GaOutcome {
    pub status: RunStatus,
    pub message: String,
    pub best: String,
    pub best_cost: usize,
    pub generations: usize,
    pub trace: EvaluationTrace,
}

/// Runs one GA from plain positional parameters with an unseeded
/// random source.
pub fn run_ga(
    population_size: usize,
    selection_rate: f64,
    mutation_rate: f64,
    alphabet: &str,
    target: &str,
    max_iterations: usize,
) -> SfResult<GaOutcome> {
    let options = EvolutionOptions {
        population_size,
        selection_rate,
        mutation_rate,
        max_iterations,
        max_time: None,
    };
    options.validate()?;
    let alphabet = Alphabet::new(alphabet)?;
    run_evolution(alphabet, target, options, None, |_: &TraceRecord| true)
}

/// Runs one GA from a resolved [`Config`], honouring its seed and time limit.
pub fn run_with_config(config: &Config, target: &str) -> SfResult<GaOutcome> {
    run_with_progress(config, target, |_: &TraceRecord| true)
}

pub fn run_with_progress<CB: ProgressCallback>(
    config: &Config,
    target: &str,
    callback: CB,
) -> SfResult<GaOutcome> {
    let options = EvolutionOptions::from(config);
    options.validate()?;
    let alphabet = config.ga.build_alphabet()?;
    run_evolution(alphabet, target, options, config.run.seed, callback)
}

fn run_evolution<CB: ProgressCallback>(
    alphabet: Alphabet,
    target: &str,
    options: EvolutionOptions,
    seed: Option<u64>,
    callback: CB,
) -> SfResult<GaOutcome> {
    let result = Evolution::new(alphabet, target, options, seed)?.run(callback)?;

    Ok(GaOutcome {
        status: result.status,
        message: result.message(),
        best: result.best,
        best_cost: result.best_cost,
        generations: result.generations,
        trace: result.trace,
    })
}
