//! Population manager and generational driver.

pub mod crossover;
pub mod initialization;
pub mod mutation;
pub mod runner;
pub mod selection;

use crate::error::SfResult;
use crate::fitness;
use crate::genome::Chromosome;

pub use runner::{Evolution, EvolutionOptions, EvolutionResult, ProgressCallback, RunStatus};

pub type Population = Vec<Chromosome>;

/// Stable-sorts the population ascending by cost and returns the sorted costs.
///
/// Individuals with equal cost keep their relative order.
pub fn sort_by_cost(population: &mut Population, target: &Chromosome) -> SfResult<Vec<usize>> {
    let costs = population
        .iter()
        .map(|c| fitness::cost(c, target))
        .collect::<SfResult<Vec<_>>>()?;

    let mut scored: Vec<(usize, Chromosome)> = costs.into_iter().zip(population.drain(..)).collect();
    scored.sort_by_key(|(cost, _)| *cost);

    let (costs, sorted): (Vec<usize>, Population) = scored.into_iter().unzip();
    *population = sorted;
    Ok(costs)
}
