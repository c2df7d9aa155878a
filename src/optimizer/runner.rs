use super::crossover::breed;
use super::initialization::create_population;
use super::mutation::mutate;
use super::selection::selection;
use super::{sort_by_cost, Population};
use crate::config::Config;
use crate::error::{ForgeError, SfResult};
use crate::genome::{Alphabet, Chromosome};
use crate::trace::{EvaluationTrace, TraceRecord};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use strum_macros::Display;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    pub population_size: usize,
    pub selection_rate: f64,
    pub mutation_rate: f64,
    pub max_iterations: usize,
    pub max_time: Option<Duration>,
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 250,
            selection_rate: 0.1,
            mutation_rate: 0.01,
            max_iterations: 250,
            max_time: None,
        }
    }
}

impl From<&Config> for EvolutionOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            population_size: cfg.ga.population_size,
            selection_rate: cfg.ga.selection_rate,
            mutation_rate: cfg.ga.mutation_rate,
            max_iterations: cfg.ga.max_iterations,
            max_time: cfg.run.max_time_secs.map(Duration::from_secs),
        }
    }
}

impl EvolutionOptions {
    pub fn validate(&self) -> SfResult<()> {
        if self.population_size == 0 {
            return Err(ForgeError::InvalidConfiguration(
                "population_size must be at least 1".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(ForgeError::InvalidConfiguration(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        // Written as negated range checks so NaN is rejected too.
        if !(self.selection_rate > 0.0 && self.selection_rate <= 1.0) {
            return Err(ForgeError::InvalidConfiguration(format!(
                "selection_rate must be in (0, 1], got {}",
                self.selection_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ForgeError::InvalidConfiguration(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.max_time == Some(Duration::ZERO) {
            return Err(ForgeError::InvalidConfiguration(
                "max_time must be positive or unset".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Running,
    Converged,
    Exhausted,
    Cancelled,
}

impl RunStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunStatus::Running)
    }
}

/// Receives every trace record as it is appended.
/// Returning `false` cancels the run after the current generation.
pub trait ProgressCallback {
    fn on_generation(&self, record: &TraceRecord) -> bool;
}

impl<F: Fn(&TraceRecord) -> bool> ProgressCallback for F {
    fn on_generation(&self, record: &TraceRecord) -> bool {
        self(record)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionResult {
    pub status: RunStatus,
    pub generations: usize,
    pub best: String,
    pub best_cost: usize,
    pub best_chromosome: Chromosome,
    pub trace: EvaluationTrace,
}

impl EvolutionResult {
    pub fn message(&self) -> String {
        match self.status {
            RunStatus::Converged => {
                format!("Target was found in {} iterations.", self.generations)
            }
            RunStatus::Exhausted => format!(
                "Target was not found. The best solution is {} with cost {}",
                self.best, self.best_cost
            ),
            RunStatus::Cancelled => format!(
                "Run was cancelled after {} iterations. The best solution is {} with cost {}",
                self.generations, self.best, self.best_cost
            ),
            RunStatus::Running => format!(
                "Run is still in progress at iteration {}.",
                self.generations
            ),
        }
    }
}

/// Generational GA over one target string.
///
/// Each [`step`](Evolution::step) sorts the population by cost, records the
/// generation's best in the trace, and either stops (converged, iteration cap,
/// cancellation) or replaces the population with survivors plus mutated
/// children.
pub struct Evolution {
    alphabet: Alphabet,
    target: Chromosome,
    options: EvolutionOptions,
    population: Population,
    generation: usize,
    status: RunStatus,
    trace: EvaluationTrace,
    best: Option<(Chromosome, usize)>,
    rng: fastrand::Rng,
    started: Instant,
}

impl Evolution {
    /// Validates every input, then creates generation 1.
    pub fn new(
        alphabet: Alphabet,
        target: &str,
        options: EvolutionOptions,
        seed: Option<u64>,
    ) -> SfResult<Self> {
        options.validate()?;
        let encoded_target = encode_target(&alphabet, target)?;

        if alphabet.unassigned_codes() > 0 {
            warn!(
                "Alphabet of {} symbols leaves {} of {} gene codes unassigned; a mutation into one is fatal",
                alphabet.len(),
                alphabet.unassigned_codes(),
                1usize << alphabet.bit_width()
            );
        }

        let mut rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };

        info!(
            "Evolving '{}' | population {} | selection {} | mutation {} | max iterations {}",
            target,
            options.population_size,
            options.selection_rate,
            options.mutation_rate,
            options.max_iterations
        );

        let population = create_population(&alphabet, target, options.population_size, &mut rng)?;

        Ok(Self {
            alphabet,
            target: encoded_target,
            options,
            population,
            generation: 1,
            status: RunStatus::Running,
            trace: EvaluationTrace::new(),
            best: None,
            rng,
            started: Instant::now(),
        })
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn trace(&self) -> &EvaluationTrace {
        &self.trace
    }

    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Total bits per chromosome (`target length × bit width`).
    pub fn total_bits(&self) -> usize {
        self.target.bit_len()
    }

    /// Evaluates the current generation and advances to the next one.
    ///
    /// A no-op once the run has reached a terminal status.
    pub fn step<CB: ProgressCallback>(&mut self, callback: &CB) -> SfResult<RunStatus> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        let costs = sort_by_cost(&mut self.population, &self.target)?;
        let best_cost = costs[0];
        let best = self.alphabet.decode_chromosome(&self.population[0])?;

        debug!(
            "Gen {:5} | Best: {} | Cost: {}",
            self.generation, best, best_cost
        );

        let record = TraceRecord {
            generation: self.generation,
            best,
            cost: best_cost,
        };
        let keep_going = callback.on_generation(&record);
        self.trace.push(record);
        self.best = Some((self.population[0].clone(), best_cost));

        if best_cost == 0 {
            self.status = RunStatus::Converged;
            info!("Target found in {} iterations", self.generation);
            return Ok(self.status);
        }

        if self.generation >= self.options.max_iterations {
            self.status = RunStatus::Exhausted;
            info!(
                "Iteration cap {} reached, best cost {}",
                self.options.max_iterations, best_cost
            );
            return Ok(self.status);
        }

        let timed_out = self
            .options
            .max_time
            .is_some_and(|limit| self.started.elapsed() >= limit);
        if !keep_going || timed_out {
            self.status = RunStatus::Cancelled;
            info!("Run cancelled at iteration {}", self.generation);
            return Ok(self.status);
        }

        let survivors = selection(
            &self.population,
            self.options.population_size,
            self.options.selection_rate,
        );
        let child_count = self.options.population_size - survivors.len();
        let children = breed(&survivors, child_count, &mut self.rng)?;
        let children = mutate(
            &children,
            self.options.mutation_rate,
            self.total_bits(),
            &mut self.rng,
        )?;

        let mut next = survivors;
        next.extend(children);
        debug_assert_eq!(next.len(), self.options.population_size);

        self.population = next;
        self.generation += 1;
        Ok(self.status)
    }

    /// Steps until a terminal status is reached.
    pub fn run<CB: ProgressCallback>(mut self, callback: CB) -> SfResult<EvolutionResult> {
        while !self.status.is_terminal() {
            self.step(&callback)?;
        }
        self.into_result()
    }

    /// Snapshot of the run so far. Requires at least one evaluated generation.
    pub fn into_result(self) -> SfResult<EvolutionResult> {
        let (best_chromosome, best_cost) = self.best.ok_or_else(|| {
            ForgeError::InvalidConfiguration("no generation has been evaluated yet".to_string())
        })?;
        let best = self.alphabet.decode_chromosome(&best_chromosome)?;

        Ok(EvolutionResult {
            status: self.status,
            generations: self.generation,
            best,
            best_cost,
            best_chromosome,
            trace: self.trace,
        })
    }
}

fn encode_target(alphabet: &Alphabet, target: &str) -> SfResult<Chromosome> {
    if target.is_empty() {
        return Err(ForgeError::InvalidTarget(
            "target must not be empty".to_string(),
        ));
    }
    if let Some(c) = target.chars().find(|&c| !alphabet.contains(c)) {
        return Err(ForgeError::InvalidTarget(format!(
            "symbol '{}' is not part of the alphabet",
            c
        )));
    }
    alphabet.encode_string(target)
}
