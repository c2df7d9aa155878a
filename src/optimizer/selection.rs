use crate::genome::Chromosome;

/// Number of survivors kept by truncation: `ceil(rate * size)`.
pub fn survivor_count(size: usize, rate: f64) -> usize {
    (rate * size as f64).ceil() as usize
}

/// Elitist truncation: keeps the front of a population already sorted
/// ascending by cost.
pub fn selection(population: &[Chromosome], size: usize, rate: f64) -> Vec<Chromosome> {
    let kept = survivor_count(size, rate).min(population.len());
    population[..kept].to_vec()
}
