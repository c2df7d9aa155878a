use super::Population;
use crate::error::{ForgeError, SfResult};
use crate::genome::Chromosome;
use fastrand::Rng;

/// Uniform per-gene crossover: each gene comes from either parent with
/// probability 0.5.
pub fn mate(parent1: &Chromosome, parent2: &Chromosome, rng: &mut Rng) -> SfResult<Chromosome> {
    if parent1.len() != parent2.len() {
        return Err(ForgeError::LengthMismatch {
            expected: parent1.len(),
            found: parent2.len(),
        });
    }

    let genes = parent1
        .genes()
        .iter()
        .zip(parent2.genes())
        .map(|(g1, g2)| if rng.bool() { g1.clone() } else { g2.clone() })
        .collect::<Vec<_>>();

    Ok(Chromosome::new(genes))
}

/// Produces `count` children, both parents of each drawn uniformly with
/// replacement from `survivors`.
pub fn breed(survivors: &[Chromosome], count: usize, rng: &mut Rng) -> SfResult<Population> {
    if survivors.is_empty() {
        return if count == 0 {
            Ok(Vec::new())
        } else {
            Err(ForgeError::InvalidConfiguration(
                "cannot breed children from an empty survivor set".to_string(),
            ))
        };
    }

    (0..count)
        .map(|_| {
            let p1 = &survivors[rng.usize(0..survivors.len())];
            let p2 = &survivors[rng.usize(0..survivors.len())];
            mate(p1, p2, rng)
        })
        .collect()
}
