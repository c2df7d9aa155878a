use super::Population;
use crate::error::{ForgeError, SfResult};
use crate::genome::Chromosome;
use fastrand::Rng;

/// With probability `mutation_rate` per chromosome, flips one bit chosen
/// uniformly among its `total_bits`. Always returns fresh copies.
///
/// Every chromosome must carry exactly `total_bits` bits.
pub fn mutate(
    population: &[Chromosome],
    mutation_rate: f64,
    total_bits: usize,
    rng: &mut Rng,
) -> SfResult<Population> {
    population
        .iter()
        .map(|chromosome| {
            let found = chromosome.bit_len();
            if found != total_bits {
                return Err(ForgeError::LengthMismatch {
                    expected: total_bits,
                    found,
                });
            }
            if total_bits > 0 && rng.f64() < mutation_rate {
                chromosome
                    .with_flipped_bit(rng.usize(0..total_bits))
                    .ok_or(ForgeError::LengthMismatch {
                        expected: total_bits,
                        found,
                    })
            } else {
                Ok(chromosome.clone())
            }
        })
        .collect()
}
