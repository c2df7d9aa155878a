//! Binary string genome: alphabet, genes, chromosomes and the codec between
//! them and plain text.

pub mod alphabet;
mod codec;

pub use alphabet::{Alphabet, KnownAlphabet, DEFAULT_BIT_WIDTH, MAX_SYMBOLS};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-width, big-endian bit vector holding one symbol's alphabet index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gene(Vec<bool>);

impl Gene {
    pub fn from_index(index: usize, width: usize) -> Self {
        let bits = (0..width).rev().map(|shift| (index >> shift) & 1 == 1).collect();
        Gene(bits)
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Gene(bits)
    }

    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Reads the bits as an unsigned big-endian integer.
    pub fn to_index(&self) -> usize {
        self.0
            .iter()
            .fold(0usize, |acc, &bit| (acc << 1) | bit as usize)
    }

    pub fn flip(&mut self, bit: usize) {
        self.0[bit] = !self.0[bit];
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// One candidate string: a gene per target character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chromosome(Vec<Gene>);

impl Chromosome {
    pub fn new(genes: Vec<Gene>) -> Self {
        Chromosome(genes)
    }

    pub fn genes(&self) -> &[Gene] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn gene_width(&self) -> usize {
        self.0.first().map_or(0, Gene::width)
    }

    /// Total number of bits across all genes.
    pub fn bit_len(&self) -> usize {
        self.0.iter().map(Gene::width).sum()
    }

    /// Flattened view of every bit, gene by gene.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().flat_map(|g| g.bits().iter().copied())
    }

    /// Returns a copy with the bit at the flattened position `bit_index` inverted,
    /// or `None` if the position is past the last bit.
    pub fn with_flipped_bit(&self, bit_index: usize) -> Option<Chromosome> {
        if bit_index >= self.bit_len() {
            return None;
        }
        let width = self.gene_width();
        let mut genes = self.0.clone();
        genes[bit_index / width].flip(bit_index % width);
        Some(Chromosome(genes))
    }
}

impl From<Vec<Gene>> for Chromosome {
    fn from(genes: Vec<Gene>) -> Self {
        Chromosome(genes)
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, gene) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", gene)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gene_is_big_endian_and_padded() {
        let gene = Gene::from_index(5, 6);
        assert_eq!(gene.to_string(), "000101");
        assert_eq!(gene.to_index(), 5);
        assert_eq!(Gene::from_index(63, 6).to_string(), "111111");
        assert_eq!(Gene::from_index(0, 6).to_string(), "000000");
    }

    #[test]
    fn test_flip_bit_leaves_original_untouched() {
        let original = Chromosome::new(vec![Gene::from_index(0, 6), Gene::from_index(1, 6)]);
        let flipped = original.with_flipped_bit(6).unwrap();

        assert_eq!(original.genes()[1].to_index(), 1);
        assert_eq!(flipped.genes()[1].to_index(), 33);
        assert_eq!(flipped.genes()[0], original.genes()[0]);
    }

    #[test]
    fn test_flip_past_end_is_none() {
        let c = Chromosome::new(vec![Gene::from_index(0, 6), Gene::from_index(1, 6)]);
        assert!(c.with_flipped_bit(11).is_some());
        assert!(c.with_flipped_bit(12).is_none());
        assert!(Chromosome::new(Vec::new()).with_flipped_bit(0).is_none());
    }

    #[test]
    fn test_flattened_bits() {
        let c = Chromosome::new(vec![Gene::from_index(2, 2), Gene::from_index(1, 2)]);
        let bits: Vec<bool> = c.bits().collect();
        assert_eq!(bits, vec![true, false, false, true]);
        assert_eq!(c.bit_len(), 4);
        assert_eq!(c.to_string(), "10 01");
    }
}
