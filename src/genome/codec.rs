use super::{Alphabet, Chromosome, Gene};
use crate::error::{ForgeError, SfResult};

impl Alphabet {
    /// Encodes a symbol as its zero-padded, big-endian alphabet index.
    pub fn encode_char(&self, symbol: char) -> SfResult<Gene> {
        let index = self
            .position(symbol)
            .ok_or(ForgeError::InvalidSymbol(symbol))?;
        Ok(Gene::from_index(index, self.bit_width()))
    }

    pub fn decode_gene(&self, gene: &Gene) -> SfResult<char> {
        let index = gene.to_index();
        self.symbol(index).ok_or(ForgeError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn encode_string(&self, text: &str) -> SfResult<Chromosome> {
        text.chars()
            .map(|c| self.encode_char(c))
            .collect::<SfResult<Vec<_>>>()
            .map(Chromosome::new)
    }

    pub fn decode_chromosome(&self, chromosome: &Chromosome) -> SfResult<String> {
        chromosome
            .genes()
            .iter()
            .map(|g| self.decode_gene(g))
            .collect()
    }
}
