use crate::error::{ForgeError, SfResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumIter, EnumString};

/// Gene width used unless a derived width is requested, independent of alphabet size.
pub const DEFAULT_BIT_WIDTH: usize = 6;

/// Largest alphabet a 6-bit gene can address.
pub const MAX_SYMBOLS: usize = 1 << DEFAULT_BIT_WIDTH;

/// Ordered set of distinct symbols a run evolves strings over.
///
/// The alphabet also fixes the gene width, so every encode/decode call is
/// parameterised by the same immutable value for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    positions: HashMap<char, usize>,
    bit_width: usize,
}

impl Alphabet {
    /// Builds an alphabet with the default 6-bit gene width.
    pub fn new(symbols: &str) -> SfResult<Self> {
        Self::build(symbols, DEFAULT_BIT_WIDTH)
    }

    /// Builds an alphabet whose gene width is `ceil(log2(size))`, at least 1.
    pub fn with_derived_width(symbols: &str) -> SfResult<Self> {
        let size = symbols.chars().count();
        Self::build(symbols, derived_bit_width(size))
    }

    fn build(symbols: &str, bit_width: usize) -> SfResult<Self> {
        let symbols: Vec<char> = symbols.chars().collect();

        if symbols.is_empty() {
            return Err(ForgeError::InvalidAlphabet(
                "alphabet must contain at least one symbol".to_string(),
            ));
        }
        if symbols.len() > MAX_SYMBOLS || symbols.len() > (1usize << bit_width) {
            return Err(ForgeError::InvalidAlphabet(format!(
                "{} symbols do not fit into {}-bit genes",
                symbols.len(),
                bit_width
            )));
        }

        let mut positions = HashMap::with_capacity(symbols.len());
        for (i, &c) in symbols.iter().enumerate() {
            if positions.insert(c, i).is_some() {
                return Err(ForgeError::InvalidAlphabet(format!(
                    "duplicate symbol '{}' at position {}",
                    c, i
                )));
            }
        }

        Ok(Self {
            symbols,
            positions,
            bit_width,
        })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn bit_width(&self) -> usize {
        self.bit_width
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn position(&self, symbol: char) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }

    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.positions.contains_key(&symbol)
    }

    /// Number of gene codes that map to no symbol.
    ///
    /// Mutation can flip a gene into one of these codes; decoding it then
    /// fails with [`ForgeError::IndexOutOfRange`].
    pub fn unassigned_codes(&self) -> usize {
        (1usize << self.bit_width) - self.symbols.len()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: String = self.symbols.iter().collect();
        write!(f, "{}", s)
    }
}

pub fn derived_bit_width(size: usize) -> usize {
    if size <= 2 {
        1
    } else {
        (usize::BITS - (size - 1).leading_zeros()) as usize
    }
}

#[derive(
    Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum KnownAlphabet {
    #[default]
    #[strum(to_string = "ascii64")]
    Ascii64,
    Lowercase,
    Alnum,
    Binary,
    Dna,
}

impl KnownAlphabet {
    pub fn get_str(&self) -> &'static str {
        match self {
            // 64 symbols, so every 6-bit code decodes.
            Self::Ascii64 => "abcdefghijklmnopqrstuvwxyz0123456789 .,;:?!_+-*/'\"()[]{}<>@#$%&=",
            Self::Lowercase => "abcdefghijklmnopqrstuvwxyz ",
            Self::Alnum => "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 .",
            Self::Binary => "01",
            Self::Dna => "ACGT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_width_is_fixed() {
        let alphabet = Alphabet::new("ab").unwrap();
        assert_eq!(alphabet.bit_width(), 6);
        assert_eq!(alphabet.unassigned_codes(), 62);
    }

    #[test]
    fn test_derived_width() {
        assert_eq!(derived_bit_width(1), 1);
        assert_eq!(derived_bit_width(2), 1);
        assert_eq!(derived_bit_width(3), 2);
        assert_eq!(derived_bit_width(4), 2);
        assert_eq!(derived_bit_width(5), 3);
        assert_eq!(derived_bit_width(48), 6);
        assert_eq!(derived_bit_width(64), 6);

        let dna = Alphabet::with_derived_width("ACGT").unwrap();
        assert_eq!(dna.bit_width(), 2);
        assert_eq!(dna.unassigned_codes(), 0);
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = Alphabet::new("abca").unwrap_err();
        assert!(matches!(err, ForgeError::InvalidAlphabet(_)));
    }

    #[test]
    fn test_rejects_oversized_and_empty() {
        let big: String = (0..65u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
        assert!(matches!(
            Alphabet::new(&big),
            Err(ForgeError::InvalidAlphabet(_))
        ));
        assert!(matches!(
            Alphabet::new(""),
            Err(ForgeError::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in KnownAlphabet::iter() {
            let alphabet = Alphabet::new(preset.get_str())
                .unwrap_or_else(|e| panic!("preset {} invalid: {}", preset, e));
            assert!(alphabet.len() <= MAX_SYMBOLS);
        }
        assert_eq!(KnownAlphabet::Ascii64.get_str().chars().count(), 64);
        assert_eq!(KnownAlphabet::Alnum.get_str().chars().count(), 64);
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(KnownAlphabet::Ascii64.to_string(), "ascii64");
        assert_eq!("dna".parse::<KnownAlphabet>().unwrap(), KnownAlphabet::Dna);
    }
}
