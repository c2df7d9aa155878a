use crate::error::{ForgeError, SfResult};
use crate::genome::Chromosome;

/// Hamming distance, in bits, between a chromosome and the encoded target.
///
/// Lower is better; 0 is an exact match. Both sides must carry the same
/// number of bits.
pub fn cost(chromosome: &Chromosome, target: &Chromosome) -> SfResult<usize> {
    let expected = target.bit_len();
    let found = chromosome.bit_len();
    if expected != found {
        return Err(ForgeError::LengthMismatch { expected, found });
    }

    Ok(chromosome
        .bits()
        .zip(target.bits())
        .filter(|(a, b)| a != b)
        .count())
}

/// Upper bound of [`cost`] for a target: every bit wrong.
pub fn max_cost(target: &Chromosome) -> usize {
    target.bit_len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{Alphabet, Gene};

    #[test]
    fn test_identical_is_zero() {
        let alphabet = Alphabet::new("abcdefgh").unwrap();
        let t = alphabet.encode_string("badge").unwrap();
        assert_eq!(cost(&t, &t).unwrap(), 0);
    }

    #[test]
    fn test_counts_bit_mismatches() {
        let alphabet = Alphabet::new("abcdefgh").unwrap();
        let target = alphabet.encode_string("aa").unwrap();
        // 'h' = 000111, three bits away from 'a' = 000000
        let candidate = alphabet.encode_string("ha").unwrap();
        assert_eq!(cost(&candidate, &target).unwrap(), 3);
        assert_eq!(cost(&target, &candidate).unwrap(), 3);
    }

    #[test]
    fn test_all_bits_wrong_hits_bound() {
        let target = Chromosome::new(vec![Gene::from_index(0, 6); 3]);
        let inverse = Chromosome::new(vec![Gene::from_index(63, 6); 3]);
        assert_eq!(cost(&inverse, &target).unwrap(), max_cost(&target));
        assert_eq!(max_cost(&target), 18);
    }

    #[test]
    fn test_length_mismatch() {
        let alphabet = Alphabet::new("ab").unwrap();
        let target = alphabet.encode_string("ab").unwrap();
        let short = alphabet.encode_string("a").unwrap();
        assert!(matches!(
            cost(&short, &target),
            Err(ForgeError::LengthMismatch {
                expected: 12,
                found: 6
            })
        ));
    }
}
