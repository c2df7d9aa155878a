use super::Population;
use crate::error::SfResult;
use crate::genome::Alphabet;
use fastrand::Rng;

/// Creates `size` independent chromosomes of `target`'s length, each symbol
/// drawn uniformly (with replacement) from the alphabet.
pub fn create_population(
    alphabet: &Alphabet,
    target: &str,
    size: usize,
    rng: &mut Rng,
) -> SfResult<Population> {
    let length = target.chars().count();
    let symbols = alphabet.symbols();

    (0..size)
        .map(|_| {
            let candidate: String = (0..length)
                .map(|_| symbols[rng.usize(0..symbols.len())])
                .collect();
            alphabet.encode_string(&candidate)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::KnownAlphabet;

    #[test]
    fn test_shape() {
        let alphabet = Alphabet::new(KnownAlphabet::Ascii64.get_str()).unwrap();
        let mut rng = Rng::with_seed(7);
        let pop = create_population(&alphabet, "hello", 40, &mut rng).unwrap();

        assert_eq!(pop.len(), 40);
        for c in &pop {
            assert_eq!(c.len(), 5);
            assert!(c.genes().iter().all(|g| g.width() == 6));
            assert!(alphabet.decode_chromosome(c).is_ok());
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let alphabet = Alphabet::new("abcdef").unwrap();
        let a = create_population(&alphabet, "abc", 10, &mut Rng::with_seed(99)).unwrap();
        let b = create_population(&alphabet, "abc", 10, &mut Rng::with_seed(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_symbol_alphabet() {
        let alphabet = Alphabet::new("x").unwrap();
        let pop = create_population(&alphabet, "xxx", 3, &mut Rng::with_seed(1)).unwrap();
        for c in &pop {
            assert_eq!(alphabet.decode_chromosome(c).unwrap(), "xxx");
        }
    }
}
