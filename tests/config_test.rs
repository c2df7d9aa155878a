use rstest::rstest;
use stringforge::config::{Config, GaParams, RunLimits};
use stringforge::error::ForgeError;
use stringforge::genome::KnownAlphabet;

fn with_ga(edit: impl FnOnce(&mut GaParams)) -> Config {
    let mut cfg = Config::default();
    edit(&mut cfg.ga);
    cfg
}

#[test]
fn test_default_config_is_valid() {
    let cfg = Config::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.ga.alphabet_symbols().chars().count(), 64);
}

#[rstest]
#[case::zero_population(with_ga(|g| g.population_size = 0))]
#[case::zero_iterations(with_ga(|g| g.max_iterations = 0))]
#[case::negative_selection(with_ga(|g| g.selection_rate = -0.1))]
#[case::selection_above_one(with_ga(|g| g.selection_rate = 1.01))]
#[case::nan_mutation(with_ga(|g| g.mutation_rate = f64::NAN))]
#[case::mutation_above_one(with_ga(|g| g.mutation_rate = 2.0))]
fn test_rejects_bad_parameters(#[case] cfg: Config) {
    assert!(matches!(
        cfg.validate(),
        Err(ForgeError::InvalidConfiguration(_))
    ));
}

#[rstest]
#[case::empty(String::new())]
#[case::duplicate("abca".to_string())]
#[case::too_many((0..70u8).map(|i| (b'0' + i) as char).collect::<String>())]
fn test_rejects_bad_alphabet(#[case] symbols: String) {
    let cfg = with_ga(|g| g.alphabet = Some(symbols));
    assert!(matches!(cfg.validate(), Err(ForgeError::InvalidAlphabet(_))));
}

#[test]
fn test_zero_time_limit_rejected() {
    let cfg = Config {
        run: RunLimits {
            seed: None,
            max_time_secs: Some(0),
        },
        ..Config::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ForgeError::InvalidConfiguration(_))
    ));
}

#[rstest]
#[case(KnownAlphabet::Ascii64, 64, 6)]
#[case(KnownAlphabet::Lowercase, 27, 5)]
#[case(KnownAlphabet::Alnum, 64, 6)]
#[case(KnownAlphabet::Binary, 2, 1)]
#[case(KnownAlphabet::Dna, 4, 2)]
fn test_presets(#[case] preset: KnownAlphabet, #[case] size: usize, #[case] derived: usize) {
    let cfg = with_ga(|g| {
        g.preset = preset;
        g.derive_bit_width = true;
    });
    let alphabet = cfg.ga.build_alphabet().unwrap();
    assert_eq!(alphabet.len(), size);
    assert_eq!(alphabet.bit_width(), derived);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_config_json_roundtrip_defaults() {
    let cfg: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg.ga.population_size, 250);
    assert_eq!(cfg.ga.max_iterations, 250);
    assert_eq!(cfg.ga.preset, KnownAlphabet::Ascii64);
    assert!(cfg.run.seed.is_none());
}
