use crate::error::SfResult;
use crate::genome::{Alphabet, KnownAlphabet};
use crate::optimizer::EvolutionOptions;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub ga: GaParams,
    #[command(flatten)]
    pub run: RunLimits,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GaParams {
    #[arg(short = 'p', long, default_value_t = 250)]
    pub population_size: usize,
    #[arg(short = 'i', long, default_value_t = 250)]
    pub max_iterations: usize,
    #[arg(long, default_value_t = 0.1)]
    pub selection_rate: f64,
    #[arg(long, default_value_t = 0.01)]
    pub mutation_rate: f64,

    // Explicit symbols win over the preset.
    #[arg(long)]
    pub alphabet: Option<String>,
    #[arg(long, default_value_t = KnownAlphabet::Ascii64)]
    pub preset: KnownAlphabet,

    // Off: 6-bit genes regardless of alphabet size.
    #[arg(long, default_value_t = false)]
    pub derive_bit_width: bool,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            population_size: 250,
            max_iterations: 250,
            selection_rate: 0.1,
            mutation_rate: 0.01,
            alphabet: None,
            preset: KnownAlphabet::Ascii64,
            derive_bit_width: false,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunLimits {
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
    #[arg(short = 'T', long)]
    pub max_time_secs: Option<u64>,
}

impl GaParams {
    pub fn alphabet_symbols(&self) -> &str {
        self.alphabet
            .as_deref()
            .unwrap_or_else(|| self.preset.get_str())
    }

    pub fn build_alphabet(&self) -> SfResult<Alphabet> {
        if self.derive_bit_width {
            Alphabet::with_derived_width(self.alphabet_symbols())
        } else {
            Alphabet::new(self.alphabet_symbols())
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Checks numeric parameters and the alphabet without starting a run.
    pub fn validate(&self) -> SfResult<()> {
        EvolutionOptions::from(self).validate()?;
        self.ga.build_alphabet()?;
        Ok(())
    }

    /// Copies values the user typed on the command line over `self`,
    /// leaving file or default values for everything else.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(ga.population_size);
        update_if_present!(ga.max_iterations);
        update_if_present!(ga.selection_rate);
        update_if_present!(ga.mutation_rate);
        update_if_present!(ga.alphabet);
        update_if_present!(ga.preset);
        update_if_present!(ga.derive_bit_width);

        update_if_present!(run.seed);
        update_if_present!(run.max_time_secs);
    }
}
