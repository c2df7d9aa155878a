use crate::reports;
use strum::IntoEnumIterator;
use stringforge::error::SfResult;
use stringforge::genome::{Alphabet, KnownAlphabet};

pub fn run() -> SfResult<()> {
    let mut rows = Vec::new();
    for preset in KnownAlphabet::iter() {
        let fixed = Alphabet::new(preset.get_str())?;
        let derived = Alphabet::with_derived_width(preset.get_str())?;
        rows.push((preset, fixed, derived));
    }
    reports::print_alphabet_table(&rows);
    Ok(())
}
