use crate::reports;
use clap::Args;
use stringforge::config::Config;
use stringforge::error::SfResult;

#[derive(Args, Debug, Clone)]
pub struct EncodeArgs {
    pub text: String,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: &EncodeArgs, config: &Config) -> SfResult<()> {
    let alphabet = config.ga.build_alphabet()?;
    let chromosome = alphabet.encode_string(&args.text)?;

    reports::print_encoding_table(&alphabet, &args.text, &chromosome);
    println!("Bit width: {}", alphabet.bit_width());
    println!("Total bits: {}", chromosome.bit_len());
    println!("Decoded: {}", alphabet.decode_chromosome(&chromosome)?);
    Ok(())
}
