use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use stringforge::config::Config;
use stringforge::error::SfResult;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with run parameters; flags typed on the command line win.
    #[arg(global = true, short = 'c', long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evolve a population toward TARGET and print the trace.
    Run(cmd::run::RunArgs),
    /// Show how TEXT is encoded into genes.
    Encode(cmd::encode::EncodeArgs),
    /// List the built-in alphabet presets.
    Alphabets,
}

fn resolve_config(path: Option<&str>, cli_config: &Config, matches: &ArgMatches) -> SfResult<Config> {
    match path {
        Some(p) => {
            info!("📂 Loading config from: {}", p);
            let mut config = Config::load_from_file(p)?;
            config.merge_from_cli(cli_config, matches);
            Ok(config)
        }
        None => Ok(cli_config.clone()),
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match &cli.command {
        Commands::Run(args) => {
            let sub = matches.subcommand_matches("run").unwrap_or(&matches);
            resolve_config(cli.config_file.as_deref(), &args.config, sub)
                .and_then(|config| cmd::run::run(args, config))
        }
        Commands::Encode(args) => {
            let sub = matches.subcommand_matches("encode").unwrap_or(&matches);
            resolve_config(cli.config_file.as_deref(), &args.config, sub)
                .and_then(|config| cmd::encode::run(args, &config))
        }
        Commands::Alphabets => cmd::alphabets::run(),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
