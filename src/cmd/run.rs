use crate::reports;
use clap::Args;
use std::path::PathBuf;
use stringforge::api;
use stringforge::config::Config;
use stringforge::error::SfResult;
use stringforge::trace::{TraceFormat, TraceRecord};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// String the population should converge to.
    pub target: String,

    #[command(flatten)]
    pub config: Config,

    /// Write the full evaluation trace to this file.
    #[arg(short = 'o', long)]
    pub trace_out: Option<PathBuf>,

    #[arg(short = 'f', long, default_value_t = TraceFormat::Csv)]
    pub format: TraceFormat,

    /// Report and tabulate every N-th generation (the last one is always shown).
    #[arg(short = 'e', long, default_value_t = 10)]
    pub every: usize,

    /// Print the whole outcome as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &RunArgs, config: Config) -> SfResult<()> {
    let every = args.every.max(1);
    info!("🧬 Target: {}", args.target);

    let progress = |record: &TraceRecord| {
        if record.generation % every == 0 {
            info!(
                "Gen {:5} | Best: {} | Cost: {}",
                record.generation, record.best, record.cost
            );
        }
        true
    };
    let outcome = api::run_with_progress(&config, &args.target, progress)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("The target chosen by user was: {}", args.target);
        reports::print_trace_table(&outcome.trace, every);
        println!("Status: {}", outcome.status);
        println!("{}", outcome.message);
    }

    if let Some(path) = &args.trace_out {
        outcome.trace.save(path, args.format)?;
        info!("💾 Trace written to {} ({})", path.display(), args.format);
    }

    Ok(())
}
