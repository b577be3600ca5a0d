//! Read `N S` and `N` items from stdin, print `length start` (1-based).
//!
//! ```text
//! $ echo "5 0 1 -2 3 -4 5" | cargo run --bin longest_run
//! 4 1
//! ```

use std::io;
use std::process::ExitCode;

use bounded_run::input::{format_answer, read_instance};
use bounded_run::strategies::StrategyKind;
use bounded_run::{DiagnosticLevel, RunEngineBuilder};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// prefix-tree, brute-force or shrink-memo
    #[arg(short, long, default_value_t = StrategyKind::PrefixTree)]
    strategy: StrategyKind,

    /// Also print the sum of the reported run.
    #[arg(long)]
    with_sum: bool,

    /// off, assert or trace; messages go to stderr
    #[arg(short, long, default_value_t = DiagnosticLevel::Off)]
    diagnostics: DiagnosticLevel,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = match args.diagnostics {
        DiagnosticLevel::Off => "off",
        DiagnosticLevel::Assert => "warn",
        DiagnosticLevel::Trace => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let instance = match read_instance(io::stdin().lock()) {
        Ok(instance) => instance,
        Err(err) => {
            eprintln!("longest_run: {err}");
            return ExitCode::from(2);
        }
    };

    let engine = RunEngineBuilder::new(args.strategy.strategy())
        .diagnostics(args.diagnostics)
        .build();
    let best = engine.run(&instance.items, instance.max_sum);

    println!("{}", format_answer(&best, args.with_sum));
    ExitCode::SUCCESS
}
