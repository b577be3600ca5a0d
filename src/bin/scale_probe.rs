use std::collections::BTreeMap;
use std::io;
use std::time::Instant;

use bounded_run::strategies::{BruteForce, StrategyKind};
use bounded_run::{Diagnostics, RunEngine, RunError, RunStrategy, Subsequence};
use clap::Parser;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use tracing_subscriber::EnvFilter;

const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 100_000];
const MAX_SUM: i64 = 5000;

#[derive(Parser, Debug)]
#[command(
    about = "Time every strategy over growing inputs and check it against the brute-force oracle",
    after_help = "Examples:\n  cargo run --release --bin scale_probe\n  cargo run --release --bin scale_probe -- --format table --verify-limit 4096"
)]
struct Options {
    /// csv, table or json
    #[arg(long, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest input verified against the brute-force oracle.
    #[arg(long, default_value_t = 16384)]
    verify_limit: usize,

    /// Largest input handed to the memoized strategy (its cache is quadratic).
    #[arg(long, default_value_t = 1024)]
    memo_limit: usize,

    /// Seed for the deterministic item generator.
    #[arg(long, default_value_t = 444)]
    seed: u64,
}

fn main() {
    let options = Options::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Bounded-run scaling probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Items are drawn from [-200, 800) with threshold {MAX_SUM}.");
    eprintln!("  • wall_s: wall-clock seconds for one solve");
    eprintln!("  • rss_delta_kib: resident memory growth during the solve");
    eprintln!(
        "  • status: 'passed' = matches brute force (up to n={}), 'not_checked' = too large to verify",
        options.verify_limit
    );
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();
    let total = StrategyKind::ALL.len();

    for (idx, kind) in StrategyKind::ALL.into_iter().enumerate() {
        eprintln!("[{}/{}] Strategy {kind}...", idx + 1, total);
        measurements.extend(run_strategy(kind, &options, &mut sys));
        eprintln!();
    }

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

#[derive(Copy, Clone, Debug)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = RunError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(RunError::UnknownFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        })
    }
}

impl OutputFormat {
    fn write(self, measurements: &[Measurement]) -> io::Result<()> {
        use io::Write;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self {
            OutputFormat::Csv => write_csv(&mut out, measurements),
            OutputFormat::Table => write_table(&mut out, measurements),
            OutputFormat::Json => write_json(&mut out, measurements),
        }?;
        out.flush()
    }
}

#[derive(Clone)]
struct Measurement {
    strategy: &'static str,
    n: usize,
    best: Subsequence,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_strategy(kind: StrategyKind, options: &Options, sys: &mut System) -> Vec<Measurement> {
    let engine = RunEngine::new(kind.strategy());
    let sizes: Vec<usize> = SIZES
        .iter()
        .copied()
        .filter(|&n| kind != StrategyKind::ShrinkMemo || n <= options.memo_limit)
        .filter(|&n| kind != StrategyKind::BruteForce || n <= options.verify_limit)
        .collect();
    let total = sizes.len();

    sizes
        .into_iter()
        .enumerate()
        .map(|(idx, n)| {
            eprint!("      [{}/{}] n={}... ", idx + 1, total, n);
            let items = deterministic_items(n, options.seed);
            let m = measure(engine.strategy().name(), n, sys, || {
                engine.run(&items, MAX_SUM)
            });
            let (status, detail) = if n <= options.verify_limit {
                verify(&items, &m.best)
            } else {
                (VerificationStatus::NotChecked, None)
            };
            let m = Measurement {
                status,
                detail,
                ..m
            };
            eprintln!(
                "{} length={} start={} sum={} time={:.3}s status={}",
                m.status.icon(),
                m.best.length,
                m.best.one_based_start(),
                m.best.sum,
                m.wall_s,
                m.status.label()
            );
            m
        })
        .collect()
}

fn verify(items: &[i32], got: &Subsequence) -> (VerificationStatus, Option<String>) {
    let expected = BruteForce.solve(items, MAX_SUM, &Diagnostics::silent());
    if expected == *got {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {expected:?}, got {got:?}")),
        )
    }
}

fn measure<F>(strategy: &'static str, n: usize, sys: &mut System, solve: F) -> Measurement
where
    F: FnOnce() -> Subsequence,
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let best = solve();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        strategy,
        n,
        best,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        status: VerificationStatus::NotChecked,
        detail: None,
    }
}

fn print_summary(measurements: &[Measurement]) {
    let failed = measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Failed)
        .count();

    let mut by_strategy: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_strategy.entry(m.strategy).or_default().push(m);
    }

    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));
    for (strategy, ms) in &by_strategy {
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!("  {strategy}:");
        eprintln!("    Runs: {}", ms.len());
        eprintln!("    Slowest: {max_time:.3}s, max RSS delta: {max_mem} KiB");
        if let (Some(first), Some(last)) = (ms.first(), ms.last()) {
            if first.wall_s > 0.0 && last.n > first.n {
                eprintln!(
                    "    Scaling: {:.1}x time for {:.1}x input",
                    last.wall_s / first.wall_s,
                    last.n as f64 / first.n as f64
                );
            }
        }
    }
    eprintln!();
    if failed == 0 {
        eprintln!("✓ Every verified run matched the brute-force oracle.");
    } else {
        eprintln!("✗ {failed} run(s) disagreed with the brute-force oracle.");
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(out: &mut impl io::Write, measurements: &[Measurement]) -> io::Result<()> {
    writeln!(out, "strategy,n,length,start,sum,wall_s,rss_delta_kib,status,detail")?;
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        writeln!(
            out,
            "{},{},{},{},{},{:.3},{},{},\"{}\"",
            m.strategy,
            m.n,
            m.best.length,
            m.best.one_based_start(),
            m.best.sum,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail
        )?;
    }
    Ok(())
}

fn write_table(out: &mut impl io::Write, measurements: &[Measurement]) -> io::Result<()> {
    let col1 = measurements
        .iter()
        .map(|m| m.strategy.len())
        .fold("strategy".len(), usize::max);

    writeln!(
        out,
        "{:<col1$}  {:>8}  {:>8}  {:>8}  {:>10}  {:>10}  {:>14}  {:>12}  detail",
        "strategy", "n", "length", "start", "sum", "wall_s", "rss_delta_kib", "status"
    )?;
    writeln!(
        out,
        "{:-<col1$}  {:-<8}  {:-<8}  {:-<8}  {:-<10}  {:-<10}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "", "", "", ""
    )?;
    for m in measurements {
        writeln!(
            out,
            "{:<col1$}  {:>8}  {:>8}  {:>8}  {:>10}  {:>10.3}  {:>14}  {:>12}  {}",
            m.strategy,
            m.n,
            m.best.length,
            m.best.one_based_start(),
            m.best.sum,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or("")
        )?;
    }
    Ok(())
}

fn write_json(out: &mut impl io::Write, measurements: &[Measurement]) -> io::Result<()> {
    writeln!(out, "[")?;
    for (idx, m) in measurements.iter().enumerate() {
        let detail = match m.detail.as_ref() {
            Some(d) => format!("\"{}\"", d.replace('"', "'")),
            None => "null".to_string(),
        };
        writeln!(
            out,
            "  {{\"strategy\":\"{}\",\"n\":{},\"length\":{},\"start\":{},\"sum\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.strategy,
            m.n,
            m.best.length,
            m.best.one_based_start(),
            m.best.sum,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail,
            if idx + 1 == measurements.len() { "" } else { "," }
        )?;
    }
    writeln!(out, "]")
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |process| process.memory() / 1024)
}

/// Items in `[-200, 800)` from a fixed-seed linear congruential sequence.
fn deterministic_items(len: usize, seed: u64) -> Vec<i32> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 1000) as i32 - 200
        })
        .collect()
}
