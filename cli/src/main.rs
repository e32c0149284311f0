//! RuneCodec CLI — decode THORChain execution-log events from the command line.
//!
//! # Commands
//! ```
//! runecodec decode --file <events.jsonl> [--json] [--error-mode skip|collect|throw]
//! runecodec bench  --iterations <N> [--threads <N>]
//! runecodec info
//! ```
//!
//! The decode input is JSON lines, one raw event per line:
//! `{"event_type":"swap","attributes":[{"key":"id","value":"..."}, ...]}`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use runecodec_batch::{BatchEngine, BatchRequest, ErrorMode};
use runecodec_core::RawEvent;
use runecodec_observability::{init_tracing, LogConfig, TracingReporter};
use std::io::BufRead;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "runecodec",
    about = "THORChain execution-log event decoder — RuneCodec CLI",
    version
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ErrorModeArg {
    Skip,
    Collect,
    Throw,
}

impl From<ErrorModeArg> for ErrorMode {
    fn from(mode: ErrorModeArg) -> Self {
        match mode {
            ErrorModeArg::Skip => ErrorMode::Skip,
            ErrorModeArg::Collect => ErrorMode::Collect,
            ErrorModeArg::Throw => ErrorMode::Throw,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Decode raw events from a JSON-lines file ("-" = stdin)
    Decode {
        /// Path to the JSON-lines file of raw events
        #[arg(long, default_value = "-")]
        file: String,
        /// Output decoded records as JSON lines
        #[arg(long)]
        json: bool,
        /// How to handle decode failures
        #[arg(long, value_enum, default_value_t = ErrorModeArg::Collect)]
        error_mode: ErrorModeArg,
        /// Events per chunk
        #[arg(long, default_value_t = 10_000)]
        chunk_size: usize,
    },

    /// Benchmark decode throughput on synthetic swap events
    Bench {
        /// Number of events to decode
        #[arg(long, default_value_t = 1_000_000)]
        iterations: u64,
        /// Number of parallel Rayon threads (0 = use default)
        #[arg(long, default_value_t = 0)]
        threads: usize,
    },

    /// Show RuneCodec build and capability info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log = LogConfig {
        level: if cli.verbose { "debug".into() } else { "info".into() },
        ..LogConfig::default()
    };
    init_tracing(&log);

    match cli.command {
        Commands::Decode {
            file,
            json,
            error_mode,
            chunk_size,
        } => cmd_decode(&file, json, error_mode.into(), chunk_size),

        Commands::Bench {
            iterations,
            threads,
        } => cmd_bench(iterations, threads),

        Commands::Info => cmd_info(),
    }
}

// ─── Command implementations ─────────────────────────────────────────────────

fn read_events(file: &str) -> Result<Vec<RawEvent>> {
    let reader: Box<dyn BufRead> = if file == "-" {
        Box::new(std::io::stdin().lock())
    } else {
        let f = std::fs::File::open(file).with_context(|| format!("open '{file}'"))?;
        Box::new(std::io::BufReader::new(f))
    };

    let mut events = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read line {}", lineno + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let event: RawEvent = serde_json::from_str(&line)
            .with_context(|| format!("parse raw event on line {}", lineno + 1))?;
        events.push(event);
    }
    Ok(events)
}

fn cmd_decode(file: &str, as_json: bool, error_mode: ErrorMode, chunk_size: usize) -> Result<()> {
    let events = read_events(file)?;
    let total = events.len();

    let engine = BatchEngine::new(Arc::new(TracingReporter::new()));
    let result = engine.decode(
        BatchRequest::new(events)
            .chunk_size(chunk_size)
            .error_mode(error_mode),
    )?;

    for event in &result.events {
        if as_json {
            println!("{}", serde_json::to_string(event)?);
        } else {
            println!("{}:", event.event_type());
            let value = serde_json::to_value(event)?;
            if let Some(record) = value.get("record").and_then(|r| r.as_object()) {
                for (name, val) in record {
                    println!("  {name}: {val}");
                }
            }
        }
    }

    if !result.errors.is_empty() {
        eprintln!("{} of {} events failed to decode:", result.errors.len(), total);
        for (index, err) in &result.errors {
            eprintln!("  line {}: {}", index + 1, err);
        }
        anyhow::bail!("{} events failed to decode", result.errors.len());
    }

    Ok(())
}

fn cmd_bench(iterations: u64, threads: usize) -> Result<()> {
    use runecodec_core::Attribute;
    use std::time::Instant;

    if threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .ok();
    }

    // Synthetic swap events; amounts vary so branch prediction can't cheat.
    let batch: Vec<RawEvent> = (0..iterations)
        .map(|i| RawEvent {
            event_type: "swap".into(),
            attributes: vec![
                Attribute::new("id", format!("{i:064X}")),
                Attribute::new("chain", "BNB"),
                Attribute::new("from", "bnb1gnaghgzcpd73hcxnylcdaygn9tkrzmwxhnodzy"),
                Attribute::new("to", "bnb1mkymvdxkhjlltzkkhyzfvtyyv7e9q84cdmyvnh"),
                Attribute::new("coin", format!("{} BNB.BNB", 1_000_000 + i)),
                Attribute::new("memo", "SWAP:THOR.RUNE"),
                Attribute::new("pool", "BNB.BNB"),
                Attribute::new("trade_slip", (i % 100).to_string()),
                Attribute::new("liquidity_fee", "1999"),
                Attribute::new("liquidity_fee_in_rune", "2001"),
            ],
            block_height: 1_000_000 + i,
            tx_index: 0,
        })
        .collect();

    println!("Benchmarking swap decode: {iterations} events ...");

    let engine = BatchEngine::new(Arc::new(runecodec_core::NullReporter));
    let start = Instant::now();
    let result = engine.decode(BatchRequest::new(batch))?;
    let elapsed = start.elapsed();

    let success = result.events.len() as u64;
    let throughput = iterations as f64 / elapsed.as_secs_f64();

    println!("Results:");
    println!("  Total:      {iterations} events");
    println!(
        "  Decoded:    {} ({:.1}%)",
        success,
        100.0 * success as f64 / iterations as f64
    );
    println!("  Duration:   {:.3}s", elapsed.as_secs_f64());
    println!("  Throughput: {throughput:.0} events/sec");

    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("RuneCodec v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Capabilities:");
    println!("  ✓ 14 event kinds             (add, bond, errata, fee, gas, outbound, pool,");
    println!("                                refund, reserve, rewards, stake, slash, swap, unstake)");
    println!("  ✓ Fixed-point e8 amounts     (signed 64-bit, scaled by 1e8)");
    println!("  ✓ Coin-list splitting        (rune / non-rune resolution)");
    println!("  ✓ Unknown-attribute channel  (non-fatal, tracing-backed)");
    println!("  ✓ Parallel batch decode      (Rayon)");
    println!("  ✓ Error modes                (skip, collect, throw)");
    Ok(())
}
