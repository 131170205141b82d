//! Cache hit-ratio simulator CLI.
//!
//! This binary is the single entry point for the reference demonstrations:
//! 1. **Experiments:** The two hit-ratio sweeps (line size, then ways) over
//!    all six synthetic address streams, one million accesses each.
//! 2. **Verify:** The golden correctness traces with per-access output and
//!    a PASS/FAIL verdict per trace.
//!
//! With no subcommand, both run in order. There are no configuration flags;
//! the workload is the fixed reference configuration.

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cachesim_core::config::{CacheGeometry, SimConfig};
use cachesim_core::report::{ReportSink, StdoutSink};
use cachesim_core::sim::golden::TraceSpec;
use cachesim_core::sim::suite;

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    version,
    about = "Set-associative cache hit-ratio simulator",
    long_about = "Simulates a 64 KiB set-associative cache under synthetic memory-access \
                  traces and reports hit ratios per geometry, plus golden-trace checks of \
                  the exact hit/miss sequence."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the hit-ratio experiment sweeps (line size, then ways).
    Experiments,
    /// Replay the golden correctness traces.
    Verify,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = SimConfig::default();
    let mut sink = StdoutSink;

    let ok = match cli.command {
        Some(Commands::Experiments) => {
            run_experiments(&config, &mut sink);
            true
        }
        Some(Commands::Verify) => run_verification(&config, &mut sink),
        None => {
            run_experiments(&config, &mut sink);
            sink.emit("");
            run_verification(&config, &mut sink)
        }
    };

    if !ok {
        process::exit(1);
    }
}

/// Runs both reference sweeps back to back.
fn run_experiments(config: &SimConfig, sink: &mut StdoutSink) {
    suite::line_size_sweep(config, sink);
    sink.emit("");
    suite::ways_sweep(config, sink);
}

/// Replays the demonstration traces; returns `false` on any FAIL or skip.
fn run_verification(config: &SimConfig, sink: &mut StdoutSink) -> bool {
    let mut all_passed = true;
    for trace in demo_traces(config.cache_capacity) {
        match trace.verify(config.cache_capacity, sink) {
            Ok(report) => all_passed &= report.passed,
            Err(err) => {
                sink.emit(&format!("{}: skipped: {err}", trace.label));
                all_passed = false;
            }
        }
    }
    all_passed
}

/// The hand-constructed demonstration traces.
fn demo_traces(capacity: u32) -> Vec<TraceSpec> {
    // line=64, ways=4 over the default capacity gives 256 sets; consecutive
    // blocks that collide in set 0 are one set-stride apart.
    let geometry = CacheGeometry {
        line_bytes: 64,
        ways: 4,
    };
    let sets = capacity / (64 * 4);
    let set_stride = sets * 64;
    vec![
        // Five distinct tags into a 4-way set fill it and evict the first
        // block, so the final re-access of address 0 misses as well.
        TraceSpec {
            label: "set0-rotation-eviction".to_owned(),
            addresses: vec![
                0,
                set_stride,
                2 * set_stride,
                3 * set_stride,
                4 * set_stride,
                0,
            ],
            geometry,
            expected_hits: 0,
            expected_misses: 6,
        },
        // Sixteen byte addresses inside one 16-byte line share a single
        // block: only the first access misses.
        TraceSpec {
            label: "single-block-residency".to_owned(),
            addresses: (0..16).collect(),
            geometry: CacheGeometry {
                line_bytes: 16,
                ways: 4,
            },
            expected_hits: 15,
            expected_misses: 1,
        },
    ]
}
