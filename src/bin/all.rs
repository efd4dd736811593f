//! Generic CLI for running the exercises.
//!
//! Usage:
//!   algo-bench              # Verify and benchmark all algorithms
//!   algo-bench --list       # List available algorithms
//!   algo-bench router       # Run a specific algorithm
//!   algo-bench --help       # Show help

use algo_workbench::registry::build_registry;
use algo_workbench::utils::bench::time_seed;
use algo_workbench::utils::runner::{export_csv, RawTimingData};
use algo_workbench::utils::timer::TimingConfig;
use algo_workbench::utils::tui;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    // Parse arguments
    let mut show_list = false;
    let mut show_help = false;
    let mut sample_sizes: Vec<usize> = vec![64, 256, 1024, 4096, 16384];
    let mut runs: usize = 30;
    let mut seed: Option<u64> = None;
    let mut csv_path: Option<String> = None;
    let mut algorithm_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--sizes" => {
                i += 1;
                if i < args.len() {
                    sample_sizes = args[i]
                        .split(',')
                        .filter_map(|s| s.trim().parse().ok())
                        .collect();
                }
            }
            "--runs" | "-r" => {
                i += 1;
                if i < args.len() {
                    runs = args[i].parse().unwrap_or(30);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--csv" => {
                i += 1;
                if i < args.len() {
                    csv_path = Some(args[i].clone());
                }
            }
            arg if !arg.starts_with('-') => {
                algorithm_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        tui::print_help();
        return;
    }

    if show_list {
        tui::print_available_algorithms(&registry);
        return;
    }

    if sample_sizes.is_empty() {
        eprintln!("No valid sizes given.");
        std::process::exit(1);
    }

    let seed = seed.unwrap_or_else(time_seed);
    let config = TimingConfig {
        runs_per_variant: runs.max(1),
        ..TimingConfig::default()
    };

    tui::print_header();

    let selected: Vec<&dyn algo_workbench::registry::AlgorithmRunner> = match &algorithm_filter {
        Some(name) => match registry.find(name) {
            Some(algo) => vec![algo],
            None => {
                eprintln!("Algorithm '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                std::process::exit(1);
            }
        },
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    let mut raw_data: Vec<RawTimingData> = Vec::new();
    let mut failures: Vec<String> = Vec::new();

    for algo in selected {
        match tui::run_and_display(algo, &sample_sizes, &config, seed) {
            Ok(rows) => raw_data.extend(rows),
            Err(failure) => failures.push(failure),
        }
    }

    if let Some(path) = csv_path {
        match export_csv(&path, &raw_data) {
            Ok(()) => println!("Raw timings written to {}", path),
            Err(e) => eprintln!("Failed to write CSV to {}: {}", path, e),
        }
    }

    println!("Note: Speedup is relative to the first variant (usually 'original').");

    if !failures.is_empty() {
        eprintln!();
        eprintln!("{} algorithm(s) failed verification:", failures.len());
        for failure in &failures {
            eprintln!("  {}", failure);
        }
        std::process::exit(1);
    }
}
