//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI: algorithm info boxes, per-size
//! result tables, and the cross-size scaling summary used to eyeball
//! empirical time complexity.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::format_measurement;
use crate::utils::runner::RawTimingData;
use crate::utils::timer::{measure_variants, TimingConfig, Variant};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sorting priority for a variant. The reference implementation sorts
/// first so every table's baseline row is the same.
fn variant_sort_key(result: &BenchmarkResult) -> (u8, String) {
    if result.name == "original" {
        (0, String::new())
    } else {
        (1, result.name.clone())
    }
}

/// Sort variants: original first, then alphabetical
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants_str = algo.available_variants().join(", ");
    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Variants: {}", variants_str);

    let content_width = [
        name_line.len(),
        cat_line.len(),
        desc_line.len(),
        var_line.len(),
    ]
    .iter()
    .cloned()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    println!(
        "│ {:<width$} │",
        truncate(&name_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(&cat_line, content_width),
        width = content_width
    );
    println!(
        "│ {:<width$} │",
        truncate(desc_line, content_width),
        width = content_width
    );
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Print results table for a single size
pub fn print_results_table(results: &[BenchmarkResult], size: usize, show_size: bool) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    let fixed_width = 60;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 56;

    let baseline_time = results
        .first()
        .map(|r| r.avg_nanos_f64)
        .unwrap_or(1.0);
    let baseline_result = results.first().and_then(|r| r.result_sample);

    if show_size {
        println!("  Size: {} ({} samples)", size, results[0].samples);
    }
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>11} {:>11} {:>11} {:>8} {:>7} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = if result.avg_nanos_f64 > 0.0 {
            baseline_time / result.avg_nanos_f64
        } else {
            0.0
        };

        let std_dev_ns = result.std_dev.as_nanos() as f64;
        let cv = if result.avg_nanos_f64 > 0.0 {
            std_dev_ns / result.avg_nanos_f64
        } else {
            0.0
        };

        let relative_error = match (result.result_sample, baseline_result) {
            (Some(res), Some(base)) => {
                let diff = (res - base).abs();
                if base.abs() > 1e-9 {
                    diff / base.abs()
                } else {
                    diff
                }
            }
            _ => 0.0,
        };

        println!(
            "  {:<v_width$} {:>11} {:>11} {:>11} {:>7.2}x {:>6.1}% {:>10.2e}",
            truncate(&result.name, variant_col_width),
            format_measurement(result.avg_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            relative_error,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the cross-size scaling summary for one algorithm.
///
/// For each variant the growth column shows avg(n) / avg(n0) next to the
/// raw size ratio n / n0: roughly equal columns suggest linear time,
/// a flat growth column suggests logarithmic, and so on.
pub fn print_scaling_table(results_by_size: &[(usize, Vec<BenchmarkResult>)]) {
    if results_by_size.len() < 2 {
        return;
    }

    let base_size = results_by_size[0].0;

    println!("  Scaling (growth is relative to size {}):", base_size);
    println!("  {}", "─".repeat(58));
    println!(
        "  {:<16} {:>10} {:>11} {:>8} {:>9}",
        "Variant", "Size", "Average", "Growth", "Size x"
    );
    println!("  {}", "─".repeat(58));

    let variant_names: Vec<String> = results_by_size[0]
        .1
        .iter()
        .map(|r| r.name.clone())
        .collect();

    for name in &variant_names {
        let base_avg = results_by_size[0]
            .1
            .iter()
            .find(|r| &r.name == name)
            .map(|r| r.avg_nanos_f64)
            .unwrap_or(0.0);

        for (i, (size, results)) in results_by_size.iter().enumerate() {
            let Some(result) = results.iter().find(|r| &r.name == name) else {
                continue;
            };

            let growth = if base_avg > 0.0 {
                result.avg_nanos_f64 / base_avg
            } else {
                0.0
            };
            let size_ratio = *size as f64 / base_size as f64;

            println!(
                "  {:<16} {:>10} {:>11} {:>7.1}x {:>8.1}x",
                if i == 0 { truncate(name, 16) } else { String::new() },
                size,
                format_measurement(result.avg_time),
                growth,
                size_ratio
            );
        }
    }
    println!();
}

/// Verify and benchmark a single algorithm across all sizes.
///
/// Returns the raw timing rows (for CSV export), or an error message if
/// verification failed, in which case no benchmarks run.
pub fn run_and_display(
    algo: &dyn AlgorithmRunner,
    sizes: &[usize],
    config: &TimingConfig,
    seed: u64,
) -> Result<Vec<RawTimingData>, String> {
    print_algo_info_box(algo);

    match algo.verify() {
        Ok(()) => println!("  Verification: pass"),
        Err(e) => {
            println!("  Verification: FAIL - {}", e);
            println!();
            return Err(format!("{}: {}", algo.name(), e));
        }
    }
    println!();

    let mut raw = Vec::new();
    let mut results_by_size = Vec::new();

    for &size in sizes {
        let variants: Vec<Variant> = algo
            .variant_closures(size, seed)
            .into_iter()
            .map(|c| Variant {
                name: c.name,
                description: c.description,
                run: c.run,
            })
            .collect();

        let mut results = measure_variants(variants, config);
        sort_variants(&mut results);
        print_results_table(&results, size, true);

        for result in &results {
            raw.push(RawTimingData {
                algo_name: algo.name().to_string(),
                variant_name: result.name.clone(),
                input_size: size,
                avg_nanos: result.avg_nanos_f64 as u64,
                result_sample: result.result_sample,
            });
        }
        results_by_size.push((size, results));
    }

    print_scaling_table(&results_by_size);

    Ok(raw)
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Algo-Workbench Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: algo-bench [OPTIONS] [ALGORITHM]");
    println!();
    println!("Options:");
    println!("  --list, -l     List all available algorithms");
    println!("  --help, -h     Show this help message");
    println!("  --sizes SIZES  Comma-separated input sizes (default: 64,256,1024,4096,16384)");
    println!("  --runs N, -r   Number of measurement samples per variant (default: 30)");
    println!("  --seed N       Random seed for reproducible workloads (default: time-based)");
    println!("  --csv PATH     Export raw timings to a CSV file");
    println!();
    println!("Arguments:");
    println!("  ALGORITHM      Name of specific algorithm to run (omit for all)");
    println!();
    println!("Examples:");
    println!("  algo-bench                    # Verify and benchmark all algorithms");
    println!("  algo-bench router             # Run only the path router");
    println!("  algo-bench --list             # List algorithms");
    println!("  algo-bench --sizes 128,512    # Custom sizes");
    println!("  algo-bench --seed 12345       # Reproducible run");
    println!("  algo-bench --csv data.csv     # Export raw timings to CSV");
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<18} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
    }
}
