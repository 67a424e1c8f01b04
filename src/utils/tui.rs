//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::format_measurement;
use crate::utils::C_COMPILER_NAME;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

fn is_c_variant(name: &str) -> bool {
    name.starts_with("c-") || name.starts_with("c_")
}

/// Order: original (0), Rust (1), C (2).
fn variant_sort_key(result: &BenchmarkResult) -> (u8, String) {
    let name = result.name.to_lowercase();
    if name == "original" {
        (0, String::new())
    } else if is_c_variant(&name) {
        (2, name)
    } else {
        (1, name)
    }
}

/// Sort variants: original first, then Rust, then C
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

fn display_name(name: &str) -> String {
    match C_COMPILER_NAME {
        Some(c) if is_c_variant(name) => format!("{} ({})", name, c),
        _ => name.to_string(),
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Algorithm: {}", algo.name()),
        format!("Category:  {}", algo.category()),
        algo.description().to_string(),
        format!("Variants:  {}", algo.available_variants().join(", ")),
    ];
    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);
    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!("│ {:<width$} │", truncate(line, content_width), width = content_width);
    }
    println!("└{}┘", border);
    println!();
}

/// Results table for one input size.
///
/// Speedup is relative to the first row; the last column compares each
/// variant's result checksum with the first row's.
pub fn print_results_table(results: &[BenchmarkResult], size: usize, runs: usize, filtered: bool) {
    let Some(baseline) = results.first() else {
        return;
    };

    let variant_col_width = get_term_width().saturating_sub(68).max(15);
    let table_width = variant_col_width + 60;
    let baseline_time = baseline.avg_nanos_f64.max(f64::MIN_POSITIVE);

    let filter_note = if filtered { ", filtered" } else { "" };
    println!("  Size: {} ({} runs{})", size, runs, filter_note);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>8} {:>6}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Match",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = baseline_time / result.avg_nanos_f64.max(f64::MIN_POSITIVE);
        let cv = if result.avg_nanos_f64 > 0.0 {
            result.std_dev.as_nanos() as f64 / result.avg_nanos_f64
        } else {
            0.0
        };
        let matches = match (result.result_sample, baseline.result_sample) {
            (Some(r), Some(b)) if r == b => "yes",
            (Some(_), Some(_)) => "NO",
            _ => "-",
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>7.2}% {:>6}",
            truncate(&display_name(&result.name), variant_col_width),
            format_measurement(result.avg_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            matches,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " CR-Dot4 Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!("║{}{}{}║", " ".repeat(padding), title, " ".repeat(right_padding));
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<12} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
        for variant in algo.available_variants() {
            println!("      {}", display_name(variant));
        }
    }
}

/// One line per algorithm verification outcome.
pub fn print_verification(name: &str, outcome: &crate::error::Result<()>) {
    match outcome {
        Ok(()) => println!("  ✅ {:<12} all variants agree with 'original'", name),
        Err(e) => println!("  ❌ {:<12} {}", name, e),
    }
}
