//! Benchmark driver and CSV export.

use crate::error::Result;
use crate::registry::AlgorithmRunner;
use crate::utils::bench::{time_seed, unit_name};
use crate::utils::timer::{measure_variants, TimingConfig};
use crate::utils::tui;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Clone, Debug)]
pub struct BenchOptions {
    /// Inputs per timed call
    pub sizes: Vec<usize>,
    /// Input generation seed (time based when `None`)
    pub seed: Option<u64>,
    pub timing: TimingConfig,
    pub csv_path: Option<PathBuf>,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            sizes: vec![16, 256, 4096],
            seed: None,
            timing: TimingConfig::default(),
            csv_path: None,
        }
    }
}

/// Raw timing data for a single variant (used for CSV export)
#[derive(Clone, Debug)]
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg: f64,
    pub result_sample: Option<f64>,
}

/// Benchmarks every algorithm at every size and prints one table per size.
pub fn run_benchmarks(
    algorithms: &[&dyn AlgorithmRunner],
    options: &BenchOptions,
) -> Result<Vec<RawTimingData>> {
    let seed = options.seed.unwrap_or_else(time_seed);
    info!(seed, sizes = ?options.sizes, "running benchmarks");

    let mut raw = Vec::new();
    for algo in algorithms {
        tui::print_algo_info_box(*algo);
        for &size in &options.sizes {
            let closures = algo.get_variant_closures(size, seed);
            let mut results = measure_variants(closures, &options.timing);
            tui::sort_variants(&mut results);
            tui::print_results_table(
                &results,
                size,
                options.timing.runs_per_variant,
                options.timing.trim_outliers,
            );
            raw.extend(results.into_iter().map(|r| RawTimingData {
                algo_name: algo.name().to_string(),
                variant_name: r.name,
                input_size: size,
                avg: r.avg_nanos_f64,
                result_sample: r.result_sample,
            }));
        }
    }

    if let Some(path) = &options.csv_path {
        let mut file = std::fs::File::create(path)?;
        export_csv(&mut file, &raw)?;
        info!(path = %path.display(), rows = raw.len(), "wrote CSV");
    }
    Ok(raw)
}

/// Writes one CSV row per measured variant and size.
pub fn export_csv<W: Write>(out: &mut W, data: &[RawTimingData]) -> Result<()> {
    writeln!(
        out,
        "algorithm,variant,compiler,input_size,avg_{},result",
        unit_name()
    )?;
    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };
        writeln!(
            out,
            "{},{},{},{},{:.2},{}",
            entry.algo_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.avg,
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }
    Ok(())
}
