//! Timing of benchmark variants.
//!
//! Variants are warmed up, then sampled in a shuffled schedule so that no
//! variant systematically runs first or last. Every sample is taken with the
//! thread pinned to its current core (once, or around each sample).

use std::hint::black_box;
use std::time::Duration;

use super::bench::{shuffle, time_seed, to_nanos, Measurement};
use super::cpu_affinity::CpuPinGuard;
use crate::registry::VariantClosure;
use tracing::debug;

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once before all measurements
    Global,
    /// Pin/unpin around every sample
    #[default]
    PerExecution,
    /// Never pin
    Disabled,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Samples collected per variant
    pub runs_per_variant: usize,
    /// Untimed calls per variant before sampling
    pub warmup_iterations: usize,
    pub pin_strategy: PinStrategy,
    /// Drop the 1% fastest and slowest samples before computing statistics
    pub trim_outliers: bool,
    /// Seed of the sample schedule (time based when `None`)
    pub seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
            trim_outliers: false,
            seed: None,
        }
    }
}

/// Statistics for one measured variant.
///
/// Times are raw counter values stored as `Duration`; see
/// [`format_measurement`](super::bench::format_measurement).
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    pub avg_time: Duration,
    /// Unrounded mean
    pub avg_nanos_f64: f64,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Samples that entered the statistics
    pub samples: usize,
    /// Last value produced by the variant, for cross-checking
    pub result_sample: Option<f64>,
}

/// Measures every variant `config.runs_per_variant` times.
pub fn measure_variants(
    mut variants: Vec<VariantClosure<'_>>,
    config: &TimingConfig,
) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let samples = config.runs_per_variant;
    let mut schedule: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    let seed = config.seed.unwrap_or_else(time_seed);
    shuffle(&mut schedule, seed);
    debug!(variants = variants.len(), samples, seed, "measuring");

    let mut measurements: Vec<Vec<Measurement>> =
        (0..variants.len()).map(|_| Vec::with_capacity(samples)).collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);
    for idx in schedule {
        let _pin = (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (elapsed, result) = (variants[idx].run)();
        measurements[idx].push(elapsed);
        result_samples[idx] = result;
    }

    variants
        .iter()
        .zip(measurements)
        .zip(result_samples)
        .map(|((variant, raw), result_sample)| {
            let mut values: Vec<u64> = raw.into_iter().map(to_nanos).collect();
            values.sort_unstable();
            if config.trim_outliers {
                values = trim(values);
            }
            summarize(variant.name, variant.description, &values, result_sample)
        })
        .collect()
}

/// Removes the lowest and highest 1% (at least one sample each once there
/// are 100 or more).
fn trim(sorted: Vec<u64>) -> Vec<u64> {
    let cut = sorted.len() / 100;
    if cut == 0 {
        return sorted;
    }
    sorted[cut..sorted.len() - cut].to_vec()
}

fn summarize(
    name: &str,
    description: &str,
    sorted: &[u64],
    result_sample: Option<f64>,
) -> VariantResult {
    let Some((&min, &max)) = sorted.first().zip(sorted.last()) else {
        return VariantResult {
            name: name.to_string(),
            description: description.to_string(),
            avg_time: Duration::ZERO,
            avg_nanos_f64: 0.0,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            samples: 0,
            result_sample: None,
        };
    };

    let n = sorted.len() as f64;
    let mean = sorted.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = sorted
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0).max(1.0);

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: Duration::from_nanos(mean as u64),
        avg_nanos_f64: mean,
        median_time: Duration::from_nanos(sorted[sorted.len() / 2]),
        min_time: Duration::from_nanos(min),
        max_time: Duration::from_nanos(max),
        std_dev: Duration::from_nanos(variance.sqrt() as u64),
        samples: sorted.len(),
        result_sample,
    }
}
