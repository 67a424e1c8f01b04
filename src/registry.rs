//! Algorithm registry.
//!
//! Each algorithm exposes its variants through [`AlgorithmRunner`], so the
//! CLI can list, verify and benchmark them without knowing their signatures.

use crate::error::{Error, Result};
use crate::utils::bench::Measurement;

pub use crate::utils::timer::VariantResult as BenchmarkResult;

/// One variant, prepared for measurement.
pub struct VariantClosure<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Runs one timed batch and returns `(measurement, result value)`.
    /// Timing happens inside the closure so the call overhead is not measured.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "dp4_cr")
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Category (e.g., "math")
    fn category(&self) -> &'static str;

    fn available_variants(&self) -> Vec<&'static str>;

    /// Closures over `size` prepared inputs; one call processes all of them.
    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>>;

    /// Checks every variant bit-for-bit against the `original` reference.
    fn verify(&self) -> Result<()>;
}

pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// Like [`find`](Self::find), with an error listing the known names.
    pub fn require(&self, name: &str) -> Result<&dyn AlgorithmRunner> {
        self.find(name).ok_or_else(|| Error::UnknownAlgorithm {
            name: name.to_string(),
            available: self.list_names().join(", "),
        })
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();
    registry.register(crate::math::add_ro::AddRoRunner);
    registry.register(crate::math::dp4_cr::Dp4CrRunner);
    registry
}
