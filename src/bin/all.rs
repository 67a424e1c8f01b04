//! Command-line front end.
//!
//! Usage:
//!   cr-dot list                      # List algorithms and variants
//!   cr-dot verify                    # Cross-check every variant, then the oracle
//!   cr-dot bench dp4_cr --sizes 256  # Benchmark one algorithm
//!   cr-dot table --count 10          # Emit a C test table for add_ro
//!   cr-dot dot --a 1,2,3,4 --b 1,1,1,1
//!   cr-dot add-ro 0x1.0000000000001p0 0x1p-60

use clap::{Parser, Subcommand, ValueEnum};
use cr_dot4::float::hexfloat::{parse_f32, parse_f64};
use cr_dot4::float::{add_round_to_odd, HexF32, HexF64};
use cr_dot4::harness::{
    correctly_rounded_dp4, generate_add_ro_table, render_c_table, run_differential,
    DifferentialConfig, TableConfig,
};
use cr_dot4::registry::{build_registry, AlgorithmRunner};
use cr_dot4::utils::{run_benchmarks, BenchOptions, PinStrategy, TimingConfig};
use cr_dot4::{dp4_cr, tui};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cr-dot")]
#[command(version)]
#[command(about = "Correctly-rounded 4D dot product: verification, tables and benchmarks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all available algorithms and their variants
    List,

    /// Verify every variant against its reference, then dp4 against the exact oracle
    Verify {
        /// Only verify this algorithm
        algorithm: Option<String>,

        /// Random vector pairs checked against the oracle
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,

        #[arg(long, default_value = "1592594686")]
        seed: u64,

        /// Smallest exponent of the generated binary32 elements
        #[arg(long, default_value = "-126", allow_hyphen_values = true)]
        emin: i32,

        /// Largest exponent of the generated binary32 elements
        #[arg(long, default_value = "127", allow_hyphen_values = true)]
        emax: i32,
    },

    /// Benchmark all variants
    Bench {
        /// Only benchmark this algorithm
        algorithm: Option<String>,

        /// Inputs per timed call
        #[arg(long, value_delimiter = ',', default_value = "16,256,4096")]
        sizes: Vec<usize>,

        /// Samples per variant
        #[arg(short, long, default_value = "30")]
        runs: usize,

        /// Untimed calls per variant before sampling
        #[arg(short, long, default_value = "10")]
        warmup: usize,

        /// Input seed (time based by default)
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, value_enum, default_value = "per-execution")]
        pin: Pin,

        /// Trim the 1% extremes from the samples
        #[arg(short, long)]
        filter: bool,

        /// Export raw averages to CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Print a C table of binary64 round-to-odd additions
    Table {
        /// Rows per half (wide range, then close range)
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        #[arg(long, default_value = "1592594686")]
        seed: u64,
    },

    /// Correctly-rounded dot product of two vectors (decimal or hex literals)
    Dot {
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true, value_parser = parse_f32_arg)]
        a: Vec<f32>,

        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true, value_parser = parse_f32_arg)]
        b: Vec<f32>,
    },

    /// Binary64 addition rounded to odd
    AddRo {
        #[arg(allow_hyphen_values = true, value_parser = parse_f64_arg)]
        x: f64,

        #[arg(allow_hyphen_values = true, value_parser = parse_f64_arg)]
        y: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Pin {
    Global,
    PerExecution,
    Disabled,
}

impl From<Pin> for PinStrategy {
    fn from(pin: Pin) -> Self {
        match pin {
            Pin::Global => PinStrategy::Global,
            Pin::PerExecution => PinStrategy::PerExecution,
            Pin::Disabled => PinStrategy::Disabled,
        }
    }
}

fn is_hex(s: &str) -> bool {
    s.trim_start_matches(['-', '+']).to_ascii_lowercase().starts_with("0x")
}

fn parse_f32_arg(s: &str) -> Result<f32, String> {
    if is_hex(s) {
        parse_f32(s).map_err(|e| e.to_string())
    } else {
        s.trim().parse().map_err(|e| format!("{s:?}: {e}"))
    }
}

fn parse_f64_arg(s: &str) -> Result<f64, String> {
    if is_hex(s) {
        parse_f64(s).map_err(|e| e.to_string())
    } else {
        s.trim().parse().map_err(|e| format!("{s:?}: {e}"))
    }
}

fn to_vec4(name: &str, v: &[f32]) -> Result<[f32; 4], String> {
    v.try_into()
        .map_err(|_| format!("--{name} needs exactly 4 values, got {}", v.len()))
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cr_dot4=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let registry = build_registry();

    match cli.command {
        Commands::List => {
            tui::print_available_algorithms(&registry);
            ExitCode::SUCCESS
        }

        Commands::Verify {
            algorithm,
            count,
            seed,
            emin,
            emax,
        } => {
            let algos: Vec<&dyn AlgorithmRunner> = match &algorithm {
                Some(name) => match registry.require(name) {
                    Ok(algo) => vec![algo],
                    Err(e) => {
                        error!("{e}");
                        return ExitCode::FAILURE;
                    }
                },
                None => registry.all().iter().map(|a| a.as_ref()).collect(),
            };

            let mut failed = false;
            for algo in &algos {
                let outcome = algo.verify();
                tui::print_verification(algo.name(), &outcome);
                failed |= outcome.is_err();
            }

            if matches!(algorithm.as_deref(), None | Some("dp4_cr")) {
                let config = DifferentialConfig {
                    count,
                    seed,
                    emin,
                    emax,
                };
                match run_differential(&config) {
                    Ok(summary) => println!(
                        "  ✅ {:<12} {} random cases correctly rounded ({})",
                        "oracle",
                        summary.cases,
                        summary.variants.join(", ")
                    ),
                    Err(e) => {
                        println!("  ❌ {:<12} {}", "oracle", e);
                        failed = true;
                    }
                }
            }

            if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }

        Commands::Bench {
            algorithm,
            sizes,
            runs,
            warmup,
            seed,
            pin,
            filter,
            csv,
        } => {
            let algos: Vec<&dyn AlgorithmRunner> = match &algorithm {
                Some(name) => match registry.require(name) {
                    Ok(algo) => vec![algo],
                    Err(e) => {
                        error!("{e}");
                        return ExitCode::FAILURE;
                    }
                },
                None => registry.all().iter().map(|a| a.as_ref()).collect(),
            };
            let options = BenchOptions {
                sizes,
                seed,
                timing: TimingConfig {
                    runs_per_variant: runs,
                    warmup_iterations: warmup,
                    pin_strategy: pin.into(),
                    trim_outliers: filter,
                    seed,
                },
                csv_path: csv,
            };

            tui::print_header();
            match run_benchmarks(&algos, &options) {
                Ok(_) => {
                    println!("Note: Speedup is relative to the first variant ('original').");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!("{e}");
                    ExitCode::FAILURE
                }
            }
        }

        Commands::Table { count, seed } => {
            match generate_add_ro_table(&TableConfig { count, seed }) {
                Ok(cases) => {
                    print!("{}", render_c_table(&cases, count));
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!("{e}");
                    ExitCode::FAILURE
                }
            }
        }

        Commands::Dot { a, b } => {
            let (a, b) = match (to_vec4("a", &a), to_vec4("b", &b)) {
                (Ok(a), Ok(b)) => (a, b),
                (Err(e), _) | (_, Err(e)) => {
                    error!("{e}");
                    return ExitCode::FAILURE;
                }
            };
            let result = dp4_cr(&a, &b);
            println!("dp4_cr = {} ({})", result, HexF32(result));
            match correctly_rounded_dp4(&a, &b) {
                Ok(exact) if exact.to_bits() == result.to_bits() => {
                    println!("oracle = {} ({})", exact, HexF32(exact));
                    ExitCode::SUCCESS
                }
                Ok(exact) => {
                    println!("oracle = {} ({}) MISMATCH", exact, HexF32(exact));
                    ExitCode::FAILURE
                }
                // Non-finite operands have no exact value to compare against.
                Err(e) => {
                    println!("oracle: {e}");
                    ExitCode::SUCCESS
                }
            }
        }

        Commands::AddRo { x, y } => {
            let r = add_round_to_odd(x, y);
            println!("{} + {} =[RO] {}", HexF64(x), HexF64(y), HexF64(r));
            ExitCode::SUCCESS
        }
    }
}
