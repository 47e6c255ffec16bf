//! Sample command implementation
//!
//! Draws values from one distribution using the configured engine.

use std::io::Write;

use clap::Subcommand;
use prng_core::engine::Engine;
use prng_core::engines::EngineKind;
use prng_distributions::closed_form::{
    HermiteDistribution, LinearDistribution, TrapezoidalDistribution, TriangularDistribution,
    UniformDistribution,
};
use prng_distributions::piecewise::{
    CdfWidth, PiecewiseHermite, PiecewiseLinear, PiecewiseUniform, PiecewiseWeightedUniform,
};
use prng_distributions::standard::{ExponentialDistribution, NormalDistribution};
use prng_distributions::Sampler;
use serde::Serialize;
use tracing::{debug, info};

use super::OutputFormat;
use crate::config::PrngConfig;
use crate::{CliError, Result};

/// Distribution selected on the command line
///
/// Piecewise tables take comma-separated lists, e.g. `0,1,2`.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum DistributionArgs {
    /// Uniform on [x0, x1]
    #[command(allow_negative_numbers = true)]
    Uniform { x0: f64, x1: f64 },

    /// Triangular with lower bound, mode and upper bound
    #[command(allow_negative_numbers = true)]
    Triangular { x0: f64, mode: f64, x1: f64 },

    /// Trapezoidal with corners x0 <= x1 <= x2 <= x3
    #[command(allow_negative_numbers = true)]
    Trapezoidal { x0: f64, x1: f64, x2: f64, x3: f64 },

    /// Linear density from (x0, y0) to (x1, y1)
    #[command(allow_negative_numbers = true)]
    Linear { x0: f64, x1: f64, y0: f64, y1: f64 },

    /// Cubic Hermite density with end values and end slopes
    #[command(allow_negative_numbers = true)]
    Hermite {
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
        m0: f64,
        m1: f64,
    },

    /// Normal with mean and standard deviation
    #[command(allow_negative_numbers = true)]
    Normal { mean: f64, std_dev: f64 },

    /// Exponential with rate
    Exponential { rate: f64 },

    /// Piecewise constant density: n+1 breakpoints, n heights
    PiecewiseUniform {
        #[arg(allow_hyphen_values = true)]
        xs: String,
        heights: String,
    },

    /// Piecewise constant density: n+1 breakpoints, n probability weights
    PiecewiseWeightedUniform {
        #[arg(allow_hyphen_values = true)]
        xs: String,
        weights: String,
    },

    /// Piecewise linear density through (x, y) knots
    PiecewiseLinear {
        #[arg(allow_hyphen_values = true)]
        xs: String,
        ys: String,
    },

    /// Piecewise Hermite density: n knots, n values, 2(n-1) end slopes
    PiecewiseHermite {
        #[arg(allow_hyphen_values = true)]
        xs: String,
        ys: String,
        #[arg(allow_hyphen_values = true)]
        slopes: String,
    },
}

impl DistributionArgs {
    /// Command-line name of the distribution
    pub fn name(&self) -> &'static str {
        match self {
            DistributionArgs::Uniform { .. } => "uniform",
            DistributionArgs::Triangular { .. } => "triangular",
            DistributionArgs::Trapezoidal { .. } => "trapezoidal",
            DistributionArgs::Linear { .. } => "linear",
            DistributionArgs::Hermite { .. } => "hermite",
            DistributionArgs::Normal { .. } => "normal",
            DistributionArgs::Exponential { .. } => "exponential",
            DistributionArgs::PiecewiseUniform { .. } => "piecewise-uniform",
            DistributionArgs::PiecewiseWeightedUniform { .. } => "piecewise-weighted-uniform",
            DistributionArgs::PiecewiseLinear { .. } => "piecewise-linear",
            DistributionArgs::PiecewiseHermite { .. } => "piecewise-hermite",
        }
    }
}

/// A validated distribution ready to draw from
#[derive(Debug, Clone)]
pub enum PreparedSampler {
    Uniform(UniformDistribution<f64>),
    Triangular(TriangularDistribution<f64>),
    Trapezoidal(TrapezoidalDistribution<f64>),
    Linear(LinearDistribution<f64>),
    Hermite(HermiteDistribution<f64>),
    Normal(NormalDistribution<f64>),
    Exponential(ExponentialDistribution<f64>),
    PiecewiseUniform(PiecewiseUniform<f64>),
    PiecewiseWeightedUniform(PiecewiseWeightedUniform<f64>),
    PiecewiseLinear(PiecewiseLinear<f64>),
    PiecewiseHermite(PiecewiseHermite<f64>),
}

impl PreparedSampler {
    /// Validates the arguments; piecewise tables match the engine's width.
    pub fn prepare(args: &DistributionArgs, engine: &dyn Engine) -> Result<Self> {
        let width = CdfWidth::for_engine(engine);
        let prepared = match args {
            DistributionArgs::Uniform { x0, x1 } => {
                Self::Uniform(UniformDistribution::new(*x0, *x1)?)
            }
            DistributionArgs::Triangular { x0, mode, x1 } => {
                Self::Triangular(TriangularDistribution::new(*x0, *mode, *x1)?)
            }
            DistributionArgs::Trapezoidal { x0, x1, x2, x3 } => {
                Self::Trapezoidal(TrapezoidalDistribution::new(*x0, *x1, *x2, *x3)?)
            }
            DistributionArgs::Linear { x0, x1, y0, y1 } => {
                Self::Linear(LinearDistribution::new(*x0, *x1, *y0, *y1)?)
            }
            DistributionArgs::Hermite {
                x0,
                x1,
                y0,
                y1,
                m0,
                m1,
            } => Self::Hermite(HermiteDistribution::new(*x0, *x1, *y0, *y1, *m0, *m1)?),
            DistributionArgs::Normal { mean, std_dev } => {
                Self::Normal(NormalDistribution::new(*mean, *std_dev)?)
            }
            DistributionArgs::Exponential { rate } => {
                Self::Exponential(ExponentialDistribution::new(*rate)?)
            }
            DistributionArgs::PiecewiseUniform { xs, heights } => Self::PiecewiseUniform(
                PiecewiseUniform::new(&parse_list("xs", xs)?, &parse_list("heights", heights)?, width)?,
            ),
            DistributionArgs::PiecewiseWeightedUniform { xs, weights } => {
                Self::PiecewiseWeightedUniform(PiecewiseWeightedUniform::new(
                    &parse_list("xs", xs)?,
                    &parse_list("weights", weights)?,
                    width,
                )?)
            }
            DistributionArgs::PiecewiseLinear { xs, ys } => Self::PiecewiseLinear(
                PiecewiseLinear::new(&parse_list("xs", xs)?, &parse_list("ys", ys)?, width)?,
            ),
            DistributionArgs::PiecewiseHermite { xs, ys, slopes } => {
                Self::PiecewiseHermite(PiecewiseHermite::from_arrays(
                    &parse_list("xs", xs)?,
                    &parse_list("ys", ys)?,
                    &parse_list("slopes", slopes)?,
                    width,
                )?)
            }
        };
        debug!(distribution = args.name(), ?width, "distribution prepared");
        Ok(prepared)
    }

    /// Fills `out` with consecutive draws.
    pub fn fill(&self, engine: &mut dyn Engine, out: &mut [f64]) {
        match self {
            Self::Uniform(d) => d.sample_into(engine, out),
            Self::Triangular(d) => d.sample_into(engine, out),
            Self::Trapezoidal(d) => d.sample_into(engine, out),
            Self::Linear(d) => d.sample_into(engine, out),
            Self::Hermite(d) => d.sample_into(engine, out),
            Self::Normal(d) => d.sample_into(engine, out),
            Self::Exponential(d) => d.sample_into(engine, out),
            Self::PiecewiseUniform(d) => d.sample_into(engine, out),
            Self::PiecewiseWeightedUniform(d) => d.sample_into(engine, out),
            Self::PiecewiseLinear(d) => d.sample_into(engine, out),
            Self::PiecewiseHermite(d) => d.sample_into(engine, out),
        }
    }
}

/// Parses a comma-separated list of floats.
pub fn parse_list(name: &str, text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<f64>().map_err(|_| {
                CliError::InvalidArgument(format!("{}: '{}' is not a number", name, item))
            })
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct SampleReport<'a> {
    engine: EngineKind,
    seed: Option<&'a str>,
    distribution: &'static str,
    values: &'a [f64],
}

/// Run the sample command
pub fn run(
    config: &PrngConfig,
    distribution: &DistributionArgs,
    count: Option<usize>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let count = count.unwrap_or(config.sample_count);
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "sample count must be positive".to_string(),
        ));
    }

    let mut engine = config.build_engine()?;
    let sampler = PreparedSampler::prepare(distribution, &*engine)?;

    info!(
        engine = %config.engine,
        distribution = distribution.name(),
        count,
        "Sampling"
    );

    let mut values = vec![0.0; count];
    sampler.fill(&mut *engine, &mut values);

    match format {
        OutputFormat::Text => {
            for value in &values {
                writeln!(out, "{}", value)?;
            }
        }
        OutputFormat::Json => {
            let report = SampleReport {
                engine: config.engine,
                seed: config.seed.as_deref(),
                distribution: distribution.name(),
                values: &values,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
