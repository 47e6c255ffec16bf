//! Check command implementation
//!
//! Quick self-check of every built-in engine and of piecewise table
//! completeness. Results are reported through `tracing`.

use prng_core::engine::{BitEngine, Engine};
use prng_core::engines::EngineKind;
use prng_core::seed::SeedDiffuser;
use prng_distributions::piecewise::{CdfWidth, PiecewiseWeightedUniform};
use prng_distributions::Sampler;
use tracing::{error, info};

use crate::config::PrngConfig;
use crate::{CliError, Result};

const DRAWS: usize = 1_000;
const CDF_DRAWS: usize = 10_000;

fn ensure(condition: bool, what: impl FnOnce() -> String) -> Result<()> {
    if condition {
        Ok(())
    } else {
        let message = what();
        error!("{}", message);
        Err(CliError::CheckFailed(message))
    }
}

/// Two engines built from the same seed text agree draw for draw.
fn check_determinism(kind: EngineKind, seed: &str) -> Result<()> {
    let mut a = kind.create(&mut SeedDiffuser::from_text(seed))?;
    let mut b = kind.create(&mut SeedDiffuser::from_text(seed))?;
    let diverged = (0..DRAWS).position(|_| a.next64() != b.next64());
    ensure(diverged.is_none(), || {
        format!("{}: identical seeds diverged at draw {:?}", kind, diverged)
    })
}

/// Restoring a saved state replays the same future.
fn check_round_trip(kind: EngineKind, seed: &str) -> Result<()> {
    let mut engine = kind.create(&mut SeedDiffuser::from_text(seed))?;
    let saved = engine.save_state()?;
    let expected: Vec<u64> = (0..DRAWS).map(|_| engine.next64()).collect();

    let mut restored = kind.create(&mut SeedDiffuser::from_bytes(&[]))?;
    restored.restore_state(&saved)?;
    let actual: Vec<u64> = (0..DRAWS).map(|_| restored.next64()).collect();
    ensure(expected == actual, || {
        format!("{}: restored engine did not replay the saved sequence", kind)
    })?;

    // A truncated state must be rejected
    let truncated = &saved[..saved.len() - 1];
    ensure(restored.restore_state(truncated).is_err(), || {
        format!("{}: truncated state was accepted", kind)
    })
}

/// Every segment of a piecewise table is reachable and draws stay in support.
fn check_cdf_completeness(engine: &mut dyn Engine, width: CdfWidth) -> Result<()> {
    let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
    let weights = [1.0, 0.5, 0.25, 2.0];
    let dist = PiecewiseWeightedUniform::new(&xs, &weights, width)?;

    let mut hits = [0usize; 4];
    for _ in 0..CDF_DRAWS {
        let x = dist.sample(engine);
        ensure((0.0..=4.0).contains(&x), || {
            format!("{:?} table drew {} outside [0, 4]", width, x)
        })?;
        hits[(x as usize).min(3)] += 1;
    }
    ensure(hits.iter().all(|&count| count > 0), || {
        format!("{:?} table left a segment unreachable: {:?}", width, hits)
    })
}

/// Runs all checks; returns the number that passed.
pub fn run_checks(seed: &str) -> Result<usize> {
    let mut passed = 0;
    for kind in EngineKind::ALL {
        check_determinism(kind, seed)?;
        check_round_trip(kind, seed)?;
        info!(engine = %kind, "determinism and state round trip ok");
        passed += 2;

        let mut engine = kind.create(&mut SeedDiffuser::from_text(seed))?;
        for width in [CdfWidth::Narrow, CdfWidth::Wide] {
            check_cdf_completeness(&mut *engine, width)?;
            info!(engine = %kind, ?width, "cdf completeness ok");
            passed += 1;
        }
    }
    Ok(passed)
}

/// Run the check command
pub fn run(config: &PrngConfig) -> Result<()> {
    info!("Running self-check...");
    let seed = config.seed.as_deref().unwrap_or("prng-check");
    let passed = run_checks(seed)?;
    info!(passed, "All checks passed");
    Ok(())
}
