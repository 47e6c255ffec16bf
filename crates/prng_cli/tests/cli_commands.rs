//! Command-level tests: argument parsing and every distribution through
//! every engine.

use clap::Parser;
use prng_cli::commands::sample::{DistributionArgs, PreparedSampler};
use prng_cli::commands::state::{decode_hex, encode_hex, StateAction};
use prng_cli::commands::{sample, state, OutputFormat};
use prng_cli::config::PrngConfig;
use prng_core::engines::EngineKind;
use proptest::prelude::*;

#[derive(Parser)]
struct DistributionCli {
    #[command(subcommand)]
    distribution: DistributionArgs,
}

#[derive(Parser)]
struct StateCli {
    #[command(subcommand)]
    action: StateAction,
}

fn parse(args: &[&str]) -> DistributionArgs {
    let argv = std::iter::once("prng").chain(args.iter().copied());
    DistributionCli::try_parse_from(argv).unwrap().distribution
}

fn all_distributions() -> Vec<DistributionArgs> {
    vec![
        parse(&["uniform", "-1", "1"]),
        parse(&["triangular", "0", "3", "10"]),
        parse(&["trapezoidal", "0", "1", "2", "4"]),
        parse(&["linear", "-2", "2", "0.5", "1.5"]),
        parse(&["hermite", "0", "2", "0", "0", "2", "-2"]),
        parse(&["normal", "-5", "2"]),
        parse(&["exponential", "0.5"]),
        parse(&["piecewise-uniform", "0,1,3", "1,2"]),
        parse(&["piecewise-weighted-uniform", "-1,0,1", "0.25,0.75"]),
        parse(&["piecewise-linear", "-1,0,1", "0,1,0"]),
        parse(&["piecewise-hermite", "0,1,2", "0,1,0", "2,0,0,-2"]),
    ]
}

// ========================================
// Argument parsing
// ========================================

#[test]
fn test_negative_numbers_parse_as_values() {
    assert_eq!(
        parse(&["uniform", "-3", "-1"]),
        DistributionArgs::Uniform { x0: -3.0, x1: -1.0 }
    );
    assert_eq!(
        parse(&["piecewise-linear", "-2,-1,0", "1,1,1"]),
        DistributionArgs::PiecewiseLinear {
            xs: "-2,-1,0".to_string(),
            ys: "1,1,1".to_string(),
        }
    );
}

#[test]
fn test_missing_parameters_rejected_by_parser() {
    let argv = ["prng", "triangular", "0", "1"];
    assert!(DistributionCli::try_parse_from(argv).is_err());
}

#[test]
fn test_state_actions_parse() {
    let action = StateCli::try_parse_from(["prng", "restore", "00ff", "-n", "2"])
        .unwrap()
        .action;
    assert_eq!(
        action,
        StateAction::Restore {
            state: "00ff".to_string(),
            count: 2,
        }
    );
    let action = StateCli::try_parse_from(["prng", "skip", "--back"]).unwrap().action;
    assert_eq!(action, StateAction::Skip { times: 1, back: true });
}

// ========================================
// Sampling through every engine
// ========================================

#[test]
fn test_every_distribution_with_every_engine() {
    for kind in EngineKind::ALL {
        let config = PrngConfig {
            engine: kind,
            seed: Some("matrix".to_string()),
            ..Default::default()
        };
        for args in all_distributions() {
            let mut engine = config.build_engine().unwrap();
            let sampler = PreparedSampler::prepare(&args, &*engine).unwrap();
            let mut values = [0.0; 256];
            sampler.fill(&mut *engine, &mut values);
            assert!(
                values.iter().all(|v| v.is_finite()),
                "{} with {} produced a non-finite value",
                args.name(),
                kind
            );
        }
    }
}

#[test]
fn test_json_sample_matches_text_sample() {
    let config = PrngConfig {
        seed: Some("formats".to_string()),
        ..Default::default()
    };
    let args = parse(&["normal", "0", "1"]);

    let mut text = Vec::new();
    sample::run(&config, &args, Some(5), OutputFormat::Text, &mut text).unwrap();
    let mut json = Vec::new();
    sample::run(&config, &args, Some(5), OutputFormat::Json, &mut json).unwrap();

    let from_text: Vec<f64> = String::from_utf8(text)
        .unwrap()
        .lines()
        .map(|l| l.parse().unwrap())
        .collect();
    let report: serde_json::Value = serde_json::from_slice(&json).unwrap();
    let from_json: Vec<f64> = report["values"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    assert_eq!(from_text, from_json);
}

#[test]
fn test_saved_state_round_trips_through_json() {
    let config = PrngConfig {
        engine: EngineKind::XorShiftAdd,
        seed: Some("json-state".to_string()),
        ..Default::default()
    };
    let mut out = Vec::new();
    state::run(&config, &StateAction::Save { advance: 10 }, OutputFormat::Json, &mut out).unwrap();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let hex = report["state"].as_str().unwrap();
    let bytes = decode_hex(hex).unwrap();
    assert_eq!(bytes.len(), 16);
    assert_eq!(encode_hex(&bytes), hex);
}

proptest! {
    #[test]
    fn prop_hex_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(decode_hex(&encode_hex(&bytes)).unwrap(), bytes);
    }
}
