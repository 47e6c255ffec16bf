//! State command implementation
//!
//! Saves, restores and skips engine state. States travel as lowercase hex
//! strings of the engine's saved-state bytes.

use std::io::Write;

use clap::Subcommand;
use prng_core::engine::{BitEngine, Engine};
use prng_core::engines::EngineKind;
use prng_core::seed::SeedDiffuser;
use serde::Serialize;
use tracing::{debug, info};

use super::OutputFormat;
use crate::config::PrngConfig;
use crate::{CliError, Result};

/// State operations
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum StateAction {
    /// Print the seeded engine's state as hex
    Save {
        /// Native draws to discard before saving
        #[arg(long, default_value_t = 0)]
        advance: u64,
    },

    /// Restore a hex state and print the next native draws
    Restore {
        /// Hex state produced by `state save`
        state: String,

        /// Number of draws to print
        #[arg(short = 'n', long, default_value_t = 4)]
        count: usize,
    },

    /// Apply skip-ahead (or skip-back) and print the resulting state
    Skip {
        /// Number of jumps
        #[arg(default_value_t = 1)]
        times: u32,

        /// Skip backwards instead
        #[arg(long)]
        back: bool,
    },
}

/// Encodes bytes as lowercase hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Decodes a hex string; whitespace is ignored.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            c.to_digit(16).map(|d| d as u8).ok_or_else(|| {
                CliError::InvalidArgument(format!("'{}' is not a hex digit", c))
            })
        })
        .collect::<Result<_>>()?;

    if digits.len() % 2 != 0 {
        return Err(CliError::InvalidArgument(
            "hex state must have an even number of digits".to_string(),
        ));
    }
    Ok(digits.chunks_exact(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}

/// Draws one value at the engine's native width.
fn native_draw(engine: &mut dyn Engine) -> u64 {
    if engine.step_bit_count() <= 32 {
        u64::from(engine.next32())
    } else {
        engine.next64()
    }
}

#[derive(Debug, Serialize)]
struct StateReport<'a> {
    engine: EngineKind,
    state: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    draws: Option<&'a [u64]>,
}

fn write_report(
    out: &mut dyn Write,
    format: OutputFormat,
    engine: EngineKind,
    state: &str,
    draws: Option<&[u64]>,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", state)?;
            for draw in draws.unwrap_or_default() {
                writeln!(out, "{}", draw)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &StateReport { engine, state, draws })?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Run the state command
pub fn run(
    config: &PrngConfig,
    action: &StateAction,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        StateAction::Save { advance } => {
            let mut engine = config.build_engine()?;
            for _ in 0..*advance {
                engine.step();
            }
            let state = encode_hex(&engine.save_state()?);
            info!(engine = %config.engine, advance, "State saved");
            write_report(out, format, config.engine, &state, None)
        }
        StateAction::Restore { state, count } => {
            let bytes = decode_hex(state)?;
            // Placeholder seeding; restore overwrites every word
            let mut engine = config.engine.create(&mut SeedDiffuser::from_bytes(&[]))?;
            engine.restore_state(&bytes)?;
            debug!(engine = %config.engine, bytes = bytes.len(), "State restored");

            let draws: Vec<u64> = (0..*count).map(|_| native_draw(&mut *engine)).collect();
            let after = encode_hex(&engine.save_state()?);
            info!(engine = %config.engine, count, "Continued restored sequence");
            write_report(out, format, config.engine, &after, Some(&draws))
        }
        StateAction::Skip { times, back } => {
            let mut engine = config.build_engine()?;
            let magnitude = if *back {
                engine.skip_back_magnitude()
            } else {
                engine.skip_ahead_magnitude()
            };
            for _ in 0..*times {
                if *back {
                    engine.skip_back()?;
                } else {
                    engine.skip_ahead();
                }
            }
            let state = encode_hex(&engine.save_state()?);
            info!(
                engine = %config.engine,
                times,
                magnitude,
                back,
                "Skipped {} x 2^{} steps",
                times,
                magnitude
            );
            write_report(out, format, config.engine, &state, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prng_core::EngineError;

    fn seeded(kind: EngineKind) -> PrngConfig {
        PrngConfig {
            engine: kind,
            seed: Some("state".to_string()),
            ..Default::default()
        }
    }

    fn output_lines(bytes: Vec<u8>) -> Vec<String> {
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_hex_round_trip() {
        let bytes = vec![0x00, 0x7f, 0x80, 0xff, 0x12];
        let text = encode_hex(&bytes);
        assert_eq!(text, "007f80ff12");
        assert_eq!(decode_hex(&text).unwrap(), bytes);
        assert_eq!(decode_hex("00 7F\n80ff12").unwrap(), bytes);
    }

    #[test]
    fn test_hex_rejects_malformed() {
        assert!(decode_hex("abc").is_err());
        assert!(decode_hex("zz").is_err());
    }

    #[test]
    fn test_restore_continues_saved_sequence() {
        for kind in EngineKind::ALL {
            let config = seeded(kind);

            let mut saved = Vec::new();
            run(
                &config,
                &StateAction::Save { advance: 3 },
                OutputFormat::Text,
                &mut saved,
            )
            .unwrap();
            let state = output_lines(saved).remove(0);

            // Replay from the seed, skipping the same draws
            let mut reference = config.build_engine().unwrap();
            for _ in 0..3 {
                reference.step();
            }
            let expected: Vec<String> = (0..4)
                .map(|_| native_draw(&mut *reference).to_string())
                .collect();

            let mut restored = Vec::new();
            run(
                &config,
                &StateAction::Restore { state, count: 4 },
                OutputFormat::Text,
                &mut restored,
            )
            .unwrap();
            assert_eq!(output_lines(restored)[1..], expected[..], "{}", kind);
        }
    }

    #[test]
    fn test_restore_rejects_wrong_length() {
        let config = seeded(EngineKind::XorShiftAdd);
        let result = run(
            &config,
            &StateAction::Restore {
                state: "0011".to_string(),
                count: 1,
            },
            OutputFormat::Text,
            &mut Vec::new(),
        );
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::InvalidState(_)))
        ));
    }

    #[test]
    fn test_skip_changes_state() {
        let config = seeded(EngineKind::XorShift128Plus);
        let mut saved = Vec::new();
        run(&config, &StateAction::Save { advance: 0 }, OutputFormat::Text, &mut saved).unwrap();
        let mut skipped = Vec::new();
        run(
            &config,
            &StateAction::Skip {
                times: 1,
                back: false,
            },
            OutputFormat::Text,
            &mut skipped,
        )
        .unwrap();
        assert_ne!(output_lines(saved), output_lines(skipped));
    }

    #[test]
    fn test_skip_back_is_unsupported() {
        let config = seeded(EngineKind::SplitMix64);
        let result = run(
            &config,
            &StateAction::Skip {
                times: 1,
                back: true,
            },
            OutputFormat::Text,
            &mut Vec::new(),
        );
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::UnsupportedOperation(_)))
        ));
    }

    #[test]
    fn test_json_report() {
        let config = seeded(EngineKind::SplitMix64);
        let mut out = Vec::new();
        run(&config, &StateAction::Save { advance: 0 }, OutputFormat::Json, &mut out).unwrap();
        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["engine"], "splitmix64");
        assert_eq!(report["state"].as_str().unwrap().len(), 16);
        assert!(report.get("draws").is_none());
    }
}
