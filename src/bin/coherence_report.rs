//! Coherence Report CLI
//!
//! Scores a choice sequence from the command line and prints the JSON
//! report. Exits nonzero with the typed validation message on bad input.
//!
//! Usage:
//!   coherence_report [--mode simple|closed-form|sigma] [--preset kappa|r]
//!                    [--labels A,B] [--timeouts] [--expect N] SYMBOL...

use anyhow::{bail, Result};

use coherence_core::{
    Alphabet, ClassificationPreset, CoefficientMode, CoherenceEngine, EngineConfig,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut config = EngineConfig::default();
    let mut expected_len: Option<usize> = None;
    let mut labels: Option<(String, String)> = None;
    let mut timeouts = false;
    let mut symbols: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mode" => {
                let Some(mode) = args.next() else {
                    bail!("--mode requires a value");
                };
                config.coefficient_mode = match mode.as_str() {
                    "simple" => CoefficientMode::Simple,
                    "closed-form" => CoefficientMode::ClosedForm,
                    "sigma" => CoefficientMode::SigmaCorrected,
                    other => bail!("unknown mode: {other}"),
                };
            }
            "--preset" => {
                let Some(preset) = args.next() else {
                    bail!("--preset requires a value");
                };
                config.classification_preset = match preset.as_str() {
                    "kappa" => ClassificationPreset::FourLevelKappa,
                    "r" => ClassificationPreset::FourLevelR,
                    other => bail!("unknown preset: {other}"),
                };
            }
            "--labels" => {
                let Some(pair) = args.next() else {
                    bail!("--labels requires a value like Azul,Vermelho");
                };
                let Some((a, b)) = pair.split_once(',') else {
                    bail!("--labels requires two comma-separated labels");
                };
                labels = Some((a.to_string(), b.to_string()));
            }
            "--timeouts" => timeouts = true,
            "--expect" => {
                let Some(n) = args.next() else {
                    bail!("--expect requires a count");
                };
                expected_len = Some(n.parse()?);
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            _ => symbols.push(arg),
        }
    }

    let mut alphabet = if timeouts {
        Alphabet::three_symbol()
    } else {
        Alphabet::two_symbol()
    };
    if let Some((a, b)) = labels {
        alphabet = alphabet.with_labels(a, b);
    }
    config.alphabet = alphabet;

    let engine = CoherenceEngine::new(config);
    let report = engine.report_from_symbols(&symbols, expected_len)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_usage() {
    println!("coherence_report - score a binary decision sequence");
    println!();
    println!("Usage: coherence_report [OPTIONS] SYMBOL...");
    println!();
    println!("Options:");
    println!("  --mode simple|closed-form|sigma   coefficient formula (default closed-form)");
    println!("  --preset kappa|r                  classification thresholds (default kappa)");
    println!("  --labels A,B                      custom symbol labels, e.g. Azul,Vermelho");
    println!("  --timeouts                        accept the \"timeout\" sentinel");
    println!("  --expect N                        fail unless exactly N symbols are given");
}
