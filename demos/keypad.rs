//! Keypad Session
//!
//! Drives a calculator from standard input, one key name per line
//! (`7`, `+`, `Enter`, `Backspace`, `c`, ...), printing the display after
//! every update.
//!
//! Set `ABACUS_CONFIG` to a JSON file to override the defaults, and
//! `RUST_LOG=abacus=debug` to watch every transition.
//!
//! Run with: cargo run --example keypad

use abacus::{CalculatorBuilder, CalculatorConfig};
use std::io::{self, BufRead};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "abacus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match std::env::var("ABACUS_CONFIG") {
        Ok(path) => CalculatorConfig::from_json(&std::fs::read_to_string(path)?)?,
        Err(_) => CalculatorConfig::default(),
    };

    let mut calc = CalculatorBuilder::new()
        .config(config)
        .build(|text: &str| println!("[{text:>16}]"))?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let key = line.trim();
        if key.is_empty() {
            continue;
        }
        if !calc.on_key(key) {
            eprintln!("ignored key: {key}");
        }
    }

    Ok(())
}
