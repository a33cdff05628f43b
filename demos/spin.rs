//! Spin Demo: headless slot draw.
//!
//! Reads newline-delimited options from a file (first argument) or
//! stdin, runs a full reel session against real time, and prints the
//! winners.
//!
//! ```text
//! spin <options-file> [reel-count] [--repeats]
//! ```

use anyhow::{bail, Context, Result};
use drumroll::query::parse_options;
use drumroll::reel::spin;
use std::io::Read;
use std::time::Duration;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let text = match args.first().map(String::as_str) {
        Some("-") | None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading options from stdin")?;
            text
        }
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?,
    };
    let options = parse_options(&text);

    let reel_count = match args.get(1) {
        Some(raw) => raw.parse().context("reel count must be a positive integer")?,
        None => 3,
    };
    let unique = !args.iter().any(|a| a == "--repeats");

    if options.is_empty() {
        bail!("no options given");
    }

    println!("Spinning {reel_count} reels over {} options…", options.len());
    let winners = spin(&options, reel_count, unique, Duration::from_millis(16))
        .context("draw rejected")?;

    println!("Winners:");
    for (i, winner) in winners.iter().enumerate() {
        println!("  {}. {winner}", i + 1);
    }
    Ok(())
}
