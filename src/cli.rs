/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line interface structs and functions.

use crate::Signature;
use anyhow::{anyhow, bail, Result};
use clap::{Args, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Parses a duration from a string.
/// If no suffix is given, it is assumed to be in milliseconds.
/// You can use suffixes, the available ones are:
/// - `s` for seconds
/// - `m` for minutes
/// - `h` for hours
/// - `d` for days
///
/// Example: `1d2h3m4s567` is parsed as: 1 day, 2 hours, 3 minutes, 4
/// seconds, and 567 milliseconds.
fn parse_duration(value: &str) -> Result<Duration> {
    if value.is_empty() {
        bail!("Empty duration string, if you want every 0 milliseconds use `0`.");
    }
    let mut duration = Duration::from_secs(0);
    let mut acc = String::new();
    for c in value.chars() {
        if c.is_ascii_digit() {
            acc.push(c);
        } else if c.is_whitespace() {
            continue;
        } else {
            let dur = acc.parse::<u64>()?;
            match c {
                's' => duration += Duration::from_secs(dur),
                'm' => duration += Duration::from_secs(dur * 60),
                'h' => duration += Duration::from_secs(dur * 60 * 60),
                'd' => duration += Duration::from_secs(dur * 60 * 60 * 24),
                _ => return Err(anyhow!("Invalid duration suffix: {}", c)),
            }
            acc.clear();
        }
    }
    if !acc.is_empty() {
        let dur = acc.parse::<u64>()?;
        duration += Duration::from_millis(dur);
    }
    Ok(duration)
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    #[arg(long, value_parser = parse_duration, display_order = 1000)]
    /// How often to log progress. Default is 10s. You can use the suffixes
    /// "s" for seconds, "m" for minutes, "h" for hours, and "d" for days. If
    /// no suffix is provided it is assumed to be in milliseconds.
    pub log_interval: Option<Duration>,
}

#[derive(Parser, Debug)]
#[command(name = "edgesig", version)]
/// Checks that two tab-separated edge lists describe the same undirected
/// weighted graph, independently of line order and edge direction, by
/// comparing order-independent aggregate signatures.
pub struct Cli {
    /// The reference edge list.
    pub input: PathBuf,
    /// The candidate edge list to validate against the reference.
    pub output: PathBuf,
    #[clap(flatten)]
    pub args: GlobalArgs,
}

/// Formats the comparison report, byte-identical to the reference checker.
pub fn report(input: &Signature, output: &Signature) -> String {
    let matches = input == output;
    format!(
        "input_edges={}  output_edges={}  match={}\nsum64: {} vs {}\nxor64: {} vs {}\n",
        input.edges,
        output.edges,
        if matches { "True" } else { "False" },
        input.sum64,
        output.sum64,
        input.xor64,
        output.xor64,
    )
}

/// The entry point of the command-line interface.
///
/// Computes the signatures of the two edge lists, prints the comparison
/// report on standard output, and returns whether the signatures match. Any
/// I/O or parse error aborts the comparison before anything is printed.
pub fn main<I, T>(args: I) -> Result<bool>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();
    let cli = Cli::parse_from(args);
    let log_interval = cli.args.log_interval;

    // The two signatures are independent, so they can be computed in
    // parallel without any observable difference.
    let (input_sig, output_sig) = rayon::join(
        || Signature::from_path(&cli.input, log_interval),
        || Signature::from_path(&cli.output, log_interval),
    );
    let (input_sig, output_sig) = (input_sig?, output_sig?);

    print!("{}", report(&input_sig, &output_sig));

    log::info!(
        "The command took {:.3} seconds",
        start.elapsed().as_secs_f64()
    );
    Ok(input_sig == output_sig)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("500").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(
            parse_duration("1d2h3m4s567").unwrap(),
            Duration::from_secs(60 * 60 * 24 + 2 * 60 * 60 + 3 * 60 + 4)
                + Duration::from_millis(567)
        );
        assert!(parse_duration("").is_err());
        assert!(parse_duration("5x").is_err());
    }

    #[test]
    fn test_report_format() {
        let a = Signature {
            edges: 2,
            sum64: 10,
            xor64: 20,
        };
        assert_eq!(
            report(&a, &a),
            "input_edges=2  output_edges=2  match=True\nsum64: 10 vs 10\nxor64: 20 vs 20\n"
        );
        let b = Signature {
            edges: 2,
            sum64: 11,
            xor64: 21,
        };
        assert_eq!(
            report(&a, &b),
            "input_edges=2  output_edges=2  match=False\nsum64: 10 vs 11\nxor64: 20 vs 21\n"
        );
    }
}
