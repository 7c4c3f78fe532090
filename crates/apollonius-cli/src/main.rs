//! apollonius CLI tool
//!
//! Generates an Apollonian gasket and writes it to stdout.
//!
//! Usage:
//!   apollonius bends <b1> <b2> <b3>
//!   apollonius pair <x1> <y1> <x2> <y2>
//!   apollonius triplet <x1> <y1> <x2> <y2> <x3> <y3>
//!   apollonius outer-bend <b1> <b2> <b3>

mod command;
mod config;
mod error;
mod export;

use std::io::{self, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::command::Command;
use crate::config::CliConfig;
use crate::error::{CliError, Result};

fn print_usage() {
    eprintln!("apollonius - Generate Apollonian gaskets");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  apollonius bends <b1> <b2> <b3>                    Gasket from three bends");
    eprintln!("  apollonius pair <x1> <y1> <x2> <y2>                Gasket from two centers in the unit circle");
    eprintln!("  apollonius triplet <x1> <y1> <x2> <y2> <x3> <y3>   Gasket from three triangle vertices");
    eprintln!("  apollonius outer-bend <b1> <b2> <b3>               Print the outer bend");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  APOLLONIUS_MAX_BEND    Largest bend generated (default: 100)");
    eprintln!("  APOLLONIUS_MIN_RADIUS  Smallest radius generated, overrides APOLLONIUS_MAX_BEND");
    eprintln!("  APOLLONIUS_MAX_COUNT   Soft circle count bound (default: 1000)");
    eprintln!("  APOLLONIUS_FORMAT      csv or json (default: csv)");
    eprintln!("  RUST_LOG               Log filter (default: apollonius=info)");
}

/// Execute `command` and write its result to `out`.
fn run<W: Write>(command: &Command, config: &CliConfig, out: &mut W) -> Result<()> {
    if let Some(bend) = command.outer_bend() {
        writeln!(out, "{}", bend)?;
        return Ok(());
    }

    let limits = config.limits_for(command);
    tracing::info!(
        max_bend = limits.max_bend,
        max_count = limits.max_count,
        "Generating gasket"
    );

    if let Some(result) = command.generate(limits) {
        let circles = result?;
        tracing::info!(circles = circles.len(), "Gasket generated");
        export::write_circles(out, &circles, config.format)?;
    }
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apollonius=info,apollonius_gasket=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e @ CliError::Usage(_)) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    let config = CliConfig::from_env()?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    run(&command, &config, &mut out)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use apollonius_gasket::GasketError;

    fn run_to_string(args: &[&str], config: &CliConfig) -> Result<String> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let command = Command::parse(&args)?;
        let mut buf = Vec::new();
        run(&command, config, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    #[test]
    fn outer_bend_prints_value() {
        let out = run_to_string(&["outer-bend", "2", "2", "3"], &CliConfig::default()).unwrap();
        assert_eq!(out, "-1\n");
    }

    #[test]
    fn bends_seed_as_csv() {
        let config = CliConfig {
            max_count: 0,
            ..CliConfig::default()
        };
        let out = run_to_string(&["bends", "2", "2", "3"], &config).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("bend, x, y"));
        assert_eq!(lines.next(), Some("-1, 0, 0"));
        assert_eq!(lines.count(), 3);
    }

    #[test]
    fn pair_as_json() {
        let config = CliConfig {
            max_bend: 20.0,
            format: OutputFormat::Json,
            ..CliConfig::default()
        };
        let out = run_to_string(&["pair", "0.5", "0", "-0.5", "0"], &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(23));
    }

    #[test]
    fn invalid_seed_is_reported() {
        let err = run_to_string(&["pair", "1.5", "0", "-0.5", "0"], &CliConfig::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Gasket(GasketError::InvalidSeed { .. })));
    }
}
