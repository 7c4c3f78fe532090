//! Environment configuration for the CLI.

use std::env;
use std::str::FromStr;

use apollonius_gasket::{max_bend_for_min_radius, GasketLimits};

use crate::command::Command;
use crate::error::{CliError, Result};

/// Default bend bound.
pub const DEFAULT_MAX_BEND: f64 = 100.0;

/// Default soft circle count.
pub const DEFAULT_MAX_COUNT: usize = 1000;

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format {:?}, expected csv or json", other)),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Circles with a bend magnitude at or above this are not generated
    pub max_bend: f64,
    /// When set, replaces `max_bend` with a bound derived from the radius
    pub min_radius: Option<f64>,
    /// Soft bound on the number of circles
    pub max_count: usize,
    /// Encoding written to stdout
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            max_bend: DEFAULT_MAX_BEND,
            min_radius: None,
            max_count: DEFAULT_MAX_COUNT,
            format: OutputFormat::Csv,
        }
    }
}

impl CliConfig {
    /// Create config from environment variables with defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_bend = match lookup("APOLLONIUS_MAX_BEND") {
            Some(raw) => positive("APOLLONIUS_MAX_BEND", &raw, true)?,
            None => DEFAULT_MAX_BEND,
        };

        let min_radius = lookup("APOLLONIUS_MIN_RADIUS")
            .map(|raw| positive("APOLLONIUS_MIN_RADIUS", &raw, false))
            .transpose()?;

        let max_count = match lookup("APOLLONIUS_MAX_COUNT") {
            Some(raw) => raw.trim().parse().map_err(|e| CliError::InvalidConfig {
                key: "APOLLONIUS_MAX_COUNT",
                reason: format!("{:?}: {}", raw, e),
            })?,
            None => DEFAULT_MAX_COUNT,
        };

        let format = match lookup("APOLLONIUS_FORMAT") {
            Some(raw) => raw.parse().map_err(|reason| CliError::InvalidConfig {
                key: "APOLLONIUS_FORMAT",
                reason,
            })?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            max_bend,
            min_radius,
            max_count,
            format,
        })
    }

    /// Limits to use for `command`.
    ///
    /// A minimum radius is measured against the unit outer circle, except in
    /// bends mode where it is relative to the seed's own outer circle.
    pub fn limits_for(&self, command: &Command) -> GasketLimits {
        let max_bend = match (self.min_radius, command) {
            (Some(r), Command::Bends { bends: [b1, b2, b3] }) => {
                max_bend_for_min_radius(*b1, *b2, *b3, r)
            }
            (Some(r), _) => 1.0 / r,
            (None, _) => self.max_bend,
        };
        GasketLimits::new(max_bend, self.max_count)
    }
}

fn positive(key: &'static str, raw: &str, allow_infinite: bool) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| CliError::InvalidConfig {
        key,
        reason: format!("{:?} is not a number", raw),
    })?;
    if value.is_nan() || value <= 0.0 || (!allow_infinite && value.is_infinite()) {
        return Err(CliError::InvalidConfig {
            key,
            reason: format!("{} must be positive", value),
        });
    }
    Ok(value)
}
