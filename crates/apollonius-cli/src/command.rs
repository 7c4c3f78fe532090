//! Command-line parsing.

use apollonius_gasket::{
    from_bends, from_centers_pair, from_centers_triplet, get_outer_bend, Circle, Complex,
    GasketLimits,
};

use crate::error::{CliError, Result};

/// A parsed subcommand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Gasket from three bends
    Bends { bends: [f64; 3] },
    /// Gasket from two centers inside the unit circle
    Pair { centers: [Complex; 2] },
    /// Gasket from three triangle vertices
    Triplet { centers: [Complex; 3] },
    /// Print the outer bend for three bends
    OuterBend { bends: [f64; 3] },
}

impl Command {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let (name, rest) = args
            .split_first()
            .ok_or_else(|| CliError::Usage("missing command".to_string()))?;

        match name.as_str() {
            "bends" => Ok(Command::Bends {
                bends: numbers::<3>(name, rest, BEND_NAMES)?,
            }),
            "outer-bend" => Ok(Command::OuterBend {
                bends: numbers::<3>(name, rest, BEND_NAMES)?,
            }),
            "pair" => {
                let [x1, y1, x2, y2] = numbers::<4>(name, rest, &["x1", "y1", "x2", "y2"])?;
                Ok(Command::Pair {
                    centers: [Complex::new(x1, y1), Complex::new(x2, y2)],
                })
            }
            "triplet" => {
                let [x1, y1, x2, y2, x3, y3] =
                    numbers::<6>(name, rest, &["x1", "y1", "x2", "y2", "x3", "y3"])?;
                Ok(Command::Triplet {
                    centers: [
                        Complex::new(x1, y1),
                        Complex::new(x2, y2),
                        Complex::new(x3, y3),
                    ],
                })
            }
            other => Err(CliError::Usage(format!("unknown command: {}", other))),
        }
    }

    /// Generate the gasket for a gasket-producing command.
    ///
    /// Returns `None` for commands that print a single value.
    pub fn generate(&self, limits: GasketLimits) -> Option<apollonius_gasket::Result<Vec<Circle>>> {
        match *self {
            Command::Bends { bends: [b1, b2, b3] } => Some(from_bends(b1, b2, b3, limits)),
            Command::Pair { centers: [c1, c2] } => Some(from_centers_pair(c1, c2, limits)),
            Command::Triplet {
                centers: [c1, c2, c3],
            } => Some(from_centers_triplet(c1, c2, c3, limits)),
            Command::OuterBend { .. } => None,
        }
    }

    /// The outer bend, for `outer-bend`.
    pub fn outer_bend(&self) -> Option<f64> {
        match *self {
            Command::OuterBend { bends: [b1, b2, b3] } => Some(get_outer_bend(b1, b2, b3)),
            _ => None,
        }
    }
}

const BEND_NAMES: &[&str] = &["b1", "b2", "b3"];

fn numbers<const N: usize>(command: &str, args: &[String], names: &[&'static str]) -> Result<[f64; N]> {
    if args.len() != N {
        return Err(CliError::Usage(format!(
            "{} takes {} arguments ({}), got {}",
            command,
            N,
            names.join(" "),
            args.len()
        )));
    }

    let mut values = [0.0; N];
    for ((slot, arg), &name) in values.iter_mut().zip(args).zip(names) {
        *slot = arg.trim().parse().map_err(|_| CliError::InvalidNumber {
            name,
            value: arg.clone(),
        })?;
    }
    Ok(values)
}
