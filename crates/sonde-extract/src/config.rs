//! Extraction run configuration and CLI argument parsing.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Number of positional arguments after the program name.
pub const ARG_COUNT: usize = 6;

/// Validated inputs for one extraction run.
///
/// Built either directly (library use) via [`ExtractionConfig::new`] or
/// from CLI arguments via [`ExtractionConfig::from_args`]. Both paths
/// apply the same validation: `ny` must be positive and the bounds must
/// describe a non-empty rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractionConfig {
    /// Snapshot file to restore.
    pub filename: PathBuf,
    /// Lower x bound of the sampling window.
    pub xmin: f64,
    /// Lower y bound of the sampling window.
    pub ymin: f64,
    /// Upper x bound of the sampling window.
    pub xmax: f64,
    /// Upper y bound of the sampling window.
    pub ymax: f64,
    /// Number of sample points along y.
    pub ny: u32,
}

/// Errors from configuration parsing and validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Wrong number of CLI arguments.
    InvalidArgumentCount {
        /// Arguments actually supplied (excluding the program name).
        found: usize,
    },
    /// A numeric argument failed to parse.
    InvalidNumber {
        /// Which argument slot was malformed.
        argument: &'static str,
        /// The offending input text.
        value: String,
    },
    /// `ny` is not positive.
    InvalidGridSize {
        /// The value supplied for `ny`.
        ny: i64,
    },
    /// Bounds do not satisfy `xmax > xmin` and `ymax > ymin`.
    InvalidBounds {
        /// Supplied x range.
        x: (f64, f64),
        /// Supplied y range.
        y: (f64, f64),
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgumentCount { found } => {
                write!(f, "expected {ARG_COUNT} arguments, got {found}")
            }
            Self::InvalidNumber { argument, value } => {
                write!(f, "argument {argument} is not a number: '{value}'")
            }
            Self::InvalidGridSize { ny } => write!(f, "ny must be positive, got {ny}"),
            Self::InvalidBounds { x, y } => {
                write!(
                    f,
                    "bounds must satisfy xmax>xmin and ymax>ymin, got x=[{}, {}] y=[{}, {}]",
                    x.0, x.1, y.0, y.1
                )
            }
        }
    }
}

impl Error for ConfigError {}

impl ExtractionConfig {
    /// Build and validate a configuration.
    pub fn new(
        filename: impl Into<PathBuf>,
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
        ny: i64,
    ) -> Result<Self, ConfigError> {
        if ny <= 0 {
            return Err(ConfigError::InvalidGridSize { ny });
        }
        if xmax <= xmin || ymax <= ymin {
            return Err(ConfigError::InvalidBounds {
                x: (xmin, xmax),
                y: (ymin, ymax),
            });
        }
        Ok(Self {
            filename: filename.into(),
            xmin,
            ymin,
            xmax,
            ymax,
            ny: ny as u32,
        })
    }

    /// Parse CLI arguments: `<filename> <xmin> <ymin> <xmax> <ymax> <ny>`.
    ///
    /// `args` excludes the program name. Malformed numbers are rejected
    /// rather than silently read as zero, with the argument slot named
    /// in the error.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        if args.len() != ARG_COUNT {
            return Err(ConfigError::InvalidArgumentCount { found: args.len() });
        }
        let xmin = parse_f64("xmin", &args[1])?;
        let ymin = parse_f64("ymin", &args[2])?;
        let xmax = parse_f64("xmax", &args[3])?;
        let ymax = parse_f64("ymax", &args[4])?;
        let ny: i64 = args[5]
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber {
                argument: "ny",
                value: args[5].clone(),
            })?;
        Self::new(&args[0], xmin, ymin, xmax, ymax, ny)
    }
}

fn parse_f64(argument: &'static str, text: &str) -> Result<f64, ConfigError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            argument,
            value: text.to_string(),
        })?;
    if !value.is_finite() {
        return Err(ConfigError::InvalidNumber {
            argument,
            value: text.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_valid_arguments() {
        let cfg =
            ExtractionConfig::from_args(&args(&["dump", "0", "0", "2", "1", "10"])).unwrap();
        assert_eq!(cfg.filename, PathBuf::from("dump"));
        assert_eq!(cfg.xmin, 0.0);
        assert_eq!(cfg.xmax, 2.0);
        assert_eq!(cfg.ymax, 1.0);
        assert_eq!(cfg.ny, 10);
    }

    #[test]
    fn wrong_argument_count_rejected() {
        for n in [0, 1, 5, 7] {
            let supplied: Vec<String> = (0..n).map(|i| i.to_string()).collect();
            assert_eq!(
                ExtractionConfig::from_args(&supplied),
                Err(ConfigError::InvalidArgumentCount { found: n })
            );
        }
    }

    #[test]
    fn malformed_number_names_the_slot() {
        let result = ExtractionConfig::from_args(&args(&["dump", "0", "abc", "2", "1", "10"]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidNumber {
                argument: "ymin",
                value: "abc".into()
            })
        );
    }

    #[test]
    fn non_finite_bound_rejected() {
        let result = ExtractionConfig::from_args(&args(&["dump", "0", "0", "inf", "1", "10"]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber {
                argument: "xmax",
                ..
            })
        ));
    }

    #[test]
    fn non_positive_ny_rejected() {
        for ny in ["0", "-3"] {
            let result =
                ExtractionConfig::from_args(&args(&["dump", "0", "0", "2", "1", ny]));
            assert!(matches!(
                result,
                Err(ConfigError::InvalidGridSize { .. })
            ));
        }
    }

    #[test]
    fn inverted_bounds_rejected() {
        let result = ExtractionConfig::from_args(&args(&["dump", "2", "0", "0", "1", "10"]));
        assert!(matches!(result, Err(ConfigError::InvalidBounds { .. })));
        // Equal bounds are empty too.
        let result = ExtractionConfig::from_args(&args(&["dump", "0", "1", "2", "1", "10"]));
        assert!(matches!(result, Err(ConfigError::InvalidBounds { .. })));
    }

    #[test]
    fn parse_errors_precede_bounds_checks() {
        // ny is malformed AND bounds are inverted: parse errors win.
        let result = ExtractionConfig::from_args(&args(&["dump", "2", "0", "0", "1", "x"]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber { argument: "ny", .. })
        ));
    }
}
