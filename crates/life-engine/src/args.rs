//! Positional command-line arguments.
//!
//! The binary accepts up to four positional arguments, each one optional
//! only if every argument after it is also omitted:
//!
//! ```text
//! life [ROWS [COLS [SEED_FILE [GENERATIONS]]]]
//! ```
//!
//! Omitted values fall through to the configuration file, environment, and
//! built-in defaults. Numbers are parsed strictly: `12abc`, `-3` and `0` rows
//! are rejected before any grid is built.

use std::path::PathBuf;

use life_core::config::LifeConfig;

/// One-line usage summary.
pub const USAGE: &str = "usage: life [ROWS [COLS [SEED_FILE [GENERATIONS]]]]";

/// Most positional arguments accepted.
const MAX_ARGS: usize = 4;

/// Errors produced while parsing arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    /// The row count is not a positive integer.
    #[error("invalid rows: {value:?} is not a positive integer")]
    InvalidRows {
        /// The rejected argument.
        value: String,
    },

    /// The column count is not a positive integer.
    #[error("invalid cols: {value:?} is not a positive integer")]
    InvalidCols {
        /// The rejected argument.
        value: String,
    },

    /// The generation count is not a non-negative integer.
    #[error("invalid generations: {value:?} is not a non-negative integer")]
    InvalidGenerations {
        /// The rejected argument.
        value: String,
    },

    /// More positional arguments than the binary understands.
    #[error("too many arguments ({count}); {}", USAGE)]
    TooMany {
        /// Number of arguments given.
        count: usize,
    },
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Interior rows.
    pub rows: Option<usize>,
    /// Interior columns.
    pub cols: Option<usize>,
    /// Seed file path.
    pub seed_file: Option<PathBuf>,
    /// Number of evolution steps.
    pub generations: Option<u64>,
}

impl CliArgs {
    /// Parse positional arguments, program name excluded.
    pub fn parse<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        if args.len() > MAX_ARGS {
            return Err(ArgsError::TooMany { count: args.len() });
        }

        let mut parsed = Self::default();
        let mut args = args.into_iter();

        if let Some(value) = args.next() {
            let Some(rows) = parse_dimension(&value) else {
                return Err(ArgsError::InvalidRows { value });
            };
            parsed.rows = Some(rows);
        }
        if let Some(value) = args.next() {
            let Some(cols) = parse_dimension(&value) else {
                return Err(ArgsError::InvalidCols { value });
            };
            parsed.cols = Some(cols);
        }
        if let Some(value) = args.next() {
            parsed.seed_file = Some(PathBuf::from(value));
        }
        if let Some(value) = args.next() {
            let Ok(generations) = value.parse() else {
                return Err(ArgsError::InvalidGenerations { value });
            };
            parsed.generations = Some(generations);
        }

        Ok(parsed)
    }

    /// Overwrite the configuration with every value given on the command line.
    pub fn apply(self, config: &mut LifeConfig) {
        if let Some(rows) = self.rows {
            config.grid.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.grid.cols = cols;
        }
        if let Some(seed_file) = self.seed_file {
            config.simulation.seed_file = seed_file;
        }
        if let Some(generations) = self.generations {
            config.simulation.generations = generations;
        }
    }
}

fn parse_dimension(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok().filter(|&n| n > 0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_keeps_config() {
        let args = CliArgs::parse(Vec::<String>::new()).unwrap();
        assert_eq!(args, CliArgs::default());

        let mut config = LifeConfig::default();
        args.apply(&mut config);
        assert_eq!(config, LifeConfig::default());
    }

    #[test]
    fn rows_only_keeps_default_cols() {
        let mut config = LifeConfig::default();
        CliArgs::parse(["5"]).unwrap().apply(&mut config);
        assert_eq!(config.grid.rows, 5);
        assert_eq!(config.grid.cols, 10);
        assert_eq!(config.simulation.generations, 10);
    }

    #[test]
    fn all_four_arguments() {
        let mut config = LifeConfig::default();
        CliArgs::parse(["3", "7", "glider.txt", "0"])
            .unwrap()
            .apply(&mut config);
        assert_eq!(config.grid.rows, 3);
        assert_eq!(config.grid.cols, 7);
        assert_eq!(config.simulation.seed_file, PathBuf::from("glider.txt"));
        assert_eq!(config.simulation.generations, 0);
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert_eq!(
            CliArgs::parse(["abc"]),
            Err(ArgsError::InvalidRows {
                value: "abc".to_owned()
            })
        );
        assert_eq!(
            CliArgs::parse(["12abc"]),
            Err(ArgsError::InvalidRows {
                value: "12abc".to_owned()
            })
        );
        assert_eq!(
            CliArgs::parse(["4", "0"]),
            Err(ArgsError::InvalidCols {
                value: "0".to_owned()
            })
        );
        assert_eq!(
            CliArgs::parse(["4", "4", "life.txt", "-1"]),
            Err(ArgsError::InvalidGenerations {
                value: "-1".to_owned()
            })
        );
    }

    #[test]
    fn error_messages_name_the_argument() {
        let err = CliArgs::parse(["x"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid rows: \"x\" is not a positive integer"
        );
        let err = CliArgs::parse(["1", "2", "f", "g"]).unwrap_err();
        assert!(err.to_string().starts_with("invalid generations"));
    }

    #[test]
    fn too_many_arguments() {
        let err = CliArgs::parse(["1", "2", "f", "3", "extra"]).unwrap_err();
        assert_eq!(err, ArgsError::TooMany { count: 5 });
        assert!(err.to_string().contains(USAGE));
    }
}
