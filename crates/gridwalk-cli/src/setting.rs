//! Argument parsing for the positional CLI surface.

use std::fmt;

use crate::error::CliError;

/// Which of the two run modes a [`Setting`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Run the search with the given worker count.
    Solve { threads: usize },
    /// Persist at least `count` sub-problems to disk instead of solving.
    Split { count: usize },
}

/// Parsed command-line settings: `<problem_file> <start_cell> <goal_cell>
/// [<option>] [<split_count>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub file_name: String,
    pub start_position: i64,
    pub goal_position: i64,
    pub mode: Mode,
}

/// Default worker/split count when no `option`/`split_count` is given.
const DEFAULT_SPLIT_COUNT: usize = 2;

impl Setting {
    /// Parse positional arguments (the program name already stripped).
    ///
    /// `option > 0` selects solver mode with `option` worker threads;
    /// `option == 0` selects split mode, reading `split_count` from the
    /// next argument (default `2` if absent); a negative `option` is
    /// treated as its absolute value.
    pub fn from_args(args: &[String]) -> Result<Setting, CliError> {
        if args.len() < 3 {
            return Err(CliError::BadArgs { found: args.len() });
        }

        let file_name = args[0].clone();
        let start_position = parse_i64(&args[1], "start_cell")?;
        let goal_position = parse_i64(&args[2], "goal_cell")?;

        let mode = if args.len() < 4 {
            Mode::Solve { threads: 1 }
        } else {
            let option = parse_i64(&args[3], "option")?;
            if option != 0 {
                Mode::Solve {
                    threads: option.unsigned_abs().max(1) as usize,
                }
            } else {
                let count = if args.len() >= 5 {
                    let raw = parse_i64(&args[4], "split_count")?;
                    raw.unsigned_abs().max(2) as usize
                } else {
                    DEFAULT_SPLIT_COUNT
                };
                Mode::Split { count }
            }
        };

        Ok(Setting {
            file_name,
            start_position,
            goal_position,
            mode,
        })
    }
}

fn parse_i64(token: &str, field: &'static str) -> Result<i64, CliError> {
    token.parse().map_err(|_| CliError::InvalidInteger {
        field,
        value: token.to_string(),
    })
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Setting]")?;
        writeln!(f, "  file: {}", self.file_name)?;
        writeln!(f, "  start: {}", self.start_position)?;
        writeln!(f, "  goal: {}", self.goal_position)?;
        match self.mode {
            Mode::Solve { threads } => write!(f, "  mode: solve ({threads} threads)"),
            Mode::Split { count } => write!(f, "  mode: split ({count} sub-problems)"),
        }
    }
}
