//! CLI-surface errors: bad arguments, file I/O, and the wrapped
//! board/preamble parse failures.

/// Anything that can fail between parsing `argv` and printing a result.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Fewer than 3 positional arguments were given.
    #[error("expected at least 3 positional arguments (problem_file start_cell goal_cell), found {found}")]
    BadArgs { found: usize },

    /// A positional argument that should be an integer was not.
    #[error("invalid integer for {field}: \"{value}\"")]
    InvalidInteger { field: &'static str, value: String },

    /// The problem file could not be opened.
    #[error("could not open problem file \"{path}\": {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The problem file's board or preamble was malformed.
    #[error(transparent)]
    Problem(#[from] gridwalk_core::ProblemError),

    /// A split-mode sub-problem file could not be written.
    #[error("could not write sub-problem file \"{path}\": {source}")]
    SplitWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
