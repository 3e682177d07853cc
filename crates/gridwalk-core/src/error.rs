//! Errors for problem-file parsing and board construction.

/// Errors parsing the board dimensions and edge list (`MalformedBoard`
/// in the external interface contract).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// `W < 1` or `H < 1`.
    #[error("invalid board dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    /// The `W H` header line is missing or non-numeric.
    #[error("missing or invalid {field} in board header")]
    MissingDimension { field: &'static str },

    /// The edge token list ran out before `2WH - W - H` tokens were read.
    #[error("truncated edge list: expected {expected} ops, found {found}")]
    TruncatedEdges { expected: usize, found: usize },

    /// An edge token did not start with `+`, `-`, or `*`.
    #[error("unknown operator character: '{character}'")]
    UnknownOperator { character: char },

    /// An edge token's numeric part did not parse as an integer.
    #[error("invalid operator constant: \"{found}\"")]
    InvalidConstant { found: String },
}

/// Errors parsing the optional preamble tail (`MalformedPreamble`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreambleError {
    /// A preamble cell index was negative.
    #[error("negative preamble cell index: {found}")]
    NegativeIndex { found: i64 },

    /// The preamble goal index was negative.
    #[error("negative goal index: {found}")]
    NegativeGoal { found: i64 },

    /// Consecutive preamble cells are not connected by a live edge.
    #[error("preamble step {step} from cell {from} to cell {to} is not a live edge")]
    DisconnectedStep { step: usize, from: usize, to: usize },

    /// A preamble or goal cell index is out of bounds for the board.
    #[error("cell index {found} is out of bounds for a {width}x{height} board")]
    OutOfBounds {
        found: usize,
        width: usize,
        height: usize,
    },
}
