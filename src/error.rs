use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolveError>;

/// Why a single cell of text could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("malformed number: {0}")]
    Malformed(String),
    #[error("zero denominator: {0}")]
    ZeroDenominator(String),
    #[error("number out of range: {0}")]
    OutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("invalid coefficient text: {text}")]
    InvalidCoefficient {
        equation: usize,
        variable: usize,
        text: String,
        #[source]
        source: ParseError,
    },
    #[error("invalid constant text: {text}")]
    InvalidConstant {
        equation: usize,
        text: String,
        #[source]
        source: ParseError,
    },
    #[error("inconsistent system (no solution)")]
    Inconsistent { row: usize },
    #[error("underdetermined system (infinitely many solutions)")]
    Underdetermined { free_columns: Vec<usize> },
    #[error("system needs at least one variable and one equation (got {variables} x {equations})")]
    InvalidShape { variables: usize, equations: usize },
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("system too large: {size} exceeds limit {limit}")]
    TooLarge { size: usize, limit: usize },
    #[error("cell out of range: equation {equation}, column {column}")]
    CellOutOfRange { equation: usize, column: usize },
    #[error("no system configured")]
    NotConfigured,
}

impl SolveError {
    /// True for the failures raised while reading cell text, before elimination runs.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SolveError::InvalidCoefficient { .. } | SolveError::InvalidConstant { .. }
        )
    }
}
