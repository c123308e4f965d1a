//! Error types for Aura.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuraError {
    #[error("Daemon not running. Start it with `aurad` and try again.")]
    DaemonNotRunning,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Authentication required. Pass --username/--password or log in via the web UI.")]
    Unauthorized,
}

/// Error produced while evaluating a normalized expression.
///
/// This is the only failure the evaluator knows about, and it is always
/// recovered at the `calculate_expression` boundary by falling through to
/// the next answer strategy. It never reaches the end user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("unexpected character '{0}' at offset {1}")]
    UnexpectedChar(char, usize),

    #[error("unexpected token at offset {0}")]
    UnexpectedToken(usize),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("division by zero")]
    DivisionByZero,

    #[error("operator not applicable to these operands")]
    TypeMismatch,
}
