//! Errors reported by the calculator engine.

use thiserror::Error;

/// A recoverable calculation failure.
///
/// The engine has already reset itself to its initial state by the time one
/// of these reaches the caller, so the only thing left to do is tell the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The right operand of `/` was exactly zero.
    #[error("Division by zero")]
    DivideByZero,
    /// The current input could not be read as a number, or the result was not finite.
    #[error("Invalid operation")]
    InvalidOperation,
}
