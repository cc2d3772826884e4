//! Input and session error types.

use thiserror::Error;

/// Invalid user input. Every variant is recovered by prompting again; the
/// `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid number for the length.")]
    InvalidLength,

    #[error("Password length must be at least {minimum}.")]
    LengthTooShort { minimum: usize },

    #[error("Please enter a valid number for how many passwords to generate.")]
    InvalidCount,

    #[error("Please enter 1 or greater for the number of passwords.")]
    CountTooSmall,

    #[error("Please enter 'y' or 'n'.")]
    InvalidAnswer,

    #[error("You must choose at least one character type.")]
    NoClassSelected,

    #[error(
        "Password length must be at least the number of selected character types ({required})."
    )]
    LengthBelowClasses { required: usize },
}

/// Conditions that end an interactive session early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Standard input reached end-of-file while waiting for an answer.
    #[error("input closed")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `SessionError`.
pub type Result<T> = std::result::Result<T, SessionError>;
