//! Error types for command resolution and cmdlet execution.
//!
//! Every failure raised below the façade is a `ShellError`. The façade
//! catches them all and folds them into a failed `CommandResult`;
//! nothing here ever reaches the host as a panic or a raw error value.

use thiserror::Error;

/// Failures that can occur during dispatch or inside a cmdlet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// No handler is registered under the resolved name.
    ///
    /// `command` is the literal token the user typed, not the
    /// alias-resolved form, so typos stay recognizable in the message.
    #[error("The term '{command}' is not recognized as the name of a cmdlet, function, or operable program.")]
    UnrecognizedCommand { command: String },

    /// A cmdlet was invoked without one of its required parameters.
    #[error("{cmdlet}: missing required parameter '{parameter}'")]
    MissingParameter {
        cmdlet: &'static str,
        parameter: &'static str,
    },

    /// A parameter was present but its value could not be used.
    #[error("{cmdlet}: {message}")]
    InvalidArgument {
        cmdlet: &'static str,
        message: String,
    },
}

impl ShellError {
    /// Shorthand used by cmdlets when a positional or flag value is absent.
    pub fn missing(cmdlet: &'static str, parameter: &'static str) -> Self {
        Self::MissingParameter { cmdlet, parameter }
    }
}
