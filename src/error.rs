use std::fmt;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while parsing an argument vector or dispatching a command.
///
/// Registration mistakes (unsupported field kinds, duplicate variadic slots,
/// bad defaults) are programmer errors and panic at command construction
/// instead of appearing here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown flag: `-{0}`")]
    UnknownFlag(String),

    #[error("expected a value for `-{0}`")]
    MissingValue(String),

    #[error("can't parse `-{flag}`: {reason}")]
    BadFlagValue { flag: String, reason: String },

    #[error("can't parse `<{arg}>`: {reason}")]
    BadArgValue { arg: String, reason: String },

    #[error("missing required argument `<{0}>`")]
    MissingArg(String),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("no command specified")]
    NoCommand,

    /// A `-h`/`-help`/`--help` token was seen. The dispatch layer turns this
    /// into usage output rather than a failure.
    #[error("help requested")]
    Help,

    /// A handler reported a failure of its own.
    #[error("{0}")]
    Handler(String),

    /// A parse or handler error, annotated with the command it came from.
    #[error("{command}: {source}")]
    InCommand {
        command: String,
        source: Box<Error>,
    },
}

impl Error {
    /// Wraps an arbitrary message as a handler error.
    pub fn msg(msg: impl fmt::Display) -> Error {
        Error::Handler(msg.to_string())
    }

    pub(crate) fn in_command(self, command: &str) -> Error {
        match self {
            Error::InCommand { .. } => self,
            other => Error::InCommand { command: command.to_string(), source: Box::new(other) },
        }
    }
}
