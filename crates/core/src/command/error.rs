//! Errors raised while parsing or running a shop command.

use thiserror::Error;

/// Errors that can occur while handling a command line.
///
/// Lookup misses (an unknown shop, no session) are not errors: they produce a
/// reply to the sender instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The line contained no subcommand.
    #[error("no subcommand given, try `help`")]
    Empty,

    /// The subcommand is not known.
    #[error("unknown subcommand `{input}`")]
    UnknownSubcommand {
        input: String,
        /// The closest known subcommand, if any is near.
        suggestion: Option<&'static str>,
    },

    /// A required argument is missing.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// An argument could not be parsed or is out of range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// More arguments than the subcommand takes.
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    /// The subcommand needs a player sender.
    #[error("only players can use `{0}`")]
    PlayersOnly(&'static str),

    /// The slot index does not fit the selected shop.
    #[error("slot {index} is outside shop `{shop}` which has {size} slots")]
    SlotOutOfRange {
        shop: String,
        index: usize,
        size: usize,
    },
}

impl CommandError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
