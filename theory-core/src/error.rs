//! Error type shared by every lookup in the crate.
//!
//! The only thing that can go wrong is asking for a name that is not in one
//! of the static tables, so there is exactly one error kind.

use std::fmt;

use thiserror::Error;

/// Which table a rejected name was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    Note,
    Mode,
    Interval,
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArgumentKind::Note => "note",
            ArgumentKind::Mode => "mode",
            ArgumentKind::Interval => "interval",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    #[error("invalid {kind} name: {value:?}")]
    InvalidArgument { kind: ArgumentKind, value: String },
}

impl TheoryError {
    pub(crate) fn invalid(kind: ArgumentKind, value: &str) -> Self {
        tracing::debug!(%kind, value, "name not found in table");
        TheoryError::InvalidArgument {
            kind,
            value: value.to_owned(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TheoryError>;
