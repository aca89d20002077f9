//! Common error types used throughout the crate.

use std::fmt;

use anybytes::view::ViewError;

/// Result type used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type covering failures of [`IntVector`](crate::IntVector) operations.
#[derive(Debug)]
pub enum Error {
    /// The operation needs at least one element.
    EmptyContainer,
    /// An index was outside `[0, len)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the vector at the time of the call.
        len: usize,
    },
    /// An argument violated preconditions.
    InvalidArgument(String),
    /// Two or more values tie for the highest frequency.
    AmbiguousMode,
    /// A single value holds the highest frequency, so there is no multimodal answer.
    UniqueModeNotApplicable,
    /// A byte buffer is not a valid sequence of big-endian `i64` words.
    InvalidEncoding(String),
    /// Wrapper around [`anybytes::view::ViewError`] values.
    View(ViewError),
}

impl Error {
    /// Creates an [`Error::InvalidArgument`] with the provided message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an [`Error::InvalidEncoding`] with the provided message.
    pub fn invalid_encoding(msg: impl Into<String>) -> Self {
        Self::InvalidEncoding(msg.into())
    }

    pub(crate) const fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyContainer => write!(f, "the vector is empty."),
            Error::IndexOutOfBounds { index, len } => write!(
                f,
                "index must be less than self.len()={len}, but got {index}."
            ),
            Error::InvalidArgument(msg) => write!(f, "{msg}"),
            Error::AmbiguousMode => write!(f, "no unique mode available."),
            Error::UniqueModeNotApplicable => {
                write!(f, "the distribution has a unique mode; use mode().")
            }
            Error::InvalidEncoding(msg) => write!(f, "{msg}"),
            Error::View(err) => write!(f, "view error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::View(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewError> for Error {
    fn from(err: ViewError) -> Self {
        Error::View(err)
    }
}
