use std::{error::Error as StdError, fmt, io, result::Result as StdResult};

/// Rejected requests against the custom card store or the theme catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    EmptyLabel,
    LabelTooLong { label: String, max: usize },
    NoSuchCard { index: usize, len: usize },
    NoSuchTheme(String),
    ClearNotConfirmed,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "Both sides of a card need a label"),
            Self::LabelTooLong { label, max } => {
                write!(f, "Label \"{label}\" is longer than {max} characters")
            }
            Self::NoSuchCard { index, len: 0 } => {
                write!(f, "No card at index {index}: there are no custom cards")
            }
            Self::NoSuchCard { index, len } => {
                write!(f, "No card at index {index} (valid: 0..{len})")
            }
            Self::NoSuchTheme(name) => write!(f, "No built-in theme named \"{name}\""),
            Self::ClearNotConfirmed => write!(f, "Refusing to clear custom cards without --yes"),
        }
    }
}

impl StdError for StoreError {}

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Json(serde_json::Error),
    Store(StoreError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Store(e) => write!(f, "Card store error: {e}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Store(e) => Some(e),
        }
    }
}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

pub type Result<T> = StdResult<T, Error>;
