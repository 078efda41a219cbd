use std::fmt;
use std::io;

/// Error reading or writing the durable record
#[derive(Debug)]
pub enum StoreError {
    /// The backend could not load or save the record
    Io(io::Error),
    /// The stored record is not valid JSON of the expected shape
    Corrupt(serde_json::Error),
    /// The stored record parsed but breaks a game invariant
    Invalid(String),
    /// The record could not be encoded
    Encode(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to access saved game: {e}"),
            Self::Corrupt(e) => write!(f, "Saved game is corrupt: {e}"),
            Self::Invalid(reason) => write!(f, "Saved game is invalid: {reason}"),
            Self::Encode(e) => write!(f, "Failed to encode saved game: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Corrupt(e) | Self::Encode(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
