//! Error type shared by every engine operation.
//!
//! All failures are synchronous and surfaced to the caller. The engine never
//! retries or silently corrects a rejected operation.

/// Errors raised by the solitaire engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A rank, suit, or location outside its closed enumeration.
    InvalidCard(String),
    /// The head of a run is not an allowable child of the target card.
    IllegalMove {
        /// Rendering of the target card.
        target: String,
        /// Rendering of the run's head card.
        source: String,
    },
    /// A move's source card is no longer held where its handle points.
    SourceNotFound(String),
    /// An environment action outside the action space.
    InvalidAction(usize),
    /// Binary encoding of an observation failed.
    Encoding(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCard(s) => write!(f, "invalid card: {}", s),
            Self::IllegalMove { target, source } => {
                write!(f, "illegal move: {} cannot be placed on {}", source, target)
            }
            Self::SourceNotFound(s) => write!(f, "source card not found: {}", s),
            Self::InvalidAction(a) => write!(f, "invalid action: {}", a),
            Self::Encoding(s) => write!(f, "encoding failed: {}", s),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
