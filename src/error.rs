use thiserror::Error;

pub mod ser;

/// Convenience alias for operations that can fail with a [`ScanError`].
pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// Failure raised when a scanner reads input it cannot classify.
///
/// The value owns the offending fragment and derives its diagnostic from it
/// on demand, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanError {
    /// No rule matched `fragment`.
    #[error("Unknown character «{fragment}»")]
    UnknownCharacter { fragment: String },
}

impl ScanError {
    /// Build the failure for a piece of input no rule accepts.
    ///
    /// The fragment is embedded in the diagnostic verbatim: empty input is
    /// accepted, and no escaping is applied.
    pub fn unknown_character(fragment: impl Into<String>) -> Self {
        Self::UnknownCharacter { fragment: fragment.into() }
    }

    /// The literal input text that failed recognition.
    pub fn fragment(&self) -> &str {
        match self {
            Self::UnknownCharacter { fragment } => fragment,
        }
    }

    /// Consume the failure and take back the offending fragment.
    pub fn into_fragment(self) -> String {
        match self {
            Self::UnknownCharacter { fragment } => fragment,
        }
    }
}
