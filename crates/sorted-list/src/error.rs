use thiserror::Error;

/// Failure of a read on an [`crate::OrderedList`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// `first` was called before any `add`.
    #[error("List is empty")]
    EmptyCollection,
}

/// Failure while loading a roster file for the demo driver.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster: {0}")]
    Parse(#[from] serde_json::Error),
}
