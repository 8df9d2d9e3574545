//! Error type shared by the collaborator traits.
//!
//! None of these reach the page: the controller logs them and carries on with
//! whatever steps remain.

/// Failures reported by theme collaborators and config parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
    #[error("preference storage unavailable")]
    StorageUnavailable,
    #[error("preference storage error: {0}")]
    Storage(String),
    #[error("dom error: {0}")]
    Dom(String),
    #[error("invalid theme config: {0}")]
    Config(String),
}
