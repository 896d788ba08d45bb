//! Error types for the foundation crate.

/// Errors that can occur constructing or parsing foundation types.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// A format name did not match any supported [`crate::TextFormat`].
    #[error("unknown config text format: {0}")]
    UnknownFormat(String),
}
