//! Error types for the resolver crate.

/// Errors that can occur during reconciliation.
///
/// All of these are validation failures raised before any change set is
/// computed (or, for [`ResolveError::LineMismatch`], while materializing
/// one); the resolver never returns a partial result alongside an error.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// A non-blank, non-comment line has no `=` separator.
    #[error("invalid config line [{line}] at line {line_num}, key and value must be separated by '='")]
    MalformedLine { line: String, line_num: u32 },

    /// The edited text contains the same key on more than one key-value line.
    #[error("config text has repeated keys [{}], please check and modify", keys.join(", "))]
    DuplicateKeys { keys: Vec<String> },

    /// Two items ended up on the same line after applying a change set.
    #[error("line number {line_num} is occupied by more than one item")]
    LineMismatch { line_num: u32 },
}

/// Convenience alias for resolver results.
pub type ResolveResult<T> = Result<T, ResolveError>;
