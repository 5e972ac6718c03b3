use thiserror::Error;

/// Failures at the key-value store seam. None of these are fatal to the
/// page; callers log and carry on.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("write to `{key}` rejected: {reason}")]
    Rejected { key: String, reason: String },
    #[error("could not encode `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
