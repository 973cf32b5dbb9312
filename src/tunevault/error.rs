use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    /// A primary catalog collection has no bundled fixture and no device file.
    #[error("Collection not found: {0}")]
    MissingCollection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored identifier does not match the `prefix + digits` shape its
    /// collection uses. Surfaced instead of panicking on the parse.
    #[error("Malformed identifier {id:?} (expected {prefix}<digits>)")]
    MalformedId { prefix: String, id: String },

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, VaultError>;
