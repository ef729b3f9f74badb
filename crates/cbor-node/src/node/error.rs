use crate::linked_data::CodecError;

#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("no such link found: {0}")]
    NoSuchLink(String),
    #[error("cannot resolve through {kind} at '{segment}'")]
    NonTraversable { segment: String, kind: &'static str },
    #[error("could not resolve through object: {0}")]
    UnresolvedPath(String),
    #[error("found non-link at given path: {0}")]
    NonLinkAtPath(String),
    #[error("incorrectly formatted link: {0}")]
    InvalidLinkEncoding(String),
    #[error("map keys must be strings, found {0}")]
    KeyType(String),
    #[error("value has no json representation: {0}")]
    Projection(String),
    #[error("typed decode failed: {0}")]
    TypedDecode(#[from] serde_json::Error),
    #[error("multihash error: {0}")]
    Multihash(String),
}
