use thiserror::Error;

/// Result type for part model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or transforming parts
#[derive(Error, Debug)]
pub enum Error {
    #[error("Degenerate frame: {0}")]
    DegenerateFrame(String),

    #[error("Unknown type tag: {0}")]
    UnknownTypeTag(String),
}
