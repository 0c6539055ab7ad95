use thiserror::Error;

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during layout generation
#[derive(Error, Debug)]
pub enum Error {
    #[error("Degenerate orientation: {0}")]
    DegenerateOrientation(String),

    #[error("Invalid replication count: {0}")]
    InvalidReplicationCount(String),

    #[error("Part model error: {0}")]
    Core(#[from] basegen_core::Error),
}
