use thiserror::Error;

#[derive(Error, Debug)]
pub enum DebindexError {
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl DebindexError {
    /// Process exit code for this error.
    ///
    /// A missing repository root exits with 1; a failed output write
    /// exits with 2. Everything else is a generic failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DebindexError::Output(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DebindexError>;
