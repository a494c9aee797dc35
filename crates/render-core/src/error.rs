use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
    #[error("compression error: {0}")]
    Compression(String),
    #[error("output sink error: {0}")]
    Sink(String),
    #[error("other render error: {0}")]
    Other(String),
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}
