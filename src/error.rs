use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid axis length: {length}")]
    InvalidAxisLength { length: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("malformed path description at byte {position}: {message}")]
    PathParse { position: usize, message: String },
}
