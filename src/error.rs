use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("http transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed bar document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("render backend failure: {0}")]
    Backend(String),
}
