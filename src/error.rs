use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid axis configuration: {0}")]
    Configuration(String),

    #[error("invalid series data: {0}")]
    InvalidSeriesData(String),
}
