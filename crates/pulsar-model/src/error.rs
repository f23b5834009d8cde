use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown metric type: {0}")]
    UnknownMetricType(String),
    #[error("unknown aggregation: {0}")]
    UnknownAggregation(String),
    #[error("unknown query field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
