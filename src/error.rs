use crate::storage::StoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum EngineError {
    #[error("not configured: {0}")]
    NotConfigured(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("store error: {0}")]
    Store(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{0}")]
    Other(String),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<String> for EngineError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for EngineError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
