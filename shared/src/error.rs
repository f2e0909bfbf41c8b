use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_error_wraps_json_errors() {
        let err = serde_json::from_str::<i64>("not json").unwrap_err();
        let shared: SharedError = err.into();
        assert!(matches!(shared, SharedError::Conversion(_)));
        assert!(shared.to_string().starts_with("Conversion error:"));
    }
}
