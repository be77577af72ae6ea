use thiserror::Error;

/// A CSS keyword that is not in the property's domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{keyword}' is not a valid {property} value")]
pub struct ParseKeywordError {
    pub property: &'static str,
    pub keyword: String,
}

/// Failure to decode a shared `?state=` link
#[derive(Debug, Error)]
pub enum StateError {
    #[error("state is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("state is not a JSON object of strings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown state key '{0}'")]
    UnknownKey(String),
    #[error("invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}
