use astra::Response;
// errors.rs
use std::fmt;

/// Errors originating from the server logic
/// (routing, malformed form input, response building).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

/// Failures of the reconcile + predict step.
///
/// Both variants are recoverable: the page still renders and shows the
/// message in place of a price. `Clone` lets a model that failed to load at
/// startup report the same error on every render.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// The model's training-time column list could not be obtained.
    SchemaUnavailable(String),
    /// The model's inference call failed.
    PredictionFailed(String),
}

impl PredictError {
    /// Short machine-readable tag used by the JSON API.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictError::SchemaUnavailable(_) => "schema_unavailable",
            PredictError::PredictionFailed(_) => "prediction_failed",
        }
    }
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::SchemaUnavailable(msg) => write!(f, "Model schema unavailable: {msg}"),
            PredictError::PredictionFailed(msg) => write!(f, "Prediction failed: {msg}"),
        }
    }
}

impl std::error::Error for PredictError {}
