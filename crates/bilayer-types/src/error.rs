use thiserror::Error;

#[derive(Error, Debug)]
pub enum BilayerError {
    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Invalid range: start {start} must not exceed stop {stop}")]
    InvalidRange { start: f64, stop: f64 },

    #[error("Numerical failure in {routine} (code {code}): {message}")]
    NumericalFailure {
        routine: &'static str,
        code: i32,
        message: String,
    },

    #[error("Series did not converge after {iterations} iterations: {message}")]
    ConvergenceFailure { iterations: usize, message: String },

    #[error("Boundary-matching system is singular: |div| = {magnitude:e}")]
    SingularSystem { magnitude: f64 },

    #[error("Non-physical result: {quantity} has a non zero imag. part of {imag:e}")]
    NonPhysicalResult { quantity: String, imag: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BilayerResult<T> = Result<T, BilayerError>;
