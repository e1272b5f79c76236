//! Application Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Host bridge call failed or returned something we could not decode
    #[error("{0}")]
    Bridge(String),
    /// Input rejected before reaching the backend
    #[error("{0}")]
    Validation(String),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("User already exists")]
    UserExists,
}

impl From<serde_wasm_bindgen::Error> for AppError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        AppError::Bridge(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
