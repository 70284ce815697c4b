//! Common error types used across the conformal plot crates
//!
//! The singularity of the mapping is never an error (it is an absent
//! result); these variants cover transport and input failures only.
//! None of them is fatal: the UI stays interactive and the prior state
//! is left unchanged after any failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all conformal plot operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum ConformalError {
    #[error("Network request failed: {message}")]
    Network { message: String },

    #[error("Response decode error: {message}")]
    Decode { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },

    /// The transport aborted the request because a newer probe
    /// superseded it. Silent by design.
    #[error("Request cancelled")]
    Cancelled,

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Result type alias for conformal plot operations.
pub type ConformalResult<T> = Result<T, ConformalError>;

impl From<serde_json::Error> for ConformalError {
    fn from(err: serde_json::Error) -> Self {
        ConformalError::Decode {
            message: err.to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ConformalError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        ConformalError::JsInterop {
            message: format!("{err:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ConformalError::Network {
            message: "compute endpoint returned 503".to_string(),
        };
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("Network"));
        assert!(json.contains("503"));
    }

    #[test]
    fn test_decode_conversion() {
        let err = serde_json::from_str::<crate::wire::ComputeRequest>("not json").unwrap_err();
        let conv: ConformalError = err.into();
        assert!(matches!(conv, ConformalError::Decode { .. }));
    }
}
