//! Response bodies that are not items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message returned by every successful delete.
pub const DELETE_MESSAGE: &str = "Todo deleted";

/// Body of a delete response.
///
/// Delete is idempotent: a missing id still yields a confirmation, with
/// `deleted` telling the caller whether anything was removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
    #[serde(default)]
    pub deleted: bool,
}

impl DeleteConfirmation {
    pub fn new(deleted: bool) -> Self {
        Self {
            message: DELETE_MESSAGE.to_string(),
            deleted,
        }
    }
}

/// Machine-readable error category carried next to the human message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    ValidationError,
    NotFound,
    StorageUnavailable,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationError => "validation_error",
            ErrorCode::NotFound => "not_found",
            ErrorCode::StorageUnavailable => "storage_unavailable",
            ErrorCode::InternalError => "internal_error",
        };
        f.write_str(s)
    }
}

/// Body of every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: ErrorCode,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}
