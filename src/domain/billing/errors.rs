//! Billing error taxonomy.
//!
//! Every request-facing operation of the mock fails with one of these.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status | API code |
//! |-------|-------------|----------|
//! | Validation | 400 | validation_error |
//! | NotFound | 404 | not_found |
//! | Conflict | 409 | conflict |
//! | Infrastructure | 500 | internal_error |

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Billing-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// A required field is missing or a referenced id does not resolve.
    Validation { field: String, message: String },

    /// The addressed resource does not exist.
    NotFound { resource: &'static str, id: String },

    /// The subscription's current status does not allow the operation.
    Conflict { current: String, attempted: String },

    /// The store failed underneath the operation.
    Infrastructure(String),
}

impl BillingError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        BillingError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        BillingError::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn conflict(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        BillingError::Conflict {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        BillingError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BillingError::Validation { .. } => ErrorCode::ValidationFailed,
            BillingError::NotFound { .. } => ErrorCode::ResourceNotFound,
            BillingError::Conflict { .. } => ErrorCode::InvalidStateTransition,
            BillingError::Infrastructure(_) => ErrorCode::StoreError,
        }
    }

    /// Returns the message shown to API clients.
    pub fn message(&self) -> String {
        match self {
            BillingError::Validation { message, .. } => message.clone(),
            BillingError::NotFound { resource, .. } => format!("{} not found", resource),
            BillingError::Conflict { current, attempted } => {
                format!("Cannot {} subscription in status: {}", attempted, current)
            }
            BillingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for BillingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BillingError {}

impl From<DomainError> for BillingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                let field = err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string());
                BillingError::Validation {
                    field,
                    message: err.message,
                }
            }
            ErrorCode::InvalidStateTransition => BillingError::Conflict {
                current: "unknown".to_string(),
                attempted: err.message,
            },
            _ => BillingError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for BillingError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::IllegalTransition { from, to } => BillingError::Conflict {
                current: from,
                attempted: format!("move to {}", to),
            },
            ValidationError::EmptyField { ref field } | ValidationError::InvalidFormat { ref field, .. } => {
                BillingError::Validation {
                    field: field.clone(),
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<BillingError> for DomainError {
    fn from(err: BillingError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
