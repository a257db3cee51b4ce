// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use anglo_rota_domain::DomainError;
use anglo_rota_persistence::PersistenceError;

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// This is the error taxonomy of the operation layer. Every operation
/// boundary translates domain and persistence errors into exactly one of
/// these kinds, and the transport adapter maps each kind to an HTTP
/// status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// An entity with the normalized name already exists.
    DuplicateName {
        /// The entity kind that collided.
        entity: &'static str,
        /// A human-readable description of the collision.
        message: String,
    },
    /// A client-supplied id is already in use.
    DuplicateId {
        /// The entity kind that collided.
        entity: &'static str,
        /// A human-readable description of the collision.
        message: String,
    },
    /// A referenced entity does not exist.
    NotFound {
        /// The entity kind that failed to resolve.
        entity: &'static str,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The entity still has dependent records.
    HasDependents {
        /// A human-readable description naming the dependents and count.
        message: String,
    },
    /// The entity is referenced by the rota.
    InUse {
        /// A human-readable description of the reference.
        message: String,
    },
    /// Cross-field consistency violation.
    Inconsistent {
        /// A human-readable description of the mismatch.
        message: String,
    },
    /// A field failed basic validation.
    ValidationFailed {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A catch-all persistence or runtime failure.
    Unexpected {
        /// The underlying error, rendered verbatim.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::DuplicateName { message, .. }
            | Self::DuplicateId { message, .. }
            | Self::NotFound { message, .. }
            | Self::HasDependents { message }
            | Self::InUse { message }
            | Self::Inconsistent { message } => write!(f, "{message}"),
            Self::ValidationFailed { field, message } => {
                write!(f, "Invalid {field}: {message}")
            }
            Self::Unexpected { message } => write!(f, "Unexpected error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            // A mutation addressed a record that vanished between lookup
            // and save. Concurrent deletion is an accepted race; report
            // the missing record rather than a server fault.
            PersistenceError::NotFound(message) => Self::NotFound {
                entity: "Record",
                message,
            },
            _ => Self::Unexpected {
                message: err.to_string(),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::DuplicateName { entity, .. } => ApiError::DuplicateName {
            entity: entity.as_str(),
            message,
        },
        DomainError::DuplicateEmployeeId(_) => ApiError::DuplicateId {
            entity: "Employee",
            message,
        },
        DomainError::NotFound { entity, .. } => ApiError::NotFound {
            entity: entity.as_str(),
            message,
        },
        DomainError::DepartmentHasDependents { .. } | DomainError::JobTitleHasEmployees { .. } => {
            ApiError::HasDependents { message }
        }
        DomainError::ShiftInUse { .. } => ApiError::InUse { message },
        DomainError::JobTitleNotInDepartment { .. }
        | DomainError::EmployeeNameMismatch { .. }
        | DomainError::ShiftDurationMismatch { .. } => ApiError::Inconsistent { message },
        DomainError::InvalidName { field, message } => ApiError::ValidationFailed {
            field: field.to_string(),
            message,
        },
        DomainError::DateOutsideWindow { .. } => ApiError::ValidationFailed {
            field: String::from("date"),
            message,
        },
    }
}
