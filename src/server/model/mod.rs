//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs and carry the required-field validation,
//! so a service never sees a request with a missing mandatory value.

pub mod boardgame;
pub mod group;
pub mod preference;
pub mod search;
pub mod user;

use crate::server::error::AppError;

/// Returns the trimmed value if it is present and not blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Unwraps a required request field or fails with `400 Bad Request`.
pub fn require<T>(value: Option<T>, message: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(message.to_string()))
}
