//! HTTP request handlers.
//!
//! Each handler parses its input through [`extract::AppJson`] or [`extract::AppQuery`],
//! converts the DTO into a validated parameter type, calls the matching service, and
//! turns the resulting domain model back into a DTO. Handlers are annotated with
//! `utoipa::path` and collected into the OpenAPI document in [`crate::server::doc`].

pub mod extract;
pub mod group;
pub mod search;
pub mod user;
