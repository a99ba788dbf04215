//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Resolution**: Turning names into ids before a repository call needs them
//! - **Outcomes**: Mapping missing rows to `AppError::NotFound`
//! - **Orchestration**: Coordinating several repositories for one request
//!
//! Services work with domain models and parameter types, never with DTOs.

pub mod group;
pub mod search;
pub mod user;
