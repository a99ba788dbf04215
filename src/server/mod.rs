//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the club application,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Name resolution and not-found outcomes
//! - **Data Layer** (`data/`) - Database operations, transactions, entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database pool)
//! - **Startup** (`startup`) - Tracing, database connection and migrations, shutdown signal
//! - **Router** (`router`) - Axum route table, static files and middleware layers
//! - **Doc** (`doc`) - OpenAPI document served through Swagger UI
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts the DTO, converts it to a validated param, calls service
//! 3. **Service** resolves names and orchestrates repository calls
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
