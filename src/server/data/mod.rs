//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! aggregate of the club schema. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every SQL statement, and every transaction spanning several statements, lives here.

pub mod boardgame;
pub mod expr;
pub mod group;
pub mod membership;
pub mod preference;
pub mod user;
