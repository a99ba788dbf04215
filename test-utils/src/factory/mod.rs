//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let group = factory::create_group(&db).await?;
//!     factory::create_membership(&db, user.userid, group.groupid).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .name("Alice")
//!     .age(31)
//!     .budget(120.0)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create `single_user` rows
//! - `group` - Create `group_team` rows
//! - `boardgame` - Create `boardgame` rows
//! - `relation` - Create membership and preference rows
//! - `helpers` - Unique counter and combined setups

pub mod boardgame;
pub mod group;
pub mod helpers;
pub mod relation;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use boardgame::create_boardgame;
pub use group::create_group;
pub use relation::{
    create_favorite_game, create_membership, create_preferred_genre, create_preferred_mechanic,
};
pub use user::create_user;
