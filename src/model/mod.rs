//! Request and response DTOs shared by the HTTP surface.
//!
//! Field names follow the database column names the frontend reads (`userid`,
//! `group_name`, ...) while request bodies keep the camelCase keys it sends
//! (`groupName`, `ageLimit`).

pub mod api;
pub mod boardgame;
pub mod group;
pub mod lenient;
pub mod search;
pub mod user;
