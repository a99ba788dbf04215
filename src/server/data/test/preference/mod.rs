use crate::server::{data::preference::PreferenceRepository, model::preference::PreferenceKind};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};
