use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateBudgetParam, UpdateUserInfoParam},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_name;
mod get_names;
mod update_budget;
