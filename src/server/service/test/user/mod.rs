use crate::server::{
    error::AppError,
    model::{
        preference::{PreferenceKind, SetPreferenceParam},
        user::{CreateUserParam, UpdateBudgetParam, UpdateUserInfoParam, UserLookup},
    },
    service::user::UserService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod set_preference;
mod update;
