use crate::server::data::membership::MembershipRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use std::collections::HashSet;
use test_utils::{builder::TestBuilder, factory};

mod get_groups_without_user;
mod join;
mod leave;
