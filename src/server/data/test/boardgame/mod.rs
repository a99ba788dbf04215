use crate::server::data::boardgame::BoardgameRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod search;
