//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every handler annotated with `utoipa::path` together with the
//! DTO schemas they reference. The router serves the document at
//! `/api-docs/openapi.json` and a Swagger UI at `/swagger-ui`.

use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        boardgame::BoardgameDto,
        group::{
            CreateGroupDto, DeleteGroupDto, GroupDto, GroupMemberDto, JoinGroupDto,
            LeaveGroupDto, MembershipDto, UpdateGroupNameDto,
        },
        search::{DataDto, DatumDto},
        user::{
            CreateUserDto, DeleteUserDto, FavoriteGameDto, PreferredGenreDto,
            PreferredMechanicDto, SetFavoriteGameDto, SetPreferredGenreDto,
            SetPreferredMechanicDto, UpdateBudgetDto, UpdateUserInfoDto, UserDto, UserProfileDto,
        },
    },
    server::controller::{group, search, user},
};

/// OpenAPI document for the club REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clubboard API",
        description = "Users, groups, memberships, preferences and the boardgame catalogue."
    ),
    paths(
        user::create_user,
        user::find_user,
        user::update_user_info,
        user::update_user_budget,
        user::set_favorite_game,
        user::set_preferred_genre,
        user::set_preferred_mechanic,
        user::delete_user,
        user::list_user_names,
        group::get_all_groups,
        group::get_group_members,
        group::get_groups_of_user,
        group::get_groups_not_in,
        group::join_group,
        group::leave_group,
        group::create_group,
        group::find_group,
        group::update_group_name,
        group::delete_group,
        search::search,
        search::search_games,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        UserProfileDto,
        CreateUserDto,
        UpdateUserInfoDto,
        UpdateBudgetDto,
        SetFavoriteGameDto,
        SetPreferredGenreDto,
        SetPreferredMechanicDto,
        FavoriteGameDto,
        PreferredGenreDto,
        PreferredMechanicDto,
        DeleteUserDto,
        GroupDto,
        GroupMemberDto,
        MembershipDto,
        CreateGroupDto,
        UpdateGroupNameDto,
        DeleteGroupDto,
        JoinGroupDto,
        LeaveGroupDto,
        BoardgameDto,
        DataDto,
        DatumDto,
    )),
    tags(
        (name = "user", description = "User accounts and preferences"),
        (name = "group", description = "Groups and memberships"),
        (name = "search", description = "Listings and game search")
    )
)]
pub struct ApiDoc;
