use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        group::{
            CreateGroupDto, DeleteGroupDto, FindGroupQuery, GroupDto, GroupIdQuery,
            GroupMemberDto, JoinGroupDto, LeaveGroupDto, MembershipDto, UpdateGroupNameDto,
            UsernameQuery,
        },
    },
    server::{
        controller::extract::{AppJson, AppQuery},
        error::AppError,
        model::{
            group::{
                CreateGroupParam, GroupLookup, JoinGroupParam, LeaveGroupParam,
                UpdateGroupNameParam,
            },
            require,
        },
        service::group::GroupService,
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// List every group ordered by name.
#[utoipa::path(
    get,
    path = "/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "All groups", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);
    let groups = service.get_all().await?;

    let dtos: Vec<GroupDto> = groups.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List the members of a group ordered by name.
///
/// An unknown group yields an empty list.
///
/// # Returns
/// - `200 OK` - Member ids and names
/// - `400 Bad Request` - Missing or non-numeric groupid
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/group-members",
    tag = GROUP_TAG,
    params(GroupIdQuery),
    responses(
        (status = 200, description = "Members of the group", body = Vec<GroupMemberDto>),
        (status = 400, description = "groupid is required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_members(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<GroupIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let groupid = require(query.groupid, "groupid is required")?;

    let service = GroupService::new(&state.db);
    let members = service.get_members(groupid).await?;

    let dtos: Vec<GroupMemberDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List the groups a user belongs to, ordered by name.
///
/// An unknown or missing username yields an empty list.
#[utoipa::path(
    get,
    path = "/groups/of-user",
    tag = GROUP_TAG,
    params(UsernameQuery),
    responses(
        (status = 200, description = "Groups the user belongs to", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups_of_user(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<UsernameQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);
    let groups = service.get_groups_of_user(query.username.as_deref()).await?;

    let dtos: Vec<GroupDto> = groups.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List the groups a user does not belong to, ordered by name.
///
/// An unknown or missing username yields an empty list.
#[utoipa::path(
    get,
    path = "/groups/not-in",
    tag = GROUP_TAG,
    params(UsernameQuery),
    responses(
        (status = 200, description = "Groups the user can still join", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups_not_in(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<UsernameQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);
    let groups = service
        .get_groups_without_user(query.username.as_deref())
        .await?;

    let dtos: Vec<GroupDto> = groups.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add a user to a group, both identified by name.
///
/// Joining a group the user is already in is not an error and does not create a
/// second membership.
///
/// # Returns
/// - `201 Created` - Membership created
/// - `200 OK` - The user was already a member
/// - `400 Bad Request` - Missing username or groupname
/// - `404 Not Found` - Unknown user or group
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups/join",
    tag = GROUP_TAG,
    request_body = JoinGroupDto,
    responses(
        (status = 201, description = "Membership created", body = MembershipDto),
        (status = 200, description = "Already a member", body = MembershipDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "User or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_group(
    State(state): State<AppState>,
    AppJson(payload): AppJson<JoinGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = JoinGroupParam::try_from(payload)?;

    let service = GroupService::new(&state.db);
    let joined = service.join(param).await?;

    let status = if joined.newly_joined {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(joined.membership.into_dto())))
}

/// Remove a user, identified by name, from a group.
///
/// # Returns
/// - `200 OK` - The removed membership
/// - `400 Bad Request` - Missing username or groupid
/// - `404 Not Found` - Unknown user, or the user was not a member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups/leave",
    tag = GROUP_TAG,
    request_body = LeaveGroupDto,
    responses(
        (status = 200, description = "Removed membership", body = MembershipDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "User or membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_group(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LeaveGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = LeaveGroupParam::try_from(payload)?;

    let service = GroupService::new(&state.db);
    let membership = service.leave(param).await?;

    Ok((StatusCode::OK, Json(membership.into_dto())))
}

/// Create a new group.
///
/// # Returns
/// - `201 Created` - The stored group with its generated id
/// - `400 Bad Request` - Missing or blank group name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups/create",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Created group", body = GroupDto),
        (status = 400, description = "Group name is required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateGroupParam::try_from(payload)?;

    let service = GroupService::new(&state.db);
    let group = service.create(param).await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// Look up a single group by id or by name; `null` when nothing matches.
#[utoipa::path(
    get,
    path = "/groups/find",
    tag = GROUP_TAG,
    params(FindGroupQuery),
    responses(
        (status = 200, description = "Group, or null", body = GroupDto),
        (status = 400, description = "Invalid lookup", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_group(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<FindGroupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = GroupLookup::try_from(query)?;

    let service = GroupService::new(&state.db);
    let group = service.find(lookup).await?;

    Ok((StatusCode::OK, Json(group.map(|g| g.into_dto()))))
}

/// Rename a group.
#[utoipa::path(
    post,
    path = "/groups/update-name",
    tag = GROUP_TAG,
    request_body = UpdateGroupNameDto,
    responses(
        (status = 200, description = "Renamed group", body = GroupDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group_name(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateGroupNameDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateGroupNameParam::try_from(payload)?;

    let service = GroupService::new(&state.db);
    let group = service.update_name(param).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete a group together with its memberships.
///
/// # Returns
/// - `200 OK` - The deleted group
/// - `400 Bad Request` - Missing or non-numeric groupid
/// - `404 Not Found` - No group with that id; nothing was deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups/delete",
    tag = GROUP_TAG,
    request_body = DeleteGroupDto,
    responses(
        (status = 200, description = "Deleted group", body = GroupDto),
        (status = 400, description = "groupid is required", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DeleteGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let groupid = require(payload.groupid, "groupid is required")?;

    let service = GroupService::new(&state.db);
    let group = service.delete(groupid).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}
