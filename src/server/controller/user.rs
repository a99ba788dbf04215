use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        search::{DataDto, DatumDto},
        user::{
            CreateUserDto, DeleteUserDto, FavoriteGameDto, FindUserQuery, PreferredGenreDto,
            PreferredMechanicDto, SetFavoriteGameDto, SetPreferredGenreDto,
            SetPreferredMechanicDto, UpdateBudgetDto, UpdateUserInfoDto, UserDto, UserProfileDto,
        },
    },
    server::{
        controller::extract::{AppJson, AppQuery},
        error::AppError,
        model::{
            preference::SetPreferenceParam,
            require,
            user::{CreateUserParam, UpdateBudgetParam, UpdateUserInfoParam, UserLookup},
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Create a new user.
///
/// # Returns
/// - `201 Created` - The stored user with its generated id
/// - `400 Bad Request` - Missing or blank name, or non-numeric age/budget
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/create",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Created user", body = UserDto),
        (status = 400, description = "Name is required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateUserParam::try_from(payload)?;

    let service = UserService::new(&state.db);
    let user = service.create(param).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Look up a single user by id or by name.
///
/// Exactly one of `userid` and `username` must be given. The name is matched
/// ignoring case and surrounding whitespace. The response carries the user's
/// favorite game, preferred genre and preferred mechanic ids, and is `null`
/// when no user matches.
///
/// # Returns
/// - `200 OK` - The user with preference ids, or `null`
/// - `400 Bad Request` - Both or neither identifier given, or a non-numeric id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/find",
    tag = USER_TAG,
    params(FindUserQuery),
    responses(
        (status = 200, description = "User with preferences, or null", body = UserProfileDto),
        (status = 400, description = "Invalid lookup", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_user(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<FindUserQuery>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = UserLookup::try_from(query)?;

    let service = UserService::new(&state.db);
    let profile = service.find(lookup).await?;

    Ok((StatusCode::OK, Json(profile.map(|p| p.into_dto()))))
}

/// Update a user's name and/or age.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Missing userid, or neither name nor age given
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/update-info",
    tag = USER_TAG,
    request_body = UpdateUserInfoDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_info(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateUserInfoDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateUserInfoParam::try_from(payload)?;

    let service = UserService::new(&state.db);
    let user = service.update_info(param).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Replace a user's budget.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Missing userid or budget
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/update-budget",
    tag = USER_TAG,
    request_body = UpdateBudgetDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_budget(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateBudgetDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateBudgetParam::try_from(payload)?;

    let service = UserService::new(&state.db);
    let user = service.update_budget(param).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Set a user's favorite game, replacing any previous one.
///
/// # Returns
/// - `200 OK` - The stored favorite game row
/// - `400 Bad Request` - Missing userid or gameid
/// - `404 Not Found` - Unknown user or game
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users/set-favorite-game",
    tag = USER_TAG,
    request_body = SetFavoriteGameDto,
    responses(
        (status = 200, description = "Stored favorite game", body = FavoriteGameDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "User or game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_favorite_game(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SetFavoriteGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = SetPreferenceParam::try_from(payload)?;

    let service = UserService::new(&state.db);
    let preference = service.set_preference(param).await?;

    Ok((StatusCode::OK, Json(preference.into_favorite_game_dto())))
}

/// Set a user's preferred genre, replacing any previous one.
#[utoipa::path(
    post,
    path = "/users/set-preferred-genre",
    tag = USER_TAG,
    request_body = SetPreferredGenreDto,
    responses(
        (status = 200, description = "Stored preferred genre", body = PreferredGenreDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_preferred_genre(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SetPreferredGenreDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = SetPreferenceParam::try_from(payload)?;

    let service = UserService::new(&state.db);
    let preference = service.set_preference(param).await?;

    Ok((StatusCode::OK, Json(preference.into_preferred_genre_dto())))
}

/// Set a user's preferred mechanic, replacing any previous one.
#[utoipa::path(
    post,
    path = "/users/set-preferred-mechanic",
    tag = USER_TAG,
    request_body = SetPreferredMechanicDto,
    responses(
        (status = 200, description = "Stored preferred mechanic", body = PreferredMechanicDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_preferred_mechanic(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SetPreferredMechanicDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = SetPreferenceParam::try_from(payload)?;

    let service = UserService::new(&state.db);
    let preference = service.set_preference(param).await?;

    Ok((StatusCode::OK, Json(preference.into_preferred_mechanic_dto())))
}

/// Delete a user with their memberships and preferences.
///
/// # Returns
/// - `200 OK` - The deleted user
/// - `400 Bad Request` - Missing or non-numeric userid
/// - `404 Not Found` - No user with that id; nothing was deleted
/// - `500 Internal Server Error` - Database error; nothing was deleted
#[utoipa::path(
    post,
    path = "/users/delete",
    tag = USER_TAG,
    request_body = DeleteUserDto,
    responses(
        (status = 200, description = "Deleted user", body = UserDto),
        (status = 400, description = "userid is required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DeleteUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let userid = require(payload.userid, "userid is required")?;

    let service = UserService::new(&state.db);
    let user = service.delete(userid).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List the first hundred user names, ordered by id.
#[utoipa::path(
    get,
    path = "/data",
    tag = USER_TAG,
    responses(
        (status = 200, description = "User names", body = DataDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_user_names(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);
    let names = service.list_names().await?;

    let data = names.into_iter().map(|datum| DatumDto { datum }).collect();

    Ok((StatusCode::OK, Json(DataDto { data })))
}
