use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, RowsDto},
        boardgame::BoardgameDto,
        group::GroupDto,
        search::{GameSearchQuery, SearchQuery},
        user::UserDto,
    },
    server::{
        controller::extract::AppQuery,
        error::AppError,
        model::search::SearchTarget,
        service::search::{SearchRows, SearchService},
        state::AppState,
    },
};

/// Tag for grouping search endpoints in OpenAPI documentation
pub static SEARCH_TAG: &str = "search";

/// List users or clubs, optionally filtered by name.
///
/// `table=users` filters on `name` and orders by userid; `table=clubs` filters on
/// `groupName` and orders by groupid. Filters match case-insensitive substrings.
///
/// # Returns
/// - `200 OK` - `{rows: [...]}`
/// - `400 Bad Request` - Unknown or missing table, answered with `{rows: []}`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/search",
    tag = SEARCH_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching users or clubs", body = RowsDto<UserDto>),
        (status = 400, description = "Unknown table", body = RowsDto<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> Result<Response, AppError> {
    let target = match SearchTarget::try_from(query) {
        Ok(target) => target,
        Err(err) => {
            tracing::debug!("Rejected search: {}", err);
            return Ok((StatusCode::BAD_REQUEST, Json(RowsDto::<UserDto>::empty())).into_response());
        }
    };

    let service = SearchService::new(&state.db);
    let response = match service.search(target).await? {
        SearchRows::Users(users) => {
            let rows: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();
            (StatusCode::OK, Json(RowsDto::new(rows))).into_response()
        }
        SearchRows::Clubs(groups) => {
            let rows: Vec<GroupDto> = groups.into_iter().map(|g| g.into_dto()).collect();
            (StatusCode::OK, Json(RowsDto::new(rows))).into_response()
        }
    };

    Ok(response)
}

/// Search games by case-insensitive substring over title or description.
///
/// A missing or empty `q` returns every game. Results are ordered by title.
#[utoipa::path(
    get,
    path = "/search/games",
    tag = SEARCH_TAG,
    params(GameSearchQuery),
    responses(
        (status = 200, description = "Matching games", body = RowsDto<BoardgameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_games(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<GameSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = SearchService::new(&state.db);
    let games = service.search_games(query.q.as_deref()).await?;

    let rows: Vec<BoardgameDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(RowsDto::new(rows))))
}
