use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{group, search, user},
    doc::ApiDoc,
    state::AppState,
};

/// Builds the API routes without documentation, static files or layers.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/data", get(user::list_user_names))
        .route("/search", get(search::search))
        .route("/search/games", get(search::search_games))
        .route("/groups", get(group::get_all_groups))
        .route("/group-members", get(group::get_group_members))
        .route("/groups/of-user", get(group::get_groups_of_user))
        .route("/groups/not-in", get(group::get_groups_not_in))
        .route("/groups/join", post(group::join_group))
        .route("/groups/leave", post(group::leave_group))
        .route("/groups/create", post(group::create_group))
        .route("/groups/find", get(group::find_group))
        .route("/groups/update-name", post(group::update_group_name))
        .route("/groups/delete", post(group::delete_group))
        .route("/users/create", post(user::create_user))
        .route("/users/find", get(user::find_user))
        .route("/users/update-info", post(user::update_user_info))
        .route("/users/update-budget", post(user::update_user_budget))
        .route("/users/set-favorite-game", post(user::set_favorite_game))
        .route("/users/set-preferred-genre", post(user::set_preferred_genre))
        .route("/users/set-preferred-mechanic", post(user::set_preferred_mechanic))
        .route("/users/delete", post(user::delete_user))
}

/// Builds the full application router.
///
/// Adds Swagger UI, serves `static_dir` for every path no route matches, and wraps
/// everything in CORS and request tracing layers.
pub fn router(state: AppState, static_dir: &str) -> Router {
    api_router()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
