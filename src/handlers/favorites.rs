use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    error::AppResult,
    middleware::{AppQuery, AuthUser},
    models::{
        FavoriteCountResponse, FavoriteRelation, FavoriteState, FavoriteStatusResponse,
        ListFavoritesQuery, Page, ToggleFavoriteResponse, parse_pokemon_id,
    },
};

pub async fn get_favorite_status(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<FavoriteStatusResponse>> {
    let pokemon = parse_pokemon_id(&id)?;
    let is_favorite = state.favorite_service.is_favorite(user_id, pokemon).await?;

    Ok(Json(FavoriteStatusResponse { is_favorite }))
}

pub async fn toggle_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let pokemon = parse_pokemon_id(&id)?;

    let response = match state.favorite_service.toggle(user_id, pokemon).await? {
        FavoriteState::Favorited(_) => (
            StatusCode::CREATED,
            Json(ToggleFavoriteResponse { favorited: true }),
        )
            .into_response(),
        FavoriteState::Unfavorited => StatusCode::NO_CONTENT.into_response(),
    };

    Ok(response)
}

pub async fn list_favorites(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppQuery(query): AppQuery<ListFavoritesQuery>,
) -> AppResult<Json<Page<FavoriteRelation>>> {
    let page = state.favorite_service.list(user_id, query).await?;

    Ok(Json(page))
}

pub async fn count_favorites(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
) -> AppResult<Json<FavoriteCountResponse>> {
    let total_results = state.favorite_service.count().await?;

    Ok(Json(FavoriteCountResponse { total_results }))
}
