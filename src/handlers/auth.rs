use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    error::AppResult,
    middleware::{AppJson, AuthUser},
    models::{AuthResponse, LoginInput, RegisterInput, User},
};

pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterInput>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let response = state.auth_service.register(input).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginInput>,
) -> AppResult<Json<AuthResponse>> {
    let response = state.auth_service.login(input).await?;

    Ok(Json(response))
}

pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<User>> {
    let user = state.auth_service.get_user(user_id).await?;

    Ok(Json(user))
}
