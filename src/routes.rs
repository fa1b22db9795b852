use axum::{
    Router,
    routing::{get, post},
};

use crate::{AppState, handlers};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handlers::health_check))
        .route("/v1/auth/register", post(handlers::register))
        .route("/v1/auth/login", post(handlers::login))
        .route("/v1/auth/me", get(handlers::me))
        .route("/v1/pokedex", get(handlers::list_pokemon))
        .route("/v1/pokedex/list", get(handlers::list_favorites))
        .route("/v1/pokedex/list/count", get(handlers::count_favorites))
        .route(
            "/v1/pokedex/favorite/{id}",
            get(handlers::get_favorite_status).post(handlers::toggle_favorite),
        )
        .route("/v1/pokedex/info/{id}", get(handlers::get_pokemon))
        .route("/v1/pokedex/form/{id}", get(handlers::get_pokemon_form))
        .route(
            "/v1/pokedex/evolution-chain/{id}",
            get(handlers::get_evolution_chain),
        )
        .route("/v1/pokedex/{id}", get(handlers::get_pokemon))
        .with_state(state)
}
