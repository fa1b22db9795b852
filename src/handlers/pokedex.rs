use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::{
    AppState,
    error::AppResult,
    middleware::AppQuery,
    models::{ListPokemonQuery, PokemonLookup},
};

pub async fn list_pokemon(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListPokemonQuery>,
) -> AppResult<Json<Value>> {
    let page = state.pokedex_service.list(query).await?;

    Ok(Json(page))
}

pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PokemonLookup>> {
    let lookup = state.pokedex_service.get_pokemon(&id).await?;

    Ok(Json(lookup))
}

pub async fn get_pokemon_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let form = state.pokedex_service.get_form(&id).await?;

    Ok(Json(form))
}

pub async fn get_evolution_chain(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let chain = state.pokedex_service.get_evolution_chain(&id).await?;

    Ok(Json(chain))
}
