use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;

use crate::{
    AppState,
    config::Config,
    error::{AppError, AppResult},
    gateway::PokemonGateway,
    models::PokemonEntry,
    repository::{FavoriteStore, MemoryFavoriteStore, UserRepository},
    services::{AuthService, FavoriteService, PokedexService},
};

pub fn test_config() -> Config {
    Config {
        port: 0,
        environment: "test".to_string(),
        database_url: "postgres://localhost/pokedex_test".to_string(),
        jwt_secret: "test-secret-key-for-jwt".to_string(),
        jwt_expires_in_hours: 1,
        pokeapi_base_url: "http://127.0.0.1:1".to_string(),
        pokeapi_timeout_secs: 1,
        otel_service_name: "pokedex-api-test".to_string(),
        otel_exporter_endpoint: "http://127.0.0.1:4317".to_string(),
    }
}

/// Token handling never touches the database, so a lazy pool is enough.
pub fn test_auth_service() -> AuthService {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("lazy pool should build");
    AuthService::new(UserRepository::new(pool), &config)
}

pub fn test_state(store: Arc<dyn FavoriteStore>) -> AppState {
    AppState {
        auth_service: test_auth_service(),
        favorite_service: FavoriteService::new(store),
        pokedex_service: PokedexService::new(Arc::new(StubGateway)),
    }
}

pub fn memory_state() -> AppState {
    test_state(Arc::new(MemoryFavoriteStore::new()))
}

/// Knows pikachu (25) and bulbasaur (1). Id 500 simulates an upstream outage.
pub struct StubGateway;

fn known(id: &str) -> Option<&'static str> {
    match id {
        "25" | "pikachu" => Some("pikachu"),
        "1" | "bulbasaur" => Some("bulbasaur"),
        _ => None,
    }
}

#[async_trait]
impl PokemonGateway for StubGateway {
    async fn lookup(&self, id_or_name: &str) -> AppResult<PokemonEntry> {
        if id_or_name == "500" {
            return Err(AppError::UpstreamUnavailable("pokemon returned 500".into()));
        }
        let name = known(id_or_name).ok_or(AppError::NotFound("Pokemon not found".into()))?;
        Ok(PokemonEntry {
            pokemon: json!({ "name": name }),
            species: json!({ "name": name }),
        })
    }

    async fn lookup_form(&self, id_or_name: &str) -> AppResult<Value> {
        let name = known(id_or_name).ok_or(AppError::NotFound("Pokemon form not found".into()))?;
        Ok(json!({ "name": name, "is_default": true }))
    }

    async fn lookup_evolution_chain(&self, id: &str) -> AppResult<Value> {
        match id {
            "10" => Ok(json!({ "id": 10, "chain": { "species": { "name": "pichu" } } })),
            _ => Err(AppError::NotFound("Pokemon evolution chain not found".into())),
        }
    }

    async fn list_page(&self, limit: u32, offset: u32) -> AppResult<Value> {
        Ok(json!({ "count": 1302, "limit": limit, "offset": offset, "results": [] }))
    }
}
