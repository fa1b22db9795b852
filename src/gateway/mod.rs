mod pokeapi;

use async_trait::async_trait;
use serde_json::Value;

use crate::{error::AppResult, models::PokemonEntry};

pub use pokeapi::PokeApiClient;

/// Read-only source of pokemon data.
///
/// Missing resources surface as `NotFound`; transport and upstream server
/// failures as `UpstreamUnavailable`. Nothing is retried or cached.
#[async_trait]
pub trait PokemonGateway: Send + Sync {
    async fn lookup(&self, id_or_name: &str) -> AppResult<PokemonEntry>;

    async fn lookup_form(&self, id_or_name: &str) -> AppResult<Value>;

    async fn lookup_evolution_chain(&self, id: &str) -> AppResult<Value>;

    async fn list_page(&self, limit: u32, offset: u32) -> AppResult<Value>;
}
