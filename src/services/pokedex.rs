use std::sync::Arc;

use futures::future::try_join_all;
use serde_json::Value;
use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    gateway::PokemonGateway,
    models::{ListPokemonQuery, PokemonLookup},
};

#[derive(Clone)]
pub struct PokedexService {
    gateway: Arc<dyn PokemonGateway>,
}

impl PokedexService {
    pub fn new(gateway: Arc<dyn PokemonGateway>) -> Self {
        Self { gateway }
    }

    /// Looks up `"25"` or `"1,2,pikachu"`. Several identifiers yield entries in request order.
    #[instrument(name = "pokedex.get_pokemon", skip(self))]
    pub async fn get_pokemon(&self, ids: &str) -> AppResult<PokemonLookup> {
        let ids = parse_identifiers(ids)?;

        if let [id] = ids.as_slice() {
            return Ok(PokemonLookup::Single(self.gateway.lookup(id).await?));
        }

        let entries = try_join_all(ids.iter().map(|id| self.gateway.lookup(id))).await?;
        Ok(PokemonLookup::Many(entries))
    }

    #[instrument(name = "pokedex.get_form", skip(self))]
    pub async fn get_form(&self, id: &str) -> AppResult<Value> {
        let id = parse_identifier(id)?;
        self.gateway.lookup_form(&id).await
    }

    #[instrument(name = "pokedex.get_evolution_chain", skip(self))]
    pub async fn get_evolution_chain(&self, id: &str) -> AppResult<Value> {
        let id: u32 = id
            .trim()
            .parse()
            .map_err(|_| AppError::Validation(format!("Invalid evolution chain id '{}'", id)))?;
        self.gateway.lookup_evolution_chain(&id.to_string()).await
    }

    #[instrument(name = "pokedex.list", skip(self))]
    pub async fn list(&self, query: ListPokemonQuery) -> AppResult<Value> {
        self.gateway.list_page(query.limit(), query.offset()).await
    }
}

/// PokeAPI names are lowercase ascii with dashes; ids are digits.
fn parse_identifier(raw: &str) -> AppResult<String> {
    let id = raw.trim().to_ascii_lowercase();

    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(AppError::Validation(format!(
            "Invalid pokemon identifier '{}'",
            raw
        )));
    }

    Ok(id)
}

fn parse_identifiers(raw: &str) -> AppResult<Vec<String>> {
    let ids = raw
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_identifier)
        .collect::<AppResult<Vec<_>>>()?;

    if ids.is_empty() {
        return Err(AppError::Validation(
            "At least one pokemon identifier is required".to_string(),
        ));
    }

    Ok(ids)
}
