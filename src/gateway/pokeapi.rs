use std::time::Duration;

use async_trait::async_trait;
use opentelemetry::KeyValue;
use reqwest::{RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::PokemonEntry,
    telemetry::{POKEAPI_ERRORS, POKEAPI_REQUESTS},
};

use super::PokemonGateway;

/// HTTP client for PokeAPI v2.
#[derive(Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}/{}", self.base_url, path))
    }

    async fn send_json(
        &self,
        resource: &'static str,
        request: RequestBuilder,
        not_found: &str,
    ) -> AppResult<Value> {
        let resource_kv = KeyValue::new("pokeapi.resource", resource);
        POKEAPI_REQUESTS.add(1, &[resource_kv.clone()]);

        let response = request.send().await.map_err(|e| {
            POKEAPI_ERRORS.add(1, &[resource_kv.clone()]);
            AppError::UpstreamUnavailable(format!("{} request failed: {}", resource, e))
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(AppError::NotFound(not_found.to_string())),
            status if status.is_success() => response.json::<Value>().await.map_err(|e| {
                POKEAPI_ERRORS.add(1, &[resource_kv]);
                AppError::UpstreamUnavailable(format!("{} returned invalid JSON: {}", resource, e))
            }),
            status => {
                POKEAPI_ERRORS.add(1, &[resource_kv]);
                Err(AppError::UpstreamUnavailable(format!(
                    "{} returned {}",
                    resource, status
                )))
            }
        }
    }
}

#[async_trait]
impl PokemonGateway for PokeApiClient {
    #[instrument(name = "pokeapi.lookup", skip(self))]
    async fn lookup(&self, id_or_name: &str) -> AppResult<PokemonEntry> {
        let (pokemon, species) = tokio::try_join!(
            self.send_json(
                "pokemon",
                self.get(&format!("pokemon/{}", id_or_name)),
                "Pokemon not found",
            ),
            self.send_json(
                "pokemon-species",
                self.get(&format!("pokemon-species/{}", id_or_name)),
                "Pokemon not found",
            ),
        )?;

        Ok(PokemonEntry { pokemon, species })
    }

    #[instrument(name = "pokeapi.lookup_form", skip(self))]
    async fn lookup_form(&self, id_or_name: &str) -> AppResult<Value> {
        self.send_json(
            "pokemon-form",
            self.get(&format!("pokemon-form/{}", id_or_name)),
            "Pokemon form not found",
        )
        .await
    }

    #[instrument(name = "pokeapi.lookup_evolution_chain", skip(self))]
    async fn lookup_evolution_chain(&self, id: &str) -> AppResult<Value> {
        self.send_json(
            "evolution-chain",
            self.get(&format!("evolution-chain/{}", id)),
            "Pokemon evolution chain not found",
        )
        .await
    }

    #[instrument(name = "pokeapi.list_page", skip(self))]
    async fn list_page(&self, limit: u32, offset: u32) -> AppResult<Value> {
        self.send_json(
            "pokemon",
            self.get("pokemon")
                .query(&[("limit", limit), ("offset", offset)]),
            "Pokemon not found",
        )
        .await
    }
}
