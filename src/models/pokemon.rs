use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_POKEMON_LIMIT: u32 = 20;

/// A pokemon together with its species record, both as returned by PokeAPI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonEntry {
    pub pokemon: Value,
    pub species: Value,
}

/// A single lookup renders as an object, a comma-separated lookup as an array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PokemonLookup {
    Single(PokemonEntry),
    Many(Vec<PokemonEntry>),
}

/// Unparsable values fall back to the defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListPokemonQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

fn parse_u32(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
}

impl ListPokemonQuery {
    pub fn limit(&self) -> u32 {
        parse_u32(self.limit.as_deref())
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_POKEMON_LIMIT)
    }

    pub fn offset(&self) -> u32 {
        parse_u32(self.offset.as_deref()).unwrap_or(0)
    }
}
