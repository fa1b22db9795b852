mod auth;
mod favorites;
mod health;
mod pokedex;

pub use auth::{login, me, register};
pub use favorites::{count_favorites, get_favorite_status, list_favorites, toggle_favorite};
pub use health::health_check;
pub use pokedex::{get_evolution_chain, get_pokemon, get_pokemon_form, list_pokemon};
