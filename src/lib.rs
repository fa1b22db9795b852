pub mod config;
pub mod database;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use config::Config;

use services::{AuthService, FavoriteService, PokedexService};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub favorite_service: FavoriteService,
    pub pokedex_service: PokedexService,
}
