mod auth;
mod favorite;
mod pokedex;

pub use auth::{AuthService, Claims};
pub use favorite::FavoriteService;
pub use pokedex::PokedexService;
