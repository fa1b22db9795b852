mod favorite;
mod page;
mod pokemon;
mod user;

pub use favorite::{
    FavoriteCountResponse, FavoriteFilter, FavoriteRelation, FavoriteState,
    FavoriteStatusResponse, ListFavoritesQuery, ToggleFavoriteResponse, parse_pokemon_id,
};
pub use page::{ListOptions, Page, SortField, SortKey, SortOrder, parse_sort_by};
pub use pokemon::{ListPokemonQuery, PokemonEntry, PokemonLookup};
pub use user::{AuthResponse, LoginInput, RegisterInput, User};
