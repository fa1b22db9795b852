mod favorite;
#[cfg(test)]
mod memory;
mod user;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{FavoriteFilter, FavoriteRelation, ListOptions, Page},
};

pub use favorite::PgFavoriteStore;
#[cfg(test)]
pub use memory::MemoryFavoriteStore;
pub use user::UserRepository;

/// Persistence for the `(user, pokemon)` favorite relation.
///
/// Implementations enforce at most one relation per pair: `create` on an
/// existing pair fails with `Conflict`, `delete` of an unknown id fails with
/// `NotFound`. `list` applies exactly the filter it is given and performs no
/// authorization of its own; rows with equal sort keys keep insertion order.
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    async fn exists(&self, user: Uuid, pokemon: i32) -> AppResult<Option<FavoriteRelation>>;

    async fn create(&self, user: Uuid, pokemon: i32) -> AppResult<FavoriteRelation>;

    async fn delete(&self, id: Uuid) -> AppResult<FavoriteRelation>;

    async fn list(
        &self,
        filter: &FavoriteFilter,
        options: &ListOptions,
    ) -> AppResult<Page<FavoriteRelation>>;

    /// Counts every relation in the store, across all users.
    async fn count(&self) -> AppResult<i64>;

    async fn ping(&self) -> AppResult<()>;
}
