use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{FavoriteRelation, FavoriteState, ListFavoritesQuery, Page},
    repository::FavoriteStore,
    telemetry::{FAVORITES_ADDED, FAVORITES_REMOVED},
};

#[derive(Clone)]
pub struct FavoriteService {
    store: Arc<dyn FavoriteStore>,
}

impl FavoriteService {
    pub fn new(store: Arc<dyn FavoriteStore>) -> Self {
        Self { store }
    }

    #[instrument(name = "favorite.is_favorite", skip(self))]
    pub async fn is_favorite(&self, user_id: Uuid, pokemon: i32) -> AppResult<bool> {
        Ok(self.store.exists(user_id, pokemon).await?.is_some())
    }

    /// Creates the relation when absent and deletes it when present.
    ///
    /// This is a read followed by a write, not an atomic operation. A racing
    /// create surfaces the store's `Conflict`; a racing delete surfaces
    /// `NotFound`.
    #[instrument(name = "favorite.toggle", skip(self))]
    pub async fn toggle(&self, user_id: Uuid, pokemon: i32) -> AppResult<FavoriteState> {
        match self.store.exists(user_id, pokemon).await? {
            None => {
                let relation = self.store.create(user_id, pokemon).await?;
                FAVORITES_ADDED.add(1, &[]);
                tracing::info!(%user_id, pokemon, "Pokemon favorited");
                Ok(FavoriteState::Favorited(relation))
            }
            Some(existing) => {
                self.store.delete(existing.id).await?;
                FAVORITES_REMOVED.add(1, &[]);
                tracing::info!(%user_id, pokemon, "Pokemon unfavorited");
                Ok(FavoriteState::Unfavorited)
            }
        }
    }

    #[instrument(name = "favorite.list", skip(self, query))]
    pub async fn list(
        &self,
        user_id: Uuid,
        query: ListFavoritesQuery,
    ) -> AppResult<Page<FavoriteRelation>> {
        let (filter, options) = query.into_parts(user_id)?;
        self.store.list(&filter, &options).await
    }

    /// Counts favorites of every user, not only the caller's.
    #[instrument(name = "favorite.count", skip(self))]
    pub async fn count(&self) -> AppResult<i64> {
        self.store.count().await
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
