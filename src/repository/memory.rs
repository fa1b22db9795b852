use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{FavoriteFilter, FavoriteRelation, ListOptions, Page, SortField, SortKey, SortOrder},
};

use super::FavoriteStore;

/// Favorite store kept in process memory. Rows are held in insertion order.
#[derive(Default)]
pub struct MemoryFavoriteStore {
    rows: Mutex<Vec<FavoriteRelation>>,
}

impl MemoryFavoriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> AppResult<std::sync::MutexGuard<'_, Vec<FavoriteRelation>>> {
        self.rows
            .lock()
            .map_err(|_| AppError::StorageUnavailable("favorite store lock poisoned".to_string()))
    }
}

fn compare(a: &FavoriteRelation, b: &FavoriteRelation, keys: &[SortKey]) -> Ordering {
    keys.iter()
        .map(|key| {
            let ord = match key.field {
                SortField::CreatedAt => a.created_at.cmp(&b.created_at),
                SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
                SortField::Pokemon => a.pokemon.cmp(&b.pokemon),
            };
            match key.order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

#[async_trait]
impl FavoriteStore for MemoryFavoriteStore {
    async fn exists(&self, user: Uuid, pokemon: i32) -> AppResult<Option<FavoriteRelation>> {
        Ok(self
            .rows()?
            .iter()
            .find(|r| r.user == user && r.pokemon == pokemon)
            .cloned())
    }

    async fn create(&self, user: Uuid, pokemon: i32) -> AppResult<FavoriteRelation> {
        let mut rows = self.rows()?;

        if rows.iter().any(|r| r.user == user && r.pokemon == pokemon) {
            return Err(AppError::Conflict(format!(
                "Pokemon {} is already a favorite",
                pokemon
            )));
        }

        let now = OffsetDateTime::now_utc();
        let relation = FavoriteRelation {
            id: Uuid::new_v4(),
            user,
            pokemon,
            created_at: now,
            updated_at: now,
        };
        rows.push(relation.clone());

        Ok(relation)
    }

    async fn delete(&self, id: Uuid) -> AppResult<FavoriteRelation> {
        let mut rows = self.rows()?;
        let index = rows
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound("Favorite not found".to_string()))?;

        Ok(rows.remove(index))
    }

    async fn list(
        &self,
        filter: &FavoriteFilter,
        options: &ListOptions,
    ) -> AppResult<Page<FavoriteRelation>> {
        let mut matching: Vec<FavoriteRelation> = self
            .rows()?
            .iter()
            .filter(|r| r.user == filter.user)
            .filter(|r| filter.pokemon.is_none_or(|p| r.pokemon == p))
            .cloned()
            .collect();

        // stable sort keeps insertion order between equal keys
        matching.sort_by(|a, b| compare(a, b, &options.sort_by));

        let total = matching.len() as i64;
        let results = matching
            .into_iter()
            .skip(usize::try_from(options.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(options.limit).unwrap_or(usize::MAX))
            .collect();

        Ok(Page::new(results, options, total))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.rows()?.len() as i64)
    }

    async fn ping(&self) -> AppResult<()> {
        self.rows().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_sort_by;
    use tokio_test::{assert_err, assert_ok};

    fn options(limit: i64, page: i64) -> ListOptions {
        ListOptions {
            limit,
            page,
            ..ListOptions::default()
        }
    }

    fn scoped(user: Uuid) -> FavoriteFilter {
        FavoriteFilter {
            user,
            pokemon: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_exists() {
        let store = MemoryFavoriteStore::new();
        let user = Uuid::new_v4();

        let created = assert_ok!(store.create(user, 25).await);
        let found = assert_ok!(store.exists(user, 25).await);

        assert_eq!(found, Some(created));
        assert_eq!(assert_ok!(store.exists(user, 26).await), None);
    }

    #[tokio::test]
    async fn test_create_duplicate_pair_conflicts() {
        let store = MemoryFavoriteStore::new();
        let user = Uuid::new_v4();

        assert_ok!(store.create(user, 1).await);
        let err = assert_err!(store.create(user, 1).await);

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_same_pokemon_for_different_users_is_allowed() {
        let store = MemoryFavoriteStore::new();

        assert_ok!(store.create(Uuid::new_v4(), 1).await);
        assert_ok!(store.create(Uuid::new_v4(), 1).await);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let store = MemoryFavoriteStore::new();
        let err = assert_err!(store.delete(Uuid::new_v4()).await);

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let store = MemoryFavoriteStore::new();
        let relation = assert_ok!(store.create(Uuid::new_v4(), 7).await);

        let deleted = assert_ok!(store.delete(relation.id).await);
        assert_eq!(deleted.id, relation.id);

        let err = assert_err!(store.delete(relation.id).await);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_paginates() {
        let store = MemoryFavoriteStore::new();
        let user = Uuid::new_v4();
        for pokemon in 1..=15 {
            assert_ok!(store.create(user, pokemon).await);
        }

        let page = assert_ok!(store.list(&scoped(user), &options(10, 2)).await);

        assert_eq!(page.results.len(), 5);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_results, 15);
        assert_eq!(page.page, 2);
        let pokemon: Vec<i32> = page.results.iter().map(|r| r.pokemon).collect();
        assert_eq!(pokemon, vec![11, 12, 13, 14, 15]);
    }

    #[tokio::test]
    async fn test_list_never_leaks_other_users() {
        let store = MemoryFavoriteStore::new();
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();
        for pokemon in [1, 4, 7] {
            assert_ok!(store.create(user_a, pokemon).await);
        }
        for pokemon in [1, 25] {
            assert_ok!(store.create(user_b, pokemon).await);
        }

        let page = assert_ok!(store.list(&scoped(user_a), &options(10, 1)).await);

        assert_eq!(page.results.len(), 3);
        assert_eq!(page.total_results, 3);
        assert!(page.results.iter().all(|r| r.user == user_a));
    }

    #[tokio::test]
    async fn test_list_filters_by_pokemon() {
        let store = MemoryFavoriteStore::new();
        let user = Uuid::new_v4();
        for pokemon in [1, 4, 7] {
            assert_ok!(store.create(user, pokemon).await);
        }

        let filter = FavoriteFilter {
            user,
            pokemon: Some(4),
        };
        let page = assert_ok!(store.list(&filter, &ListOptions::default()).await);

        assert_eq!(page.total_results, 1);
        assert_eq!(page.results[0].pokemon, 4);
    }

    #[tokio::test]
    async fn test_list_sorts_by_pokemon_desc() {
        let store = MemoryFavoriteStore::new();
        let user = Uuid::new_v4();
        for pokemon in [4, 150, 1] {
            assert_ok!(store.create(user, pokemon).await);
        }

        let options = ListOptions {
            sort_by: parse_sort_by("pokemon:desc").expect("valid sort"),
            ..ListOptions::default()
        };
        let page = assert_ok!(store.list(&scoped(user), &options).await);

        let pokemon: Vec<i32> = page.results.iter().map(|r| r.pokemon).collect();
        assert_eq!(pokemon, vec![150, 4, 1]);
    }

    #[tokio::test]
    async fn test_list_defaults_to_insertion_order() {
        let store = MemoryFavoriteStore::new();
        let user = Uuid::new_v4();
        for pokemon in [9, 3, 6] {
            assert_ok!(store.create(user, pokemon).await);
        }

        let page = assert_ok!(store.list(&scoped(user), &ListOptions::default()).await);

        let pokemon: Vec<i32> = page.results.iter().map(|r| r.pokemon).collect();
        assert_eq!(pokemon, vec![9, 3, 6]);
    }

    #[tokio::test]
    async fn test_list_page_past_end_is_empty() {
        let store = MemoryFavoriteStore::new();
        let user = Uuid::new_v4();
        assert_ok!(store.create(user, 1).await);

        let page = assert_ok!(store.list(&scoped(user), &options(10, 3)).await);

        assert!(page.results.is_empty());
        assert_eq!(page.total_results, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_count_is_unscoped() {
        let store = MemoryFavoriteStore::new();
        assert_ok!(store.create(Uuid::new_v4(), 1).await);
        assert_ok!(store.create(Uuid::new_v4(), 2).await);
        assert_ok!(store.create(Uuid::new_v4(), 3).await);

        assert_eq!(assert_ok!(store.count().await), 3);
    }
}
