use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{FavoriteFilter, FavoriteRelation, ListOptions, Page},
};

use super::FavoriteStore;

#[derive(Clone)]
pub struct PgFavoriteStore {
    pool: PgPool,
}

impl PgFavoriteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &FavoriteFilter) {
    qb.push(" WHERE user_id = ").push_bind(filter.user);
    if let Some(pokemon) = filter.pokemon {
        qb.push(" AND pokemon = ").push_bind(pokemon);
    }
}

/// Ties fall back to `seq`, the insertion sequence.
fn push_order_by(qb: &mut QueryBuilder<'_, Postgres>, options: &ListOptions) {
    qb.push(" ORDER BY ");
    if options.sort_by.is_empty() {
        qb.push("created_at ASC");
    }
    for (i, key) in options.sort_by.iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        qb.push(key.field.column()).push(" ").push(key.order.keyword());
    }
    qb.push(", seq ASC");
}

#[async_trait]
impl FavoriteStore for PgFavoriteStore {
    #[instrument(name = "db.favorite.exists", skip(self))]
    async fn exists(&self, user: Uuid, pokemon: i32) -> AppResult<Option<FavoriteRelation>> {
        let relation = sqlx::query_as::<_, FavoriteRelation>(
            r#"
            SELECT id, user_id, pokemon, created_at, updated_at
            FROM favorite_pokemon
            WHERE user_id = $1 AND pokemon = $2
            "#,
        )
        .bind(user)
        .bind(pokemon)
        .fetch_optional(&self.pool)
        .await?;

        Ok(relation)
    }

    #[instrument(name = "db.favorite.create", skip(self))]
    async fn create(&self, user: Uuid, pokemon: i32) -> AppResult<FavoriteRelation> {
        sqlx::query_as::<_, FavoriteRelation>(
            r#"
            INSERT INTO favorite_pokemon (id, user_id, pokemon)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, pokemon, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user)
        .bind(pokemon)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Pokemon {} is already a favorite", pokemon))
            }
            _ => AppError::from(e),
        })
    }

    #[instrument(name = "db.favorite.delete", skip(self))]
    async fn delete(&self, id: Uuid) -> AppResult<FavoriteRelation> {
        sqlx::query_as::<_, FavoriteRelation>(
            r#"
            DELETE FROM favorite_pokemon
            WHERE id = $1
            RETURNING id, user_id, pokemon, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Favorite not found".to_string()))
    }

    #[instrument(name = "db.favorite.list", skip(self))]
    async fn list(
        &self,
        filter: &FavoriteFilter,
        options: &ListOptions,
    ) -> AppResult<Page<FavoriteRelation>> {
        let mut count_qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM favorite_pokemon");
        push_filter(&mut count_qb, filter);
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT id, user_id, pokemon, created_at, updated_at FROM favorite_pokemon",
        );
        push_filter(&mut qb, filter);
        push_order_by(&mut qb, options);
        qb.push(" LIMIT ")
            .push_bind(options.limit)
            .push(" OFFSET ")
            .push_bind(options.offset());

        let results = qb
            .build_query_as::<FavoriteRelation>()
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(results, options, total))
    }

    #[instrument(name = "db.favorite.count", skip(self))]
    async fn count(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorite_pokemon")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
