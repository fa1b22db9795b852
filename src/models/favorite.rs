use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::AppError;

use super::ListOptions;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRelation {
    pub id: Uuid,
    #[sqlx(rename = "user_id")]
    pub user: Uuid,
    pub pokemon: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// `user` is always the authenticated caller; the store never widens it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteFilter {
    pub user: Uuid,
    pub pokemon: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteState {
    Favorited(FavoriteRelation),
    Unfavorited,
}

#[derive(Debug, Deserialize)]
pub struct ListFavoritesQuery {
    pub pokemon: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

impl ListFavoritesQuery {
    pub fn into_parts(self, user: Uuid) -> Result<(FavoriteFilter, ListOptions), AppError> {
        let pokemon = self
            .pokemon
            .as_deref()
            .map(parse_pokemon_id)
            .transpose()?;

        let options = ListOptions::from_raw(
            self.sort_by.as_deref(),
            self.limit.as_deref(),
            self.page.as_deref(),
        )?;

        Ok((FavoriteFilter { user, pokemon }, options))
    }
}

pub fn parse_pokemon_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::Validation(format!("Invalid pokemon id '{}'", raw)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatusResponse {
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct ToggleFavoriteResponse {
    pub favorited: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteCountResponse {
    pub total_results: i64,
}
