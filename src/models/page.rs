use serde::Serialize;

use crate::error::AppError;

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_PAGE: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    Pokemon,
}

impl SortField {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "createdAt" => Some(SortField::CreatedAt),
            "updatedAt" => Some(SortField::UpdatedAt),
            "pokemon" => Some(SortField::Pokemon),
            _ => None,
        }
    }

    /// Column name in `favorite_pokemon`. Only these values ever reach SQL.
    pub fn column(self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
            SortField::Pokemon => "pokemon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub order: SortOrder,
}

/// Parses `field:asc|desc[,field:asc|desc...]`. A missing direction means ascending.
pub fn parse_sort_by(raw: &str) -> Result<Vec<SortKey>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (name, direction) = part.split_once(':').unwrap_or((part, "asc"));

            let field = SortField::parse(name.trim())
                .ok_or_else(|| AppError::Validation(format!("Cannot sort by '{}'", name.trim())))?;

            let order = match direction.trim().to_ascii_lowercase().as_str() {
                "asc" => SortOrder::Asc,
                "desc" => SortOrder::Desc,
                other => {
                    return Err(AppError::Validation(format!(
                        "Invalid sort direction '{}'",
                        other
                    )));
                }
            };

            Ok(SortKey { field, order })
        })
        .collect()
}

fn positive_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub sort_by: Vec<SortKey>,
    pub limit: i64,
    pub page: i64,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            sort_by: Vec::new(),
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

impl ListOptions {
    /// Non-numeric or non-positive `limit`/`page` fall back to the defaults.
    pub fn from_raw(
        sort_by: Option<&str>,
        limit: Option<&str>,
        page: Option<&str>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            sort_by: sort_by.map(parse_sort_by).transpose()?.unwrap_or_default(),
            limit: positive_or(limit, DEFAULT_LIMIT),
            page: positive_or(page, DEFAULT_PAGE),
        })
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub results: Vec<T>,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub total_results: i64,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, options: &ListOptions, total_results: i64) -> Self {
        let total_pages =
            total_results / options.limit + i64::from(total_results % options.limit != 0);

        Self {
            results,
            page: options.page,
            limit: options.limit,
            total_pages,
            total_results,
        }
    }
}
