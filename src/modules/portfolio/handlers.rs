use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use studio_http::{AppError, ValidatedJson};
use studio_storage::models::{NewPortfolioItem, PortfolioItem};

use crate::utils::{self, Store};

/// The gallery's "show everything" tab.
const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Deserialize)]
pub struct PortfolioFilter {
    pub category: Option<String>,
}

pub async fn list_portfolio_items(
    State(store): State<Store>,
    query: Result<Query<PortfolioFilter>, QueryRejection>,
) -> Result<Json<Vec<PortfolioItem>>, AppError> {
    let Query(filter) = query?;
    let items = match filter.category.as_deref() {
        None | Some(ALL_CATEGORIES) => store.get_portfolio_items().await,
        Some(category) => store.get_portfolio_items_by_category(category).await,
    };
    Ok(Json(items))
}

pub async fn get_portfolio_item(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<PortfolioItem>, AppError> {
    let item_id = utils::parse_id(&id, "portfolio item")?;
    store
        .get_portfolio_item(item_id)
        .await
        .map(Json)
        .ok_or_else(|| utils::not_found("portfolio item", &id))
}

pub async fn create_portfolio_item(
    State(store): State<Store>,
    ValidatedJson(payload): ValidatedJson<NewPortfolioItem>,
) -> Result<(StatusCode, Json<PortfolioItem>), AppError> {
    let item = store.create_portfolio_item(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}
