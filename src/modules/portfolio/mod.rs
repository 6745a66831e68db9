//! Gallery entries, filterable by category.

mod handlers;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use serde_json::json;
use studio_kernel::{InitCtx, Module};
use studio_storage::models::{NewPortfolioItem, PortfolioItem};

use crate::utils::{self, Store};

pub struct PortfolioModule {
    store: Store,
}

impl PortfolioModule {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for PortfolioModule {
    fn name(&self) -> &'static str {
        "portfolio"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let items = self.store.sizes().await.portfolio_items;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            items,
            "portfolio module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route(
                "/",
                get(handlers::list_portfolio_items).post(handlers::create_portfolio_item),
            )
            .route("/{id}", get(handlers::get_portfolio_item))
            .with_state(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let mut list = utils::list_operation("Portfolio", "List portfolio items", "PortfolioItem");
        list["parameters"] = json!([{
            "name": "category",
            "in": "query",
            "required": false,
            "description": "Exact category to filter on; `all` disables filtering",
            "schema": { "type": "string" }
        }]);
        list["responses"]["400"] = json!({
            "description": "Malformed query string",
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                }
            }
        });

        Some(json!({
            "paths": {
                "/": {
                    "get": list,
                    "post": utils::create_operation("Portfolio", "Add a portfolio item", "PortfolioItem", "NewPortfolioItem")
                },
                "/{id}": {
                    "get": utils::get_operation("Portfolio", "Get a portfolio item", "PortfolioItem", "id")
                }
            },
            "components": {
                "schemas": utils::schemas([
                    utils::schema_entry::<PortfolioItem>(),
                    utils::schema_entry::<NewPortfolioItem>(),
                ])
            }
        }))
    }
}

/// Create a new instance of the portfolio module
pub fn create_module(store: Store) -> Arc<dyn Module> {
    Arc::new(PortfolioModule::new(store))
}
