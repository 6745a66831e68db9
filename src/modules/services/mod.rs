//! Photography packages. A package without a price is quoted on request.

mod handlers;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use serde_json::json;
use studio_kernel::{InitCtx, Module};
use studio_storage::models::{Flag, NewService, Service};

use crate::utils::{self, Store};

pub struct ServicesModule {
    store: Store,
}

impl ServicesModule {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for ServicesModule {
    fn name(&self) -> &'static str {
        "services"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let services = self.store.get_services().await;
        let popular = services
            .iter()
            .filter(|service| service.is_popular.is_some_and(Flag::is_set))
            .count();
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            services = services.len(),
            popular,
            "services module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(handlers::list_services).post(handlers::create_service))
            .route("/{id}", get(handlers::get_service))
            .with_state(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": utils::list_operation("Services", "List service packages", "Service"),
                    "post": utils::create_operation("Services", "Add a service package", "Service", "NewService")
                },
                "/{id}": {
                    "get": utils::get_operation("Services", "Get a service package", "Service", "id")
                }
            },
            "components": {
                "schemas": utils::schemas([
                    utils::schema_entry::<Service>(),
                    utils::schema_entry::<NewService>(),
                    utils::schema_entry::<Flag>(),
                ])
            }
        }))
    }
}

/// Create a new instance of the services module
pub fn create_module(store: Store) -> Arc<dyn Module> {
    Arc::new(ServicesModule::new(store))
}
