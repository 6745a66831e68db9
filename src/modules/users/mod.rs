mod handlers;
pub mod models;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use serde_json::json;
use studio_kernel::{InitCtx, Module};
use studio_storage::models::NewUser;

use crate::utils::{self, Store};
use models::UserView;

/// Site accounts. Usernames are unique; nothing here authenticates.
pub struct UsersModule {
    store: Store,
}

impl UsersModule {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for UsersModule {
    fn name(&self) -> &'static str {
        "users"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let users = self.store.sizes().await.users;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            users,
            "users module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(handlers::list_users).post(handlers::create_user))
            .route("/{id}", get(handlers::get_user))
            .route("/by-username/{username}", get(handlers::get_user_by_username))
            .with_state(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let mut create =
            utils::create_operation("Users", "Register a user", "UserView", "NewUser");
        create["responses"]["409"] = json!({
            "description": "Username already taken",
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                }
            }
        });

        Some(json!({
            "paths": {
                "/": {
                    "get": utils::list_operation("Users", "List users", "UserView"),
                    "post": create
                },
                "/{id}": {
                    "get": utils::get_operation("Users", "Get a user", "UserView", "id")
                },
                "/by-username/{username}": {
                    "get": utils::get_operation("Users", "Find a user by username", "UserView", "username")
                }
            },
            "components": {
                "schemas": utils::schemas([
                    utils::schema_entry::<UserView>(),
                    utils::schema_entry::<NewUser>(),
                ])
            }
        }))
    }
}

/// Create a new instance of the users module
pub fn create_module(store: Store) -> Arc<dyn Module> {
    Arc::new(UsersModule::new(store))
}
