mod handlers;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use serde_json::json;
use studio_kernel::{InitCtx, Module};
use studio_storage::models::{NewTeamMember, TeamMember};

use crate::utils::{self, Store};

/// Photographers and crew shown in the team section
pub struct TeamModule {
    store: Store,
}

impl TeamModule {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for TeamModule {
    fn name(&self) -> &'static str {
        "team"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let members = self.store.sizes().await.team_members;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            members,
            "team module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route(
                "/",
                get(handlers::list_team_members).post(handlers::create_team_member),
            )
            .route("/{id}", get(handlers::get_team_member))
            .with_state(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": utils::list_operation("Team", "List team members", "TeamMember"),
                    "post": utils::create_operation("Team", "Add a team member", "TeamMember", "NewTeamMember")
                },
                "/{id}": {
                    "get": utils::get_operation("Team", "Get a team member", "TeamMember", "id")
                }
            },
            "components": {
                "schemas": utils::schemas([
                    utils::schema_entry::<TeamMember>(),
                    utils::schema_entry::<NewTeamMember>(),
                ])
            }
        }))
    }
}

pub fn create_module(store: Store) -> Arc<dyn Module> {
    Arc::new(TeamModule::new(store))
}
