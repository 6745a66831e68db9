//! Contact-form submissions.
//!
//! Every booking is stored as `pending`; there is no route that changes a
//! booking after it is created.

mod handlers;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use serde_json::json;
use studio_kernel::{InitCtx, Module};
use studio_storage::models::{Booking, NewBooking};

use crate::utils::{self, Store};

pub struct BookingsModule {
    store: Store,
}

impl BookingsModule {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for BookingsModule {
    fn name(&self) -> &'static str {
        "bookings"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let bookings = self.store.sizes().await.bookings;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            bookings,
            "bookings module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(handlers::list_bookings).post(handlers::create_booking))
            .route("/{id}", get(handlers::get_booking))
            .with_state(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": utils::list_operation("Bookings", "List bookings", "Booking"),
                    "post": utils::create_operation("Bookings", "Submit a booking request", "Booking", "NewBooking")
                },
                "/{id}": {
                    "get": utils::get_operation("Bookings", "Get a booking", "Booking", "id")
                }
            },
            "components": {
                "schemas": utils::schemas([
                    utils::schema_entry::<Booking>(),
                    utils::schema_entry::<NewBooking>(),
                ])
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let bookings = self.store.sizes().await.bookings;
        tracing::info!(
            module = self.name(),
            bookings,
            "bookings module stopped; in-memory bookings are discarded"
        );
        Ok(())
    }
}

/// Create a new instance of the bookings module
pub fn create_module(store: Store) -> Arc<dyn Module> {
    Arc::new(BookingsModule::new(store))
}
