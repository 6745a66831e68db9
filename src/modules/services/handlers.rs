use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use studio_http::{AppError, ValidatedJson};
use studio_storage::models::{NewService, Service};

use crate::utils::{self, Store};

pub async fn list_services(State(store): State<Store>) -> Json<Vec<Service>> {
    Json(store.get_services().await)
}

pub async fn get_service(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Service>, AppError> {
    let service_id = utils::parse_id(&id, "service")?;
    store
        .get_service(service_id)
        .await
        .map(Json)
        .ok_or_else(|| utils::not_found("service", &id))
}

pub async fn create_service(
    State(store): State<Store>,
    ValidatedJson(payload): ValidatedJson<NewService>,
) -> Result<(StatusCode, Json<Service>), AppError> {
    let service = store.create_service(payload).await?;
    tracing::info!(service_id = %service.id, name = %service.name, "service package added");
    Ok((StatusCode::CREATED, Json(service)))
}
