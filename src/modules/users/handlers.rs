use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use studio_http::{AppError, ValidatedJson};
use studio_storage::models::NewUser;

use super::models::UserView;
use crate::utils::{self, Store};

pub async fn list_users(State(store): State<Store>) -> Json<Vec<UserView>> {
    Json(store.get_users().await.into_iter().map(UserView::from).collect())
}

pub async fn get_user(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<UserView>, AppError> {
    let user_id = utils::parse_id(&id, "user")?;
    store
        .get_user(user_id)
        .await
        .map(|user| Json(user.into()))
        .ok_or_else(|| utils::not_found("user", &id))
}

pub async fn get_user_by_username(
    State(store): State<Store>,
    Path(username): Path<String>,
) -> Result<Json<UserView>, AppError> {
    store
        .get_user_by_username(&username)
        .await
        .map(|user| Json(user.into()))
        .ok_or_else(|| utils::not_found("user", &username))
}

/// A taken username surfaces as `409` from the store's uniqueness check.
pub async fn create_user(
    State(store): State<Store>,
    ValidatedJson(payload): ValidatedJson<NewUser>,
) -> Result<(StatusCode, Json<UserView>), AppError> {
    let user = store.create_user(payload).await?;
    tracing::info!(user_id = %user.id, "user registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}
