use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use studio_http::{AppError, ValidatedJson};
use studio_storage::models::{NewTeamMember, TeamMember};

use crate::utils::{self, Store};

pub async fn list_team_members(State(store): State<Store>) -> Json<Vec<TeamMember>> {
    Json(store.get_team_members().await)
}

pub async fn get_team_member(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<TeamMember>, AppError> {
    let member_id = utils::parse_id(&id, "team member")?;
    store
        .get_team_member(member_id)
        .await
        .map(Json)
        .ok_or_else(|| utils::not_found("team member", &id))
}

pub async fn create_team_member(
    State(store): State<Store>,
    ValidatedJson(payload): ValidatedJson<NewTeamMember>,
) -> Result<(StatusCode, Json<TeamMember>), AppError> {
    let member = store.create_team_member(payload).await?;
    Ok((StatusCode::CREATED, Json(member)))
}
