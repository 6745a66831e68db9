use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use studio_http::{AppError, ValidatedJson};
use studio_storage::models::{Booking, NewBooking};

use crate::utils::{self, Store};

pub async fn list_bookings(State(store): State<Store>) -> Json<Vec<Booking>> {
    Json(store.get_bookings().await)
}

pub async fn get_booking(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    let booking_id = utils::parse_id(&id, "booking")?;
    store
        .get_booking(booking_id)
        .await
        .map(Json)
        .ok_or_else(|| utils::not_found("booking", &id))
}

pub async fn create_booking(
    State(store): State<Store>,
    ValidatedJson(payload): ValidatedJson<NewBooking>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = store.create_booking(payload).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}
