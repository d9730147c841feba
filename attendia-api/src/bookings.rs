use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    routing::{get, put},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use attendia_domain::Room;

use crate::error::AppError;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoomIdRequest {
    room_id: i32,
}

#[derive(Debug, Serialize)]
struct GetBookingResponse {
    #[serde(rename = "bookingId")]
    booking_id: i32,
    #[serde(rename = "Room")]
    room: Room,
}

#[derive(Debug, Serialize)]
struct BookingIdResponse {
    #[serde(rename = "bookingId")]
    booking_id: i32,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/booking", get(get_booking).post(create_booking))
        .route("/booking/{booking_id}", put(change_booking_room))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /booking
/// The caller's current booking joined with its room.
async fn get_booking(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user_id)): Extension<AuthenticatedUser>,
) -> Result<Json<GetBookingResponse>, AppError> {
    let found = state.booking.get_booking(user_id).await?;

    Ok(Json(GetBookingResponse {
        booking_id: found.booking.id,
        room: found.room,
    }))
}

/// POST /booking
async fn create_booking(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user_id)): Extension<AuthenticatedUser>,
    body: Result<Json<RoomIdRequest>, JsonRejection>,
) -> Result<Json<BookingIdResponse>, AppError> {
    // Body shape errors are 400 here, not axum's default rejection status.
    let Json(req) = body.map_err(|e| AppError::ValidationError(e.to_string()))?;

    let booking_id = state.booking.create_booking(user_id, req.room_id).await?;
    info!("user {} booked room {}", user_id, req.room_id);

    Ok(Json(BookingIdResponse { booking_id }))
}

/// PUT /booking/{booking_id}
async fn change_booking_room(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user_id)): Extension<AuthenticatedUser>,
    Path(booking_id): Path<i32>,
    body: Result<Json<RoomIdRequest>, JsonRejection>,
) -> Result<Json<BookingIdResponse>, AppError> {
    let Json(req) = body.map_err(|e| AppError::ValidationError(e.to_string()))?;

    let booking_id = state
        .booking
        .change_room(user_id, booking_id, req.room_id)
        .await?;
    info!("user {} moved booking {} to room {}", user_id, booking_id, req.room_id);

    Ok(Json(BookingIdResponse { booking_id }))
}
