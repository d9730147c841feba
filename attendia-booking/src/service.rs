use std::sync::Arc;

use attendia_domain::{BookingRepository, BookingWithRoom};
use chrono::Utc;
use tracing::info;

use crate::eligibility::{self, BookingError, TransferPolicy};

/// Sequences the eligibility checks and the single persistence write behind
/// each booking use case. Holds the store by trait object so transports and
/// tests inject their own.
pub struct BookingService {
    store: Arc<dyn BookingRepository>,
    policy: TransferPolicy,
}

impl BookingService {
    pub fn new(store: Arc<dyn BookingRepository>, policy: TransferPolicy) -> Self {
        Self { store, policy }
    }

    /// Fetch the caller's current booking joined with its room.
    pub async fn get_booking(&self, user_id: i32) -> Result<BookingWithRoom, BookingError> {
        self.store
            .get_user_booking(user_id)
            .await?
            .ok_or_else(|| BookingError::NotFound("booking".to_string()))
    }

    /// Create a booking for `user_id` in `room_id`. Exactly one row is
    /// written, and only after every eligibility check admits.
    pub async fn create_booking(&self, user_id: i32, room_id: i32) -> Result<i32, BookingError> {
        eligibility::check_create(self.store.as_ref(), user_id, room_id).await?;

        let booking = self.store.create_booking(user_id, room_id, Utc::now()).await?;
        info!("booking {} created for user {}", booking.id, user_id);

        Ok(booking.id)
    }

    /// Move an existing booking to another room, keeping the original owner.
    pub async fn change_room(
        &self,
        caller_id: i32,
        booking_id: i32,
        room_id: i32,
    ) -> Result<i32, BookingError> {
        let current = eligibility::check_transfer(
            self.store.as_ref(),
            &self.policy,
            caller_id,
            booking_id,
            room_id,
        )
        .await?;

        let updated = self
            .store
            .update_booking(current.user_id, room_id, booking_id, Utc::now())
            .await?;
        info!("booking {} moved to room {}", updated.id, room_id);

        Ok(updated.id)
    }
}
