use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::booking::{Booking, BookingWithRoom, RoomWithBookings};
use crate::enrollment::{Enrollment, Ticket};

/// Persistence gateway for the booking workflow. All entities are re-read
/// per operation; implementations hold no cross-request state.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn get_user_booking(
        &self,
        user_id: i32,
    ) -> Result<Option<BookingWithRoom>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_booking(
        &self,
        booking_id: i32,
    ) -> Result<Option<Booking>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_room_with_bookings(
        &self,
        room_id: i32,
    ) -> Result<Option<RoomWithBookings>, Box<dyn std::error::Error + Send + Sync>>;

    async fn create_booking(
        &self,
        user_id: i32,
        room_id: i32,
        timestamp: DateTime<Utc>,
    ) -> Result<Booking, Box<dyn std::error::Error + Send + Sync>>;

    async fn update_booking(
        &self,
        user_id: i32,
        room_id: i32,
        booking_id: i32,
        timestamp: DateTime<Utc>,
    ) -> Result<Booking, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_enrollment_by_user(
        &self,
        user_id: i32,
    ) -> Result<Option<Enrollment>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_ticket_by_enrollment(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<Ticket>, Box<dyn std::error::Error + Send + Sync>>;
}
