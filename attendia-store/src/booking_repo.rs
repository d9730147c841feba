use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use attendia_domain::{
    Booking, BookingRepository, BookingWithRoom, Enrollment, Room, RoomWithBookings, Ticket,
    TicketStatus, TicketType,
};

pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i32,
    user_id: i32,
    room_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct RoomRow {
    id: i32,
    name: String,
    capacity: i32,
    hotel_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct EnrollmentRow {
    id: i32,
    user_id: i32,
    name: String,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct TicketRow {
    id: i32,
    enrollment_id: i32,
    status: String,
    created_at: DateTime<Utc>,
    ticket_type_id: i32,
    ticket_type_name: String,
    price: i32,
    is_remote: bool,
    includes_hotel: bool,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            user_id: row.user_id,
            room_id: row.room_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Room {
            id: row.id,
            name: row.name,
            capacity: row.capacity,
            hotel_id: row.hotel_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl TryFrom<TicketRow> for Ticket {
    type Error = Box<dyn std::error::Error + Send + Sync>;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        let status = TicketStatus::from_db(&row.status)
            .ok_or_else(|| format!("unknown ticket status: {}", row.status))?;

        Ok(Ticket {
            id: row.id,
            enrollment_id: row.enrollment_id,
            ticket_type: TicketType {
                id: row.ticket_type_id,
                name: row.ticket_type_name,
                price: row.price,
                is_remote: row.is_remote,
                includes_hotel: row.includes_hotel,
            },
            status,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl BookingRepository for PgBookingStore {
    async fn get_user_booking(
        &self,
        user_id: i32,
    ) -> Result<Option<BookingWithRoom>, Box<dyn std::error::Error + Send + Sync>> {
        let booking_row = sqlx::query_as::<_, BookingRow>(
            "SELECT id, user_id, room_id, created_at, updated_at FROM bookings WHERE user_id = $1 LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(booking_row) = booking_row else {
            return Ok(None);
        };

        let room_row = sqlx::query_as::<_, RoomRow>(
            "SELECT id, name, capacity, hotel_id, created_at, updated_at FROM rooms WHERE id = $1",
        )
        .bind(booking_row.room_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| format!("booking {} references missing room {}", booking_row.id, booking_row.room_id))?;

        Ok(Some(BookingWithRoom {
            booking: booking_row.into(),
            room: room_row.into(),
        }))
    }

    async fn get_booking(
        &self,
        booking_id: i32,
    ) -> Result<Option<Booking>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, BookingRow>(
            "SELECT id, user_id, room_id, created_at, updated_at FROM bookings WHERE id = $1",
        )
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Booking::from))
    }

    async fn get_room_with_bookings(
        &self,
        room_id: i32,
    ) -> Result<Option<RoomWithBookings>, Box<dyn std::error::Error + Send + Sync>> {
        let room_row = sqlx::query_as::<_, RoomRow>(
            "SELECT id, name, capacity, hotel_id, created_at, updated_at FROM rooms WHERE id = $1",
        )
        .bind(room_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(room_row) = room_row else {
            return Ok(None);
        };

        let booking_rows = sqlx::query_as::<_, BookingRow>(
            "SELECT id, user_id, room_id, created_at, updated_at FROM bookings WHERE room_id = $1",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(RoomWithBookings {
            room: room_row.into(),
            bookings: booking_rows.into_iter().map(Booking::from).collect(),
        }))
    }

    async fn create_booking(
        &self,
        user_id: i32,
        room_id: i32,
        timestamp: DateTime<Utc>,
    ) -> Result<Booking, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            INSERT INTO bookings (user_id, room_id, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING id, user_id, room_id, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(room_id)
        .bind(timestamp)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update_booking(
        &self,
        user_id: i32,
        room_id: i32,
        booking_id: i32,
        timestamp: DateTime<Utc>,
    ) -> Result<Booking, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            UPDATE bookings SET user_id = $1, room_id = $2, updated_at = $3
            WHERE id = $4
            RETURNING id, user_id, room_id, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(room_id)
        .bind(timestamp)
        .bind(booking_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get_enrollment_by_user(
        &self,
        user_id: i32,
    ) -> Result<Option<Enrollment>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            "SELECT id, user_id, name, created_at FROM enrollments WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Enrollment {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            created_at: row.created_at,
        }))
    }

    async fn get_ticket_by_enrollment(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<Ticket>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
            SELECT t.id, t.enrollment_id, t.status, t.created_at,
                   tt.id AS ticket_type_id, tt.name AS ticket_type_name,
                   tt.price, tt.is_remote, tt.includes_hotel
            FROM tickets t
            JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE t.enrollment_id = $1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Ticket::try_from).transpose()
    }
}
