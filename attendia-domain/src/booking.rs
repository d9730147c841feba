use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A room reservation held by one attendee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A bookable hotel room. Capacity is the maximum number of simultaneous
/// bookings; occupancy against it is checked at booking time, not by the
/// storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A room together with the bookings currently pointing at it, as loaded by
/// the store in one read. Only the count of bookings matters to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomWithBookings {
    pub room: Room,
    pub bookings: Vec<Booking>,
}

impl RoomWithBookings {
    pub fn occupancy(&self) -> usize {
        self.bookings.len()
    }

    /// Full means occupancy has reached the declared capacity exactly.
    pub fn is_full(&self) -> bool {
        self.occupancy() == self.room.capacity as usize
    }
}

/// A booking joined with its room, the shape the fetch endpoint returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingWithRoom {
    pub booking: Booking,
    pub room: Room,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(capacity: i32) -> Room {
        let now = Utc::now();
        Room {
            id: 1,
            name: "101".to_string(),
            capacity,
            hotel_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    fn booking(id: i32) -> Booking {
        let now = Utc::now();
        Booking {
            id,
            user_id: id,
            room_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn room_is_full_only_at_capacity() {
        let with_two = RoomWithBookings {
            room: room(3),
            bookings: vec![booking(1), booking(2)],
        };
        assert!(!with_two.is_full());

        let with_three = RoomWithBookings {
            room: room(3),
            bookings: vec![booking(1), booking(2), booking(3)],
        };
        assert!(with_three.is_full());
    }

    #[test]
    fn room_serializes_camel_case() {
        let json = serde_json::to_value(room(3)).unwrap();
        assert!(json.get("hotelId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("hotel_id").is_none());
    }
}
