use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// An attendee's registration record for the event. A booking can only be
/// created for a user who is enrolled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Purchase record tied to an enrollment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i32,
    pub enrollment_id: i32,
    pub ticket_type: TicketType,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
}

/// Descriptor of a ticket category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Reserved => "RESERVED",
            TicketStatus::Paid => "PAID",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "RESERVED" => Some(TicketStatus::Reserved),
            "PAID" => Some(TicketStatus::Paid),
            _ => None,
        }
    }
}

impl Ticket {
    /// A ticket qualifies for a room booking only once it is paid, for an
    /// in-person ticket type that includes hotel accommodation.
    pub fn grants_hotel_access(&self) -> bool {
        self.status != TicketStatus::Reserved
            && !self.ticket_type.is_remote
            && self.ticket_type.includes_hotel
    }
}
