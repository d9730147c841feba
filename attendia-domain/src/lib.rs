pub mod booking;
pub mod enrollment;
pub mod repository;

pub use booking::{Booking, BookingWithRoom, Room, RoomWithBookings};
pub use enrollment::{Enrollment, Ticket, TicketStatus, TicketType};
pub use repository::BookingRepository;
