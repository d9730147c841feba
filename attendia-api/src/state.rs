use std::sync::Arc;

use attendia_booking::BookingService;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub booking: Arc<BookingService>,
    pub auth: AuthConfig,
}
