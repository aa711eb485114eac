pub mod sqlite;

use async_trait::async_trait;

use crate::models::Booking;

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn save(&self, booking: &Booking) -> anyhow::Result<()>;
}
