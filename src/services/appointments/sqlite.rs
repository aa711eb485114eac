use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use rusqlite::Connection;

use super::AppointmentRepository;
use crate::db::queries;
use crate::models::Booking;

pub struct SqliteAppointments {
    db: Arc<Mutex<Connection>>,
}

impl SqliteAppointments {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AppointmentRepository for SqliteAppointments {
    async fn save(&self, booking: &Booking) -> anyhow::Result<()> {
        let db = self
            .db
            .lock()
            .map_err(|_| anyhow!("database lock poisoned"))?;
        let appointment = queries::create_appointment(&db, booking)?;

        tracing::info!(
            appointment_id = %appointment.id,
            specialization = %appointment.specialization,
            date = %appointment.date,
            time = %appointment.time,
            "appointment saved"
        );
        Ok(())
    }
}
