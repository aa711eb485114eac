use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A completed conversation, ready to be stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    pub patient_name: String,
    pub specialization: String,
    pub date: String,
    pub time: String,
}

/// A booking as stored in the appointments table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    pub specialization: String,
    pub date: String,
    pub time: String,
    pub created_at: NaiveDateTime,
}
