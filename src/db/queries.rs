use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::models::{Appointment, Booking};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── Appointments ──

pub fn create_appointment(conn: &Connection, booking: &Booking) -> anyhow::Result<Appointment> {
    let appointment = Appointment {
        id: uuid::Uuid::new_v4().to_string(),
        patient_name: booking.patient_name.clone(),
        specialization: booking.specialization.clone(),
        date: booking.date.clone(),
        time: booking.time.clone(),
        created_at: Utc::now().naive_utc(),
    };
    let created_at = appointment.created_at.format(TIMESTAMP_FORMAT).to_string();

    conn.execute(
        "INSERT INTO appointments (id, patient_name, specialization, date, time, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            appointment.id,
            appointment.patient_name,
            appointment.specialization,
            appointment.date,
            appointment.time,
            created_at,
        ],
    )?;
    Ok(appointment)
}

pub fn list_appointments(conn: &Connection) -> anyhow::Result<Vec<Appointment>> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_name, specialization, date, time, created_at
         FROM appointments ORDER BY created_at DESC, rowid DESC",
    )?;

    let rows = stmt.query_map([], parse_appointment_row)?;

    let mut appointments = vec![];
    for row in rows {
        appointments.push(row?);
    }
    Ok(appointments)
}

pub fn get_appointment_by_id(conn: &Connection, id: &str) -> anyhow::Result<Option<Appointment>> {
    let appointment = conn
        .query_row(
            "SELECT id, patient_name, specialization, date, time, created_at
             FROM appointments WHERE id = ?1",
            params![id],
            parse_appointment_row,
        )
        .optional()?;
    Ok(appointment)
}

fn parse_appointment_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    let created_at_str: String = row.get(5)?;
    let created_at = NaiveDateTime::parse_from_str(&created_at_str, TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(Appointment {
        id: row.get(0)?,
        patient_name: row.get(1)?,
        specialization: row.get(2)?,
        date: row.get(3)?,
        time: row.get(4)?,
        created_at,
    })
}
