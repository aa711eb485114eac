use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::models::{ConversationState, KnowledgeBase, Step};
use crate::services::appointments::AppointmentRepository;
use crate::services::dates::parse_date;
use crate::services::sessions::SessionStore;
use crate::services::specialization::detect_specialization;
use crate::services::times::parse_time;

const EMPTY_MESSAGE_REPLY: &str = "Please type something.";
const RESET_REPLY: &str = "Session reset. Say 'Hi' to start a new booking.";
const GREETING_REPLY: &str = "Hello! I am your Care Assistant. What is your **Name**?";
const INVALID_NAME_REPLY: &str = "Names can only contain letters and spaces. Please try again.";
const INVALID_DATE_REPLY: &str =
    "I didn't understand that date. Please use 'Tomorrow', 'Next Friday', or 'YYYY-MM-DD'.";
const INVALID_TIME_REPLY: &str = "Invalid time. Try '09:00', '14:30' or '5 PM'.";
const SYSTEM_ERROR_REPLY: &str = "System error. Type 'reset' to start over.";
const FAILURE_REPLY: &str = "Sorry, something went wrong. I have reset your session.";

const RESET_COMMANDS: &[&str] = &["reset", "cancel"];
const GREETINGS: &[&str] = &["hello", "hi", "hey"];

/// Drives each session through name → specialization → date → time and
/// stores the finished booking.
pub struct ConversationEngine {
    sessions: SessionStore,
    knowledge: Arc<KnowledgeBase>,
    appointments: Arc<dyn AppointmentRepository>,
}

impl ConversationEngine {
    pub fn new(knowledge: Arc<KnowledgeBase>, appointments: Arc<dyn AppointmentRepository>) -> Self {
        Self {
            sessions: SessionStore::new(),
            knowledge,
            appointments,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub async fn handle_message(&self, session_id: &str, raw_message: &str) -> String {
        self.handle_message_on(session_id, raw_message, Local::now().date_naive())
            .await
    }

    /// Same as [`handle_message`](Self::handle_message) with an explicit "today"
    /// for resolving relative dates.
    pub async fn handle_message_on(
        &self,
        session_id: &str,
        raw_message: &str,
        today: NaiveDate,
    ) -> String {
        let message = raw_message.trim();
        if message.is_empty() {
            return EMPTY_MESSAGE_REPLY.to_string();
        }

        if is_one_of(message, RESET_COMMANDS) {
            self.sessions.remove(session_id);
            tracing::info!(session_id, "session reset");
            return RESET_REPLY.to_string();
        }

        if is_one_of(message, GREETINGS) {
            self.sessions.remove(session_id);
            self.sessions.put(session_id, ConversationState::greeted());
            tracing::info!(session_id, "session started");
            return GREETING_REPLY.to_string();
        }

        let state = self.sessions.get_or_create(session_id);
        let step = state.step;

        match self.advance(session_id, state, message, today).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(session_id, step = step.as_str(), error = %e, "conversation turn failed");
                self.sessions.remove(session_id);
                FAILURE_REPLY.to_string()
            }
        }
    }

    async fn advance(
        &self,
        session_id: &str,
        mut state: ConversationState,
        message: &str,
        today: NaiveDate,
    ) -> anyhow::Result<String> {
        match state.step {
            Step::Start => {
                state.step = Step::AwaitingName;
                self.save_state(session_id, state);
                Ok(GREETING_REPLY.to_string())
            }

            Step::AwaitingName => {
                if !is_valid_name(message) {
                    tracing::debug!(session_id, "rejected name");
                    return Ok(INVALID_NAME_REPLY.to_string());
                }
                let reply = format!(
                    "Nice to meet you, {message}.\n\nTell me your problem (e.g., 'I have eye pain', 'need a heart checkup') or name the specialist."
                );
                state.name = Some(message.to_string());
                state.step = Step::AwaitingSpecialization;
                self.save_state(session_id, state);
                Ok(reply)
            }

            Step::AwaitingSpecialization => {
                let Some(specialization) = detect_specialization(&self.knowledge, message) else {
                    tracing::debug!(session_id, "no specialization matched");
                    let known = self.knowledge.names().collect::<Vec<_>>().join(", ");
                    return Ok(format!(
                        "I couldn't identify the medical field from \"{message}\".\nPlease try standard terms like: {known}"
                    ));
                };
                let reply = format!(
                    "I understand. I have assigned a **{specialization}** for you.\nWhen would you like to come? (e.g., 'Tomorrow', 'Next Monday', or '2025-05-20')"
                );
                state.specialization = Some(specialization.to_string());
                state.step = Step::AwaitingDate;
                self.save_state(session_id, state);
                Ok(reply)
            }

            Step::AwaitingDate => {
                let Some(date) = parse_date(message, today) else {
                    tracing::debug!(session_id, "unparseable date");
                    return Ok(INVALID_DATE_REPLY.to_string());
                };
                if date < today {
                    tracing::debug!(session_id, %date, "date in the past");
                    return Ok(format!(
                        "You cannot book an appointment in the past ({date}). Try a future date."
                    ));
                }
                let reply = format!(
                    "Okay, booked for **{}, {date}**.\nWhat time? (e.g., '10:00' or '2 PM')",
                    date.format("%A")
                );
                state.date = Some(date.to_string());
                state.step = Step::AwaitingTime;
                self.save_state(session_id, state);
                Ok(reply)
            }

            Step::AwaitingTime => {
                let Some(time) = parse_time(message) else {
                    tracing::debug!(session_id, "unparseable time");
                    return Ok(INVALID_TIME_REPLY.to_string());
                };
                state.time = Some(time);

                let Some(booking) = state.to_booking() else {
                    tracing::warn!(session_id, ?state, "incomplete state at final step");
                    return Ok(SYSTEM_ERROR_REPLY.to_string());
                };

                self.appointments.save(&booking).await?;
                self.sessions.remove(session_id);
                tracing::info!(session_id, specialization = %booking.specialization, "booking confirmed");

                Ok(format!(
                    "**Appointment Confirmed!**\n\nPatient: {}\nDoctor: {}\nDate: {}\nTime: {}",
                    booking.patient_name, booking.specialization, booking.date, booking.time
                ))
            }
        }
    }

    fn save_state(&self, session_id: &str, state: ConversationState) {
        tracing::info!(session_id, step = state.step.as_str(), "advanced");
        self.sessions.put(session_id, state);
    }
}

fn is_one_of(message: &str, words: &[&str]) -> bool {
    words.iter().any(|w| message.eq_ignore_ascii_case(w))
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace())
}
