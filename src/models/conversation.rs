use serde::{Deserialize, Serialize};

use super::booking::Booking;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Start,
    AwaitingName,
    AwaitingSpecialization,
    AwaitingDate,
    AwaitingTime,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Start => "start",
            Step::AwaitingName => "awaiting_name",
            Step::AwaitingSpecialization => "awaiting_specialization",
            Step::AwaitingDate => "awaiting_date",
            Step::AwaitingTime => "awaiting_time",
        }
    }
}

/// Per-session progress through the booking flow.
///
/// Fields are filled in step order: a state at `AwaitingDate` has `name` and
/// `specialization` set and `date`/`time` unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConversationState {
    pub step: Step,
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl ConversationState {
    /// Fresh state for a greeted session, already waiting for the patient's name.
    pub fn greeted() -> Self {
        Self {
            step: Step::AwaitingName,
            ..Self::default()
        }
    }

    /// Builds the finished booking. `None` when any collected field is missing.
    pub fn to_booking(&self) -> Option<Booking> {
        let non_empty = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_string);

        Some(Booking {
            patient_name: non_empty(&self.name)?,
            specialization: non_empty(&self.specialization)?,
            date: non_empty(&self.date)?,
            time: non_empty(&self.time)?,
        })
    }
}
