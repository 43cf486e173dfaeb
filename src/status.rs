use chrono::NaiveDate;
use serde::Serialize;

use crate::model::Event;

/// Registration state of an event, recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventStatus {
    /// The event date is before the reference day.
    Past,
    /// Registrations have reached capacity.
    Full,
    /// Accepting registrations.
    Open,
}

impl EventStatus {
    /// Badge text shown on event cards.
    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Past => "Past",
            EventStatus::Full => "Full",
            EventStatus::Open => "Open",
        }
    }

    /// Card footer prompt.
    pub fn call_to_action(self) -> &'static str {
        match self {
            EventStatus::Open => "Register Now →",
            EventStatus::Past | EventStatus::Full => "View Details →",
        }
    }
}

/// Classify `event` relative to `today`. Past-ness wins over fullness.
pub fn classify(event: &Event, today: NaiveDate) -> EventStatus {
    if event.date < today {
        EventStatus::Past
    } else if event.current_registrations >= event.max_participants {
        EventStatus::Full
    } else {
        EventStatus::Open
    }
}

/// How much of an event's capacity has been taken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegistrationProgress {
    pub registered: u32,
    pub capacity: u32,
}

impl RegistrationProgress {
    pub fn of(event: &Event) -> Self {
        Self {
            registered: event.current_registrations,
            capacity: event.max_participants,
        }
    }

    /// Unclamped percentage; exceeds 100 for over-subscribed events.
    /// A zero capacity reads as 100 percent taken.
    pub fn raw_percent(&self) -> f64 {
        if self.capacity == 0 {
            return 100.0;
        }
        f64::from(self.registered) / f64::from(self.capacity) * 100.0
    }

    /// Percentage for drawing a progress bar, clamped to `0..=100`.
    pub fn fill_percent(&self) -> f64 {
        self.raw_percent().clamp(0.0, 100.0)
    }

    pub fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.registered)
    }

    /// `"12/50 registered"`.
    pub fn summary(&self) -> String {
        format!("{}/{} registered", self.registered, self.capacity)
    }
}
