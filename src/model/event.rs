use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::club::ClubId;

/// Unique identifier of an [`Event`].
pub type EventId = u32;

/// A single club event from the static store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    /// Owning club. Not guaranteed to resolve.
    pub club_id: ClubId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Local display time, e.g. `"6:00 PM"`.
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub venue: String,
    pub max_participants: u32,
    pub current_registrations: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prizes: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
}

impl Event {
    /// `true` when the event ends on a different calendar day than it starts.
    pub fn is_multi_day(&self) -> bool {
        self.end_date.is_some_and(|end| end != self.date)
    }
}
