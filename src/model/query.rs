use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Serialize, Serializer};
use strum_macros::EnumString;
use tracing::warn;

/// Sentinel category value that disables the category predicate.
pub const ALL_CATEGORIES: &str = "all";

/// Ordering applied to a club listing.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ClubSort {
    /// Name, ascending.
    #[default]
    Name,
    /// Member count, largest first.
    Members,
    /// Founding year, newest first.
    Established,
    /// Category, ascending.
    Category,
    /// Keep the filtered order as is.
    Unordered,
}

impl ClubSort {
    /// Parse a sort key, falling back to [`ClubSort::Unordered`] for anything unknown.
    pub fn parse(key: &str) -> Self {
        Self::from_str(key).unwrap_or_else(|_| {
            warn!(key, "unrecognised club sort key, keeping filtered order");
            Self::Unordered
        })
    }
}

/// Ordering applied to an event listing.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventSort {
    /// Date, earliest first.
    #[default]
    Date,
    /// Title, ascending.
    Title,
    /// Current registrations, most first.
    Popularity,
    /// Keep the filtered order as is.
    Unordered,
}

impl EventSort {
    /// Parse a sort key, falling back to [`EventSort::Unordered`] for anything unknown.
    pub fn parse(key: &str) -> Self {
        Self::from_str(key).unwrap_or_else(|_| {
            warn!(key, "unrecognised event sort key, keeping filtered order");
            Self::Unordered
        })
    }
}

/// Category predicate for club listings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive match on [`Club::category`](crate::Club::category).
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{ALL_CATEGORIES}"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

/// Date window an event must fall into, relative to a reference day.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, strum_macros::Display,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum DateWindow {
    #[default]
    All,
    /// On or after the reference day.
    Upcoming,
    /// Within the next 7 days, both ends inclusive.
    ThisWeek,
    /// Within the next 30 days, both ends inclusive.
    ThisMonth,
    /// Strictly before the reference day.
    Past,
}

impl DateWindow {
    /// Parse a window key, falling back to [`DateWindow::All`] for anything unknown.
    pub fn parse(key: &str) -> Self {
        Self::from_str(key).unwrap_or_else(|_| {
            warn!(key, "unrecognised date filter, showing all dates");
            Self::All
        })
    }

    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateWindow::All => true,
            DateWindow::Upcoming => date >= today,
            DateWindow::ThisWeek => date >= today && date <= days_after(today, 7),
            DateWindow::ThisMonth => date >= today && date <= days_after(today, 30),
            DateWindow::Past => date < today,
        }
    }
}

fn days_after(day: NaiveDate, days: u64) -> NaiveDate {
    day.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

/// User-controlled parameters of a club listing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClubQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: ClubSort,
}

impl ClubQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sort(mut self, sort: ClubSort) -> Self {
        self.sort = sort;
        self
    }

    /// `true` when any parameter differs from the default listing.
    pub fn is_filtered(&self) -> bool {
        *self != Self::default()
    }
}

/// User-controlled parameters of an event listing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EventQuery {
    pub search: String,
    pub window: DateWindow,
    pub sort: EventSort,
}

impl EventQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_window(mut self, window: DateWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_sort(mut self, sort: EventSort) -> Self {
        self.sort = sort;
        self
    }

    /// `true` when any parameter differs from the default listing.
    pub fn is_filtered(&self) -> bool {
        *self != Self::default()
    }
}
