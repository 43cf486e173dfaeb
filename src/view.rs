//! Per-page view state built from a [`Catalog`] and the page's parameters.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::catalog::{Catalog, Organizer};
use crate::display::{ClubCard, EventCard, RelatedEventCard, Schedule};
use crate::model::{
    CategoryFilter, Club, ClubId, ClubQuery, DateWindow, Event, EventId, EventQuery,
};
use crate::pipeline::{derive_clubs, derive_events};
use crate::status::{classify, EventStatus, RegistrationProgress};

pub const RELATED_EVENTS_LIMIT: usize = 3;
pub const FEATURED_CLUBS_LIMIT: usize = 4;
pub const UPCOMING_HIGHLIGHTS_LIMIT: usize = 3;

/// The club listing page.
#[derive(Debug, Clone, Serialize)]
pub struct ClubListing<'a> {
    pub clubs: Vec<&'a Club>,
    /// Size of the unfiltered collection.
    pub total: usize,
    pub categories: Vec<&'a str>,
    pub query: ClubQuery,
}

impl<'a> ClubListing<'a> {
    #[instrument(skip(catalog))]
    pub fn build(catalog: &'a Catalog, query: ClubQuery) -> Self {
        Self {
            clubs: derive_clubs(catalog.clubs(), &query),
            total: catalog.clubs().len(),
            categories: catalog.categories(),
            query,
        }
    }

    /// No club survived the filters; the page offers a reset instead.
    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    /// Whether the "Clear Filters" control should be offered.
    pub fn has_active_filters(&self) -> bool {
        self.query.is_filtered()
    }

    pub fn reset_query(&self) -> ClubQuery {
        ClubQuery::default()
    }

    pub fn cards(&self) -> Vec<ClubCard<'a>> {
        self.clubs.iter().map(|&club| ClubCard::new(club)).collect()
    }

    /// `Showing 2 of 8 clubs for "chess" in Academic`.
    pub fn summary(&self) -> String {
        let mut line = format!("Showing {} of {} clubs", self.clubs.len(), self.total);
        if !self.query.search.is_empty() {
            line.push_str(&format!(" for \"{}\"", self.query.search));
        }
        if let CategoryFilter::Only(category) = &self.query.category {
            line.push_str(&format!(" in {category}"));
        }
        line
    }
}

/// An event listing, either catalog-wide or scoped to one club.
#[derive(Debug, Clone, Serialize)]
pub struct EventListing<'a> {
    /// Set when the listing is scoped to a known club.
    pub club: Option<&'a Club>,
    pub events: Vec<&'a Event>,
    /// Size of the unfiltered collection in scope.
    pub total: usize,
    pub query: EventQuery,
    pub today: NaiveDate,
    #[serde(skip)]
    catalog: &'a Catalog,
}

impl<'a> EventListing<'a> {
    #[instrument(skip(catalog))]
    pub fn all(catalog: &'a Catalog, query: EventQuery, today: NaiveDate) -> Self {
        Self {
            club: None,
            events: derive_events(catalog.events(), &query, today),
            total: catalog.events().len(),
            query,
            today,
            catalog,
        }
    }

    /// Events of one club. An unknown club gives an empty listing without a
    /// club header.
    #[instrument(skip(catalog))]
    pub fn for_club(
        catalog: &'a Catalog,
        club_id: ClubId,
        query: EventQuery,
        today: NaiveDate,
    ) -> Self {
        let club = catalog.club(club_id);
        if club.is_none() {
            debug!(club_id, "event listing requested for unknown club");
        }
        let in_scope = catalog.events_for_club(club_id);
        Self {
            club,
            total: in_scope.len(),
            events: derive_events(in_scope, &query, today),
            query,
            today,
            catalog,
        }
    }

    pub fn title(&self) -> String {
        match self.club {
            Some(club) => format!("{} Events", club.name),
            None => "All Events".to_string(),
        }
    }

    pub fn subtitle(&self) -> String {
        match self.club {
            Some(club) => format!("Discover upcoming events organized by {}", club.name),
            None => "Explore all campus events and activities".to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn has_active_filters(&self) -> bool {
        self.query.is_filtered()
    }

    pub fn reset_query(&self) -> EventQuery {
        EventQuery::default()
    }

    /// `Showing 3 of 12 events`.
    pub fn summary(&self) -> String {
        format!("Showing {} of {} events", self.events.len(), self.total)
    }

    /// Hint shown in place of results when nothing matched.
    pub fn empty_hint(&self) -> &'static str {
        if self.query.search.is_empty() {
            "There are no events matching your current filters."
        } else {
            "Try adjusting your search terms or filters."
        }
    }

    /// Cards for the visible events. Organizers are named only on the
    /// catalog-wide listing.
    pub fn cards(&self) -> Vec<EventCard<'a>> {
        self.events
            .iter()
            .map(|&event| {
                let organizer = self.club.is_none().then(|| self.catalog.organizer(event));
                EventCard::new(event, organizer, self.today)
            })
            .collect()
    }
}

/// The single event page.
#[derive(Debug, Clone, Serialize)]
pub struct EventDetail<'a> {
    pub event: &'a Event,
    pub organizer: Organizer<'a>,
    pub status: EventStatus,
    pub progress: RegistrationProgress,
    pub schedule: Schedule,
    pub related: Vec<&'a Event>,
}

impl<'a> EventDetail<'a> {
    /// `None` when no event has this id; callers send the reader back to the
    /// event listing.
    #[instrument(skip(catalog))]
    pub fn find(catalog: &'a Catalog, id: EventId, today: NaiveDate) -> Option<Self> {
        let Some(event) = catalog.event(id) else {
            debug!(event_id = id, "event not found");
            return None;
        };
        Some(Self {
            event,
            organizer: catalog.organizer(event),
            status: classify(event, today),
            progress: RegistrationProgress::of(event),
            schedule: Schedule::of(event),
            related: catalog.related_events(event, true, RELATED_EVENTS_LIMIT),
        })
    }

    /// Where the register button points, if registration is possible.
    pub fn registration_link(&self) -> Option<&'a str> {
        match self.status {
            EventStatus::Open => self.event.registration_link.as_deref(),
            EventStatus::Past | EventStatus::Full => None,
        }
    }

    /// `More Events from Robotics Club`. Only shown for a known organizer with
    /// at least one related event.
    pub fn related_heading(&self) -> Option<String> {
        match self.organizer {
            Organizer::Club(club) if !self.related.is_empty() => {
                Some(format!("More Events from {}", club.name))
            }
            _ => None,
        }
    }

    pub fn related_cards(&self) -> Vec<RelatedEventCard<'a>> {
        self.related
            .iter()
            .map(|&event| RelatedEventCard::new(event))
            .collect()
    }
}

/// The landing page highlights.
#[derive(Debug, Clone, Serialize)]
pub struct Landing<'a> {
    pub featured_clubs: Vec<&'a Club>,
    /// Soonest events on or after today.
    pub upcoming_events: Vec<&'a Event>,
    pub club_count: usize,
    pub event_count: usize,
}

impl<'a> Landing<'a> {
    pub fn build(catalog: &'a Catalog, today: NaiveDate) -> Self {
        let upcoming = EventQuery::default().with_window(DateWindow::Upcoming);
        let mut upcoming_events = derive_events(catalog.events(), &upcoming, today);
        upcoming_events.truncate(UPCOMING_HIGHLIGHTS_LIMIT);

        Self {
            featured_clubs: catalog.clubs().iter().take(FEATURED_CLUBS_LIMIT).collect(),
            upcoming_events,
            club_count: catalog.clubs().len(),
            event_count: catalog.events().len(),
        }
    }
}
