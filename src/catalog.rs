use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{EventraError, Result};
use crate::model::{Club, ClubId, Event, EventId, ALL_CATEGORIES};

const BUNDLED_CLUBS: &str = include_str!("../data/clubs.json");
const BUNDLED_EVENTS: &str = include_str!("../data/events.json");

/// The read-only club and event store.
///
/// Identifier lookups go through indexes built once at construction, so they
/// do not scan the collections. Record order is preserved everywhere a
/// sequence is returned.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    clubs: Vec<Club>,
    events: Vec<Event>,
    club_index: HashMap<ClubId, usize>,
    event_index: HashMap<EventId, usize>,
    events_by_club: HashMap<ClubId, Vec<usize>>,
}

/// The club behind an event, or a placeholder when the reference dangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Organizer<'a> {
    Club(&'a Club),
    Unknown,
}

impl<'a> Organizer<'a> {
    pub const UNKNOWN_NAME: &'static str = "Unknown organizer";

    pub fn club(&self) -> Option<&'a Club> {
        match *self {
            Organizer::Club(club) => Some(club),
            Organizer::Unknown => None,
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            Organizer::Club(club) => &club.name,
            Organizer::Unknown => Self::UNKNOWN_NAME,
        }
    }
}

impl Catalog {
    /// Build a catalog. A repeated identifier is logged and only its first
    /// record is kept.
    pub fn new(clubs: Vec<Club>, events: Vec<Event>) -> Self {
        let clubs = first_by_id("club", clubs, |c| c.id);
        let events = first_by_id("event", events, |e| e.id);

        let club_index: HashMap<ClubId, usize> =
            clubs.iter().enumerate().map(|(i, c)| (c.id, i)).collect();
        let event_index = events.iter().enumerate().map(|(i, e)| (e.id, i)).collect();
        let events_by_club = events
            .iter()
            .enumerate()
            .map(|(i, e)| (e.club_id, i))
            .into_group_map();

        for event in events.iter().filter(|e| !club_index.contains_key(&e.club_id)) {
            warn!(
                event_id = event.id,
                club_id = event.club_id,
                "event references an unknown club"
            );
        }

        debug!(clubs = clubs.len(), events = events.len(), "built catalog");

        Self {
            clubs,
            events,
            club_index,
            event_index,
            events_by_club,
        }
    }

    /// Parse both collections from JSON arrays in the static store format.
    pub fn from_json(clubs: &str, events: &str) -> Result<Self> {
        let clubs: Vec<Club> = serde_json::from_str(clubs).map_err(|e| EventraError::Json {
            collection: "clubs",
            source: e,
        })?;
        let events: Vec<Event> = serde_json::from_str(events).map_err(|e| EventraError::Json {
            collection: "events",
            source: e,
        })?;
        Ok(Self::new(clubs, events))
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CLUBS, BUNDLED_EVENTS)
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// `"all"` followed by every distinct club category in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.clubs.iter().map(|c| c.category.as_str()).unique())
            .collect()
    }

    pub fn club(&self, id: ClubId) -> Option<&Club> {
        self.club_index.get(&id).map(|&i| &self.clubs[i])
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.event_index.get(&id).map(|&i| &self.events[i])
    }

    /// All events of a club, in store order. Empty for unknown clubs.
    pub fn events_for_club(&self, id: ClubId) -> Vec<&Event> {
        self.events_by_club
            .get(&id)
            .map(|indices| indices.iter().map(|&i| &self.events[i]).collect())
            .unwrap_or_default()
    }

    pub fn organizer(&self, event: &Event) -> Organizer<'_> {
        self.club(event.club_id).map_or(Organizer::Unknown, Organizer::Club)
    }

    /// Up to `limit` other events from the same club, in store order.
    pub fn related_events(&self, event: &Event, exclude_self: bool, limit: usize) -> Vec<&Event> {
        self.events_for_club(event.club_id)
            .into_iter()
            .filter(|other| !(exclude_self && other.id == event.id))
            .take(limit)
            .collect()
    }
}

fn first_by_id<T>(collection: &'static str, records: Vec<T>, id: impl Fn(&T) -> u32) -> Vec<T> {
    for duplicate in records.iter().map(&id).duplicates() {
        warn!(collection, id = duplicate, "duplicate id, keeping the first record");
    }
    records.into_iter().unique_by(|r| id(r)).collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn club(id: u32, name: &str, category: &str) -> Club {
        Club {
            id,
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            members: 10,
            established: "2020".to_string(),
            image: String::new(),
            social_links: None,
        }
    }

    fn event(id: u32, club_id: u32) -> Event {
        Event {
            id,
            club_id,
            title: format!("Event {id}"),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 9, id).unwrap(),
            time: "5:00 PM".to_string(),
            end_date: None,
            end_time: None,
            venue: "Quad".to_string(),
            max_participants: 20,
            current_registrations: 0,
            tags: vec![],
            requirements: vec![],
            prizes: vec![],
            image: String::new(),
            registration_link: None,
        }
    }

    fn catalog() -> Catalog {
        let clubs = vec![
            club(7, "Chess Club", "Academic"),
            club(8, "Film Society", "Arts"),
            club(9, "Debate Team", "Academic"),
        ];
        let events = vec![
            event(1, 7),
            event(2, 8),
            event(3, 7),
            event(4, 7),
            event(5, 7),
            event(6, 7),
            event(10, 42),
        ];
        Catalog::new(clubs, events)
    }

    fn ids(events: &[&Event]) -> Vec<u32> {
        events.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_find_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.club(8).map(|c| c.name.as_str()), Some("Film Society"));
        assert!(catalog.club(99).is_none());
        assert_eq!(catalog.event(4).map(|e| e.club_id), Some(7));
        assert!(catalog.event(99).is_none());
    }

    #[test]
    fn test_events_for_club_keep_store_order() {
        let catalog = catalog();
        assert_eq!(ids(&catalog.events_for_club(7)), vec![1, 3, 4, 5, 6]);
        assert!(catalog.events_for_club(9).is_empty());
        assert!(catalog.events_for_club(100).is_empty());
    }

    #[test]
    fn test_related_events_exclude_self_and_truncate() {
        let catalog = catalog();
        let current = catalog.event(3).unwrap();
        let related = catalog.related_events(current, true, 3);
        assert_eq!(ids(&related), vec![1, 4, 5]);

        let with_self = catalog.related_events(current, false, 3);
        assert_eq!(ids(&with_self), vec![1, 3, 4]);

        let lone = catalog.event(2).unwrap();
        assert!(catalog.related_events(lone, true, 3).is_empty());
    }

    #[test]
    fn test_dangling_club_is_unknown_organizer() {
        let catalog = catalog();
        let orphan = catalog.event(10).unwrap();
        let organizer = catalog.organizer(orphan);
        assert_eq!(organizer, Organizer::Unknown);
        assert_eq!(organizer.name(), "Unknown organizer");
        assert!(organizer.club().is_none());

        let owned = catalog.event(1).unwrap();
        assert_eq!(catalog.organizer(owned).name(), "Chess Club");
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = catalog();
        assert_eq!(catalog.categories(), vec!["all", "Academic", "Arts"]);
    }

    #[test]
    fn test_duplicate_ids_keep_first_record() {
        let catalog = Catalog::new(
            vec![club(1, "A", "x"), club(2, "C", "z"), club(1, "B", "y")],
            vec![event(3, 1), event(3, 2), event(4, 2)],
        );
        assert_eq!(catalog.clubs().len(), 2);
        assert_eq!(catalog.club(1).map(|c| c.name.as_str()), Some("A"));
        assert_eq!(catalog.categories(), vec!["all", "x", "z"]);

        assert_eq!(catalog.events().len(), 2);
        assert_eq!(catalog.event(3).map(|e| e.club_id), Some(1));
        assert_eq!(ids(&catalog.events_for_club(1)), vec![3]);
        assert_eq!(ids(&catalog.events_for_club(2)), vec![4]);
    }

    #[test]
    fn test_malformed_json_names_collection() {
        let result = Catalog::from_json("[]", "{not json");
        assert!(matches!(
            result,
            Err(EventraError::Json {
                collection: "events",
                ..
            })
        ));
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.clubs().is_empty());
        assert!(!catalog.events().is_empty());
        assert!(catalog
            .events()
            .iter()
            .all(|e| catalog.organizer(e) != Organizer::Unknown));
    }
}
