//! Card summaries and fixed en-US text formatting for rendered listings.

use std::borrow::Cow;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::catalog::Organizer;
use crate::model::{Club, ClubId, Event, EventId, SocialPlatform};
use crate::status::{classify, EventStatus, RegistrationProgress};

pub const CLUB_EXCERPT_CHARS: usize = 120;
pub const EVENT_EXCERPT_CHARS: usize = 150;
pub const SHARE_TEXT_CHARS: usize = 100;
pub const RELATED_EXCERPT_CHARS: usize = 80;
pub const CARD_SOCIAL_LIMIT: usize = 3;
pub const CARD_TAG_LIMIT: usize = 2;

const ELLIPSIS: &str = "...";

/// Cut `text` to `max_chars` characters and append an ellipsis when anything
/// was dropped. Does not look for word boundaries.
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// The first `max_chars` characters followed by an ellipsis, whether or not
/// anything was dropped.
fn clipped(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}{ELLIPSIS}")
}

/// Text offered when sharing an event: a clipped description that always
/// ends in an ellipsis.
pub fn share_text(event: &Event) -> String {
    clipped(&event.description, SHARE_TEXT_CHARS)
}

pub fn club_href(id: ClubId) -> String {
    format!("/clubs/{id}")
}

pub fn event_href(id: EventId) -> String {
    format!("/events/{id}")
}

/// Pieces of a calendar day as shown on date badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateLabels {
    pub day: u32,
    /// `"Oct"`.
    pub month: String,
    /// `"Mon"`.
    pub weekday: String,
    /// `"Monday, October 19, 2026"`.
    pub full: String,
}

impl DateLabels {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.format("%b").to_string(),
            weekday: date.format("%a").to_string(),
            full: long_date(date),
        }
    }
}

pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Start and end of an event for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub start_date: String,
    pub start_time: String,
    /// Only set when the event ends on a later day.
    pub end_date: Option<String>,
    pub end_time: Option<String>,
}

impl Schedule {
    pub fn of(event: &Event) -> Self {
        Self {
            start_date: long_date(event.date),
            start_time: event.time.clone(),
            end_date: event
                .end_date
                .filter(|_| event.is_multi_day())
                .map(long_date),
            end_time: event.end_time.clone(),
        }
    }

    pub fn is_multi_day(&self) -> bool {
        self.end_date.is_some()
    }
}

/// Everything a club card renders.
#[derive(Debug, Clone, Serialize)]
pub struct ClubCard<'a> {
    pub id: ClubId,
    pub href: String,
    pub name: &'a str,
    pub image: &'a str,
    pub category: &'a str,
    pub excerpt: Cow<'a, str>,
    pub members: u32,
    pub established: &'a str,
    /// Icons of the first few linked platforms; unknown platforms are skipped.
    pub social_icons: Vec<&'static str>,
}

impl<'a> ClubCard<'a> {
    pub fn new(club: &'a Club) -> Self {
        let social_icons = club
            .social_platforms()
            .take(CARD_SOCIAL_LIMIT)
            .filter_map(|name| SocialPlatform::from_str(name).ok())
            .map(SocialPlatform::icon)
            .collect();

        Self {
            id: club.id,
            href: club_href(club.id),
            name: &club.name,
            image: &club.image,
            category: &club.category,
            excerpt: truncate(&club.description, CLUB_EXCERPT_CHARS),
            members: club.members,
            established: &club.established,
            social_icons,
        }
    }
}

/// Everything an event card renders.
#[derive(Debug, Clone, Serialize)]
pub struct EventCard<'a> {
    pub id: EventId,
    pub href: String,
    pub title: &'a str,
    pub image: &'a str,
    pub date: DateLabels,
    pub time: &'a str,
    pub venue: &'a str,
    pub tags: &'a [String],
    /// Organizer name, omitted on a single club's listing.
    pub organizer: Option<&'a str>,
    pub excerpt: Cow<'a, str>,
    pub status: EventStatus,
    pub progress: RegistrationProgress,
    pub call_to_action: &'static str,
}

impl<'a> EventCard<'a> {
    pub fn new(event: &'a Event, organizer: Option<Organizer<'a>>, today: NaiveDate) -> Self {
        let status = classify(event, today);
        Self {
            id: event.id,
            href: event_href(event.id),
            title: &event.title,
            image: &event.image,
            date: DateLabels::of(event.date),
            time: &event.time,
            venue: &event.venue,
            tags: &event.tags[..event.tags.len().min(CARD_TAG_LIMIT)],
            organizer: organizer.map(|o| o.name()),
            excerpt: truncate(&event.description, EVENT_EXCERPT_CHARS),
            status,
            progress: RegistrationProgress::of(event),
            call_to_action: status.call_to_action(),
        }
    }
}

/// A compact card in the "more events from this club" strip of the detail page.
#[derive(Debug, Clone, Serialize)]
pub struct RelatedEventCard<'a> {
    pub id: EventId,
    pub href: String,
    pub title: &'a str,
    pub image: &'a str,
    /// Day and month for the badge.
    pub date: DateLabels,
    pub start_date: String,
    pub excerpt: String,
}

impl<'a> RelatedEventCard<'a> {
    pub fn new(event: &'a Event) -> Self {
        Self {
            id: event.id,
            href: event_href(event.id),
            title: &event.title,
            image: &event.image,
            date: DateLabels::of(event.date),
            start_date: long_date(event.date),
            excerpt: clipped(&event.description, RELATED_EXCERPT_CHARS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> Event {
        Event {
            id: 12,
            club_id: 3,
            title: "Robot Sumo".to_string(),
            description: "x".repeat(160),
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            time: "4:00 PM".to_string(),
            end_date: Some(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()),
            end_time: Some("2:00 PM".to_string()),
            venue: "Engineering Atrium".to_string(),
            max_participants: 16,
            current_registrations: 16,
            tags: vec!["robots".into(), "competition".into(), "hardware".into()],
            requirements: vec![],
            prizes: vec![],
            image: "/images/events/12.jpg".to_string(),
            registration_link: None,
        }
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("short", 120), "short");
        assert_eq!(truncate("abcdef", 6), "abcdef");
        assert_eq!(truncate("abcdefg", 6), "abcdef...");
        assert_eq!(truncate("héllo wörld", 5), "héllo...");
    }

    #[test]
    fn test_share_text_always_has_ellipsis() {
        let mut event = sample_event();
        assert_eq!(share_text(&event).chars().count(), SHARE_TEXT_CHARS + 3);
        event.description = "Bring a bot.".to_string();
        assert_eq!(share_text(&event), "Bring a bot....");
    }

    #[test]
    fn test_date_labels() {
        let labels = DateLabels::of(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        assert_eq!(labels.day, 19);
        assert_eq!(labels.month, "Oct");
        assert_eq!(labels.weekday, "Mon");
        assert_eq!(labels.full, "Monday, October 19, 2026");
    }

    #[test]
    fn test_schedule_multi_day() {
        let mut event = sample_event();
        let schedule = Schedule::of(&event);
        assert!(schedule.is_multi_day());
        assert_eq!(schedule.end_date.as_deref(), Some("Tuesday, October 20, 2026"));

        event.end_date = Some(event.date);
        assert!(!Schedule::of(&event).is_multi_day());
    }

    #[test]
    fn test_event_card() {
        let event = sample_event();
        let today = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let card = EventCard::new(&event, Some(Organizer::Unknown), today);
        assert_eq!(card.href, "/events/12");
        assert_eq!(card.tags.len(), 2);
        assert_eq!(card.organizer, Some("Unknown organizer"));
        assert_eq!(card.excerpt.chars().count(), EVENT_EXCERPT_CHARS + 3);
        assert_eq!(card.status, EventStatus::Full);
        assert_eq!(card.call_to_action, "View Details →");

        let scoped = EventCard::new(&event, None, today);
        assert_eq!(scoped.organizer, None);
    }

    fn club_with_links(links: &str) -> Club {
        let json = format!(
            r#"{{"id": 4, "name": "Film Society", "description": "Weekly screenings.",
                "category": "Arts", "members": 80, "established": "2001",
                "image": "/images/clubs/4.jpg", "socialLinks": {links}}}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_club_card_social_icons() {
        let club = club_with_links(
            r#"{"discord": "https://discord.gg/x", "instagram": "@club",
                "website": "https://club.example", "youtube": "@clubtv"}"#,
        );
        let card = ClubCard::new(&club);
        assert_eq!(card.href, "/clubs/4");
        assert_eq!(card.excerpt, "Weekly screenings.");
        // discord takes a preview slot but has no icon
        assert_eq!(card.social_icons, vec!["📷", "🌐"]);
    }

    #[test]
    fn test_club_card_social_icons_follow_store_order() {
        let club = club_with_links(
            r#"{"website": "https://club.example", "youtube": "@clubtv",
                "instagram": "@club", "facebook": "club"}"#,
        );
        assert_eq!(ClubCard::new(&club).social_icons, vec!["🌐", "📺", "📷"]);
    }

    #[test]
    fn test_related_event_card() {
        let mut event = sample_event();
        let card = RelatedEventCard::new(&event);
        assert_eq!(card.href, "/events/12");
        assert_eq!(card.date.day, 19);
        assert_eq!(card.date.month, "Oct");
        assert_eq!(card.start_date, "Monday, October 19, 2026");
        assert_eq!(card.excerpt.chars().count(), RELATED_EXCERPT_CHARS + 3);

        event.description = "Short.".to_string();
        assert_eq!(RelatedEventCard::new(&event).excerpt, "Short....");
    }
}
