//! Filter-then-sort derivation of listing views.
//!
//! Both entry points are pure: they borrow the input records, never reorder or
//! mutate them, and return a fresh sequence whose order depends only on the
//! arguments. Sorting is stable, so records with equal keys keep the order
//! they had in the input.

use chrono::NaiveDate;
use tracing::debug;

use crate::model::{Club, ClubQuery, ClubSort, Event, EventQuery, EventSort};
use crate::utils::{contains_ignore_case, locale_cmp};

/// Derive the visible club listing for `query`.
///
/// A club is kept when its name or description contains the search term
/// (ignoring case) and its category passes the category filter.
pub fn derive_clubs<'a, I>(clubs: I, query: &ClubQuery) -> Vec<&'a Club>
where
    I: IntoIterator<Item = &'a Club>,
{
    let mut view: Vec<&Club> = clubs
        .into_iter()
        .filter(|club| club_matches(club, query))
        .collect();

    match query.sort {
        ClubSort::Name => view.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
        ClubSort::Members => view.sort_by(|a, b| b.members.cmp(&a.members)),
        ClubSort::Established => view.sort_by(|a, b| b.established.cmp(&a.established)),
        ClubSort::Category => view.sort_by(|a, b| locale_cmp(&a.category, &b.category)),
        ClubSort::Unordered => {}
    }

    debug!(count = view.len(), sort = %query.sort, "derived club view");
    view
}

/// Derive the visible event listing for `query`, with date windows measured
/// from `today`.
///
/// An event is kept when its title, description or venue contains the search
/// term (ignoring case) and its date falls in the selected window.
pub fn derive_events<'a, I>(events: I, query: &EventQuery, today: NaiveDate) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut view: Vec<&Event> = events
        .into_iter()
        .filter(|event| event_matches(event, query, today))
        .collect();

    match query.sort {
        EventSort::Date => view.sort_by_key(|event| event.date),
        EventSort::Title => view.sort_by(|a, b| locale_cmp(&a.title, &b.title)),
        EventSort::Popularity => {
            view.sort_by(|a, b| b.current_registrations.cmp(&a.current_registrations))
        }
        EventSort::Unordered => {}
    }

    debug!(count = view.len(), window = %query.window, sort = %query.sort, "derived event view");
    view
}

fn club_matches(club: &Club, query: &ClubQuery) -> bool {
    let search = &query.search;
    let matches_search =
        contains_ignore_case(&club.name, search) || contains_ignore_case(&club.description, search);
    matches_search && query.category.matches(&club.category)
}

fn event_matches(event: &Event, query: &EventQuery, today: NaiveDate) -> bool {
    let search = &query.search;
    let matches_search = contains_ignore_case(&event.title, search)
        || contains_ignore_case(&event.description, search)
        || contains_ignore_case(&event.venue, search);
    matches_search && query.window.contains(event.date, today)
}
